use dioxus::prelude::*;
use services::Services;
use shared_types::{
    AppConfig, AppErrorKind, CityRequest, FormField, LatLng, PointForm, SubmissionState,
    LOCATION_FIELD,
};
use shared_ui::{
    use_toast, AcknowledgeDialog, Button, ButtonVariant, FieldGroup, Fieldset, Form, FormSelect,
    Input, MapPicker, ToastOptions,
};

use crate::components::{AppHeader, ItemGrid};
use crate::routes::Route;
use crate::tasks;

/// Registration page for a new collection point.
///
/// All form state lives in one [`PointForm`]; this component only performs
/// the requests it asks for and feeds the results back.
#[component]
pub fn CreatePoint() -> Element {
    let services = use_context::<Services>();
    let config = use_context::<AppConfig>();
    let toast = use_toast();
    let mut form = use_signal(PointForm::new);

    let center = use_hook(|| {
        LatLng::new(config.map.center_lat, config.map.center_lng).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Configured map center is invalid, using origin");
            LatLng::ORIGIN
        })
    });

    let api = services.api.clone();
    let mut items_loader = use_resource(move || {
        let api = api.clone();
        async move { tasks::load_items(&api, form).await }
    });

    let ibge = services.ibge.clone();
    let mut ufs_loader = use_resource(move || {
        let ibge = ibge.clone();
        async move { tasks::load_ufs(&ibge, form).await }
    });

    let ibge = services.ibge.clone();
    let fetch_cities = move |request: Option<CityRequest>| {
        let Some(request) = request else {
            return;
        };
        let ibge = ibge.clone();
        spawn(async move {
            tasks::load_cities(&ibge, request, form).await;
        });
    };
    let on_uf_change = fetch_cities.clone();
    let retry_cities = fetch_cities;

    let mut created = use_signal(|| false);
    let api = services.api.clone();
    let handle_submit = move |_evt: FormEvent| {
        let api = api.clone();
        spawn(async move {
            match tasks::submit_point(&api, form).await {
                Ok(()) => created.set(true),
                Err(e) => match e.kind {
                    AppErrorKind::ValidationError | AppErrorKind::Conflict => {}
                    _ => toast.error(e.friendly_message(), ToastOptions::new()),
                },
            }
        });
    };

    // --- Render ---
    let snapshot = form.read().clone();
    let data = snapshot.form_data();
    let field_error = |field: &str| snapshot.field_error(field).map(str::to_string);

    let uf_placeholder = if snapshot.ufs().is_loading() {
        "Carregando UFs..."
    } else {
        "Selecione uma UF"
    }
    .to_string();
    let city_placeholder = if snapshot.cities().is_loading() {
        "Carregando cidades..."
    } else {
        "Selecione uma cidade"
    }
    .to_string();
    let submitting = snapshot.is_submitting();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./create_point.css") }

        div { class: "create-point-page",
            AppHeader { back_link: true }

            Form { onsubmit: handle_submit,
                h1 { "Cadastro do" br {} "ponto de coleta" }

                if let SubmissionState::Failed { message, retryable } = snapshot.submission() {
                    div { class: "create-point-alert", role: "alert",
                        "{message}"
                        if *retryable {
                            span { class: "create-point-alert-hint", " Revise os dados e envie novamente." }
                        }
                    }
                }

                Fieldset { title: "Dados",
                    Input {
                        name: "name",
                        label: "Nome da entidade",
                        value: data.name.clone(),
                        error: field_error(FormField::Name.as_str()),
                        on_input: move |e: FormEvent| form.write().set_field(FormField::Name, e.value()),
                    }
                    FieldGroup {
                        Input {
                            name: "email",
                            label: "E-mail",
                            placeholder: "contato@exemplo.com.br",
                            input_type: "email",
                            value: data.email.clone(),
                            error: field_error(FormField::Email.as_str()),
                            on_input: move |e: FormEvent| form.write().set_field(FormField::Email, e.value()),
                        }
                        Input {
                            name: "whatsapp",
                            label: "Whatsapp",
                            placeholder: "(48) 99999-0000",
                            value: data.whatsapp.clone(),
                            error: field_error(FormField::Whatsapp.as_str()),
                            on_input: move |e: FormEvent| form.write().set_field(FormField::Whatsapp, e.value()),
                        }
                    }
                }

                Fieldset { title: "Endereço", hint: "Selecione o endereço no mapa",
                    MapPicker {
                        center: center,
                        zoom: config.map.zoom,
                        tile_template: config.map.tile_url.clone(),
                        marker: snapshot.selected_position(),
                        error: field_error(LOCATION_FIELD),
                        on_pick: move |position: LatLng| form.write().select_position(position),
                    }
                    FieldGroup {
                        FormSelect {
                            name: "uf",
                            label: "Estado (UF)",
                            placeholder: uf_placeholder,
                            options: snapshot.ufs().entries().to_vec(),
                            value: snapshot.selected_uf().map(str::to_string),
                            error: field_error("uf"),
                            onchange: move |uf: Option<String>| {
                                let request = form.write().select_state(uf);
                                on_uf_change(request);
                            },
                        }
                        FormSelect {
                            name: "city",
                            label: "Cidade",
                            placeholder: city_placeholder,
                            options: snapshot.cities().entries().to_vec(),
                            value: snapshot.selected_city().map(str::to_string),
                            error: field_error("city"),
                            disabled: snapshot.selected_uf().is_none(),
                            onchange: move |city: Option<String>| form.write().select_city(city),
                        }
                    }
                    if let Some(err) = snapshot.ufs().error() {
                        div { class: "create-point-retry",
                            span { "{err}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    form.write().reload_ufs();
                                    ufs_loader.restart();
                                },
                                "Tentar novamente"
                            }
                        }
                    }
                    if let Some(err) = snapshot.cities().error() {
                        div { class: "create-point-retry",
                            span { "{err}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    let request = form.write().reload_cities();
                                    retry_cities(request);
                                },
                                "Tentar novamente"
                            }
                        }
                    }
                }

                Fieldset { title: "Ítens de coleta", hint: "Selecione um ou mais ítens abaixo",
                    if let Some(err) = snapshot.items().error() {
                        div { class: "create-point-retry",
                            span { "{err}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    form.write().reload_items();
                                    items_loader.restart();
                                },
                                "Tentar novamente"
                            }
                        }
                    } else if snapshot.items().is_loading() {
                        p { class: "create-point-loading", "Carregando ítens..." }
                    } else {
                        ItemGrid {
                            items: snapshot.items().entries().to_vec(),
                            selected: snapshot.selected_items().to_vec(),
                            error: field_error("items"),
                            on_toggle: move |id: i64| form.write().toggle_item(id),
                        }
                    }
                }

                Button { submit: true, disabled: submitting,
                    if submitting { "Enviando..." } else { "Cadastrar ponto de coleta" }
                }
            }

            AcknowledgeDialog {
                open: created(),
                title: "Ponto de coleta criado!",
                on_acknowledge: move |_| {
                    navigator().push(Route::Home {});
                },
            }
        }
    }
}
