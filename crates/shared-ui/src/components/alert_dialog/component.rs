use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-title", None, false));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-description", None, false));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-actions", None, false));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "button alert-dialog-action",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

/// A modal message with a single acknowledge action.
///
/// `on_acknowledge` fires once, whether the user presses the action or
/// dismisses the dialog. Callers keep it open until then.
#[component]
pub fn AcknowledgeDialog(
    open: bool,
    title: String,
    #[props(default)] message: String,
    #[props(default = "OK".to_string())] action_label: String,
    on_acknowledge: EventHandler<()>,
) -> Element {
    let mut acknowledged = use_signal(|| false);
    let mut acknowledge = move || {
        if !acknowledged() {
            acknowledged.set(true);
            on_acknowledge.call(());
        }
    };

    rsx! {
        AlertDialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    acknowledge();
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                if !message.is_empty() {
                    AlertDialogDescription { "{message}" }
                }
                AlertDialogActions {
                    AlertDialogAction { on_click: move |_| acknowledge(), "{action_label}" }
                }
            }
        }
    }
}
