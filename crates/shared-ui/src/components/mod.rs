pub mod alert_dialog;
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;
pub mod map_picker;
pub mod toast;

pub use alert_dialog::*;
pub use button::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use map_picker::*;
pub use toast::*;
