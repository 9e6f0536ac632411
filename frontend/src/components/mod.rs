pub mod modal;
pub mod toast;
