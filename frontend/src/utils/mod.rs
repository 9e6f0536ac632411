pub mod dom;
pub mod html;
pub mod validation;
