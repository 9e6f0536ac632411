use web_sys::{Document, HtmlElement};

use crate::error::ControllerError;
use crate::utils::dom::{append_to_body, apply_styles, create_element, Listener};

const BACKDROP_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("inset", "0"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("z-index", "10000"),
    ("background", "rgba(0,0,0,0.6)"),
];

/// A full-screen backdrop with a panel inside. Dropping it removes the node and its listeners.
pub struct Overlay {
    element: HtmlElement,
    listeners: Vec<Listener>,
}

impl Overlay {
    pub fn open(document: &Document, class_name: &str, inner_html: &str) -> Result<Self, ControllerError> {
        let element = create_element(document, "div")?;
        element.set_class_name(class_name);
        apply_styles(&element, BACKDROP_STYLE)?;
        element.set_inner_html(inner_html);
        append_to_body(document, &element)?;
        Ok(Self {
            element,
            listeners: Vec::new(),
        })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn keep(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.listeners.clear();
        self.element.remove();
    }
}
