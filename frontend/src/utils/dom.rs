use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

use crate::error::ControllerError;

/// An event listener that unbinds itself when dropped.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, ControllerError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// Like `new`, but the handler may fail. A failure is logged and aborts only that invocation.
    pub fn fallible<F>(
        target: &EventTarget,
        event_type: &'static str,
        context: &'static str,
        mut handler: F,
    ) -> Result<Self, ControllerError>
    where
        F: FnMut(Event) -> Result<(), ControllerError> + 'static,
    {
        Self::new(target, event_type, move |event| {
            if let Err(e) = handler(event) {
                log::error!("{} failed: {}", context, e);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// Selector queries shared by documents and elements.
pub trait Queryable {
    fn node_list(&self, selector: &str) -> Result<NodeList, JsValue>;
    fn first_match(&self, selector: &str) -> Result<Option<Element>, JsValue>;

    /// Every match cast to `T`; matches of another type are skipped.
    fn find_all<T: JsCast>(&self, selector: &str) -> Result<Vec<T>, ControllerError> {
        let list = self.node_list(selector)?;
        let mut found = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                match node.dyn_into::<T>() {
                    Ok(element) => found.push(element),
                    Err(_) => log::warn!("Skipping {} match of unexpected type", selector),
                }
            }
        }
        Ok(found)
    }

    fn find<T: JsCast>(&self, selector: &str) -> Result<Option<T>, ControllerError> {
        match self.first_match(selector)? {
            Some(element) => element
                .dyn_into::<T>()
                .map(Some)
                .map_err(|_| ControllerError::UnexpectedElement(selector.to_string())),
            None => Ok(None),
        }
    }

    fn require<T: JsCast>(&self, selector: &str) -> Result<T, ControllerError> {
        self.find(selector)?
            .ok_or_else(|| ControllerError::MissingElement(selector.to_string()))
    }
}

impl Queryable for Document {
    fn node_list(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn first_match(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Queryable for Element {
    fn node_list(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn first_match(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

pub fn create_element(document: &Document, tag: &str) -> Result<HtmlElement, ControllerError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ControllerError::UnexpectedElement(tag.to_string()))
}

pub fn apply_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), ControllerError> {
    let style = element.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn append_to_body(document: &Document, element: &HtmlElement) -> Result<(), ControllerError> {
    let body = document.body().ok_or(ControllerError::NoBody)?;
    body.append_child(element)?;
    Ok(())
}

/// Identity comparison of two DOM objects.
pub fn is_same_node(a: &impl AsRef<JsValue>, b: &impl AsRef<JsValue>) -> bool {
    a.as_ref() == b.as_ref()
}
