//! FAQ accordion backed by radio inputs.
//!
//! Native radios can't be unchecked by clicking them again, so label presses are
//! intercepted and the input is flipped by hand on `mousedown`. The label's
//! native `click` activation is cancelled, so the flip is the only state change.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent, MouseEventInit};

use crate::error::ControllerError;
use crate::utils::dom::{Listener, Queryable};

pub const LABEL_SELECTOR: &str = "ul.accordion label";
pub const KEYBOARD_LABEL_SELECTOR: &str = "ul.accordion li label";

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn bind(document: &Document) -> Result<Vec<Listener>, ControllerError> {
    let mut listeners = Vec::new();

    for label in document.find_all::<Element>(LABEL_SELECTOR)? {
        let doc = document.clone();
        let target = label.clone();
        listeners.push(Listener::fallible(&label, "mousedown", "accordion toggle", move |event| {
            event.prevent_default();
            toggle_for_label(&doc, &target)
        })?);
        // The label's own activation runs on click and would re-check the input.
        listeners.push(Listener::new(&label, "click", |event| event.prevent_default())?);
    }

    for label in document.find_all::<Element>(KEYBOARD_LABEL_SELECTOR)? {
        label.set_attribute("tabindex", "0")?;
        let target = label.clone();
        listeners.push(Listener::fallible(&label, "keydown", "accordion key", move |event| {
            activate_from_key(&target, &event)
        })?);
    }

    log::debug!("Bound {} accordion listeners", listeners.len());
    Ok(listeners)
}

fn toggle_for_label(document: &Document, label: &Element) -> Result<(), ControllerError> {
    let Some(for_id) = label.get_attribute("for") else {
        return Ok(());
    };
    let Some(input) = document
        .get_element_by_id(&for_id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };

    // Radios and checkboxes both flip; for radios this is what allows closing an open item.
    input.set_checked(!input.checked());
    input.dispatch_event(&Event::new("change")?)?;
    Ok(())
}

fn activate_from_key(label: &Element, event: &Event) -> Result<(), ControllerError> {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return Ok(());
    };
    if !is_activation_key(&key_event.key()) {
        return Ok(());
    }

    event.prevent_default();
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let press = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init)?;
    label.dispatch_event(&press)?;
    Ok(())
}
