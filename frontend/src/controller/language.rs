//! Cosmetic language picker. Selection only relabels the trigger; nothing is persisted.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Node};

use super::Page;
use crate::error::ControllerError;
use crate::utils::dom::{apply_styles, create_element, is_same_node, Listener, Queryable};
use crate::utils::html::escape_html;

pub const DROPDOWN_CLASS: &str = "lang-dropdown";
pub const ITEM_CLASS: &str = "lang-item";

const PANEL_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("margin-top", "6px"),
    ("right", "0"),
    ("background", "#fff"),
    ("border-radius", "6px"),
    ("box-shadow", "0 6px 18px rgba(0,0,0,0.15)"),
    ("padding", "8px"),
    ("z-index", "9998"),
    ("min-width", "150px"),
];
const ITEM_STYLE: &str = "padding:8px 10px;cursor:pointer;border-radius:4px";

/// Inner markup of a trigger after `language` was picked.
pub fn trigger_markup(language: &str, icon_src: &str) -> String {
    format!(r#"{} <img src="{}">"#, escape_html(language), escape_html(icon_src))
}

struct OpenPanel {
    element: HtmlElement,
    listeners: Vec<Listener>,
}

impl Drop for OpenPanel {
    fn drop(&mut self) {
        self.listeners.clear();
        self.element.remove();
    }
}

struct LanguageTrigger {
    page: Rc<Page>,
    button: HtmlElement,
    /// At most one panel per trigger.
    panel: RefCell<Option<OpenPanel>>,
}

impl LanguageTrigger {
    fn close(&self) {
        let panel = self.panel.borrow_mut().take();
        drop(panel);
    }
}

pub struct LanguageBinding {
    _trigger: Rc<LanguageTrigger>,
    _click: Listener,
}

pub fn bind(page: &Rc<Page>) -> Result<Vec<LanguageBinding>, ControllerError> {
    let buttons: Vec<HtmlElement> = page.document.find_all(&page.config.language_button_selector)?;
    let mut bindings = Vec::with_capacity(buttons.len());

    for button in buttons {
        let trigger = Rc::new(LanguageTrigger {
            page: page.clone(),
            button: button.clone(),
            panel: RefCell::new(None),
        });
        let weak = Rc::downgrade(&trigger);
        let click = Listener::fallible(&button, "click", "language toggle", move |event| {
            event.stop_propagation();
            match weak.upgrade() {
                Some(trigger) => toggle(&trigger),
                None => Ok(()),
            }
        })?;
        bindings.push(LanguageBinding {
            _trigger: trigger,
            _click: click,
        });
    }

    log::debug!("Bound {} language triggers", bindings.len());
    Ok(bindings)
}

fn toggle(trigger: &Rc<LanguageTrigger>) -> Result<(), ControllerError> {
    let open = trigger.panel.borrow_mut().take();
    if open.is_some() {
        drop(open);
        return Ok(());
    }

    let panel = open_panel(trigger)?;
    *trigger.panel.borrow_mut() = Some(panel);
    Ok(())
}

fn open_panel(trigger: &Rc<LanguageTrigger>) -> Result<OpenPanel, ControllerError> {
    let document = &trigger.page.document;
    let parent = trigger
        .button
        .parent_element()
        .ok_or_else(|| ControllerError::MissingElement("language trigger parent".to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ControllerError::UnexpectedElement("language trigger parent".to_string()))?;

    let element = create_element(document, "div")?;
    element.set_class_name(DROPDOWN_CLASS);
    apply_styles(&element, PANEL_STYLE)?;

    let mut items = Vec::with_capacity(trigger.page.config.languages.len());
    for language in &trigger.page.config.languages {
        let item = create_element(document, "div")?;
        item.set_class_name(ITEM_CLASS);
        item.set_attribute("style", ITEM_STYLE)?;
        item.set_text_content(Some(language));
        element.append_child(&item)?;
        items.push((item, language.clone()));
    }

    parent.style().set_property("position", "relative")?;
    parent.append_child(&element)?;

    let mut panel = OpenPanel {
        element,
        listeners: Vec::with_capacity(items.len() + 1),
    };

    for (item, language) in items {
        let weak = Rc::downgrade(trigger);
        panel.listeners.push(Listener::fallible(&item, "click", "language select", move |_| {
            match weak.upgrade() {
                Some(trigger) => select_language(&trigger, &language),
                None => Ok(()),
            }
        })?);
    }

    let weak = Rc::downgrade(trigger);
    panel.listeners.push(Listener::new(document, "click", move |event| {
        if let Some(trigger) = weak.upgrade() {
            close_if_outside(&trigger, &event);
        }
    })?);

    Ok(panel)
}

fn select_language(trigger: &LanguageTrigger, language: &str) -> Result<(), ControllerError> {
    let config = &trigger.page.config;
    trigger
        .button
        .set_inner_html(&trigger_markup(language, &config.language_icon_src));
    trigger.close();
    log::info!("Language set to {}", language);
    trigger.page.toast(&config.messages.language_set(language))
}

fn close_if_outside(trigger: &LanguageTrigger, event: &Event) {
    let target = event.target();
    let inside = {
        let panel = trigger.panel.borrow();
        let Some(panel) = panel.as_ref() else {
            return;
        };
        target
            .as_ref()
            .and_then(|t| t.dyn_ref::<Node>())
            .map_or(false, |node| panel.element.contains(Some(node)))
    };
    let on_trigger = target
        .as_ref()
        .map_or(false, |t| is_same_node(t, &trigger.button));

    if !inside && !on_trigger {
        trigger.close();
    }
}
