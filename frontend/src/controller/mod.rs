//! Wires the landing page's interactive pieces onto existing markup.
//!
//! `initialize` binds every feature against the given document and returns a
//! [`Controller`]. Dropping the controller unbinds all listeners, cancels
//! pending timers and removes any toasts, modals or dropdowns it created.

pub mod accordion;
pub mod header;
pub mod language;
pub mod signin;
pub mod signup;

use std::rc::Rc;

use web_sys::Document;

use crate::components::toast::{Toast, ToastShelf};
use crate::config::LandingConfig;
use crate::error::ControllerError;
use crate::utils::dom::Listener;

/// State shared by every handler: the document, its config and the toast shelf.
pub struct Page {
    pub document: Document,
    pub config: LandingConfig,
    pub toasts: ToastShelf,
}

impl Page {
    pub fn new(document: Document, config: LandingConfig) -> Self {
        Self {
            document,
            config,
            toasts: ToastShelf::new(),
        }
    }

    pub fn toast(&self, message: &str) -> Result<(), ControllerError> {
        let toast = Toast::new(message).with_duration(self.config.toast_duration_ms);
        self.toasts.show(&self.document, toast)
    }
}

pub struct Controller {
    page: Rc<Page>,
    _signup: Vec<signup::SignupBinding>,
    _accordion: Vec<Listener>,
    _language: Vec<language::LanguageBinding>,
    _signin: Option<signin::SignInBinding>,
    _header: Option<Listener>,
}

impl Controller {
    pub fn config(&self) -> &LandingConfig {
        &self.page.config
    }

    pub fn toasts(&self) -> &ToastShelf {
        &self.page.toasts
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.page.toasts.clear();
        log::debug!("Landing controller disposed");
    }
}

/// Binds all landing page behavior to `document`. Call once the markup is in place.
pub fn initialize(document: &Document, config: LandingConfig) -> Result<Controller, ControllerError> {
    if document.body().is_none() {
        return Err(ControllerError::NoBody);
    }

    let page = Rc::new(Page::new(document.clone(), config));

    let signup = signup::bind(&page)?;
    let accordion = accordion::bind(document)?;
    let language = language::bind(&page)?;
    let signin = signin::bind(&page)?;
    let header = header::bind(&page)?;

    log::info!(
        "Landing controller ready: {} signup forms, {} accordion listeners, {} language triggers, sign-in {}, header {}",
        signup.len(),
        accordion.len(),
        language.len(),
        if signin.is_some() { "bound" } else { "absent" },
        if header.is_some() { "bound" } else { "absent" },
    );

    Ok(Controller {
        page,
        _signup: signup,
        _accordion: accordion,
        _language: language,
        _signin: signin,
        _header: header,
    })
}
