//! Email capture forms and the follow-up modal they open.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::Page;
use crate::components::modal::Overlay;
use crate::error::ControllerError;
use crate::utils::dom::{Listener, Queryable};
use crate::utils::html::escape_html;
use crate::utils::validation::is_valid_email;

pub const SIGNUP_FORM_SELECTOR: &str = "form.email-signup";
pub const NEXT_STEP_CLASS: &str = "simple-modal";
const EMAIL_INPUT_SELECTOR: &str = r#"input[type="email"]"#;
const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupCheck {
    MissingEmail,
    InvalidEmail,
    Accepted(String),
}

/// Classifies the raw input value. Surrounding whitespace is ignored.
pub fn check_signup_email(raw: &str) -> SignupCheck {
    let email = raw.trim();
    if email.is_empty() {
        SignupCheck::MissingEmail
    } else if !is_valid_email(email) {
        SignupCheck::InvalidEmail
    } else {
        SignupCheck::Accepted(email.to_string())
    }
}

pub fn next_step_markup(email: &str) -> String {
    format!(
        r#"<div class="modal-panel" style="background:#111;color:white;border-radius:8px;padding:20px;max-width:420px;width:90%;font-family:inherit;">
  <h2 style="margin:0 0 10px">Almost there</h2>
  <p style="margin:0 0 16px;color:#ccc;">Finish setting up your membership for <strong>{}</strong>.</p>
  <div style="display:flex;gap:8px;justify-content:flex-end;">
    <button type="button" class="modal-cancel" style="padding:8px 12px;border-radius:6px;background:#333;border:0;color:#ddd;cursor:pointer;">Cancel</button>
    <button type="button" class="modal-done" style="padding:8px 12px;border-radius:6px;background:#e50914;border:0;color:white;cursor:pointer;">Done</button>
  </div>
</div>"#,
        escape_html(email)
    )
}

/// A deferred "next step" after a successful submission.
struct PendingStep {
    button: Option<HtmlButtonElement>,
    /// Label the button had before it was relabeled.
    restore_label: Option<String>,
    _timer: Timeout,
}

impl PendingStep {
    fn restore_button(&self) {
        if let (Some(button), Some(label)) = (&self.button, &self.restore_label) {
            button.set_text_content(Some(label));
            button.set_disabled(false);
        }
    }
}

struct SignupForm {
    page: Rc<Page>,
    form: HtmlElement,
    pending: RefCell<Option<PendingStep>>,
    next_step: RefCell<Option<Overlay>>,
}

/// Keeps a form's state alive for as long as its submit listener is bound.
pub struct SignupBinding {
    _form: Rc<SignupForm>,
    _submit: Listener,
}

pub fn bind(page: &Rc<Page>) -> Result<Vec<SignupBinding>, ControllerError> {
    let forms: Vec<HtmlElement> = page.document.find_all(SIGNUP_FORM_SELECTOR)?;
    let bindings = forms
        .into_iter()
        .map(|form| bind_form(page, form))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Bound {} signup forms", bindings.len());
    Ok(bindings)
}

fn bind_form(page: &Rc<Page>, form: HtmlElement) -> Result<SignupBinding, ControllerError> {
    let state = Rc::new(SignupForm {
        page: page.clone(),
        form: form.clone(),
        pending: RefCell::new(None),
        next_step: RefCell::new(None),
    });

    let weak = Rc::downgrade(&state);
    let submit = Listener::fallible(&form, "submit", "signup submit", move |event| {
        event.prevent_default();
        match weak.upgrade() {
            Some(form) => handle_submit(&form),
            None => Ok(()),
        }
    })?;

    Ok(SignupBinding {
        _form: state,
        _submit: submit,
    })
}

fn handle_submit(form: &Rc<SignupForm>) -> Result<(), ControllerError> {
    let input: Option<HtmlInputElement> = form.form.find(EMAIL_INPUT_SELECTOR)?;
    let raw = input.as_ref().map(|i| i.value()).unwrap_or_default();
    let messages = &form.page.config.messages;

    match check_signup_email(&raw) {
        SignupCheck::MissingEmail => {
            form.page.toast(&messages.email_required)?;
            focus(input.as_ref())
        }
        SignupCheck::InvalidEmail => {
            form.page.toast(&messages.email_invalid)?;
            focus(input.as_ref())
        }
        SignupCheck::Accepted(email) => {
            log::info!("Signup accepted, preparing next step");
            form.page.toast(&messages.signup_processing)?;
            begin_next_step(form, email)
        }
    }
}

fn focus(input: Option<&HtmlInputElement>) -> Result<(), ControllerError> {
    if let Some(input) = input {
        input.focus()?;
    }
    Ok(())
}

fn begin_next_step(form: &Rc<SignupForm>, email: String) -> Result<(), ControllerError> {
    let config = &form.page.config;
    let button: Option<HtmlButtonElement> = form.form.find(SUBMIT_SELECTOR)?;

    // Dropping the superseded step cancels its timer; its saved label still wins
    // because the button currently reads "Processing...".
    let previous = form.pending.borrow_mut().take();
    let previous_label = previous.and_then(|step| step.restore_label);

    let (restore_label, delay) = match &button {
        Some(button) => {
            let label = previous_label.unwrap_or_else(|| button.text_content().unwrap_or_default());
            button.set_text_content(Some(&config.messages.processing_label));
            button.set_disabled(true);
            (Some(label), config.processing_delay_ms)
        }
        None => (None, config.fallback_delay_ms),
    };

    let weak = Rc::downgrade(form);
    let timer = Timeout::new(delay, move || {
        if let Some(form) = weak.upgrade() {
            if let Err(e) = finish_step(&form, &email) {
                log::error!("signup next step failed: {}", e);
            }
        }
    });

    *form.pending.borrow_mut() = Some(PendingStep {
        button,
        restore_label,
        _timer: timer,
    });
    Ok(())
}

fn finish_step(form: &Rc<SignupForm>, email: &str) -> Result<(), ControllerError> {
    let pending = form.pending.borrow_mut().take();
    if let Some(step) = &pending {
        step.restore_button();
    }
    drop(pending);
    open_next_step(form, email)
}

fn open_next_step(form: &Rc<SignupForm>, email: &str) -> Result<(), ControllerError> {
    let mut overlay = Overlay::open(&form.page.document, NEXT_STEP_CLASS, &next_step_markup(email))?;
    let cancel: HtmlElement = overlay.element().require(".modal-cancel")?;
    let done: HtmlElement = overlay.element().require(".modal-done")?;

    let weak = Rc::downgrade(form);
    overlay.keep(Listener::new(&cancel, "click", move |_| {
        if let Some(form) = weak.upgrade() {
            close_next_step(&form);
        }
    })?);

    let weak = Rc::downgrade(form);
    overlay.keep(Listener::fallible(&done, "click", "signup done", move |_| {
        let Some(form) = weak.upgrade() else {
            return Ok(());
        };
        form.page.toast(&form.page.config.messages.signup_complete)?;
        close_next_step(&form);
        Ok(())
    })?);

    let previous = form.next_step.borrow_mut().replace(overlay);
    drop(previous);
    Ok(())
}

fn close_next_step(form: &SignupForm) {
    let overlay = form.next_step.borrow_mut().take();
    drop(overlay);
}
