//! Demo sign-in modal opened from the navigation bar.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlInputElement};

use super::Page;
use crate::components::modal::Overlay;
use crate::error::ControllerError;
use crate::utils::dom::{is_same_node, Listener, Queryable};
use crate::utils::validation::{is_valid_email, is_valid_password};

pub const SIGNIN_CLASS: &str = "signin-modal";
const NAV_BUTTON_SELECTOR: &str = "nav button";

const SIGNIN_MARKUP: &str = r#"
  <div style="background:#111;color:white;border-radius:8px;padding:20px;max-width:420px;width:90%;font-family:inherit;">
    <h2 style="margin:0 0 10px">Sign In</h2>
    <input id="signin-email" placeholder="Email address" type="email" style="width:100%;padding:10px;border-radius:6px;border:none;margin-bottom:10px;">
    <input id="signin-pass" placeholder="Password" type="password" style="width:100%;padding:10px;border-radius:6px;border:none;margin-bottom:10px;">
    <div style="display:flex;gap:8px;justify-content:flex-end;margin-top:6px;">
      <button id="signin-close" style="padding:8px 12px;border-radius:6px;background:#333;border:0;color:#ddd;cursor:pointer;">Cancel</button>
      <button id="signin-submit" style="padding:8px 12px;border-radius:6px;background:#e50914;border:0;color:white;cursor:pointer;">Sign in</button>
    </div>
  </div>
"#;

pub fn is_sign_in_label(text: &str) -> bool {
    text.to_lowercase().contains("sign in")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInCheck {
    InvalidEmail,
    PasswordTooShort,
    Accepted,
}

pub fn check_credentials(email: &str, password: &str, min_password_len: usize) -> SignInCheck {
    if !is_valid_email(email.trim()) {
        SignInCheck::InvalidEmail
    } else if !is_valid_password(password, min_password_len) {
        SignInCheck::PasswordTooShort
    } else {
        SignInCheck::Accepted
    }
}

struct SignInModal {
    overlay: Overlay,
    /// Pending auto-close after a successful submit.
    close_timer: Option<Timeout>,
}

struct SignIn {
    page: Rc<Page>,
    modal: RefCell<Option<SignInModal>>,
}

pub struct SignInBinding {
    _signin: Rc<SignIn>,
    _trigger: Listener,
}

pub fn bind(page: &Rc<Page>) -> Result<Option<SignInBinding>, ControllerError> {
    let buttons: Vec<HtmlElement> = page.document.find_all(NAV_BUTTON_SELECTOR)?;
    let Some(trigger) = buttons
        .into_iter()
        .find(|button| is_sign_in_label(&button.text_content().unwrap_or_default()))
    else {
        log::debug!("No sign-in button in navigation");
        return Ok(None);
    };

    let signin = Rc::new(SignIn {
        page: page.clone(),
        modal: RefCell::new(None),
    });
    let weak = Rc::downgrade(&signin);
    let listener = Listener::fallible(&trigger, "click", "sign-in open", move |event| {
        event.prevent_default();
        match weak.upgrade() {
            Some(signin) => open_modal(&signin),
            None => Ok(()),
        }
    })?;

    Ok(Some(SignInBinding {
        _signin: signin,
        _trigger: listener,
    }))
}

fn open_modal(signin: &Rc<SignIn>) -> Result<(), ControllerError> {
    if signin.modal.borrow().is_some() {
        return Ok(());
    }

    let mut overlay = Overlay::open(&signin.page.document, SIGNIN_CLASS, SIGNIN_MARKUP)?;
    let backdrop = overlay.element().clone();
    let close: HtmlElement = backdrop.require("#signin-close")?;
    let submit: HtmlElement = backdrop.require("#signin-submit")?;

    let weak = Rc::downgrade(signin);
    overlay.keep(Listener::new(&close, "click", move |_| {
        if let Some(signin) = weak.upgrade() {
            close_modal(&signin);
        }
    })?);

    let weak = Rc::downgrade(signin);
    overlay.keep(Listener::fallible(&submit, "click", "sign-in submit", move |_| {
        match weak.upgrade() {
            Some(signin) => submit_credentials(&signin),
            None => Ok(()),
        }
    })?);

    // Clicks on the panel bubble up here too; only the backdrop itself closes.
    let weak = Rc::downgrade(signin);
    let element = backdrop.clone();
    overlay.keep(Listener::new(&backdrop, "click", move |event| {
        let on_backdrop = event
            .target()
            .map_or(false, |target| is_same_node(&target, &element));
        if !on_backdrop {
            return;
        }
        if let Some(signin) = weak.upgrade() {
            close_modal(&signin);
        }
    })?);

    log::debug!("Sign-in modal opened");
    *signin.modal.borrow_mut() = Some(SignInModal {
        overlay,
        close_timer: None,
    });
    Ok(())
}

fn submit_credentials(signin: &Rc<SignIn>) -> Result<(), ControllerError> {
    let (email, password) = {
        let modal = signin.modal.borrow();
        let Some(modal) = modal.as_ref() else {
            return Ok(());
        };
        let element = modal.overlay.element();
        let email: HtmlInputElement = element.require("#signin-email")?;
        let password: HtmlInputElement = element.require("#signin-pass")?;
        (email.value(), password.value())
    };

    let config = &signin.page.config;
    match check_credentials(&email, &password, config.min_password_len) {
        SignInCheck::InvalidEmail => signin.page.toast(&config.messages.signin_email_invalid),
        SignInCheck::PasswordTooShort => signin
            .page
            .toast(&config.messages.password_too_short(config.min_password_len)),
        SignInCheck::Accepted => {
            log::info!("Demo sign-in accepted");
            signin.page.toast(&config.messages.signin_success)?;
            schedule_close(signin);
            Ok(())
        }
    }
}

fn schedule_close(signin: &Rc<SignIn>) {
    let weak = Rc::downgrade(signin);
    let timer = Timeout::new(signin.page.config.signin_close_delay_ms, move || {
        if let Some(signin) = weak.upgrade() {
            close_modal(&signin);
        }
    });
    // Replacing an earlier timer cancels it, so a second submit restarts the countdown.
    if let Some(modal) = signin.modal.borrow_mut().as_mut() {
        modal.close_timer = Some(timer);
    }
}

fn close_modal(signin: &SignIn) {
    let modal = signin.modal.borrow_mut().take();
    drop(modal);
}
