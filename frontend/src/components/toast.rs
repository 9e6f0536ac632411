//! Transient notifications pinned to the bottom-right corner.
//!
//! Toasts stack without a queue or dedup. Each one owns its dismiss timer, so
//! clearing the shelf cancels every pending removal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::error::ControllerError;
use crate::utils::dom::{append_to_body, apply_styles, create_element};

pub const TOAST_CLASS: &str = "simple-toast";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3_000;

const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("right", "20px"),
    ("bottom", "20px"),
    ("padding", "10px 14px"),
    ("background", "rgba(0,0,0,0.8)"),
    ("color", "white"),
    ("border-radius", "6px"),
    ("z-index", "9999"),
    ("font-size", "14px"),
    ("box-shadow", "0 4px 12px rgba(0,0,0,0.3)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

struct ActiveToast {
    id: u64,
    element: HtmlElement,
    _dismiss: Timeout,
}

#[derive(Default)]
struct ShelfInner {
    next_id: u64,
    active: Vec<ActiveToast>,
}

/// Owns every toast currently on screen.
#[derive(Clone, Default)]
pub struct ToastShelf {
    inner: Rc<RefCell<ShelfInner>>,
}

impl ToastShelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, document: &Document, toast: Toast) -> Result<(), ControllerError> {
        let element = create_element(document, "div")?;
        element.set_class_name(TOAST_CLASS);
        element.set_text_content(Some(&toast.message));
        apply_styles(&element, TOAST_STYLE)?;
        append_to_body(document, &element)?;

        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        let shelf = Rc::downgrade(&self.inner);
        let dismiss = Timeout::new(toast.duration_ms, move || {
            let Some(shelf) = shelf.upgrade() else {
                return;
            };
            let expired = {
                let mut inner = shelf.borrow_mut();
                inner
                    .active
                    .iter()
                    .position(|t| t.id == id)
                    .map(|pos| inner.active.remove(pos))
            };
            if let Some(toast) = expired {
                toast.element.remove();
            }
        });

        log::debug!("Showing toast {}: {}", id, toast.message);
        inner.active.push(ActiveToast {
            id,
            element,
            _dismiss: dismiss,
        });
        Ok(())
    }

    pub fn visible_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Removes every toast and cancels their pending dismissals.
    pub fn clear(&self) {
        let drained: Vec<ActiveToast> = self.inner.borrow_mut().active.drain(..).collect();
        for toast in drained {
            toast.element.remove();
        }
    }
}
