use std::rc::Rc;

use web_sys::{Element, HtmlElement, Window};

use super::Page;
use crate::error::ControllerError;
use crate::utils::dom::{Listener, Queryable};

pub const HEADER_SELECTOR: &str = ".header";

/// Navigation bar look for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBackdrop {
    Transparent,
    Frosted,
}

impl NavBackdrop {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavBackdrop::Frosted
        } else {
            NavBackdrop::Transparent
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavBackdrop::Transparent => "transparent",
            NavBackdrop::Frosted => "rgba(0,0,0,0.6)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            NavBackdrop::Transparent => "none",
            NavBackdrop::Frosted => "blur(6px)",
        }
    }

    fn apply(self, nav: &HtmlElement) -> Result<(), ControllerError> {
        let style = nav.style();
        style.set_property("background", self.background())?;
        style.set_property("backdrop-filter", self.backdrop_filter())?;
        Ok(())
    }
}

/// Binds the scroll listener when the page has a header. Runs on every scroll event.
pub fn bind(page: &Rc<Page>) -> Result<Option<Listener>, ControllerError> {
    let Some(header) = page.document.find::<Element>(HEADER_SELECTOR)? else {
        return Ok(None);
    };
    let nav: Option<HtmlElement> = header.find("nav")?;
    let window = page.document.default_view().ok_or(ControllerError::NoWindow)?;
    let threshold = page.config.scroll_threshold_px;

    let scroller = window.clone();
    let listener = Listener::fallible(&window, "scroll", "header scroll", move |_| {
        let Some(nav) = &nav else {
            return Ok(());
        };
        let offset = scroll_offset(&scroller)?;
        NavBackdrop::for_offset(offset, threshold).apply(nav)
    })?;
    Ok(Some(listener))
}

fn scroll_offset(window: &Window) -> Result<f64, ControllerError> {
    Ok(window.scroll_y().or_else(|_| window.page_y_offset())?)
}
