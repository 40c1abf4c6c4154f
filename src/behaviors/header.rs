use log::{info, warn};
use web_sys::{Document, Element, Window};

use crate::dom;
use crate::error::Result;

pub const SCROLLED_CLASS: &str = "scrolled";

/// Header gets the scrolled look only strictly past the threshold.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub struct HeaderScroll {
    window: Window,
    header: Element,
    threshold: f64,
}

impl HeaderScroll {
    pub fn find(window: &Window, document: &Document, threshold: f64) -> Option<Self> {
        Some(Self {
            window: window.clone(),
            header: document.get_element_by_id("header")?,
            threshold,
        })
    }

    pub fn attach(self) -> Result<()> {
        let Self {
            window,
            header,
            threshold,
        } = self;

        let scroller = window.clone();
        let sync = move || -> Result<()> {
            let offset = scroller.scroll_y()?;
            dom::set_class(&header, SCROLLED_CLASS, is_scrolled(offset, threshold))
        };

        // Initial check
        sync()?;

        dom::listen_with(&window, "scroll", &dom::passive(), move |_| {
            if let Err(err) = sync() {
                warn!("Header scroll state not updated: {}", err);
            }
        })?;
        info!("Header scroll state wired (threshold {}px)", threshold);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::is_scrolled;

    #[test]
    fn boundary_is_exclusive() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
