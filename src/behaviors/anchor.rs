use log::{debug, info};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::Result;

/// What a same-page link's `href` points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// Exactly `#`.
    Bare,
    /// `#id`, carrying the id without the hash.
    Fragment(&'a str),
    /// Anything not starting with `#`.
    Elsewhere,
}

impl<'a> AnchorTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some("") => AnchorTarget::Bare,
            Some(id) => AnchorTarget::Fragment(id),
            None => AnchorTarget::Elsewhere,
        }
    }
}

/// Document-relative scroll offset that leaves the target just below a
/// fixed header.
pub fn scroll_destination(target_top: f64, scroll_y: f64, header_height: f64, extra: f64) -> f64 {
    target_top + scroll_y - header_height - extra
}

/// Where a click on `href` should smooth-scroll to, or `None` to leave
/// the browser's default navigation alone. `target_top` resolves a
/// fragment id to its viewport-relative top, if such an element exists.
pub fn plan_scroll<F>(href: &str, target_top: F, scroll_y: f64, header_height: f64, extra: f64) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    let AnchorTarget::Fragment(id) = AnchorTarget::parse(href) else {
        return None;
    };
    let top = target_top(id)?;
    Some(scroll_destination(top, scroll_y, header_height, extra))
}

pub struct AnchorScroll {
    window: Window,
    document: Document,
    header: Option<HtmlElement>,
    anchors: Vec<Element>,
    extra_offset: f64,
}

impl AnchorScroll {
    pub fn find(window: &Window, document: &Document, extra_offset: f64) -> Option<Self> {
        let anchors = dom::query_all_in(document, r##"a[href^="#"]"##);
        if anchors.is_empty() {
            return None;
        }
        Some(Self {
            window: window.clone(),
            document: document.clone(),
            header: dom::by_id(document, "header"),
            anchors,
            extra_offset,
        })
    }

    pub fn attach(self) -> Result<()> {
        let count = self.anchors.len();

        for anchor in &self.anchors {
            let window = self.window.clone();
            let document = self.document.clone();
            let header = self.header.clone();
            let extra = self.extra_offset;
            let link = anchor.clone();

            dom::listen(anchor, "click", move |event| {
                let href = link.get_attribute("href").unwrap_or_default();
                let header_height = header
                    .as_ref()
                    .map(|h| f64::from(h.offset_height()))
                    .unwrap_or(0.0);
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let planned = plan_scroll(
                    &href,
                    |id| {
                        document
                            .get_element_by_id(id)
                            .map(|target| target.get_bounding_client_rect().top())
                    },
                    scroll_y,
                    header_height,
                    extra,
                );
                let Some(top) = planned else {
                    debug!("{} has no in-page target, leaving default navigation", href);
                    return;
                };
                event.prevent_default();

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?;
        }

        info!("Smooth anchor scrolling wired on {} links", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_href_shapes() {
        assert_eq!(AnchorTarget::parse("#"), AnchorTarget::Bare);
        assert_eq!(AnchorTarget::parse("#faq"), AnchorTarget::Fragment("faq"));
        assert_eq!(AnchorTarget::parse("/pricing"), AnchorTarget::Elsewhere);
        assert_eq!(AnchorTarget::parse(""), AnchorTarget::Elsewhere);
    }

    #[test]
    fn destination_clears_header_and_gap() {
        // target 600px below the viewport top, page already scrolled 400px
        assert_eq!(scroll_destination(600.0, 400.0, 80.0, 20.0), 900.0);
    }

    #[test]
    fn missing_header_counts_as_zero_height() {
        assert_eq!(scroll_destination(100.0, 0.0, 0.0, 20.0), 80.0);
    }

    #[test]
    fn dangling_fragment_leaves_default_navigation() {
        let planned = plan_scroll("#nonexistent", |_| None, 300.0, 80.0, 20.0);
        assert_eq!(planned, None);
    }

    #[test]
    fn bare_hash_never_looks_up_a_target() {
        let planned = plan_scroll(
            "#",
            |id| panic!("unexpected lookup of {id:?}"),
            0.0,
            80.0,
            20.0,
        );
        assert_eq!(planned, None);
    }

    #[test]
    fn existing_fragment_scrolls_below_header() {
        let planned = plan_scroll(
            "#faq",
            |id| (id == "faq").then_some(600.0),
            400.0,
            80.0,
            20.0,
        );
        assert_eq!(planned, Some(900.0));
    }
}
