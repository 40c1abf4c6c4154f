//! Scroll-triggered entrance animations and the steps progress line.

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{Document, Element};

use crate::dom;
use crate::error::Result;
use crate::visibility::{OneShotWatcher, Trigger};

pub const VISIBLE_CLASS: &str = "visible";
pub const ANIMATED_CLASS: &str = "animated";

/// Delay before revealing, from a parsed `data-delay`. Negative means none.
pub fn reveal_delay_ms(raw: i64) -> u32 {
    raw.clamp(0, i64::from(u32::MAX)) as u32
}

pub struct Reveal {
    elements: Vec<Element>,
    trigger: Trigger,
}

impl Reveal {
    pub fn find(document: &Document, threshold: f64, root_margin: &str) -> Option<Self> {
        let elements = dom::query_all_in(document, "[data-animate]");
        if elements.is_empty() {
            return None;
        }
        Some(Self {
            elements,
            trigger: Trigger::at(threshold).with_margin(root_margin),
        })
    }

    pub fn attach(self) -> Result<()> {
        let watched = OneShotWatcher::watch(self.elements, &self.trigger, |element| {
            let delay = reveal_delay_ms(dom::numeric_data(&element, "data-delay"));
            if delay == 0 {
                show(&element, VISIBLE_CLASS);
                return;
            }
            Timeout::new(delay, move || show(&element, VISIBLE_CLASS)).forget();
        })?;
        info!("Reveal animations watching {} elements", watched);
        Ok(())
    }
}

pub struct StepsLine {
    line: Element,
    trigger: Trigger,
}

impl StepsLine {
    pub fn find(document: &Document, threshold: f64) -> Option<Self> {
        Some(Self {
            line: dom::query(document, ".steps__line")?,
            trigger: Trigger::at(threshold),
        })
    }

    pub fn attach(self) -> Result<()> {
        OneShotWatcher::watch(vec![self.line], &self.trigger, |line| {
            show(&line, ANIMATED_CLASS);
        })?;
        info!("Steps line animation wired");
        Ok(())
    }
}

fn show(element: &Element, class: &str) {
    if let Err(err) = dom::set_class(element, class, true) {
        warn!("Could not add .{}: {}", class, err);
    }
}
