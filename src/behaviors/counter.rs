use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::dom;
use crate::error::Result;
use crate::visibility::{OneShotWatcher, Trigger};

/// `1 - (1 - p)^3`, fast start and slow finish. `progress` is clamped to [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: i64,
    pub finished: bool,
}

/// Count-up from 0 to `target`, sampled with frame timestamps in milliseconds.
/// The first sample sets the start time.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: i64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
        }
    }

    pub fn progress_at(&self, now: f64) -> f64 {
        let start = self.started_at.unwrap_or(now);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&mut self, now: f64) -> Frame {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        let progress = self.progress_at(now);
        Frame {
            value: value_at(self.target, progress),
            finished: progress >= 1.0,
        }
    }
}

pub fn value_at(target: i64, progress: f64) -> i64 {
    (target as f64 * ease_out_cubic(progress)).round() as i64
}

pub struct Counters {
    window: Window,
    elements: Vec<Element>,
    trigger: Trigger,
    duration_ms: f64,
}

impl Counters {
    pub fn find(window: &Window, document: &Document, threshold: f64, duration_ms: f64) -> Option<Self> {
        let elements = dom::query_all_in(document, "[data-count]");
        if elements.is_empty() {
            return None;
        }
        Some(Self {
            window: window.clone(),
            elements,
            trigger: Trigger::at(threshold),
            duration_ms,
        })
    }

    pub fn attach(self) -> Result<()> {
        let window = self.window;
        let duration = self.duration_ms;
        let watched = OneShotWatcher::watch(self.elements, &self.trigger, move |element| {
            let target = dom::numeric_data(&element, "data-count");
            if let Err(err) = run(&window, element, CountUp::new(target, duration)) {
                warn!("Counter animation did not start: {}", err);
            }
        })?;
        info!("Counters watching {} elements", watched);
        Ok(())
    }
}

/// Drives `count` with `requestAnimationFrame` until it finishes. The
/// frame closure holds itself alive and releases itself on the last frame.
fn run(window: &Window, element: Element, mut count: CountUp) -> Result<()> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let scheduler = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let frame = count.sample(now);
        element.set_text_content(Some(&frame.value.to_string()));
        if frame.finished {
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = scheduler.request_animation_frame(callback.as_ref().unchecked_ref()) {
                warn!("Counter frame not scheduled: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_of_the_curve() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn counts_from_zero_to_target_over_duration() {
        let mut count = CountUp::new(100, 2000.0);
        assert_eq!(count.sample(1_000.0), Frame { value: 0, finished: false });
        assert_eq!(count.sample(2_000.0).value, 88);
        assert_eq!(count.sample(3_000.0), Frame { value: 100, finished: true });
        assert_eq!(count.sample(9_000.0), Frame { value: 100, finished: true });
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut count = CountUp::new(42, 0.0);
        assert_eq!(count.sample(5.0), Frame { value: 42, finished: true });
    }

    #[test]
    fn zero_target_stays_zero() {
        let mut count = CountUp::new(0, 2000.0);
        assert_eq!(count.sample(0.0).value, 0);
        assert_eq!(count.sample(2000.0).value, 0);
    }
}
