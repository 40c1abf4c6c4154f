//! One-shot visibility watching.
//!
//! Each watched target fires at most once per page load. The
//! `IntersectionObserver` stops observing a target after its first
//! qualifying entry, and [`WatchSet`] keeps a consumed flag per target so a
//! late duplicate entry can never fire twice.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

#[derive(Debug)]
pub struct WatchSet<K> {
    entries: Vec<(K, bool)>,
}

impl<K: PartialEq> WatchSet<K> {
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            entries: keys.into_iter().map(|k| (k, false)).collect(),
        }
    }

    /// Marks `key` as fired. True only the first time for a watched key.
    pub fn consume(&mut self, key: &K) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, fired)) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|(_, fired)| !fired).count()
    }
}

/// Visibility trigger for a [`OneShotWatcher`].
#[derive(Debug, Clone)]
pub struct Trigger {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl Trigger {
    pub fn at(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub fn with_margin(mut self, margin: &str) -> Self {
        self.root_margin = Some(margin.to_string());
        self
    }

    fn options(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        if let Some(margin) = &self.root_margin {
            init.set_root_margin(margin);
        }
        init
    }
}

pub struct OneShotWatcher;

impl OneShotWatcher {
    /// Observes `targets` and calls `on_first` once per target when it
    /// first becomes visible enough. Returns how many targets are watched.
    pub fn watch<F>(targets: Vec<Element>, trigger: &Trigger, mut on_first: F) -> Result<usize>
    where
        F: FnMut(Element) + 'static,
    {
        if targets.is_empty() {
            return Ok(0);
        }

        let seen = Rc::new(RefCell::new(WatchSet::new(targets.iter().cloned())));
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let (first, pending) = {
                        let mut seen = seen.borrow_mut();
                        (seen.consume(&target), seen.pending())
                    };
                    if first {
                        debug!("Visibility trigger fired, {} targets still watched", pending);
                        on_first(target);
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &trigger.options(),
        )?;
        for target in &targets {
            observer.observe(target);
        }
        callback.forget();
        Ok(targets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_key_fires_once() {
        let mut set = WatchSet::new([1, 2, 3]);
        assert!(set.consume(&2));
        assert!(!set.consume(&2));
        assert!(set.consume(&1));
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn unknown_keys_never_fire() {
        let mut set = WatchSet::new(["a"]);
        assert!(!set.consume(&"b"));
        assert_eq!(set.pending(), 1);
    }
}
