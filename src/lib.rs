//! Client-side interactivity for the landing page: header scroll state,
//! mobile menu, smooth anchors, reveal animations, counters, FAQ
//! accordion, mock form submission, phone mask and hero parallax.
//!
//! Everything attaches to existing markup by id, class or data attribute.
//! Behaviors whose markup is missing are skipped.

use log::info;
use web_sys::js_sys::Reflect;
use wasm_bindgen::JsValue;

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod styles;
pub mod visibility;

pub mod behaviors {
    pub mod accordion;
    pub mod anchor;
    pub mod counter;
    pub mod form;
    pub mod header;
    pub mod menu;
    pub mod parallax;
    pub mod phone;
    pub mod reveal;
}

pub use config::Config;
pub use controller::{MountReport, PageController};
pub use error::{PageError, Result};

/// Boots the controller now, or on `DOMContentLoaded` if the document is
/// still loading.
pub fn start() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let ready_state = Reflect::get(&document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();

    if ready_state == "loading" {
        info!("Document still loading, waiting for DOMContentLoaded");
        let target = document.clone();
        dom::listen_with(&target, "DOMContentLoaded", &dom::once(), move |_| {
            boot(window.clone(), document.clone());
        })?;
    } else {
        boot(window, document);
    }
    Ok(())
}

fn boot(window: web_sys::Window, document: web_sys::Document) {
    let config = Config::load(&document);
    PageController::new(window, document, config).mount();
}
