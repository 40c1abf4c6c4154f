use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = core::result::Result<T, PageError>;

/// Errors raised while attaching behaviors to the page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    /// A DOM call threw. The message is whatever the browser reported.
    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("style injection failed: {0}")]
    Style(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}
