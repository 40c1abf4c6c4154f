use log::{info, warn};
use stylist::GlobalStyle;
use web_sys::Document;

use crate::error::{PageError, Result};

/// Spinner keyframes and the burger icon's open state.
pub const RUNTIME_CSS: &str = r#"
@keyframes spin {
    to { transform: rotate(360deg); }
}
.spin {
    animation: spin 1s linear infinite;
}
.burger.active span:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}
.burger.active span:nth-child(2) {
    opacity: 0;
}
.burger.active span:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}
"#;

/// Mounts [`RUNTIME_CSS`] once. Falls back to a plain `<style>` element
/// when stylist cannot parse the sheet.
pub fn inject(document: &Document) -> Result<()> {
    match GlobalStyle::new(RUNTIME_CSS) {
        Ok(_) => {
            info!("Runtime styles mounted");
            Ok(())
        }
        Err(err) => {
            warn!("stylist rejected runtime styles ({}), appending raw <style>", err);
            append_raw(document)
        }
    }
}

fn append_raw(document: &Document) -> Result<()> {
    let head = document
        .head()
        .ok_or_else(|| PageError::Style("document has no <head>".to_string()))?;
    let sheet = document.create_element("style")?;
    sheet.set_text_content(Some(RUNTIME_CSS));
    head.append_child(&sheet)?;
    Ok(())
}
