use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom;
use crate::error::Result;

/// Badge rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Maps the pointer to [-1, 1] on both axes around the viewport centre
    /// and scales by `max_degrees`. Moving right turns the badge around Y,
    /// moving down tips it back around X.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, max_degrees: f64) -> Self {
        let normalize = |pos: f64, extent: f64| {
            if extent > 0.0 {
                ((pos / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
            } else {
                0.0
            }
        };
        let nx = normalize(x, width);
        let ny = normalize(y, height);
        Self {
            rotate_x: -ny * max_degrees,
            rotate_y: nx * max_degrees,
        }
    }

    pub fn transform(&self) -> String {
        format!("rotateY({}deg) rotateX({}deg)", self.rotate_y, self.rotate_x)
    }
}

/// Coalesces pointer moves so at most one frame is queued and it paints
/// the latest position.
#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: Option<Tilt>,
}

impl FrameSlot {
    /// Stores `tilt`. True when the caller must request a frame.
    pub fn push(&mut self, tilt: Tilt) -> bool {
        self.pending.replace(tilt).is_none()
    }

    pub fn take(&mut self) -> Option<Tilt> {
        self.pending.take()
    }
}

pub struct Parallax {
    window: Window,
    document: Document,
    badge: HtmlElement,
    max_degrees: f64,
}

impl Parallax {
    /// Only on wide viewports, checked once at load.
    pub fn find(window: &Window, document: &Document, min_viewport: f64, max_degrees: f64) -> Option<Self> {
        dom::query(document, ".hero__visual")?;
        let badge = dom::by_id(document, "hero-badge-img")?;
        let width = viewport(window).0;
        if width <= min_viewport {
            debug!("Viewport {}px too narrow for parallax", width);
            return None;
        }
        Some(Self {
            window: window.clone(),
            document: document.clone(),
            badge,
            max_degrees,
        })
    }

    pub fn attach(self) -> Result<()> {
        let slot = Rc::new(RefCell::new(FrameSlot::default()));

        let paint = {
            let slot = slot.clone();
            let badge = self.badge.clone();
            Closure::wrap(Box::new(move |_: f64| {
                if let Some(tilt) = slot.borrow_mut().take() {
                    if let Err(err) = badge.style().set_property("transform", &tilt.transform()) {
                        warn!("Parallax transform not applied: {:?}", err);
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let window = self.window.clone();
        let max_degrees = self.max_degrees;
        dom::listen(&self.document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (width, height) = viewport(&window);
            let tilt = Tilt::from_pointer(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                width,
                height,
                max_degrees,
            );
            if slot.borrow_mut().push(tilt) {
                if let Err(err) = window.request_animation_frame(paint.as_ref().unchecked_ref()) {
                    warn!("Parallax frame not scheduled: {:?}", err);
                }
            }
        })?;

        info!("Hero badge parallax wired");
        Ok(())
    }
}

fn viewport(window: &Window) -> (f64, f64) {
    let read = |value: core::result::Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        let tilt = Tilt::from_pointer(500.0, 400.0, 1000.0, 800.0, 8.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn corners_reach_max_tilt() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 1000.0, 800.0, 8.0);
        assert_eq!(top_left, Tilt { rotate_x: 8.0, rotate_y: -8.0 });
        assert_eq!(top_left.transform(), "rotateY(-8deg) rotateX(8deg)");
        let bottom_right = Tilt::from_pointer(1000.0, 800.0, 1000.0, 800.0, 8.0);
        assert_eq!(bottom_right, Tilt { rotate_x: -8.0, rotate_y: 8.0 });
    }

    #[test]
    fn zero_viewport_gives_no_tilt() {
        let tilt = Tilt::from_pointer(10.0, 10.0, 0.0, 0.0, 8.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn frame_slot_coalesces_to_latest() {
        let mut slot = FrameSlot::default();
        let a = Tilt { rotate_x: 1.0, rotate_y: 1.0 };
        let b = Tilt { rotate_x: 2.0, rotate_y: -2.0 };
        assert!(slot.push(a));
        assert!(!slot.push(b));
        assert_eq!(slot.take(), Some(b));
        assert_eq!(slot.take(), None);
        assert!(slot.push(a));
    }
}
