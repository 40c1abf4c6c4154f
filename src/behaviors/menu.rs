use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::error::Result;

const ACTIVE_CLASS: &str = "active";
const CLOSE_TRIGGERS: &str = ".mobile-menu__link, .mobile-menu__cta";

/// Open/closed flag shared by the burger button, the panel and the
/// page scroll lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Value for the body's `overflow` style.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub struct MobileMenu {
    burger: Element,
    panel: Element,
    body: HtmlElement,
}

impl MobileMenu {
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            burger: document.get_element_by_id("burger")?,
            panel: document.get_element_by_id("mobile-menu")?,
            body: document.body()?,
        })
    }

    pub fn attach(self) -> Result<()> {
        let initial = MenuState::with_open(self.panel.class_list().contains(ACTIVE_CLASS));
        let menu = Rc::new(self);
        let state = Rc::new(Cell::new(initial));

        {
            let burger = menu.burger.clone();
            let menu = menu.clone();
            let state = state.clone();
            dom::listen(&burger, "click", move |_| {
                state.set(state.get().toggled());
                menu.render_or_warn(state.get());
            })?;
        }

        let triggers = dom::query_all(&menu.panel, CLOSE_TRIGGERS);
        let trigger_count = triggers.len();
        for trigger in triggers {
            let menu = menu.clone();
            let state = state.clone();
            dom::listen(&trigger, "click", move |_| {
                state.set(state.get().closed());
                menu.render_or_warn(state.get());
            })?;
        }

        info!("Mobile menu wired ({} close triggers)", trigger_count);
        Ok(())
    }

    fn render_or_warn(&self, state: MenuState) {
        if let Err(err) = self.render(state) {
            warn!("Mobile menu did not render: {}", err);
        }
    }

    fn render(&self, state: MenuState) -> Result<()> {
        dom::set_class(&self.panel, ACTIVE_CLASS, state.is_open())?;
        dom::set_class(&self.burger, ACTIVE_CLASS, state.is_open())?;
        self.body
            .style()
            .set_property("overflow", state.body_overflow())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MenuState;

    #[test]
    fn toggle_opens_and_locks_scroll() {
        let state = MenuState::default().toggled();
        assert!(state.is_open());
        assert_eq!(state.body_overflow(), "hidden");
    }

    #[test]
    fn close_is_idempotent() {
        let state = MenuState::default().toggled().closed().closed();
        assert!(!state.is_open());
        assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn double_toggle_restores() {
        let start = MenuState::default();
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn menu_open_in_markup_closes_on_first_toggle() {
        let state = MenuState::with_open(true).toggled();
        assert!(!state.is_open());
        assert_eq!(state.body_overflow(), "");
    }
}
