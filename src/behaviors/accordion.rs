use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::error::Result;

/// Which FAQ entry is expanded. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Starts from whatever entry the markup already shows expanded.
    pub fn with_open(open: Option<usize>) -> Self {
        Self { open }
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }

    /// Clicking the open entry collapses it; clicking any other entry
    /// expands it and collapses the rest.
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}

struct Entry {
    item: Element,
    question: Element,
    answer: HtmlElement,
}

pub struct Faq {
    entries: Vec<Entry>,
    initially_open: Option<usize>,
}

impl Faq {
    pub fn find(document: &Document) -> Option<Self> {
        let entries: Vec<Entry> = dom::query_all_in(document, ".faq__item")
            .into_iter()
            .filter_map(|item| {
                let question = item.query_selector(".faq__question").ok().flatten();
                let answer = item
                    .query_selector(".faq__answer")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                match (question, answer) {
                    (Some(question), Some(answer)) => Some(Entry {
                        item,
                        question,
                        answer,
                    }),
                    _ => {
                        debug!("Skipping FAQ item without question or answer");
                        None
                    }
                }
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        let initially_open = entries
            .iter()
            .position(|entry| entry.item.class_list().contains("active"));
        Some(Self {
            entries,
            initially_open,
        })
    }

    pub fn attach(self) -> Result<()> {
        let state = Rc::new(RefCell::new(Accordion::with_open(self.initially_open)));
        let faq = Rc::new(self);

        for (index, entry) in faq.entries.iter().enumerate() {
            let faq = faq.clone();
            let state = state.clone();
            dom::listen(&entry.question, "click", move |_| {
                let open = state.borrow_mut().activate(index);
                if let Err(err) = faq.render(open) {
                    warn!("FAQ entry {} did not render: {}", index, err);
                }
            })?;
        }

        info!("FAQ accordion wired with {} entries", faq.entries.len());
        Ok(())
    }

    fn render(&self, open: Option<usize>) -> Result<()> {
        for entry in &self.entries {
            dom::set_class(&entry.item, "active", false)?;
            entry.answer.style().set_property("max-height", "0")?;
            entry.question.set_attribute("aria-expanded", "false")?;
        }

        if let Some(entry) = open.and_then(|i| self.entries.get(i)) {
            dom::set_class(&entry.item, "active", true)?;
            let height = format!("{}px", entry.answer.scroll_height());
            entry.answer.style().set_property("max-height", &height)?;
            entry.question.set_attribute("aria-expanded", "true")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Accordion;

    #[test]
    fn opening_one_closes_the_other() {
        let mut faq = Accordion::default();
        assert_eq!(faq.activate(0), Some(0));
        assert_eq!(faq.activate(2), Some(2));
        assert_eq!(faq.open_entry(), Some(2));
    }

    #[test]
    fn reclicking_open_entry_collapses_it() {
        let mut faq = Accordion::default();
        faq.activate(1);
        assert_eq!(faq.activate(1), None);
        assert_eq!(faq.activate(1), Some(1));
    }

    #[test]
    fn entry_open_in_markup_collapses_on_first_click() {
        let mut faq = Accordion::with_open(Some(2));
        assert_eq!(faq.activate(2), None);
        assert_eq!(faq.open_entry(), None);
    }

    #[test]
    fn entry_open_in_markup_closes_when_another_opens() {
        let mut faq = Accordion::with_open(Some(0));
        assert_eq!(faq.activate(3), Some(3));
    }
}
