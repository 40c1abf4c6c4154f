//! Mock submission feedback on the call-to-action form.
//!
//! Nothing is sent anywhere. The submit button walks
//! `Idle -> Submitting -> Succeeded -> Idle` on timers, with a single
//! pending timer at any moment.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

use crate::config::Config;
use crate::dom;
use crate::error::Result;

const SPINNER_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none" class="spin"><circle cx="10" cy="10" r="8" stroke="currentColor" stroke-width="2" stroke-dasharray="40" stroke-dashoffset="10" stroke-linecap="round"/></svg>"#;
const CHECK_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none"><path d="M4 10L8 14L16 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
}

impl SubmitPhase {
    pub fn disabled(self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }
}

/// Result of a transition: the phase to show and how long until the
/// next timer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub phase: SubmitPhase,
    pub wait_ms: Option<u32>,
    /// Form fields are cleared on this step.
    pub reset_form: bool,
}

#[derive(Debug, Clone)]
pub struct SubmitCycle {
    phase: SubmitPhase,
    sending_ms: u32,
    success_ms: u32,
}

impl SubmitCycle {
    pub fn new(sending_ms: u32, success_ms: u32) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            sending_ms,
            success_ms,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Starts (or restarts) the cycle. The caller drops any pending timer.
    pub fn submit(&mut self) -> Step {
        self.phase = SubmitPhase::Submitting;
        Step {
            phase: self.phase,
            wait_ms: Some(self.sending_ms),
            reset_form: false,
        }
    }

    /// The pending timer fired.
    pub fn elapse(&mut self) -> Step {
        let (phase, wait_ms, reset_form) = match self.phase {
            SubmitPhase::Submitting => (SubmitPhase::Succeeded, Some(self.success_ms), false),
            SubmitPhase::Succeeded => (SubmitPhase::Idle, None, true),
            SubmitPhase::Idle => (SubmitPhase::Idle, None, false),
        };
        self.phase = phase;
        Step {
            phase,
            wait_ms,
            reset_form,
        }
    }
}

struct Labels {
    sending: String,
    success: String,
    success_background: String,
}

struct FormState {
    cycle: SubmitCycle,
    idle_markup: String,
    timer: Option<Timeout>,
}

pub struct CtaForm {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    labels: Labels,
    state: RefCell<FormState>,
}

impl CtaForm {
    pub fn find(document: &Document, config: &Config) -> Option<Self> {
        let form: HtmlFormElement = dom::by_id(document, "cta-form")?;
        let Some(button) = dom::by_id::<HtmlButtonElement>(document, "form-submit") else {
            debug!("#cta-form has no #form-submit button");
            return None;
        };
        Some(Self {
            form,
            button,
            labels: Labels {
                sending: config.sending_label.clone(),
                success: config.success_label.clone(),
                success_background: config.success_background.clone(),
            },
            state: RefCell::new(FormState {
                cycle: SubmitCycle::new(config.submit_sending_ms, config.submit_success_ms),
                idle_markup: String::new(),
                timer: None,
            }),
        })
    }

    pub fn attach(self) -> Result<()> {
        let form = self.form.clone();
        let this = Rc::new(self);
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            if let Err(err) = CtaForm::submit(&this) {
                warn!("Submit feedback failed: {}", err);
            }
        })?;
        info!("CTA form submit feedback wired");
        Ok(())
    }

    fn submit(this: &Rc<Self>) -> Result<()> {
        let step = {
            let mut state = this.state.borrow_mut();
            if state.cycle.phase() == SubmitPhase::Idle {
                state.idle_markup = this.button.inner_html();
            } else {
                debug!("Submit while {:?}, restarting cycle", state.cycle.phase());
            }
            // Dropping the old handle cancels it.
            state.timer = None;
            state.cycle.submit()
        };
        CtaForm::apply(this, step)
    }

    fn on_timer(this: &Rc<Self>) -> Result<()> {
        let step = {
            let mut state = this.state.borrow_mut();
            state.timer = None;
            state.cycle.elapse()
        };
        CtaForm::apply(this, step)
    }

    fn apply(this: &Rc<Self>, step: Step) -> Result<()> {
        this.render(step)?;
        if let Some(wait) = step.wait_ms {
            let next = this.clone();
            let timeout = Timeout::new(wait, move || {
                if let Err(err) = CtaForm::on_timer(&next) {
                    warn!("Submit feedback step failed: {}", err);
                }
            });
            this.state.borrow_mut().timer = Some(timeout);
        }
        Ok(())
    }

    fn render(&self, step: Step) -> Result<()> {
        let style = self.button.style();
        match step.phase {
            SubmitPhase::Submitting => {
                self.button
                    .set_inner_html(&format!("{} {}", SPINNER_ICON, self.labels.sending));
            }
            SubmitPhase::Succeeded => {
                self.button
                    .set_inner_html(&format!("{} {}", CHECK_ICON, self.labels.success));
                style.set_property("background", &self.labels.success_background)?;
            }
            SubmitPhase::Idle => {
                let markup = self.state.borrow().idle_markup.clone();
                self.button.set_inner_html(&markup);
                style.remove_property("background")?;
            }
        }
        self.button.set_disabled(step.phase.disabled());
        if step.reset_form {
            self.form.reset();
        }
        Ok(())
    }
}
