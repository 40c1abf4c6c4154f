use log::{debug, info, warn};
use web_sys::{Document, Window};

use crate::behaviors::{
    accordion::Faq,
    anchor::AnchorScroll,
    counter::Counters,
    form::CtaForm,
    header::HeaderScroll,
    menu::MobileMenu,
    parallax::Parallax,
    phone::PhoneMask,
    reveal::{Reveal, StepsLine},
};
use crate::config::Config;
use crate::error::Result;
use crate::styles;

/// Which behaviors ended up attached after [`PageController::mount`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MountReport {
    pub wired: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl MountReport {
    /// Records one behavior. `None` means its markup is absent.
    pub fn record<T>(&mut self, name: &'static str, found: Option<T>, attach: impl FnOnce(T) -> Result<()>) {
        let Some(behavior) = found else {
            debug!("{}: markup not present, skipping", name);
            self.skipped.push(name);
            return;
        };
        match attach(behavior) {
            Ok(()) => self.wired.push(name),
            Err(err) => {
                warn!("{}: failed to attach: {}", name, err);
                self.failed.push(name);
            }
        }
    }
}

/// Wires every page behavior once, each independently of the others.
pub struct PageController {
    window: Window,
    document: Document,
    config: Config,
}

impl PageController {
    pub fn new(window: Window, document: Document, config: Config) -> Self {
        Self {
            window,
            document,
            config,
        }
    }

    pub fn mount(self) -> MountReport {
        let Self {
            window,
            document,
            config,
        } = self;
        let mut report = MountReport::default();

        report.record(
            "header",
            HeaderScroll::find(&window, &document, config.header_scroll_threshold),
            HeaderScroll::attach,
        );
        report.record("mobile menu", MobileMenu::find(&document), MobileMenu::attach);
        report.record(
            "anchor scroll",
            AnchorScroll::find(&window, &document, config.anchor_extra_offset),
            AnchorScroll::attach,
        );
        report.record(
            "reveal",
            Reveal::find(&document, config.reveal_threshold, &config.reveal_root_margin),
            Reveal::attach,
        );
        report.record(
            "steps line",
            StepsLine::find(&document, config.steps_line_threshold),
            StepsLine::attach,
        );
        report.record(
            "counters",
            Counters::find(
                &window,
                &document,
                config.counter_threshold,
                config.counter_duration_ms,
            ),
            Counters::attach,
        );
        report.record("faq", Faq::find(&document), Faq::attach);
        report.record("cta form", CtaForm::find(&document, &config), CtaForm::attach);
        report.record("phone mask", PhoneMask::find(&document), PhoneMask::attach);
        report.record(
            "parallax",
            Parallax::find(
                &window,
                &document,
                config.parallax_min_viewport,
                config.parallax_max_degrees,
            ),
            Parallax::attach,
        );
        report.record("runtime styles", Some(&document), styles::inject);

        info!(
            "Page controller mounted: {} wired, {} skipped, {} failed",
            report.wired.len(),
            report.skipped.len(),
            report.failed.len()
        );
        report
    }
}
