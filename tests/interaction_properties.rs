use landing_interactions::behaviors::accordion::Accordion;
use landing_interactions::behaviors::counter::{value_at, CountUp};
use landing_interactions::behaviors::form::{SubmitCycle, SubmitPhase};
use landing_interactions::behaviors::header::is_scrolled;
use landing_interactions::behaviors::menu::MenuState;
use landing_interactions::behaviors::parallax::Tilt;
use landing_interactions::behaviors::phone::format_phone;
use proptest::collection::vec;
use proptest::prelude::*;

const HEADER_THRESHOLD: f64 = 50.0;

#[derive(Clone, Debug)]
enum MenuAction {
    Toggle,
    Close,
}

fn menu_action_strategy() -> impl Strategy<Value = MenuAction> {
    prop_oneof![Just(MenuAction::Toggle), Just(MenuAction::Close)]
}

#[test]
fn header_threshold_boundary() {
    assert!(!is_scrolled(50.0, HEADER_THRESHOLD));
    assert!(is_scrolled(51.0, HEADER_THRESHOLD));
}

#[test]
fn phone_mask_examples() {
    assert_eq!(format_phone("79991234567"), "+7 (999) 123-45-67");
    assert_eq!(format_phone("89991234567"), "+7 (999) 123-45-67");
    assert_eq!(format_phone("123"), "+123");
}

#[test]
fn submit_cycle_timeline() {
    let mut cycle = SubmitCycle::new(1500, 3000);
    let mut clock = 0u32;

    let step = cycle.submit();
    assert!(step.phase.disabled());

    clock += step.wait_ms.unwrap();
    let step = cycle.elapse();
    assert_eq!(clock, 1500);
    assert_eq!(step.phase, SubmitPhase::Succeeded);

    clock += step.wait_ms.unwrap();
    let step = cycle.elapse();
    assert_eq!(clock, 4500);
    assert!(!step.phase.disabled());
    assert!(step.reset_form);
}

proptest! {
    #[test]
    fn header_flag_tracks_threshold(offset in 0.0f64..10_000.0) {
        prop_assert_eq!(is_scrolled(offset, HEADER_THRESHOLD), offset > HEADER_THRESHOLD);
    }

    #[test]
    fn even_number_of_toggles_restores_menu(pairs in 0usize..20) {
        let mut state = MenuState::default();
        for _ in 0..pairs * 2 {
            state = state.toggled();
        }
        prop_assert_eq!(state, MenuState::default());
        prop_assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn close_always_unlocks_scroll(actions in vec(menu_action_strategy(), 0..30)) {
        let mut state = MenuState::default();
        for action in &actions {
            state = match action {
                MenuAction::Toggle => state.toggled(),
                MenuAction::Close => state.closed(),
            };
            prop_assert_eq!(state.body_overflow() == "hidden", state.is_open());
        }
        prop_assert!(!state.closed().is_open());
    }

    #[test]
    fn accordion_has_at_most_one_open(clicks in vec(0usize..6, 1..40)) {
        let mut faq = Accordion::default();
        for &index in &clicks {
            let before = faq.open_entry();
            let after = faq.activate(index);
            if before == Some(index) {
                prop_assert_eq!(after, None);
            } else {
                prop_assert_eq!(after, Some(index));
            }
        }
    }

    #[test]
    fn counter_hits_endpoints_and_never_decreases(
        target in 0i64..1_000_000,
        mut frames in vec(0.0f64..2_500.0, 1..60),
    ) {
        frames.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(value_at(target, 0.0), 0);
        prop_assert_eq!(value_at(target, 1.0), target);

        let mut count = CountUp::new(target, 2000.0);
        let mut last = count.sample(0.0).value;
        prop_assert_eq!(last, 0);
        for now in frames {
            let frame = count.sample(now);
            prop_assert!(frame.value >= last);
            prop_assert!(frame.value <= target);
            if now >= 2000.0 {
                prop_assert!(frame.finished);
                prop_assert_eq!(frame.value, target);
            }
            last = frame.value;
        }
    }

    #[test]
    fn phone_mask_shape(raw in "[0-9 ()+-]{0,20}") {
        let formatted = format_phone(&raw);
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            prop_assert_eq!(formatted, "");
        } else {
            prop_assert!(formatted.starts_with('+'));
            if digits.starts_with('7') || digits.starts_with('8') {
                prop_assert!(formatted.starts_with("+7"));
                prop_assert!(formatted.len() <= "+7 (999) 123-45-67".len());
                prop_assert_eq!(format_phone(&formatted), formatted.clone());
            } else {
                prop_assert_eq!(formatted, format!("+{}", digits));
            }
        }
    }

    #[test]
    fn tilt_stays_within_bounds(
        x in -100.0f64..3000.0,
        y in -100.0f64..3000.0,
        width in 769.0f64..2560.0,
        height in 1.0f64..1600.0,
    ) {
        let tilt = Tilt::from_pointer(x, y, width, height, 8.0);
        prop_assert!(tilt.rotate_x.abs() <= 8.0);
        prop_assert!(tilt.rotate_y.abs() <= 8.0);
    }
}
