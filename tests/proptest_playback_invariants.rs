//! Property-based invariant tests for trace playback.
//!
//! 1. N advances from the start reach the end and disable the next control
//! 2. N retreats from the end reach the start and disable the previous control
//! 3. Advance/retreat are exact inverses on the page
//! 4. Control state always matches the cursor while running
//! 5. Stopping restores the full report from any position

use implicant_replay::*;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Retreat,
    Toggle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Advance),
        3 => Just(Op::Retreat),
        1 => Just(Op::Toggle),
    ]
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (
        proptest::option::weighted(0.9, "[0-3]{1,2}"),
        proptest::option::of("[0-3]{1,2}"),
        proptest::option::of("[0-3]{1,2}"),
    )
        .prop_map(|(combined, left, right)| {
            let mut step = Step::new();
            for (role, id) in [("combined", combined), ("left", left), ("right", right)] {
                if let Some(id) = id {
                    step = step.with_role(role, id);
                }
            }
            step
        })
}

fn trace_strategy() -> impl Strategy<Value = Trace> {
    proptest::collection::vec(step_strategy(), 1..12).prop_map(Trace::new)
}

fn running(trace: &Trace) -> (Player, ReportPage) {
    let config = PlayerConfig::default();
    let mut page = ReportPage::for_trace(trace, &config);
    let mut player = Player::new(trace.clone(), config, Translations::new());
    assert!(player.attach(&mut page));
    assert!(player.enter_running(&mut page));
    (player, page)
}

fn control_enabled(page: &ReportPage, id: &str) -> bool {
    page.control(id).is_some_and(|c| c.enabled)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn advancing_reaches_the_end(trace in trace_strategy()) {
        let (mut player, mut page) = running(&trace);

        for _ in 0..trace.len() {
            prop_assert!(player.advance(&mut page));
        }

        prop_assert_eq!(player.cursor(), trace.len());
        prop_assert!(!control_enabled(&page, "fpi-next"));
        prop_assert!(control_enabled(&page, "fpi-prev"));
        prop_assert!(!player.advance(&mut page));
    }

    #[test]
    fn retreating_returns_to_the_start(trace in trace_strategy()) {
        let (mut player, mut page) = running(&trace);
        let start = page.clone();

        for _ in 0..trace.len() {
            player.advance(&mut page);
        }
        for _ in 0..trace.len() {
            prop_assert!(player.retreat(&mut page));
        }

        prop_assert_eq!(player.cursor(), 0);
        prop_assert!(!control_enabled(&page, "fpi-prev"));
        prop_assert!(control_enabled(&page, "fpi-next"));
        prop_assert_eq!(page, start);
    }

    #[test]
    fn advance_and_retreat_are_inverse(trace in trace_strategy(), at in 0usize..12) {
        let (mut player, mut page) = running(&trace);
        let at = at.min(trace.len() - 1);
        for _ in 0..at {
            player.advance(&mut page);
        }

        let before = page.clone();
        prop_assert!(player.advance(&mut page));
        prop_assert!(player.retreat(&mut page));
        prop_assert_eq!(player.cursor(), at);
        prop_assert_eq!(&page, &before);

        prop_assert!(player.advance(&mut page));
        let after = page.clone();
        prop_assert!(player.retreat(&mut page));
        prop_assert!(player.advance(&mut page));
        prop_assert_eq!(player.cursor(), at + 1);
        prop_assert_eq!(&page, &after);
    }

    #[test]
    fn verify_trace_accepts_generated_traces(trace in trace_strategy()) {
        let result = verify_trace(ReportPage::for_trace, &trace, &PlayerConfig::default());
        prop_assert!(result.is_ok(), "verification failed: {:?}", result.err());
    }

    #[test]
    fn controls_track_cursor(
        trace in trace_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..60),
    ) {
        let (mut player, mut page) = running(&trace);

        for op in ops {
            match op {
                Op::Advance => { player.advance(&mut page); }
                Op::Retreat => { player.retreat(&mut page); }
                Op::Toggle => { player.toggle(&mut page); }
            }

            prop_assert!(player.cursor() <= trace.len());
            match player.mode() {
                Mode::Running => {
                    prop_assert_eq!(control_enabled(&page, "fpi-prev"), player.cursor() > 0);
                    prop_assert_eq!(control_enabled(&page, "fpi-next"), player.cursor() < trace.len());
                }
                Mode::Stopped => {
                    prop_assert!(page.control("fpi-prev").is_none());
                    prop_assert!(page.control("fpi-next").is_none());
                }
            }
        }
    }

    #[test]
    fn stopping_restores_report(
        trace in trace_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let config = PlayerConfig::default();
        let original = ReportPage::for_trace(&trace, &config);
        let (mut player, mut page) = running(&trace);

        for op in ops {
            match op {
                Op::Advance => { player.advance(&mut page); }
                Op::Retreat => { player.retreat(&mut page); }
                Op::Toggle => {}
            }
        }

        prop_assert!(player.exit_running(&mut page));
        for (id, element) in page.elements() {
            prop_assert_eq!(element.visibility, Visibility::Visible, "element {}", id);
            prop_assert_eq!(element.emphasis, Emphasis::Normal, "element {}", id);
        }
        prop_assert!(page.control("fpi-prev").is_none());
        prop_assert!(page.control("fpi-next").is_none());
        prop_assert_eq!(
            page.elements().count(),
            original.elements().count()
        );
    }
}
