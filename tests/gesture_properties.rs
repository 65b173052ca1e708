use prayer_deck::gesture::{
    interpolate, Direction, DragSample, GestureDecision, PreviewVisuals, StackVisuals,
};
use prayer_deck::SwipeMapper;
use proptest::prelude::*;

const WIDTH: f64 = 400.0;

fn mapper() -> SwipeMapper {
    SwipeMapper::for_width(WIDTH).unwrap()
}

fn within(value: f64, lo: f64, hi: f64) -> bool {
    value >= lo - 1e-9 && value <= hi + 1e-9
}

proptest! {
    #[test]
    fn decision_follows_threshold_or_velocity(dx in -1000.0f64..1000.0, vx in -3000.0f64..3000.0) {
        let decision = mapper().decide(&DragSample::new(dx, 0.0, vx));
        let commits = dx.abs() > 0.3 * WIDTH || vx.abs() > 1200.0;

        if commits {
            let direction = if dx > 0.0 { Direction::Right } else { Direction::Left };
            prop_assert_eq!(decision, GestureDecision::Commit(direction));
        } else {
            prop_assert_eq!(decision, GestureDecision::Cancel);
        }
    }

    #[test]
    fn interpolation_is_monotonic_and_clamped(a in -2000.0f64..2000.0, b in -2000.0f64..2000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let input = [-WIDTH, 0.0, WIDTH];
        let output = [-30.0, 0.0, 30.0];

        let y_lo = interpolate(lo, &input, &output);
        let y_hi = interpolate(hi, &input, &output);
        prop_assert!(y_lo <= y_hi);
        prop_assert!((-30.0..=30.0).contains(&y_lo));
        prop_assert!((-30.0..=30.0).contains(&y_hi));
    }

    #[test]
    fn rotation_saturates_beyond_the_screen_edge(extra in 0.0f64..5000.0) {
        let m = mapper();
        prop_assert_eq!(m.rotation(WIDTH + extra), 30.0);
        prop_assert_eq!(m.rotation(-WIDTH - extra), -30.0);
    }

    #[test]
    fn previews_stay_within_their_ranks(dx in -5000.0f64..5000.0, dy in -500.0f64..500.0) {
        let v = mapper().drag_visuals(dx, dy);

        prop_assert!(within(v.next.scale, 0.94, 1.0));
        prop_assert!(within(v.next.opacity, 0.7, 1.0));
        prop_assert!(within(v.third.scale, 0.88, 0.94));
        prop_assert!(within(v.third.opacity, 0.5, 0.7));
        prop_assert!(within(v.active.opacity, 0.6, 1.0));
        prop_assert_eq!(v.active.translate_x, dx);
        prop_assert!((v.active.translate_y - dy * 0.1).abs() < 1e-9);
    }

    #[test]
    fn past_threshold_previews_sit_at_the_upper_bound(extra in 0.0f64..3000.0) {
        let v = mapper().drag_visuals(0.3 * WIDTH + extra, 0.0);
        prop_assert_eq!(v.next, PreviewVisuals::FRONT);
        prop_assert_eq!(v.third, PreviewVisuals::NEXT_REST);
        prop_assert_eq!(v.active.opacity, 0.6);
    }
}

#[test]
fn resting_drag_matches_the_resting_stack() {
    let v = mapper().drag_visuals(0.0, 0.0);
    assert_eq!(v.active.rotation_deg, 0.0);
    assert_eq!(v.active.opacity, 1.0);
    assert_eq!(v.next.scale, 0.94);
    assert_eq!(v.third.scale, 0.88);
    assert_eq!(v.next, StackVisuals::REST.next);
    assert_eq!(v.third, StackVisuals::REST.third);
}

#[test]
fn worked_examples() {
    let m = mapper();
    assert_eq!(m.decide(&DragSample::new(50.0, 0.0, 800.0)), GestureDecision::Cancel);
    assert_eq!(
        m.decide(&DragSample::new(-130.0, 0.0, 0.0)),
        GestureDecision::Commit(Direction::Left)
    );
}
