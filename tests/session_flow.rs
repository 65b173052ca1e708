use chrono::{TimeZone, Utc};
use prayer_deck::app::{Clock, ManualClock};
use prayer_deck::domain::{Category, Submitter};
use prayer_deck::gesture::{Animation, Direction, StackVisuals};
use prayer_deck::storage::{DeckSource, SampleDeck};
use prayer_deck::{
    handle_event, Action, Event, PrayerItem, SessionController, SessionPhase, SessionSummary,
    SwipeMapper,
};

fn start() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap())
}

fn sample_items() -> Vec<PrayerItem> {
    SampleDeck.load().unwrap().iter().cloned().collect()
}

fn started(clock: &ManualClock) -> SessionController<&ManualClock> {
    let mut c = SessionController::with_clock(SwipeMapper::for_width(400.0).unwrap(), clock);
    handle_event(&mut c, &Event::StartSession { items: sample_items() }).unwrap();
    c
}

fn swipe(c: &mut SessionController<&ManualClock>, dx: f64) -> Vec<Action> {
    handle_event(c, &Event::DragStart).unwrap();
    handle_event(c, &Event::DragUpdate { dx, dy: 4.0 }).unwrap();
    handle_event(c, &Event::DragEnd { dx, velocity_x: 0.0 }).unwrap().1
}

#[test]
fn start_announces_prayer_and_rests_the_stack() {
    let clock = start();
    let mut c = SessionController::with_clock(SwipeMapper::for_width(400.0).unwrap(), &clock);
    let (changed, actions) =
        handle_event(&mut c, &Event::StartSession { items: sample_items() }).unwrap();

    assert!(changed);
    assert_eq!(actions, vec![Action::PrayerStarted, Action::Render(StackVisuals::REST)]);
    assert_eq!(c.phase(), Some(SessionPhase::Active(0)));
}

#[test]
fn every_commit_advances_by_one_until_complete() {
    let clock = start();
    let mut c = started(&clock);

    for expected in 1..6 {
        let actions = swipe(&mut c, 200.0);
        assert_eq!(actions.last(), Some(&Action::Advanced { cursor: expected }));

        let state = c.session().unwrap();
        assert_eq!(state.cursor(), expected);
        assert_eq!(state.prayed_count(), state.cursor());

        handle_event(&mut c, &Event::TransitionSettled).unwrap();
        assert_eq!(c.phase(), Some(SessionPhase::Active(expected)));
    }

    clock.advance_secs(150);
    let actions = swipe(&mut c, -200.0);
    assert_eq!(
        actions[1..],
        [
            Action::CardDismissed {
                item_id: 6,
                direction: Direction::Left
            },
            Action::SessionComplete(SessionSummary {
                prayed_count: 6,
                duration_seconds: 150
            }),
            Action::PrayerEnded,
        ]
    );
    assert_eq!(c.phase(), Some(SessionPhase::Complete));
    assert_eq!(c.session().unwrap().prayed_count(), 6);
}

#[test]
fn cancel_snaps_back_without_moving_the_cursor() {
    let clock = start();
    let mut c = started(&clock);

    let (_, actions) =
        handle_event(&mut c, &Event::DragEnd { dx: 50.0, velocity_x: 800.0 }).unwrap();
    assert_eq!(
        actions,
        vec![Action::Animate {
            targets: StackVisuals::REST,
            animation: Animation::SNAP_BACK
        }]
    );
    assert_eq!(c.phase(), Some(SessionPhase::Active(0)));
}

#[test]
fn fast_short_fling_commits() {
    let clock = start();
    let mut c = started(&clock);

    let (_, actions) =
        handle_event(&mut c, &Event::DragEnd { dx: 30.0, velocity_x: 1500.0 }).unwrap();
    assert!(matches!(
        actions[1],
        Action::CardDismissed {
            item_id: 1,
            direction: Direction::Right
        }
    ));
    assert_eq!(c.session().unwrap().cursor(), 1);
}

#[test]
fn guard_blocks_gestures_until_settled() {
    let clock = start();
    let mut c = started(&clock);
    swipe(&mut c, 200.0);

    for event in [
        Event::DragStart,
        Event::DragUpdate { dx: 300.0, dy: 0.0 },
        Event::DragEnd { dx: 300.0, velocity_x: 5000.0 },
    ] {
        let (changed, actions) = handle_event(&mut c, &event).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }
    assert_eq!(c.phase(), Some(SessionPhase::Transitioning(1)));

    let (_, actions) = handle_event(&mut c, &Event::TransitionSettled).unwrap();
    assert_eq!(actions, vec![Action::Render(StackVisuals::REST)]);

    // A second settle has nothing to clear.
    let (changed, _) = handle_event(&mut c, &Event::TransitionSettled).unwrap();
    assert!(!changed);

    swipe(&mut c, 200.0);
    assert_eq!(c.session().unwrap().cursor(), 2);
}

#[test]
fn ending_early_reports_cards_prayed_so_far() {
    let clock = start();
    let mut c = started(&clock);
    swipe(&mut c, 200.0);
    handle_event(&mut c, &Event::TransitionSettled).unwrap();
    swipe(&mut c, -200.0);
    clock.advance_secs(61);

    let (_, actions) = handle_event(&mut c, &Event::EndSessionEarly).unwrap();
    let summary = SessionSummary {
        prayed_count: 2,
        duration_seconds: 61,
    };
    assert_eq!(actions, vec![Action::SessionEndedEarly(summary), Action::PrayerEnded]);
    assert_eq!(summary.duration_minutes(), 1);
    assert_eq!(c.phase(), Some(SessionPhase::EndedEarly));

    // Terminal sessions ignore everything but a new start.
    assert!(handle_event(&mut c, &Event::EndSessionEarly).unwrap().1.is_empty());
    assert!(swipe(&mut c, 200.0).is_empty());
}

#[test]
fn single_card_deck_completes_on_first_commit() {
    let clock = start();
    let mut c = SessionController::with_clock(SwipeMapper::for_width(400.0).unwrap(), &clock);
    let item = PrayerItem::new(
        42,
        Category::Other,
        "Peace",
        "For peace in our town.",
        Submitter::Anonymous,
    );
    handle_event(&mut c, &Event::StartSession { items: vec![item] }).unwrap();

    let actions = swipe(&mut c, 121.0);
    assert!(actions.contains(&Action::SessionComplete(SessionSummary {
        prayed_count: 1,
        duration_seconds: 0
    })));
    assert_eq!(c.phase(), Some(SessionPhase::Complete));
}

#[test]
fn restarting_replaces_a_finished_session() {
    let clock = start();
    let mut c = started(&clock);
    handle_event(&mut c, &Event::EndSessionEarly).unwrap();
    clock.advance_secs(30);

    handle_event(&mut c, &Event::StartSession { items: sample_items() }).unwrap();
    let state = c.session().unwrap();
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.started_at(), clock.now());
}

#[test]
fn view_model_tracks_progress() {
    let clock = start();
    let mut c = started(&clock);
    swipe(&mut c, 200.0);

    let vm = c.view_model().unwrap();
    assert_eq!(vm.progress.prayed, 1);
    assert_eq!(vm.progress.remaining, 5);
    assert!(!vm.interactive);
    assert_eq!(vm.cards.len(), 3);
}
