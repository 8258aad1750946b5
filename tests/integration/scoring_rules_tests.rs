use cricket_scoreboard::{Delivery, MatchState, RunValue, Slot};

use super::build_scoreboard_test;

#[test]
fn given_a_fresh_innings_should_render_an_empty_scoreboard() {
    let test = build_scoreboard_test().build();

    assert_eq!(test.renders.count(), 1);
    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "0/0");
        assert_eq!(props.overs, "0.0 Overs");
        assert!(props.batter(Slot::A).on_strike);
        assert!(!props.free_hit);
        assert!(props.wicket_controls_enabled);
    });
}

#[test]
fn given_a_four_then_a_single_should_rotate_strike_to_b() {
    let mut test = build_scoreboard_test().build();

    test.press_all(&["4", "1"]);

    assert_eq!(test.renders.count(), 3);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].team_score, "4/0");
        assert_eq!(renders[1].overs, "0.1 Overs");
        assert!(renders[1].batter(Slot::A).on_strike);

        assert_eq!(renders[2].team_score, "5/0");
        assert_eq!(renders[2].overs, "0.2 Overs");
        assert!(renders[2].batter(Slot::B).on_strike);
        assert_eq!(renders[2].batter(Slot::A).runs, 5);
    });
}

#[test]
fn given_a_wide_and_a_no_ball_should_not_advance_the_over() {
    let mut test = build_scoreboard_test().build();

    test.press_all(&["WD", "NB"]);

    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "2/0");
        assert_eq!(props.overs, "0.0 Overs");
        assert_eq!(props.batter(Slot::A).runs, 1);
        assert!(props.batter(Slot::A).on_strike);
    });
}

#[test]
fn given_six_legal_balls_should_complete_an_over() {
    let mut test = build_scoreboard_test().build();

    test.press_all(&["2", "B", "LB", "6", "WD", "3", "4"]);

    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "18/0");
        assert_eq!(props.overs, "1.0 Overs");
        assert_eq!(props.batter(Slot::A).runs, 11);
        assert_eq!(props.batter(Slot::B).runs, 4);
        assert!(props.batter(Slot::B).on_strike);
    });
}

#[test]
fn given_a_free_hit_should_show_the_indicator_until_spent() {
    let mut test = build_scoreboard_test().build();

    test.press_all(&["FH"]);
    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "1/0");
        assert!(props.free_hit);
    });

    test.press_all(&["1"]);
    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "2/0");
        assert_eq!(props.overs, "0.0 Overs");
        assert!(!props.free_hit);
        assert!(props.batter(Slot::B).on_strike);
    });
}

#[test]
fn given_b_is_dismissed_should_show_b_out_and_give_a_the_strike() {
    let mut test = build_scoreboard_test()
        .given_batter_names("Mandhana", "Verma")
        .build();

    test.press_all(&["1", "W"]);

    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "1/1");
        assert_eq!(props.overs, "0.2 Overs");
        let b = props.batter(Slot::B);
        assert_eq!(b.name, "Verma");
        assert_eq!(b.status, "Out");
        assert!(!b.on_strike);
        let a = props.batter(Slot::A);
        assert_eq!(a.name, "Mandhana");
        assert_eq!(a.runs, 1);
        assert!(a.on_strike);
    });
}

#[test]
fn given_ten_wickets_should_disable_wicket_controls_and_freeze_the_score() {
    let mut test = build_scoreboard_test().build();
    test.press_all(&["4"; 3]);
    test.press_all(&["W"; 10]);
    let closed = *test.runtime.model().engine.state();
    assert!(closed.is_innings_closed());

    test.press_all(&["W", "LBW", "6", "WD", "NB", "FH", "B", "LB"]);

    assert_eq!(*test.runtime.model().engine.state(), closed);
    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "12/10");
        assert_eq!(props.overs, "2.1 Overs");
        assert!(!props.wicket_controls_enabled);
    });
}

#[test]
fn given_any_history_when_reset_should_return_to_the_initial_state() {
    let mut test = build_scoreboard_test().build();
    test.press_all(&["6", "3", "FH", "NB", "LBW", "W", "S"]);

    test.press_all(&["R"]);

    assert_eq!(*test.runtime.model().engine.state(), MatchState::new());
    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "0/0");
        assert_eq!(props.overs, "0.0 Overs");
    });
}

#[test]
fn given_emitters_on_other_threads_should_apply_every_delivery() {
    let mut test = build_scoreboard_test().build();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let emitter = test.runtime.emitter();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    emitter.emit(cricket_scoreboard::ScoreboardEvent::Delivery(
                        Delivery::Run(RunValue::TWO),
                    ));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(test.runtime.process_events(), 100);

    let state = test.runtime.model().engine.state();
    assert_eq!(state.team_runs, 200);
    assert_eq!(state.legal_balls, 100);
    assert_eq!(test.renders.count(), 101);
}
