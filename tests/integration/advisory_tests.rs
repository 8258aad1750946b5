use cricket_scoreboard::{Advisory, Severity};

use super::build_scoreboard_test;

#[test]
fn given_a_wicket_on_a_free_hit_should_show_not_out_then_clear_it() {
    let mut test = build_scoreboard_test().build();

    test.press_all(&["FH", "W"]);

    // 1. initial, 2. free hit, 3. voided wicket, 4. advisory expired
    assert_eq!(test.renders.count(), 4);
    test.renders.with_renders(|renders| {
        assert_eq!(
            renders[2].advisory,
            Some(Advisory::info("Wicket attempted on Free Hit: Not out."))
        );
        assert_eq!(renders[2].team_score, "1/0");
        assert_eq!(renders[2].overs, "0.0 Overs");
        assert!(!renders[2].free_hit);
        assert_eq!(renders[3].advisory, None);
    });
}

#[test]
fn given_advisories_never_expire_should_keep_the_latest_one() {
    let mut test = build_scoreboard_test()
        .given_advisories_never_expire()
        .build();

    test.press_all(&["FH", "LBW", "4"]);

    assert_eq!(test.renders.count(), 4);
    test.renders.with_latest(|props| {
        assert_eq!(props.team_score, "5/0");
        assert_eq!(
            props.advisory.as_ref().map(|advisory| advisory.text.as_str()),
            Some("LBW attempted on Free Hit: Not out.")
        );
    });
}

#[test]
fn given_a_closed_innings_should_flag_rejections_as_errors() {
    let mut test = build_scoreboard_test()
        .given_advisories_never_expire()
        .build();
    test.press_all(&["W"; 10]);
    test.renders.with_latest(|props| {
        assert_eq!(props.advisory, Some(Advisory::info("All out — innings closed.")));
    });

    test.press_all(&["6"]);

    test.renders.with_latest(|props| {
        let advisory = props.advisory.as_ref().unwrap();
        assert_eq!(advisory.severity, Severity::Error);
        assert_eq!(advisory.text, "Max 10 wickets reached — innings closed.");
        assert_eq!(props.team_score, "0/10");
    });
}

#[test]
fn given_a_reset_should_confirm_it() {
    let mut test = build_scoreboard_test()
        .given_advisories_never_expire()
        .build();

    test.press_all(&["2", "R"]);

    test.renders.with_latest(|props| {
        assert_eq!(props.advisory, Some(Advisory::info("Reset complete.")));
        assert_eq!(props.team_score, "0/0");
    });
}

#[test]
fn given_manual_switch_after_all_out_should_still_move_the_strike() {
    let mut test = build_scoreboard_test().build();
    test.press_all(&["W"; 10]);

    test.press_all(&["S"]);

    test.renders.with_latest(|props| {
        assert!(props.batters[1].on_strike);
        assert_eq!(props.advisory, None);
    });
}
