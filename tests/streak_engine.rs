use chrono::{Duration, NaiveDate};
use checkin_bot::streak::{
    StreakTier, UserStreakSummary, credits_for_position, next_reward, replay, summarize,
};

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap() + Duration::days(n - 1)
}

fn run(days: &[i64]) -> Vec<NaiveDate> {
    days.iter().map(|&n| day(n)).collect()
}

#[test]
fn reward_table_boundaries() {
    assert_eq!(credits_for_position(1), 5);
    assert_eq!(credits_for_position(2), 10);
    assert_eq!(credits_for_position(6), 10);
    assert_eq!(credits_for_position(7), 15);
    assert_eq!(credits_for_position(19), 15);
    assert_eq!(credits_for_position(20), 20);
    assert_eq!(credits_for_position(365), 20);
}

#[test]
fn next_reward_previews_following_position() {
    assert_eq!(next_reward(0), 5);
    assert_eq!(next_reward(6), 15);
    assert_eq!(next_reward(19), 20);
}

#[test]
fn empty_history_is_zero() {
    assert_eq!(summarize(&[], day(1)), UserStreakSummary::default());
    assert!(replay(&[]).is_empty());
}

#[test]
fn duplicates_do_not_inflate() {
    let base = run(&[1, 2, 3]);
    let with_dupes = run(&[1, 1, 2, 3, 3, 3]);
    assert_eq!(summarize(&base, day(3)), summarize(&with_dupes, day(3)));
}

#[test]
fn order_does_not_matter() {
    let sorted = run(&[1, 2, 3, 5, 6, 7]);
    let shuffled = run(&[6, 1, 7, 3, 5, 2]);
    assert_eq!(summarize(&sorted, day(8)), summarize(&shuffled, day(8)));
}

#[test]
fn one_missed_day_resets_position() {
    let segments = replay(&run(&[1, 2, 4]));
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].credits, 15);
    assert_eq!(segments[1].credits, 5);
    assert_eq!(summarize(&run(&[1, 2, 4]), day(4)).total_credits, 20);
}

#[test]
fn twenty_day_streak_totals_270() {
    let days: Vec<i64> = (1..=20).collect();
    let summary = summarize(&run(&days), day(20));
    assert_eq!(summary.total_credits, 270);
    assert_eq!(summary.current_streak_length, 20);
}

#[test]
fn stale_streak_keeps_credits_but_is_inactive() {
    let summary = summarize(&run(&[1, 2, 3]), day(6));
    assert_eq!(summary.total_credits, 25);
    assert_eq!(summary.current_streak_length, 0);
}

#[test]
fn documented_worked_example() {
    let dates = run(&[1, 2, 3, 5, 6, 7]);
    let summary = summarize(&dates, day(8));
    assert_eq!(summary.total_credits, 50);
    assert_eq!(summary.current_streak_length, 3);

    let segments = replay(&dates);
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].start_date, segments[0].end_date), (day(1), day(3)));
    assert_eq!(segments[1].length, 3);
    assert_eq!(segments[1].credits, 25);
}

#[test]
fn streak_active_when_checked_in_today() {
    let summary = summarize(&run(&[5, 6, 7]), day(7));
    assert_eq!(summary.current_streak_length, 3);
}

#[test]
fn adding_a_day_never_lowers_total() {
    let base = run(&[1, 2, 3, 5, 6, 7, 10]);
    let before = summarize(&base, day(11)).total_credits;
    for extra in 0..=12 {
        let mut more = base.clone();
        more.push(day(extra));
        let after = summarize(&more, day(11)).total_credits;
        assert!(after >= before, "adding day {} lowered {} to {}", extra, before, after);
    }
}

#[test]
fn tiers_follow_reward_plateaus() {
    assert_eq!(StreakTier::for_length(0), StreakTier::Starting);
    assert_eq!(StreakTier::for_length(1), StreakTier::Starting);
    assert_eq!(StreakTier::for_length(2), StreakTier::Building { days_to_next: 5 });
    assert_eq!(StreakTier::for_length(7), StreakTier::Great { days_to_max: 13 });
    assert_eq!(StreakTier::for_length(20), StreakTier::Max);
    assert!(StreakTier::for_length(25).status_line().contains("20 credits daily"));
}
