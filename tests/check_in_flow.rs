//! Exercises the command logic against the in-memory store and an unreachable one.
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use checkin_bot::commands::blast::logic::{CheckInOutcome, CheckInReceipt, perform_check_in};
use checkin_bot::commands::credit::logic::credit_report;
use checkin_bot::commands::debug::logic::{inspect, may_inspect};
use checkin_bot::commands::debug::ui::{display_raw, render_report};
use checkin_bot::database::{CheckInStore, MemoryCheckInStore, RawCheckIn, RecordOutcome};
use checkin_bot::error::CheckInError;
use checkin_bot::streak::StreakTier;
use serenity::async_trait;
use serenity::model::id::UserId;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, day, hour, 0, 0).unwrap()
}

const USER: u64 = 4242;

#[tokio::test]
async fn first_check_in_earns_five() {
    let store = MemoryCheckInStore::new();
    let outcome = perform_check_in(&store, UserId::new(USER), "alice", at(1, 9))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        CheckInOutcome::Recorded(CheckInReceipt {
            credits_earned: 5,
            streak_length: 1,
            total_credits: 5,
        })
    );
}

#[tokio::test]
async fn second_check_in_same_day_is_rejected_quietly() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    perform_check_in(&store, user, "alice", at(1, 9)).await.unwrap();
    let again = perform_check_in(&store, user, "alice", at(1, 23)).await.unwrap();
    assert_eq!(again, CheckInOutcome::AlreadyCheckedIn);
    assert_eq!(store.fetch_records(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn consecutive_days_grow_the_streak() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    let mut last = None;
    for d in 1..=7 {
        last = Some(perform_check_in(&store, user, "alice", at(d, 12)).await.unwrap());
    }
    // 5 + 10*5 + 15
    assert_eq!(
        last,
        Some(CheckInOutcome::Recorded(CheckInReceipt {
            credits_earned: 15,
            streak_length: 7,
            total_credits: 70,
        }))
    );
}

#[tokio::test]
async fn gap_restarts_at_five_but_keeps_total() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    for d in [1, 2, 3] {
        perform_check_in(&store, user, "alice", at(d, 12)).await.unwrap();
    }
    let outcome = perform_check_in(&store, user, "alice", at(5, 12)).await.unwrap();
    assert_eq!(
        outcome,
        CheckInOutcome::Recorded(CheckInReceipt {
            credits_earned: 5,
            streak_length: 1,
            total_credits: 30,
        })
    );
}

#[tokio::test]
async fn concurrent_same_day_check_ins_record_once() {
    let store = Arc::new(MemoryCheckInStore::new());
    let user = UserId::new(USER);
    let mut handles = Vec::new();
    for hour in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            perform_check_in(store.as_ref(), user, "alice", at(3, hour))
                .await
                .unwrap()
        }));
    }
    let mut recorded = 0;
    for handle in handles {
        if matches!(handle.await.unwrap(), CheckInOutcome::Recorded(_)) {
            recorded += 1;
        }
    }
    assert_eq!(recorded, 1);
    assert_eq!(store.fetch_records(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn store_reports_duplicate_day_directly() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    assert_eq!(
        store.record_check_in(user, "alice", at(2, 1)).await.unwrap(),
        RecordOutcome::Recorded
    );
    assert_eq!(
        store.record_check_in(user, "alice", at(2, 22)).await.unwrap(),
        RecordOutcome::AlreadyRecorded
    );
    assert!(store.has_checked_in(user, at(2, 0).date_naive()).await.unwrap());
    assert!(!store.has_checked_in(user, at(3, 0).date_naive()).await.unwrap());
}

#[tokio::test]
async fn credit_report_for_new_user() {
    let store = MemoryCheckInStore::new();
    let report = credit_report(&store, UserId::new(USER), at(1, 0).date_naive())
        .await
        .unwrap();
    assert!(!report.has_history);
    assert_eq!(report.summary.total_credits, 0);
    assert_eq!(report.next_reward, 5);
    assert_eq!(report.tier, StreakTier::Starting);
}

#[tokio::test]
async fn credit_report_matches_worked_example() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    for d in [1, 2, 3, 5, 6, 7] {
        store
            .import_raw(user, "alice", &at(d, 10).to_rfc3339())
            .await;
    }
    let report = credit_report(&store, user, at(8, 0).date_naive()).await.unwrap();
    assert!(report.has_history);
    assert_eq!(report.summary.total_credits, 50);
    assert_eq!(report.summary.current_streak_length, 3);
    assert_eq!(report.next_reward, 10);
    assert_eq!(report.tier, StreakTier::Building { days_to_next: 4 });
}

#[tokio::test]
async fn malformed_records_are_skipped_not_fatal() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    store.import_raw(user, "alice", "2025-08-01T10:00:00Z").await;
    store.import_raw(user, "alice", "not a timestamp").await;
    store.import_raw(user, "alice", "2025-08-02 10:00:00.5+00").await;

    let dates = store.fetch_all_dates(user).await.unwrap();
    assert_eq!(dates.len(), 2);

    let report = credit_report(&store, user, at(2, 0).date_naive()).await.unwrap();
    assert_eq!(report.summary.total_credits, 15);
    assert_eq!(report.summary.current_streak_length, 2);
}

#[tokio::test]
async fn all_malformed_looks_like_no_history() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    store.import_raw(user, "alice", "garbage").await;
    let report = credit_report(&store, user, at(2, 0).date_naive()).await.unwrap();
    assert!(!report.has_history);
    assert_eq!(report.summary.total_credits, 0);
}

#[tokio::test]
async fn inspection_lists_records_and_segments() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    let start = at(1, 8);
    for offset in [0, 1, 3] {
        store
            .import_raw(user, "alice", &(start + Duration::days(offset)).to_rfc3339())
            .await;
    }
    store.import_raw(user, "alice", "???").await;

    let inspection = inspect(&store, user, at(5, 0).date_naive()).await.unwrap();
    assert_eq!(inspection.records.len(), 4);
    assert_eq!(inspection.malformed_count(), 1);
    assert_eq!(inspection.segments.len(), 2);
    assert_eq!(inspection.summary.total_credits, 20);
    assert_eq!(inspection.summary.current_streak_length, 1);

    let text = render_report("alice", user, &inspection);
    assert!(text.contains("Total records: 4 (1 malformed)"));
    assert!(text.contains("??? -> unparsable, skipped"));
    assert!(text.contains("Total Credits: 20"));
}

#[tokio::test]
async fn inspection_of_empty_history() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    let inspection = inspect(&store, user, at(5, 0).date_naive()).await.unwrap();
    assert!(render_report("bob", user, &inspection).contains("No records found!"));
}

#[test]
fn only_admins_inspect_others() {
    let me = UserId::new(1);
    let other = UserId::new(2);
    assert!(may_inspect(me, me, false));
    assert!(!may_inspect(me, other, false));
    assert!(may_inspect(me, other, true));
}

/// A store whose reads always fail, as when the database pool is exhausted.
#[derive(Default)]
struct UnreachableStore {
    writes: AtomicUsize,
}

#[async_trait]
impl CheckInStore for UnreachableStore {
    async fn fetch_records(&self, _user_id: UserId) -> Result<Vec<RawCheckIn>, CheckInError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn has_checked_in(
        &self,
        _user_id: UserId,
        _day: NaiveDate,
    ) -> Result<bool, CheckInError> {
        Ok(false)
    }

    async fn record_check_in(
        &self,
        _user_id: UserId,
        _username: &str,
        _at: DateTime<Utc>,
    ) -> Result<RecordOutcome, CheckInError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(RecordOutcome::Recorded)
    }
}

#[tokio::test]
async fn credit_report_surfaces_store_outage() {
    let store = UnreachableStore::default();
    let result = credit_report(&store, UserId::new(USER), at(2, 0).date_naive()).await;
    assert!(matches!(result, Err(CheckInError::StoreUnavailable(_))));
}

#[tokio::test]
async fn check_in_fails_without_recording_on_store_outage() {
    let store = UnreachableStore::default();
    let result = perform_check_in(&store, UserId::new(USER), "alice", at(2, 9)).await;
    assert!(matches!(result, Err(CheckInError::StoreUnavailable(_))));
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn inspection_surfaces_store_outage() {
    let store = UnreachableStore::default();
    let result = inspect(&store, UserId::new(USER), at(2, 0).date_naive()).await;
    assert!(matches!(result, Err(CheckInError::StoreUnavailable(_))));
}

#[tokio::test]
async fn oversized_raw_values_stay_inside_the_report() {
    let store = MemoryCheckInStore::new();
    let user = UserId::new(USER);
    let hostile = format!("```{}", "x".repeat(5000));
    for _ in 0..30 {
        store.import_raw(user, "alice", &hostile).await;
    }

    let inspection = inspect(&store, user, at(5, 0).date_naive()).await.unwrap();
    let text = render_report("alice", user, &inspection);
    assert!(!text.contains('`'));
    // Leaves room for the surrounding code fence inside Discord's 4096-char description.
    assert!(text.chars().count() < 4000);
}

#[test]
fn raw_values_are_cut_and_defanged() {
    assert_eq!(display_raw("2025-08-01T10:00:00Z"), "2025-08-01T10:00:00Z");
    assert_eq!(display_raw("a`b\nc"), "a'b c");
    let long = display_raw(&"9".repeat(200));
    assert!(long.ends_with('…'));
    assert!(long.chars().count() < 60);
}
