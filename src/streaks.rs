use crate::errors::AppError;
use crate::models::{Achievement, ActivityKind, StreakData};
use crate::storage::{Collection, Store};
use chrono::{Days, NaiveDate, Utc};

/// Transition rule shared by every streak counter. A repeat on the same
/// calendar day keeps the count; yesterday extends it; anything else
/// restarts at 1.
pub fn next_streak(prev: u32, last: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last {
        None => 1,
        Some(date) if date == today => prev,
        Some(date) if date.checked_add_days(Days::new(1)) == Some(today) => prev + 1,
        Some(_) => 1,
    }
}

/// Advances the global counter plus the counter for `kind`, then grants any
/// newly earned achievements. Achievements only ever accumulate; a later
/// gap resets counters but never revokes a grant.
pub fn advance(data: &mut StreakData, kind: ActivityKind, today: NaiveDate) {
    data.current_streak = next_streak(data.current_streak, data.last_activity_date, today);
    data.last_activity_date = Some(today);

    match kind {
        ActivityKind::Journal => {
            data.journal_streak = next_streak(data.journal_streak, data.last_journal_date, today);
            data.last_journal_date = Some(today);
        }
        ActivityKind::Mood => {
            data.mood_streak = next_streak(data.mood_streak, data.last_mood_date, today);
            data.last_mood_date = Some(today);
        }
        ActivityKind::Focus => {
            data.focus_streak = next_streak(data.focus_streak, data.last_focus_date, today);
            data.last_focus_date = Some(today);
        }
    }

    data.achievements.insert(Achievement::CalmStarter);
    if data.current_streak >= 7 {
        data.achievements.insert(Achievement::Mindful7Day);
    }
    if data.current_streak >= 30 {
        data.achievements.insert(Achievement::ConsistencyChamp);
    }
    if data.focus_streak >= 5 {
        data.achievements.insert(Achievement::FocusMaster);
    }
}

/// Call once per qualifying event (one check-in, one journal save, one
/// finished focus interval). Loads the record, advances it against today's
/// UTC calendar day, and persists it.
pub async fn record_activity(store: &Store, kind: ActivityKind) -> Result<StreakData, AppError> {
    let mut data: StreakData = store.read(Collection::Streaks).await.unwrap_or_default();
    advance(&mut data, kind, Utc::now().date_naive());
    store.write(Collection::Streaks, &data).await?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn first_activity_starts_at_one() {
        assert_eq!(next_streak(0, None, date("2024-01-11")), 1);
    }

    #[test]
    fn consecutive_day_extends() {
        assert_eq!(next_streak(5, Some(date("2024-01-10")), date("2024-01-11")), 6);
    }

    #[test]
    fn gap_resets_to_one() {
        assert_eq!(next_streak(5, Some(date("2024-01-09")), date("2024-01-11")), 1);
    }

    #[test]
    fn same_day_is_idempotent() {
        assert_eq!(next_streak(5, Some(date("2024-01-11")), date("2024-01-11")), 5);
    }

    #[test]
    fn advance_tracks_global_and_specific_streams_independently() {
        let mut data = StreakData::default();
        advance(&mut data, ActivityKind::Mood, date("2024-03-01"));
        advance(&mut data, ActivityKind::Journal, date("2024-03-02"));

        assert_eq!(data.current_streak, 2);
        assert_eq!(data.mood_streak, 1);
        assert_eq!(data.journal_streak, 1);
        assert_eq!(data.last_mood_date, Some(date("2024-03-01")));
        assert_eq!(data.last_journal_date, Some(date("2024-03-02")));
    }

    #[test]
    fn repeat_activity_within_a_day_counts_once() {
        let mut data = StreakData::default();
        advance(&mut data, ActivityKind::Mood, date("2024-03-01"));
        advance(&mut data, ActivityKind::Mood, date("2024-03-01"));

        assert_eq!(data.current_streak, 1);
        assert_eq!(data.mood_streak, 1);
    }

    #[test]
    fn calm_starter_granted_on_first_activity() {
        let mut data = StreakData::default();
        advance(&mut data, ActivityKind::Focus, date("2024-03-01"));
        assert!(data.achievements.contains(&Achievement::CalmStarter));
    }

    #[test]
    fn seven_day_run_unlocks_mindful_badge() {
        let mut data = StreakData::default();
        let start = date("2024-03-01");
        for offset in 0..7 {
            advance(
                &mut data,
                ActivityKind::Mood,
                start.checked_add_days(Days::new(offset)).unwrap(),
            );
        }

        assert_eq!(data.current_streak, 7);
        assert_eq!(data.mood_streak, 7);
        assert!(data.achievements.contains(&Achievement::Mindful7Day));
        assert!(!data.achievements.contains(&Achievement::ConsistencyChamp));
    }

    #[test]
    fn thirty_day_run_unlocks_consistency_badge() {
        let mut data = StreakData::default();
        let start = date("2024-03-01");
        for offset in 0..30 {
            advance(
                &mut data,
                ActivityKind::Journal,
                start.checked_add_days(Days::new(offset)).unwrap(),
            );
        }

        assert_eq!(data.current_streak, 30);
        assert!(data.achievements.contains(&Achievement::ConsistencyChamp));
    }

    #[test]
    fn five_focus_days_unlock_focus_master() {
        let mut data = StreakData::default();
        let start = date("2024-03-01");
        for offset in 0..5 {
            advance(
                &mut data,
                ActivityKind::Focus,
                start.checked_add_days(Days::new(offset)).unwrap(),
            );
        }

        assert_eq!(data.focus_streak, 5);
        assert!(data.achievements.contains(&Achievement::FocusMaster));
    }

    #[test]
    fn achievements_survive_a_broken_streak() {
        let mut data = StreakData::default();
        let start = date("2024-03-01");
        for offset in 0..7 {
            advance(
                &mut data,
                ActivityKind::Mood,
                start.checked_add_days(Days::new(offset)).unwrap(),
            );
        }
        assert!(data.achievements.contains(&Achievement::Mindful7Day));

        advance(&mut data, ActivityKind::Mood, date("2024-03-20"));
        assert_eq!(data.current_streak, 1);
        assert!(data.achievements.contains(&Achievement::Mindful7Day));
    }

    #[tokio::test]
    async fn record_activity_persists_across_loads() {
        let store = crate::storage::tests::scratch_store("streaks");
        let first = record_activity(&store, ActivityKind::Mood).await.unwrap();
        assert_eq!(first.mood_streak, 1);
        assert_eq!(first.current_streak, 1);
        assert!(first.achievements.contains(&Achievement::CalmStarter));

        // Same-day repeat: loaded from disk, counters unchanged.
        let second = record_activity(&store, ActivityKind::Mood).await.unwrap();
        assert_eq!(second.mood_streak, 1);
        assert_eq!(second.current_streak, 1);
    }
}
