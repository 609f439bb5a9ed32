use crate::models::{InsightPoint, InsightsSummary, Mood, MoodEntry};
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use std::collections::HashMap;

pub fn build_insights(moods: &[MoodEntry]) -> InsightsSummary {
    build_insights_at(Utc::now().date_naive(), moods)
}

/// Seven-day mood timeline plus overall top mood and check-in count.
/// Entries are newest first, so the first hit for a date is that day's
/// latest check-in.
pub fn build_insights_at(today: NaiveDate, moods: &[MoodEntry]) -> InsightsSummary {
    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date.to_string();
        let mood = moods
            .iter()
            .find(|entry| entry.timestamp.starts_with(&key))
            .map(|entry| entry.mood);

        last_7_days.push(InsightPoint {
            date: key,
            day: day_label(date).to_string(),
            mood,
            score: mood.map(Mood::score),
        });
    }

    let mut counts: HashMap<Mood, usize> = HashMap::new();
    for entry in moods {
        *counts.entry(entry.mood).or_default() += 1;
    }
    let top_mood = counts
        .into_iter()
        .max_by_key(|(mood, count)| (*count, mood.score()))
        .map(|(mood, _)| mood);

    InsightsSummary {
        last_7_days,
        top_mood,
        total_checkins: moods.len(),
    }
}

fn day_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(mood: Mood, timestamp: &str) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            mood,
            timestamp: timestamp.into(),
            note: None,
            ai_insight: None,
        }
    }

    #[test]
    fn timeline_covers_each_of_the_last_seven_days() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let moods = vec![entry(Mood::Happy, "2026-01-03T09:30:00Z")];

        let summary = build_insights_at(today, &moods);
        assert_eq!(summary.last_7_days.len(), 7);

        let point = summary
            .last_7_days
            .iter()
            .find(|p| p.date == "2026-01-03")
            .expect("missing day");
        assert_eq!(point.mood, Some(Mood::Happy));
        assert_eq!(point.score, Some(5));

        let empty_day = summary
            .last_7_days
            .iter()
            .find(|p| p.date == "2026-01-04")
            .unwrap();
        assert!(empty_day.mood.is_none());
    }

    #[test]
    fn newest_entry_wins_within_a_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        // Newest first, the repository's order.
        let moods = vec![
            entry(Mood::Focused, "2026-01-05T18:00:00Z"),
            entry(Mood::Anxious, "2026-01-05T08:00:00Z"),
        ];

        let summary = build_insights_at(today, &moods);
        let point = summary.last_7_days.last().unwrap();
        assert_eq!(point.mood, Some(Mood::Focused));
    }

    #[test]
    fn top_mood_is_the_most_frequent() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let moods = vec![
            entry(Mood::Sad, "2026-01-05T08:00:00Z"),
            entry(Mood::Happy, "2026-01-04T08:00:00Z"),
            entry(Mood::Happy, "2026-01-03T08:00:00Z"),
        ];

        let summary = build_insights_at(today, &moods);
        assert_eq!(summary.top_mood, Some(Mood::Happy));
        assert_eq!(summary.total_checkins, 3);
    }

    #[test]
    fn empty_history_yields_an_empty_summary() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let summary = build_insights_at(today, &[]);
        assert!(summary.top_mood.is_none());
        assert_eq!(summary.total_checkins, 0);
        assert!(summary.last_7_days.iter().all(|p| p.mood.is_none()));
    }
}
