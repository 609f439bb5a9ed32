use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar_url: String,
    pub joined_date: String,
}

/// Outward view of a user; everything except the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub avatar_url: String,
    pub joined_date: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            avatar_url: user.avatar_url,
            joined_date: user.joined_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Ecstatic,
    Happy,
    Neutral,
    Sad,
    Anxious,
    Focused,
    Sleepy,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Ecstatic => "Ecstatic",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Focused => "Focused",
            Mood::Sleepy => "Sleepy",
        }
    }

    /// Position on the insights chart, best to worst.
    pub fn score(self) -> u8 {
        match self {
            Mood::Ecstatic => 6,
            Mood::Happy => 5,
            Mood::Focused => 4,
            Mood::Neutral => 3,
            Mood::Sleepy => 2,
            Mood::Sad => 1,
            Mood::Anxious => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: Mood,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalAnalysis {
    pub mood_summary: String,
    pub productivity_insight: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub content: String,
    pub timestamp: String,
    pub tags: Vec<String>,
    pub mood: Mood,
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<JournalAnalysis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Achievement {
    CalmStarter,
    #[serde(rename = "MINDFUL_7_DAY")]
    Mindful7Day,
    ConsistencyChamp,
    FocusMaster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Journal,
    Mood,
    Focus,
}

/// Singleton record behind the streak and achievement screens. Date fields
/// hold the calendar day (no time component) the counter last advanced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakData {
    pub current_streak: u32,
    pub last_activity_date: Option<NaiveDate>,
    pub journal_streak: u32,
    pub last_journal_date: Option<NaiveDate>,
    pub mood_streak: u32,
    pub last_mood_date: Option<NaiveDate>,
    pub focus_streak: u32,
    pub last_focus_date: Option<NaiveDate>,
    pub achievements: BTreeSet<Achievement>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub username: String,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewMoodRequest {
    pub mood: Mood,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewJournalRequest {
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub mood: Mood,
    #[serde(default)]
    pub is_locked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InsightPoint {
    pub date: String,
    pub day: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct InsightsSummary {
    pub last_7_days: Vec<InsightPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_mood: Option<Mood>,
    pub total_checkins: usize,
}
