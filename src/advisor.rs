use crate::config::Config;
use crate::models::{ChatMessage, ChatRole, JournalAnalysis, Mood};
use async_trait::async_trait;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};

/// Boundary to the generative-text service. Every method is total: callers
/// always get a value of the expected shape, never an error.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Short supportive reply to the latest chat message.
    async fn converse(&self, history: &[ChatMessage], message: &str, display_name: &str) -> String;

    /// One-sentence tip for a mood check-in.
    async fn mood_tip(&self, mood: Mood) -> String;

    /// Structured reflection on a journal entry.
    async fn analyze_journal(&self, text: &str) -> JournalAnalysis;
}

/// Remote advisor when an API key is configured, deterministic local
/// replies otherwise.
pub fn from_config(config: &Config) -> Arc<dyn Advisor> {
    match &config.gemini_api_key {
        Some(key) => Arc::new(RemoteAdvisor::new(key.clone(), config.gemini_model.clone())),
        None => {
            info!("no GEMINI_API_KEY set; advisor runs in offline mode");
            Arc::new(LocalAdvisor)
        }
    }
}

/// Deterministic stand-in: canned replies keyed by simple keyword matching,
/// clearly marked as offline content.
pub struct LocalAdvisor;

impl LocalAdvisor {
    fn reply(&self, message: &str, display_name: &str) -> String {
        let lower = message.to_lowercase();
        if lower.contains("hello") || lower.contains("hi") {
            format!(
                "Hello {display_name}! I'm in offline mode right now, but I'm still here to listen. How are you feeling?"
            )
        } else if lower.contains("sad") || lower.contains("depressed") || lower.contains("lonely") {
            "I'm sorry you're feeling this way. This feeling is temporary, and you are stronger than you know. (offline reply)".into()
        } else if lower.contains("anxious") || lower.contains("stress") {
            "Take a slow breath with me. Inhale... exhale. Stay with this moment; you've got this. (offline reply)".into()
        } else if lower.contains("thank") {
            "You're very welcome! I'm glad I could help.".into()
        } else {
            "I hear you. I'm in offline mode right now, but your feelings are valid. Tell me more?".into()
        }
    }

    fn tip(&self, mood: Mood) -> String {
        let tip = match mood {
            Mood::Ecstatic => "Bottle this energy: jot down what made today great so you can revisit it.",
            Mood::Happy => "Share a bit of that good mood with someone; it tends to come back doubled.",
            Mood::Neutral => "A steady day is a fine day. A short walk might give it a gentle lift.",
            Mood::Sad => "Be kind to yourself today. One small comforting ritual can go a long way.",
            Mood::Anxious => "Try a 4-7-8 breath: in for four, hold for seven, out for eight.",
            Mood::Focused => "Ride the focus: pick your hardest task now and protect the next half hour.",
            Mood::Sleepy => "Low energy is information. A glass of water and daylight beat another coffee.",
        };
        format!("{tip} (offline tip)")
    }

    fn analysis(&self) -> JournalAnalysis {
        JournalAnalysis {
            mood_summary: "Reflective (offline analysis)".into(),
            productivity_insight: "Writing things down helps clear the mind.".into(),
            recommendations: vec!["Take a deep breath.".into(), "Stay consistent.".into()],
        }
    }
}

#[async_trait]
impl Advisor for LocalAdvisor {
    async fn converse(&self, _history: &[ChatMessage], message: &str, display_name: &str) -> String {
        self.reply(message, display_name)
    }

    async fn mood_tip(&self, mood: Mood) -> String {
        self.tip(mood)
    }

    async fn analyze_journal(&self, _text: &str) -> JournalAnalysis {
        self.analysis()
    }
}

/// Gemini `generateContent` over REST. Any transport or parse failure is
/// logged and answered with the local advisor's reply for the same inputs.
pub struct RemoteAdvisor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    fallback: LocalAdvisor,
}

impl RemoteAdvisor {
    pub fn new(api_key: String, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key,
            model,
            fallback: LocalAdvisor,
        }
    }

    async fn generate(&self, body: serde_json::Value) -> Result<String, reqwest::Error> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .trim()
            .to_string();
        Ok(text)
    }

    fn converse_prompt(history: &[ChatMessage], message: &str, display_name: &str) -> String {
        let mut transcript = String::new();
        for msg in history.iter().rev().take(10).rev() {
            let speaker = match msg.role {
                ChatRole::User => "user",
                ChatRole::Model => "counselor",
            };
            transcript.push_str(&format!("{speaker}: {}\n", msg.text));
        }

        format!(
            "You are a compassionate, professional wellness counselor inside the Wellmate app.\n\
             The user's name is \"{display_name}\"; address them by name occasionally.\n\
             Recent conversation:\n{transcript}\n\
             User's message: \"{message}\"\n\
             Keep the reply warm, under 60 words, validate feelings first, offer one actionable\n\
             suggestion when it fits, and never diagnose medical conditions."
        )
    }
}

#[async_trait]
impl Advisor for RemoteAdvisor {
    async fn converse(&self, history: &[ChatMessage], message: &str, display_name: &str) -> String {
        let prompt = Self::converse_prompt(history, message, display_name);
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        match self.generate(body).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                warn!("advisor returned an empty reply; using offline reply");
                self.fallback.reply(message, display_name)
            }
            Err(err) => {
                warn!("advisor request failed: {err}; using offline reply");
                self.fallback.reply(message, display_name)
            }
        }
    }

    async fn mood_tip(&self, mood: Mood) -> String {
        let prompt = format!(
            "The user just checked in feeling \"{}\". Reply with one supportive sentence or micro-tip.",
            mood.label()
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        match self.generate(body).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => self.fallback.tip(mood),
            Err(err) => {
                warn!("mood tip request failed: {err}; using offline tip");
                self.fallback.tip(mood)
            }
        }
    }

    async fn analyze_journal(&self, text: &str) -> JournalAnalysis {
        let prompt = format!(
            "Analyze this journal entry: \"{text}\". Return JSON with keys mood_summary \
             (concise emotional tone), productivity_insight (one observation), and \
             recommendations (1-2 short actionable wellness suggestions)."
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "mood_summary": { "type": "STRING" },
                        "productivity_insight": { "type": "STRING" },
                        "recommendations": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["mood_summary", "productivity_insight", "recommendations"]
                }
            }
        });

        match self.generate(body).await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(analysis) => analysis,
                Err(err) => {
                    warn!("journal analysis was not valid JSON: {err}; using offline analysis");
                    self.fallback.analysis()
                }
            },
            Err(err) => {
                warn!("journal analysis request failed: {err}; using offline analysis");
                self.fallback.analysis()
            }
        }
    }
}
