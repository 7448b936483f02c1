use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::message::{Message, Role};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Turn
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One role-tagged entry in a session's history. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: TurnRole::User, content: text.into() }
    }
    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Assistant, content: text.into() }
    }
}

impl From<&Turn> for Message {
    fn from(turn: &Turn) -> Self {
        let role = match turn.role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        };
        Message { role, content: turn.content.clone() }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Profile
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Facts accumulated about the user over one session.
///
/// `contact`, `contact_requested` and `contact_saved` are set-once; the
/// remaining fields are last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    /// Distinct, in the order first mentioned.
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub contact_requested: bool,
    #[serde(default)]
    pub contact_saved: bool,
}

impl Profile {
    pub fn new(language: Language) -> Self {
        Self { language, ..Default::default() }
    }

    /// Apply one field update. Returns `true` when the profile changed.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        fn set(slot: &mut Option<String>, value: String) -> bool {
            let value = value.trim().to_string();
            if value.is_empty() || slot.as_deref() == Some(value.as_str()) {
                return false;
            }
            *slot = Some(value);
            true
        }

        match update {
            ProfileUpdate::Name(v) => set(&mut self.name, v),
            ProfileUpdate::Destination(v) => set(&mut self.destination, v),
            ProfileUpdate::Budget(v) => set(&mut self.budget, v),
            ProfileUpdate::Contact(v) => {
                if self.contact.is_some() {
                    return false;
                }
                set(&mut self.contact, v)
            }
            ProfileUpdate::Interest(v) => {
                let v = v.trim();
                if v.is_empty() || self.interests.iter().any(|i| i == v) {
                    return false;
                }
                self.interests.push(v.to_string());
                true
            }
            ProfileUpdate::Language(lang) => {
                let changed = self.language != lang;
                self.language = lang;
                changed
            }
        }
    }

    pub fn has_contact(&self) -> bool {
        self.contact.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// A single profile mutation. `Contact` is ignored once a contact is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Name(String),
    Destination(String),
    Contact(String),
    Interest(String),
    Budget(String),
    Language(Language),
}

/// Partial profile supplied by the caller alongside a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHints {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
}

impl ProfileHints {
    pub fn into_updates(self) -> Vec<ProfileUpdate> {
        let mut updates = Vec::new();
        updates.extend(self.name.map(ProfileUpdate::Name));
        updates.extend(self.destination.map(ProfileUpdate::Destination));
        updates.extend(self.interests.into_iter().map(ProfileUpdate::Interest));
        updates.extend(self.budget.map(ProfileUpdate::Budget));
        updates
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One conversation: ordered history plus accumulated profile. This is
/// also the on-disk document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub history: Vec<Turn>,
}

impl Session {
    pub fn new(session_id: impl Into<String>, language: Language) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            created_at: now,
            updated_at: now,
            profile: Profile::new(language),
            history: Vec::new(),
        }
    }

    pub fn has_assistant_turn(&self) -> bool {
        self.history.iter().any(|t| t.role == TurnRole::Assistant)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ContactRecord
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Lead snapshot handed to the persistence sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub contact: String,
    pub destination: String,
    pub interests: String,
    pub budget: String,
    pub language: String,
    pub timestamp: String,
}

impl ContactRecord {
    pub const HEADER: [&'static str; 7] = [
        "Name",
        "Contact",
        "Destination",
        "Interests",
        "Budget",
        "Language",
        "Timestamp",
    ];

    /// Snapshot `profile` at `at`. Returns `None` when no contact is set.
    pub fn from_profile(profile: &Profile, at: DateTime<Local>) -> Option<Self> {
        let contact = profile.contact.clone().filter(|c| !c.is_empty())?;
        let interests = if profile.interests.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            profile.interests.join(", ")
        };
        Some(Self {
            name: profile.name.clone().unwrap_or_else(|| NOT_PROVIDED.into()),
            contact,
            destination: profile
                .destination
                .clone()
                .unwrap_or_else(|| NOT_SPECIFIED.into()),
            interests,
            budget: profile.budget.clone().unwrap_or_else(|| NOT_SPECIFIED.into()),
            language: profile.language.code().to_string(),
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    /// Fields in header order.
    pub fn row(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.contact.as_str(),
            self.destination.as_str(),
            self.interests.as_str(),
            self.budget.as_str(),
            self.language.as_str(),
            self.timestamp.as_str(),
        ]
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
