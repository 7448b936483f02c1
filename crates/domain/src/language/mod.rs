//! Supported conversation languages and their localized text table.
//!
//! The table is built once at startup (built-in rows, optionally overlaid
//! by a TOML overrides file), validated for completeness and then shared
//! read-only. Adding a language means adding one enum variant and one row.

mod builtin;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ValidationError};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Language
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Uk,
    Ru,
    Ro,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::De,
        Language::Uk,
        Language::Ru,
        Language::Ro,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Uk => "uk",
            Language::Ru => "ru",
            Language::Ro => "ro",
        }
    }

    /// Parse a caller-supplied hint, substituting `default` when the hint
    /// is absent or unsupported.
    pub fn resolve(hint: Option<&str>, default: Language) -> Language {
        match hint.map(str::parse::<Language>) {
            Some(Ok(lang)) => lang,
            Some(Err(e)) => {
                tracing::debug!(error = %e, fallback = %default, "language hint rejected");
                default
            }
            None => default,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| ValidationError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Per-language text row
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Placeholder substituted with the known destination in `contact_request`.
pub const DESTINATION_SLOT: &str = "{destination}";
/// Placeholder substituted with the raw failure detail in `error_message`.
pub const ERROR_SLOT: &str = "{error}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTemplates {
    pub display_name: String,
    /// Persona and formatting rules; first block of every system message.
    pub persona: String,
    /// "You must ask for contact details now" block, only added while a
    /// contact request is pending.
    pub contact_directive: String,
    /// Appended to replies that lack the contact marker. Contains `{destination}`.
    pub contact_request: String,
    /// Substituted for `{destination}` when no destination is known yet.
    pub destination_placeholder: String,
    /// Appended to replies that contain no question mark.
    pub fallback_question: String,
    /// User-visible apology for a failed completion. Contains `{error}`.
    pub error_message: String,
    /// Lower-case-insensitive substring that signals a reply already asks
    /// for contact details.
    pub contact_marker: String,
    pub welcome: String,
}

impl LanguageTemplates {
    pub fn contact_request_for(&self, destination: Option<&str>) -> String {
        let dest = match destination {
            Some(d) if !d.trim().is_empty() => d,
            _ => self.destination_placeholder.as_str(),
        };
        self.contact_request.replace(DESTINATION_SLOT, dest)
    }

    pub fn error_reply(&self, error: &dyn fmt::Display) -> String {
        self.error_message.replace(ERROR_SLOT, &error.to_string())
    }

    fn check(&self, lang: Language) -> Result<()> {
        let fields = [
            ("display_name", &self.display_name),
            ("persona", &self.persona),
            ("contact_directive", &self.contact_directive),
            ("contact_request", &self.contact_request),
            ("destination_placeholder", &self.destination_placeholder),
            ("fallback_question", &self.fallback_question),
            ("error_message", &self.error_message),
            ("contact_marker", &self.contact_marker),
            ("welcome", &self.welcome),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("languages.{lang}.{name} must not be empty")));
            }
        }
        if !self.contact_request.contains(DESTINATION_SLOT) {
            return Err(Error::Config(format!(
                "languages.{lang}.contact_request must contain {DESTINATION_SLOT}"
            )));
        }
        if !self.error_message.contains(ERROR_SLOT) {
            return Err(Error::Config(format!(
                "languages.{lang}.error_message must contain {ERROR_SLOT}"
            )));
        }
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LanguagePack
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Immutable, complete table of localized text, one row per [`Language`].
#[derive(Debug, Clone)]
pub struct LanguagePack {
    // Indexed by `Language::index()`; the constructor guarantees one row
    // per variant.
    rows: Vec<LanguageTemplates>,
}

impl LanguagePack {
    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self {
            rows: Language::ALL.into_iter().map(builtin::templates).collect(),
        }
    }

    /// Build a pack from explicit rows; every supported language must be
    /// present and complete.
    pub fn from_rows(mut rows: HashMap<Language, LanguageTemplates>) -> Result<Self> {
        let mut ordered = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let row = rows
                .remove(&lang)
                .ok_or_else(|| Error::Config(format!("languages.{lang}: no entry")))?;
            row.check(lang)?;
            ordered.push(row);
        }
        Ok(Self { rows: ordered })
    }

    /// Built-in table overlaid with the TOML overrides at `path`, if any.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::builtin()),
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|e| {
                    Error::Config(format!("reading language overrides {}: {e}", p.display()))
                })?;
                Self::builtin().with_overrides(&raw)
            }
        }
    }

    /// Apply a TOML document of `[<code>] field = "..."` overrides.
    pub fn with_overrides(self, toml_src: &str) -> Result<Self> {
        let overrides: HashMap<String, TemplateOverride> = toml::from_str(toml_src)
            .map_err(|e| Error::Config(format!("language overrides: {e}")))?;

        let mut rows: HashMap<Language, LanguageTemplates> =
            Language::ALL.into_iter().zip(self.rows).collect();

        for (code, patch) in overrides {
            let lang: Language = code
                .parse()
                .map_err(|e: ValidationError| Error::Config(format!("language overrides: {e}")))?;
            if let Some(row) = rows.get_mut(&lang) {
                patch.apply(row);
            }
        }
        Self::from_rows(rows)
    }

    pub fn get(&self, lang: Language) -> &LanguageTemplates {
        &self.rows[lang.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &LanguageTemplates)> {
        Language::ALL.into_iter().zip(self.rows.iter())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateOverride {
    display_name: Option<String>,
    persona: Option<String>,
    contact_directive: Option<String>,
    contact_request: Option<String>,
    destination_placeholder: Option<String>,
    fallback_question: Option<String>,
    error_message: Option<String>,
    contact_marker: Option<String>,
    welcome: Option<String>,
}

impl TemplateOverride {
    fn apply(self, row: &mut LanguageTemplates) {
        let pairs = [
            (self.display_name, &mut row.display_name),
            (self.persona, &mut row.persona),
            (self.contact_directive, &mut row.contact_directive),
            (self.contact_request, &mut row.contact_request),
            (self.destination_placeholder, &mut row.destination_placeholder),
            (self.fallback_question, &mut row.fallback_question),
            (self.error_message, &mut row.error_message),
            (self.contact_marker, &mut row.contact_marker),
            (self.welcome, &mut row.welcome),
        ];
        for (value, slot) in pairs {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pack_is_complete() {
        let pack = LanguagePack::builtin();
        for (lang, row) in pack.iter() {
            row.check(lang).unwrap();
        }
    }

    #[test]
    fn builtin_markers_appear_in_their_own_contact_request() {
        let pack = LanguagePack::builtin();
        for (lang, row) in pack.iter() {
            let request = row.contact_request_for(None).to_lowercase();
            assert!(
                request.contains(&row.contact_marker.to_lowercase()),
                "{lang}: marker {:?} missing from {:?}",
                row.contact_marker,
                request
            );
        }
    }

    #[test]
    fn parse_codes() {
        assert_eq!("uk".parse::<Language>().unwrap(), Language::Uk);
        assert_eq!(" DE ".parse::<Language>().unwrap(), Language::De);
        assert_eq!(
            "fr".parse::<Language>().unwrap_err(),
            ValidationError::UnsupportedLanguage("fr".into())
        );
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(Language::resolve(Some("ro"), Language::En), Language::Ro);
        assert_eq!(Language::resolve(Some("xx"), Language::Uk), Language::Uk);
        assert_eq!(Language::resolve(None, Language::De), Language::De);
    }

    #[test]
    fn contact_request_uses_placeholder_without_destination() {
        let pack = LanguagePack::builtin();
        let en = pack.get(Language::En);
        assert!(en.contact_request_for(Some("Bali")).contains("for Bali?"));
        assert!(en.contact_request_for(None).contains("for your trip?"));
        assert!(en.contact_request_for(Some("  ")).contains("for your trip?"));
    }

    #[test]
    fn error_reply_embeds_detail() {
        let pack = LanguagePack::builtin();
        let reply = pack.get(Language::En).error_reply(&"HTTP: connection refused");
        assert_eq!(
            reply,
            "I'm having trouble connecting. Please try again later. Error: HTTP: connection refused"
        );
    }

    #[test]
    fn overrides_replace_single_fields() {
        let pack = LanguagePack::builtin()
            .with_overrides(
                r#"
                [ro]
                welcome = "Bun venit!"
                "#,
            )
            .unwrap();
        assert_eq!(pack.get(Language::Ro).welcome, "Bun venit!");
        assert_eq!(pack.get(Language::En), LanguagePack::builtin().get(Language::En));
    }

    #[test]
    fn overrides_reject_unknown_language() {
        let err = LanguagePack::builtin()
            .with_overrides("[fr]\nwelcome = \"Bonjour\"")
            .unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn overrides_reject_missing_placeholder() {
        let err = LanguagePack::builtin()
            .with_overrides("[de]\ncontact_request = \"Deine E-Mail bitte?\"")
            .unwrap_err();
        assert!(err.to_string().contains("languages.de.contact_request"));
    }

    #[test]
    fn from_rows_requires_every_language() {
        let mut rows: HashMap<Language, LanguageTemplates> = LanguagePack::builtin()
            .iter()
            .map(|(l, r)| (l, r.clone()))
            .collect();
        rows.remove(&Language::Ru);
        let err = LanguagePack::from_rows(rows).unwrap_err();
        assert!(err.to_string().contains("languages.ru"));
    }

    #[test]
    fn load_reads_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.toml");
        std::fs::write(&path, "[en]\nfallback_question = \"Anything else?\"\n").unwrap();
        let pack = LanguagePack::load(Some(&path)).unwrap();
        assert_eq!(pack.get(Language::En).fallback_question, "Anything else?");
    }
}
