use serde::Serialize;

use ta_domain::profile::Profile;

/// Prefix of the trailing profile line in every system message.
pub const PROFILE_CONTEXT_PREFIX: &str = "Current user information: ";

/// Known profile fields, as shown to the model.
#[derive(Debug, Serialize)]
struct ProfileContext<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    interests: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a str>,
    language: &'a str,
    contact_provided: bool,
}

/// Format the profile as a single machine-readable context line.
///
/// The contact value itself is never sent to the model; only whether one
/// is on file.
pub fn format_profile_context(profile: &Profile) -> String {
    let ctx = ProfileContext {
        name: profile.name.as_deref(),
        destination: profile.destination.as_deref(),
        interests: profile.interests.iter().map(String::as_str).collect(),
        budget: profile.budget.as_deref(),
        language: profile.language.code(),
        contact_provided: profile.has_contact(),
    };
    let json = serde_json::to_string(&ctx).unwrap_or_else(|_| "{}".into());
    format!("{PROFILE_CONTEXT_PREFIX}{json}")
}
