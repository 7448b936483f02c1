use crate::{capitalize, gazetteer};

/// Messages with at most this many tokens may be a bare place name.
const SHORT_MESSAGE_TOKENS: usize = 2;
/// Minimum length (in characters) for a capitalized token to count as a place.
const MIN_GUESS_CHARS: usize = 4;

/// Detect a travel destination in `text`.
///
/// Gazetteer entries are matched as substrings of the lower-cased text,
/// so "uk" also fires inside "Milwaukee". When nothing matches and the
/// message is at most two tokens long, the first capitalized token of
/// four or more characters is taken as a guess.
pub fn extract_destination(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    if let Some(hit) = gazetteer::first_match(&lowered) {
        return Some(capitalize(hit));
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() > SHORT_MESSAGE_TOKENS {
        return None;
    }

    tokens
        .into_iter()
        .map(|t| t.trim_matches(|c| matches!(c, ',' | '.' | ':' | ';' | '!' | '?')))
        .find(|t| {
            t.chars().next().is_some_and(char::is_uppercase)
                && t.chars().count() >= MIN_GUESS_CHARS
        })
        .map(|t| capitalize(&t.to_lowercase()))
}
