use ta_domain::language::LanguageTemplates;

const SEPARATOR: &str = "\n\n";

/// Post-process a raw completion.
///
/// 1. No `?` anywhere: append the localized follow-up question.
/// 2. Contact request pending and the reply lacks the contact marker
///    (case-insensitive): append the localized request naming
///    `destination`, or the placeholder phrase when unknown.
///
/// Both steps are checked against the raw reply and applied in that order.
pub fn normalize(
    response_text: &str,
    templates: &LanguageTemplates,
    contact_request_pending: bool,
    destination: Option<&str>,
) -> String {
    let needs_question = !response_text.contains('?');
    let needs_contact_request = contact_request_pending
        && !response_text
            .to_lowercase()
            .contains(&templates.contact_marker.to_lowercase());

    if !needs_question && !needs_contact_request {
        return response_text.to_string();
    }

    let mut out = response_text.trim_end().to_string();
    if needs_question {
        out.push_str(SEPARATOR);
        out.push_str(&templates.fallback_question);
    }
    if needs_contact_request {
        out.push_str(SEPARATOR);
        out.push_str(&templates.contact_request_for(destination));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_domain::language::{Language, LanguagePack};

    fn en() -> LanguageTemplates {
        LanguagePack::builtin().get(Language::En).clone()
    }

    #[test]
    fn reply_with_question_and_no_pending_is_untouched() {
        let raw = "Bali is lovely in May. When are you going?";
        assert_eq!(normalize(raw, &en(), false, None), raw);
    }

    #[test]
    fn missing_question_gets_fallback() {
        let t = en();
        let out = normalize("Bali is lovely in May.", &t, false, None);
        assert_eq!(out, format!("Bali is lovely in May.\n\n{}", t.fallback_question));
    }

    #[test]
    fn both_appended_once_in_order() {
        let t = en();
        let out = normalize("Bali is lovely in May.  ", &t, true, Some("Bali"));
        let expected = format!(
            "Bali is lovely in May.\n\n{}\n\n{}",
            t.fallback_question,
            t.contact_request_for(Some("Bali"))
        );
        assert_eq!(out, expected);
        assert_eq!(out.matches(&t.fallback_question).count(), 1);
        assert_eq!(out.matches("email or phone").count(), 1);
        assert!(out.find(&t.fallback_question) < out.find("email or phone"));
    }

    #[test]
    fn existing_marker_is_respected_case_insensitively() {
        let raw = "Great choice! Share your EMAIL OR PHONE and we'll call?";
        assert_eq!(normalize(raw, &en(), true, None), raw);
    }

    #[test]
    fn pending_without_destination_uses_placeholder() {
        let out = normalize("Where to?", &en(), true, None);
        assert!(out.ends_with(
            "recommendations for your trip? If so, please share your email or phone number."
        ));
    }

    #[test]
    fn markers_work_for_every_language() {
        let pack = LanguagePack::builtin();
        for (_, t) in pack.iter() {
            let once = normalize("Ok.", t, true, None);
            let twice = normalize(&once, t, true, None);
            assert_eq!(once, twice);
        }
    }
}
