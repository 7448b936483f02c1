use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no whitespace and at least one dot after `@`.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("email pattern is valid"));

/// Optional country code, optional (area) code, then 3 + 4 digits.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern is valid")
});

/// A single decimal digit in any script (`\d` is Unicode-aware).
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// Bare digit runs shorter than this are not treated as phone numbers.
const MIN_PHONE_DIGITS: usize = 6;

const EMAIL_TRIM: &[char] = &[',', '.', '!', '?', ';', ':', '(', ')'];

/// First email-shaped token, with surrounding punctuation removed.
pub fn extract_email(text: &str) -> Option<String> {
    let m = EMAIL.find(text)?;
    let email = m.as_str().trim_matches(EMAIL_TRIM);
    (!email.is_empty()).then(|| email.to_string())
}

/// First phone-shaped substring; failing that, every digit in the message
/// concatenated, if there are at least six.
///
/// The digit fallback does no shape validation: "we fly 2024-05-12"
/// yields `"20240512"`.
pub fn extract_phone(text: &str) -> Option<String> {
    if let Some(m) = PHONE.find(text) {
        return Some(m.as_str().to_string());
    }

    let digits: Vec<&str> = DIGIT.find_iter(text).map(|m| m.as_str()).collect();
    (digits.len() >= MIN_PHONE_DIGITS).then(|| digits.concat())
}

/// Contact value from a message: a bare number of six or more digits is
/// taken verbatim, otherwise email is preferred over phone.
pub fn extract_contact(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len >= MIN_PHONE_DIGITS && DIGIT.find_iter(trimmed).count() == len {
        return Some(trimmed.to_string());
    }
    extract_email(text).or_else(|| extract_phone(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── email ──────────────────────────────────────────────────────

    #[test]
    fn email_trailing_comma_stripped() {
        assert_eq!(
            extract_email("Reach me at a.b@example.co, thanks").as_deref(),
            Some("a.b@example.co")
        );
    }

    #[test]
    fn email_wrapped_in_parens() {
        assert_eq!(
            extract_email("(olena@mail.com.ua)").as_deref(),
            Some("olena@mail.com.ua")
        );
    }

    #[test]
    fn email_requires_dot_after_at() {
        assert_eq!(extract_email("me@localhost"), None);
        assert_eq!(extract_email("no address here"), None);
    }

    // ── phone ──────────────────────────────────────────────────────

    #[test]
    fn phone_structured_local() {
        assert_eq!(extract_phone("call 555-1234").as_deref(), Some("555-1234"));
    }

    #[test]
    fn phone_structured_international() {
        assert_eq!(
            extract_phone("my number is +1 (555) 123-4567 after 6pm").as_deref(),
            Some("+1 (555) 123-4567")
        );
    }

    #[test]
    fn phone_bare_digit_fallback() {
        assert_eq!(extract_phone("123456").as_deref(), Some("123456"));
        assert_eq!(extract_phone("12 34 56").as_deref(), Some("123456"));
    }

    #[test]
    fn phone_fallback_misfires_on_dates() {
        assert_eq!(
            extract_phone("We fly on 2024-05-12").as_deref(),
            Some("20240512")
        );
    }

    #[test]
    fn phone_fallback_misfires_on_booking_codes() {
        assert_eq!(
            extract_phone("booking ref AB12-CD34-56").as_deref(),
            Some("123456")
        );
    }

    #[test]
    fn phone_accepts_full_width_digits() {
        assert_eq!(extract_phone("电话 １２３４５６").as_deref(), Some("１２３４５６"));
    }

    #[test]
    fn phone_too_few_digits() {
        assert_eq!(extract_phone("2 adults, 3 kids, 10 days"), None);
    }

    // ── contact ────────────────────────────────────────────────────

    #[test]
    fn contact_bare_number_taken_verbatim() {
        assert_eq!(extract_contact("  0671234567 ").as_deref(), Some("0671234567"));
        assert_eq!(extract_contact("123456").as_deref(), Some("123456"));
        assert_eq!(extract_contact("１２３４５６").as_deref(), Some("１２３４５６"));
        assert_eq!(extract_contact("12345"), None);
    }

    #[test]
    fn contact_prefers_email() {
        assert_eq!(
            extract_contact("mail a@b.com or call 555-1234").as_deref(),
            Some("a@b.com")
        );
    }

    #[test]
    fn contact_falls_back_to_phone() {
        assert_eq!(
            extract_contact("call me: 555-1234").as_deref(),
            Some("555-1234")
        );
    }

    #[test]
    fn contact_none_for_plain_text() {
        assert_eq!(extract_contact("Tell me about Japan"), None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "I'm at x@y.io, phone 555-1234";
        assert_eq!(extract_contact(text), extract_contact(text));
        assert_eq!(extract_phone(text), extract_phone(text));
    }
}
