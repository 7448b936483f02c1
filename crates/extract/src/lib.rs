//! Heuristic signal extraction from raw chat messages.
//!
//! Everything here is pure: no I/O, no state, and calling any function
//! twice on the same text yields the same result.

mod contact;
mod destination;
pub mod gazetteer;

pub use contact::{extract_contact, extract_email, extract_phone};
pub use destination::extract_destination;

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("bali"), "Bali");
        assert_eq!(capitalize("київ"), "Київ");
        assert_eq!(capitalize("ägypten"), "Ägypten");
        assert_eq!(capitalize("marea britanie"), "Marea britanie");
        assert_eq!(capitalize("NARNIA"), "Narnia");
        assert_eq!(capitalize(""), "");
    }
}
