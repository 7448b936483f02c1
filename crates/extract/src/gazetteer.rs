//! Multilingual destination gazetteer.
//!
//! Rows are `[en, de, uk, ru, ro]` spellings of one place. Matching walks
//! the flattened list in order and the first substring hit wins, so the
//! order here is a priority order. Duplicates are intentional.

pub const DESTINATIONS: &[&str] = &[
    "france", "frankreich", "франція", "франция", "franța",
    "italy", "italien", "італія", "италия", "italia",
    "spain", "spanien", "іспанія", "испания", "spania",
    "greece", "griechenland", "греція", "греция", "grecia",
    "japan", "japan", "японія", "япония", "japonia",
    "thailand", "thailand", "таїланд", "таиланд", "tailanda",
    "australia", "australien", "австралія", "австралия", "australia",
    "canada", "kanada", "канада", "канада", "canada",
    "mexico", "mexiko", "мексика", "мексика", "mexic",
    "brazil", "brasilien", "бразилія", "бразилия", "brazilia",
    "egypt", "ägypten", "єгипет", "египет", "egipt",
    "turkey", "türkei", "туреччина", "турция", "turcia",
    "germany", "deutschland", "німеччина", "германия", "germania",
    "uk", "großbritannien", "великобританія", "великобритания", "marea britanie",
    "ireland", "irland", "ірландія", "ирландия", "irlanda",
    "bali", "bali", "балі", "бали", "bali",
    "kyiv", "kiew", "київ", "киев", "kiev",
    "barcelona", "barcelona", "барселона", "барселона", "barcelona",
    "tokyo", "tokio", "токіо", "токио", "tokyo",
    "santorini", "santorini", "санторіні", "санторини", "santorini",
];

/// First gazetteer entry contained in `lowered`, in list order.
pub fn first_match(lowered: &str) -> Option<&'static str> {
    DESTINATIONS.iter().copied().find(|d| lowered.contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_twenty_places_in_five_spellings() {
        assert_eq!(DESTINATIONS.len(), 100);
        assert_eq!(DESTINATIONS[0], "france");
        assert_eq!(DESTINATIONS[99], "santorini");
    }

    #[test]
    fn earlier_entries_win() {
        assert_eq!(first_match("italy or france?"), Some("france"));
    }
}
