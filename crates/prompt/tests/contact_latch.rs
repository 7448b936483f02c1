//! Drives the contact-request decision through a simulated conversation
//! the way the message pipeline does.

use ta_domain::language::{Language, LanguagePack};
use ta_domain::profile::Turn;
use ta_prompt::{normalize, should_request_contact};
use ta_sessions::SessionStore;

#[test]
fn contact_request_fires_exactly_once_over_ten_turns() {
    let store = SessionStore::in_memory();
    let pack = LanguagePack::builtin();
    let en = pack.get(Language::En);
    store.get_or_create("s", Language::En);

    let mut fired_on = Vec::new();
    for turn in 0..10 {
        let session = store.get("s").unwrap();
        let pending = should_request_contact(&session);
        if pending {
            fired_on.push(turn);
        }

        let reply = normalize("Here are some ideas.", en, pending, None);
        assert_eq!(reply.contains("email or phone"), pending, "turn {turn}");

        store.append_turn("s", Turn::user(format!("message {turn}")));
        store.append_turn("s", Turn::assistant(reply));
        if pending {
            assert!(store.mark_contact_requested("s"));
        }
    }

    assert_eq!(fired_on, [1]);
    assert!(store.get("s").unwrap().profile.contact_requested);
}
