use ta_domain::config::SessionsConfig;
use ta_domain::language::Language;
use ta_domain::profile::{ProfileUpdate, Turn};
use ta_sessions::SessionStore;

#[test]
fn sessions_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = SessionStore::open(dir.path()).unwrap();
        store.get_or_create("trip-1", Language::Uk);
        store.append_turn("trip-1", Turn::user("Хочу в Київ"));
        store.append_turn("trip-1", Turn::assistant("Чудово! Коли?"));
        store.update_profile("trip-1", ProfileUpdate::Destination("Київ".into()));
        store.update_profile("trip-1", ProfileUpdate::Contact("a@x.com".into()));
        store.mark_contact_saved("trip-1");
        store.persist("trip-1").unwrap();
    }

    let store = SessionStore::open(dir.path()).unwrap();
    let (session, is_new) = store.get_or_create("trip-1", Language::En);
    assert!(!is_new);
    assert_eq!(session.history.len(), 2);
    assert_eq!(session.profile.language, Language::Uk);
    assert_eq!(session.profile.destination.as_deref(), Some("Київ"));
    assert!(session.profile.contact_saved);

    // Set-once survives the round trip.
    assert!(!store.update_profile("trip-1", ProfileUpdate::Contact("b@y.com".into())));
}

#[test]
fn corrupt_document_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "[{\"role\": \"user\"").unwrap();

    let store = SessionStore::open(dir.path()).unwrap();
    let (session, is_new) = store.get_or_create("broken", Language::De);
    assert!(is_new);
    assert!(session.history.is_empty());
    assert_eq!(session.profile.language, Language::De);

    // The next persist replaces the corrupt file with a valid document.
    store.append_turn("broken", Turn::user("Hallo"));
    store.persist("broken").unwrap();
    let reopened = SessionStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get_or_create("broken", Language::En).0.history.len(), 1);
}

#[tokio::test]
async fn persist_async_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionsConfig {
        state_path: dir.path().join("conversations"),
        ..Default::default()
    };
    let store = SessionStore::from_config(&config).unwrap();
    assert!(store.is_persistent());

    store.get_or_create("s", Language::Ro);
    store.append_turn("s", Turn::user("Salut"));
    store.persist_async("s").await.unwrap();

    assert!(dir.path().join("conversations").join("s.json").exists());
}

#[test]
fn load_reads_documents_without_registering_them() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = SessionStore::open(dir.path()).unwrap();
        store.get_or_create("trip-2", Language::De);
        store.append_turn("trip-2", Turn::user("Hallo"));
        store.persist("trip-2").unwrap();
    }

    let store = SessionStore::open(dir.path()).unwrap();
    let session = store.load("trip-2").unwrap();
    assert_eq!(session.profile.language, Language::De);
    assert_eq!(session.history.len(), 1);
    assert!(store.get("trip-2").is_none());

    assert!(store.load("missing").is_none());
    assert!(store.load("../trip-2").is_none());
}
