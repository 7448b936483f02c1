use ta_domain::profile::Session;

/// Minimum history length (turns) before asking for contact details.
const MIN_HISTORY_TURNS: usize = 2;

/// Whether this turn should carry a contact request.
///
/// True only while no request has been made, nothing has been saved, no
/// contact is on file, and at least one full exchange has happened. Once
/// the session is marked `contact_requested` this never fires again.
pub fn should_request_contact(session: &Session) -> bool {
    let p = &session.profile;
    !p.contact_requested
        && !p.contact_saved
        && !p.has_contact()
        && session.history.len() >= MIN_HISTORY_TURNS
}
