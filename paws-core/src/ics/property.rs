//! Micro-grammars for the invitation properties paws understands.
//!
//! Every function here is total: a line that does not fit the expected
//! shape yields `None` (or an empty field), never an error. The split-count
//! guards are deliberately strict; they decide which malformed real-world
//! lines are accepted.

use crate::meeting::Person;

/// Parse an `ATTENDEE;CUTYPE=...` line.
///
/// The name comes from the `CN=` parameter, the address from the
/// `X-NUM-GUESTS=n:mailto:addr` tail. Either may be missing; the attendee
/// is still returned.
///
/// ```
/// use paws_core::ics::property::parse_attendee;
///
/// let person = parse_attendee(
///     "ATTENDEE;CUTYPE=INDIVIDUAL;CN=Jane Doe;X-NUM-GUESTS=0:mailto:jane@example.com",
/// );
/// assert_eq!(person.name.as_deref(), Some("Jane Doe"));
/// assert_eq!(person.email.as_deref(), Some("jane@example.com"));
/// ```
pub fn parse_attendee(line: &str) -> Person {
    let mut attendee = Person::default();

    for word in line.split(';') {
        if word.starts_with("CN=") {
            if let Some(name) = word.split('=').nth(1) {
                attendee.name = Some(name.to_string());
            }
        } else if word.starts_with("X-NUM-GUESTS") {
            let parts: Vec<&str> = word.split(':').collect();
            if let [guests, scheme, email] = parts.as_slice()
                && guests.starts_with("X-NUM-GUESTS")
                && scheme.starts_with("mailto")
            {
                attendee.email = Some(email.to_string());
            }
        }
    }

    attendee
}

/// Parse an `ORGANIZER...` line.
///
/// Only a `CN=name:mailto:addr` parameter is understood. When it is absent
/// or malformed the organizer comes back with no fields set.
pub fn parse_organizer(line: &str) -> Person {
    let mut organizer = Person::default();

    for word in line.split(';').filter(|w| w.starts_with("CN=")) {
        let parts: Vec<&str> = word.split(':').collect();
        if let [cn, scheme, email] = parts.as_slice()
            && cn.starts_with("CN")
            && scheme.starts_with("mailto")
        {
            if let Some(name) = cn.split('=').nth(1) {
                organizer.name = Some(name.to_string());
            }
            organizer.email = Some(email.to_string());
        }
    }

    organizer
}

/// Parse a `NAME[;params]:value` line whose value holds no colon.
///
/// Returns the value when the line splits on `:` into exactly two parts and
/// the first starts with `name`.
///
/// ```
/// use paws_core::ics::property::parse_simple_value;
///
/// assert_eq!(parse_simple_value("SUMMARY:Team Sync", "SUMMARY"), Some("Team Sync"));
/// assert_eq!(parse_simple_value("SUMMARY:Re: Sync", "SUMMARY"), None);
/// ```
pub fn parse_simple_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let mut parts = line.split(':');
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() || !key.starts_with(name) {
        return None;
    }
    Some(value)
}
