//! Property extraction over unfolded content lines.

use tracing::{debug, trace};

use super::property::{parse_attendee, parse_organizer, parse_simple_value};
use crate::constants::VCALENDAR_SENTINEL;
use crate::meeting::{Meeting, MeetingBuilder};

type PropertyHandler = fn(MeetingBuilder, &str) -> MeetingBuilder;

/// Prefix dispatch table. Order matters: the first matching prefix wins.
const PROPERTY_HANDLERS: &[(&str, PropertyHandler)] = &[
    ("ATTENDEE;CUTYPE=", attendee),
    ("ORGANIZER", organizer),
    ("SUMMARY", summary),
    ("LOCATION", location),
    ("DTSTART", dtstart),
    ("DTEND", dtend),
];

fn attendee(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    meeting.attendee(parse_attendee(line))
}

fn organizer(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    meeting.organizer(parse_organizer(line))
}

fn summary(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    simple(meeting, line, "SUMMARY", |m, v| m.title(v))
}

fn location(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    simple(meeting, line, "LOCATION", |m, v| m.location(v))
}

fn dtstart(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    simple(meeting, line, "DTSTART", |m, v| m.start(v))
}

fn dtend(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    simple(meeting, line, "DTEND", |m, v| m.end(v))
}

fn simple(
    meeting: MeetingBuilder,
    line: &str,
    name: &str,
    set: fn(MeetingBuilder, &str) -> MeetingBuilder,
) -> MeetingBuilder {
    match parse_simple_value(line, name) {
        Some(value) => set(meeting, value),
        None => {
            trace!(property = name, line, "Dropping malformed property");
            meeting
        }
    }
}

/// Build a meeting from unfolded content lines.
///
/// Returns `None` when the first line is not a `BEGIN:VCALENDAR` line; that
/// is the signal for "not a calendar", not an error. Lines that do not fit
/// their property's grammar leave that field unset.
pub fn extract_meeting<S: AsRef<str>>(lines: &[S]) -> Option<Meeting> {
    let first = lines.first()?.as_ref();
    if !first.starts_with(VCALENDAR_SENTINEL) {
        debug!(first_line = first, "Not a calendar document");
        return None;
    }

    let meeting = lines
        .iter()
        .fold(Meeting::builder(), |meeting, line| {
            apply_line(meeting, line.as_ref())
        })
        .build();

    Some(meeting)
}

fn apply_line(meeting: MeetingBuilder, line: &str) -> MeetingBuilder {
    match PROPERTY_HANDLERS
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
    {
        Some((_, handler)) => handler(meeting, line),
        None => meeting,
    }
}
