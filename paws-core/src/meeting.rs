//! Meeting records extracted from calendar attachments.
//!
//! Start and end are kept as the raw tokens found in the document. They are
//! only interpreted when a meeting is rendered, see [`crate::render`].

/// A meeting participant (also used for the organizer)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    /// Display name (CN parameter)
    pub name: Option<String>,
    /// Address taken from the mailto: value
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Person {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// A meeting invitation, as found in a single attachment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meeting {
    pub title: Option<String>,
    pub location: Option<String>,
    /// Raw DTSTART value, e.g. `20120616T210000Z`
    pub start: Option<String>,
    /// Raw DTEND value
    pub end: Option<String>,
    pub organizer: Option<Person>,
    /// Attendees in source order; duplicates are kept
    pub attendees: Vec<Person>,
}

impl Meeting {
    pub fn builder() -> MeetingBuilder {
        MeetingBuilder::default()
    }
}

/// Accumulator threaded through a single extraction pass.
#[derive(Debug, Default)]
pub struct MeetingBuilder {
    meeting: Meeting,
}

impl MeetingBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meeting.title = Some(title.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.meeting.location = Some(location.into());
        self
    }

    pub fn start(mut self, token: impl Into<String>) -> Self {
        self.meeting.start = Some(token.into());
        self
    }

    pub fn end(mut self, token: impl Into<String>) -> Self {
        self.meeting.end = Some(token.into());
        self
    }

    /// Replaces any organizer seen earlier.
    pub fn organizer(mut self, organizer: Person) -> Self {
        self.meeting.organizer = Some(organizer);
        self
    }

    pub fn attendee(mut self, attendee: Person) -> Self {
        self.meeting.attendees.push(attendee);
        self
    }

    pub fn build(self) -> Meeting {
        self.meeting
    }
}
