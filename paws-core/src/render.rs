//! JSON rendering of extracted meetings.

use serde::Serialize;

use crate::datetime::{DateParseError, DisplayFormat};
use crate::error::PawsResult;
use crate::meeting::{Meeting, Person};

/// The JSON document emitted for one meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeetingDocument {
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub organizer: Option<PersonDocument>,
    pub attendees: Vec<PersonDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonDocument {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<&Person> for PersonDocument {
    fn from(person: &Person) -> Self {
        PersonDocument {
            name: person.name.clone(),
            email: person.email.clone(),
        }
    }
}

impl MeetingDocument {
    /// Interpret the meeting's raw start/end tokens and build the document.
    ///
    /// An absent token leaves its date and time unset. A token that is
    /// present but malformed fails the whole render.
    pub fn new(meeting: &Meeting, format: &DisplayFormat) -> Result<Self, DateParseError> {
        let (start_date, start_time) = render_token(meeting.start.as_deref(), format)?;
        let (end_date, end_time) = render_token(meeting.end.as_deref(), format)?;

        Ok(MeetingDocument {
            start_date,
            start_time,
            end_date,
            end_time,
            location: meeting.location.clone(),
            title: meeting.title.clone(),
            organizer: meeting.organizer.as_ref().map(PersonDocument::from),
            attendees: meeting.attendees.iter().map(PersonDocument::from).collect(),
        })
    }

    pub fn to_json(&self) -> PawsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> PawsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn render_token(
    token: Option<&str>,
    format: &DisplayFormat,
) -> Result<(Option<String>, Option<String>), DateParseError> {
    match token {
        Some(token) => {
            let (date, time) = format.render_token(token)?;
            Ok((Some(date), Some(time)))
        }
        None => Ok((None, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(meeting: &Meeting) -> String {
        MeetingDocument::new(meeting, &DisplayFormat::default())
            .unwrap()
            .to_json()
            .unwrap()
    }

    fn sample_meeting() -> Meeting {
        Meeting::builder()
            .title("Team Sync")
            .location("Room 4")
            .start("20120616T210000Z")
            .end("20120616T220000Z")
            .organizer(Person::new("John Smith", "john@example.com"))
            .attendee(Person::new("Jane Doe", "jane@example.com"))
            .attendee(Person::default())
            .build()
    }

    #[test]
    fn test_render_document_shape() {
        let json = to_json(&sample_meeting());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({
                "StartDate": "6/16/2012",
                "StartTime": "9:00 PM",
                "EndDate": "6/16/2012",
                "EndTime": "10:00 PM",
                "Location": "Room 4",
                "Title": "Team Sync",
                "Organizer": {"Name": "John Smith", "Email": "john@example.com"},
                "Attendees": [
                    {"Name": "Jane Doe", "Email": "jane@example.com"},
                    {"Name": null, "Email": null}
                ]
            })
        );
    }

    #[test]
    fn test_render_keeps_key_order() {
        let json = to_json(&sample_meeting());
        let keys = [
            "StartDate", "StartTime", "EndDate", "EndTime", "Location", "Title", "Organizer",
            "Attendees",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_escapes_strings() {
        let meeting = Meeting::builder()
            .title("Say \"hi\"\\now")
            .location("Line1\nLine2\u{1}")
            .build();

        let json = to_json(&meeting);
        assert!(json.contains(r#""Title":"Say \"hi\"\\now""#));
        assert!(json.contains(r#""Location":"Line1\nLine2\u0001""#));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Title"], "Say \"hi\"\\now");
    }

    #[test]
    fn test_render_without_timestamps() {
        let meeting = Meeting::builder().title("Untimed").build();
        let doc = MeetingDocument::new(&meeting, &DisplayFormat::default()).unwrap();
        assert_eq!(doc.start_date, None);
        assert_eq!(doc.end_time, None);
        assert_eq!(doc.organizer, None);
    }

    #[test]
    fn test_unrenderable_pattern_is_an_error_not_a_panic() {
        let err = DisplayFormat::new("%Q", "%H").unwrap_err();
        assert!(matches!(err, crate::error::PawsError::Config(_)));

        let meeting = Meeting::builder().start("20120616T210000Z").build();
        let format = DisplayFormat::new("%Y", "%H").unwrap();
        let doc = MeetingDocument::new(&meeting, &format).unwrap();
        assert_eq!(doc.start_date.as_deref(), Some("2012"));
        assert_eq!(doc.start_time.as_deref(), Some("21"));
    }

    #[test]
    fn test_render_fails_on_malformed_timestamp() {
        let meeting = Meeting::builder()
            .start("20120616T210000Z")
            .end("20120616T220000")
            .build();

        let err = MeetingDocument::new(&meeting, &DisplayFormat::default()).unwrap_err();
        assert_eq!(err.token, "20120616T220000");
    }
}
