//! Meeting-invitation extraction from iCalendar attachments.
//!
//! The pipeline runs one way:
//! - [`ics::unfold`] turns raw attachment bytes into logical content lines
//! - [`ics::extract_meeting`] scans those lines into a [`Meeting`]
//! - [`render::MeetingDocument`] interprets timestamps and produces JSON
//!
//! Extraction never fails: malformed properties are skipped and a document
//! that is not a calendar simply yields no meeting. Only rendering a
//! malformed start or end timestamp is an error.

pub mod constants;
pub mod datetime;
pub mod error;
pub mod ics;
pub mod meeting;
pub mod paws_config;
pub mod render;

pub use datetime::{DateParseError, DisplayFormat};
pub use error::{PawsError, PawsResult};
pub use ics::parse_invitation;
pub use meeting::{Meeting, MeetingBuilder, Person};
pub use paws_config::PawsConfig;
pub use render::{MeetingDocument, PersonDocument};
