//! iCalendar invitation parsing.
//!
//! Raw attachment bytes are unfolded into logical lines, then scanned once
//! for the handful of properties a meeting needs.

mod extract;
pub mod property;
mod unfold;

pub use extract::extract_meeting;
pub use unfold::unfold;

use crate::meeting::Meeting;

/// Parse a raw calendar attachment.
///
/// Returns `None` when the attachment is not an iCalendar document.
pub fn parse_invitation(attachment: &[u8]) -> Option<Meeting> {
    extract_meeting(&unfold(attachment))
}
