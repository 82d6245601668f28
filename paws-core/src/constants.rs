/// Sentinel that must open the first logical line of a calendar attachment.
pub const VCALENDAR_SENTINEL: &str = "BEGIN:VCALENDAR";

/// Attachment filename looked for when scanning mail.
pub const DEFAULT_ATTACHMENT_NAME: &str = "invite.ics";

/// Where stored messages live unless configured otherwise.
pub const DEFAULT_MAILBOX_DIR: &str = "~/Mail";

/// Short date form, e.g. `6/16/2012`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Short time form, e.g. `9:00 PM`.
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

pub const DEFAULT_LOG_LEVEL: &str = "info";
