//! Attachment discovery in stored mail.
//!
//! A mailbox is a directory tree of RFC 822 messages (`.eml` files or a
//! maildir's `cur`/`new` entries). Messages are walked MIME part by MIME
//! part and attachments are matched on their exact filename.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mailparse::{DispositionType, ParsedMail};

/// An attachment body pulled out of a stored message.
#[derive(Debug)]
pub struct Attachment {
    pub message_path: PathBuf,
    pub filename: String,
    /// Decoded body (transfer encoding removed)
    pub body: Vec<u8>,
}

/// Find every attachment named `filename` under `dir`.
///
/// Results are ordered by message path, then by position in the message.
/// Messages that cannot be read or parsed are logged and skipped.
pub fn find_attachments(dir: &Path, filename: &str) -> Result<Vec<Attachment>> {
    let mut paths = Vec::new();
    collect_message_paths(dir, &mut paths)
        .with_context(|| format!("Failed to read mailbox directory {}", dir.display()))?;
    paths.sort();

    let mut attachments = Vec::new();
    for path in paths {
        let raw = match std::fs::read(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable message");
                continue;
            }
        };

        let mail = match mailparse::parse_mail(&raw) {
            Ok(mail) => mail,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unparsable message");
                continue;
            }
        };

        let before = attachments.len();
        collect_attachments(&mail, &path, filename, &mut attachments);
        tracing::trace!(
            path = %path.display(),
            found = attachments.len() - before,
            "Scanned message"
        );
    }

    Ok(attachments)
}

fn collect_message_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }

        if path.is_dir() {
            collect_message_paths(&path, paths)?;
        } else if path.is_file() {
            paths.push(path);
        }
    }
    Ok(())
}

fn collect_attachments(
    part: &ParsedMail<'_>,
    message_path: &Path,
    filename: &str,
    attachments: &mut Vec<Attachment>,
) {
    if !part.subparts.is_empty() {
        for subpart in &part.subparts {
            collect_attachments(subpart, message_path, filename, attachments);
        }
        return;
    }

    let disposition = part.get_content_disposition();
    let part_filename = disposition
        .params
        .get("filename")
        .cloned()
        .or_else(|| part.ctype.params.get("name").cloned());
    let is_attachment =
        matches!(disposition.disposition, DispositionType::Attachment) || part_filename.is_some();

    if !is_attachment || part_filename.as_deref() != Some(filename) {
        return;
    }

    match part.get_body_raw() {
        Ok(body) => attachments.push(Attachment {
            message_path: message_path.to_path_buf(),
            filename: filename.to_string(),
            body,
        }),
        Err(e) => tracing::warn!(
            path = %message_path.display(),
            error = %e,
            "Could not decode attachment body"
        ),
    }
}
