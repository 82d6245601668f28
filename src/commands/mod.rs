pub mod config;
pub mod parse;
pub mod scan;

use anyhow::Result;
use paws_core::{DisplayFormat, MeetingDocument, PawsResult, parse_invitation};
use tokio::task::JoinSet;

/// One attachment waiting to be parsed, labelled for log messages.
pub struct Input {
    pub label: String,
    pub body: Vec<u8>,
}

/// Parse and render a single attachment.
///
/// `Ok(None)` means the attachment is not a calendar.
pub fn render_attachment(body: &[u8], format: &DisplayFormat) -> PawsResult<Option<MeetingDocument>> {
    match parse_invitation(body) {
        Some(meeting) => Ok(Some(MeetingDocument::new(&meeting, format)?)),
        None => Ok(None),
    }
}

/// Parse every input on the blocking pool, then print the documents in
/// input order. Fails after printing if any meeting could not be rendered.
pub async fn render_all(inputs: Vec<Input>, format: &DisplayFormat, pretty: bool) -> Result<()> {
    let mut set = JoinSet::new();
    let mut labels = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.into_iter().enumerate() {
        labels.push(input.label);
        let format = format.clone();
        set.spawn_blocking(move || (index, render_attachment(&input.body, &format)));
    }

    let mut results: Vec<Option<PawsResult<Option<MeetingDocument>>>> =
        (0..labels.len()).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined?;
        results[index] = Some(result);
    }

    let mut failures = 0;
    let mut rendered = 0;
    for (label, result) in labels.iter().zip(results) {
        match result {
            Some(Ok(Some(doc))) => {
                let json = if pretty { doc.to_json_pretty()? } else { doc.to_json()? };
                println!("{json}");
                rendered += 1;
            }
            Some(Ok(None)) => tracing::debug!(source = %label, "Skipping non-calendar attachment"),
            Some(Err(e)) => {
                tracing::warn!(source = %label, error = %e, "Could not render meeting");
                failures += 1;
            }
            None => {}
        }
    }

    tracing::info!(rendered, failures, "Done");

    if failures > 0 {
        anyhow::bail!("{failures} meeting(s) could not be rendered");
    }
    Ok(())
}
