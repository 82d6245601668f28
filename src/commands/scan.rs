use std::path::PathBuf;

use anyhow::Result;
use paws_core::PawsConfig;

use super::{Input, render_all};
use crate::mailbox;

pub async fn run(
    cfg: &PawsConfig,
    dir: Option<PathBuf>,
    attachment: Option<String>,
    echo: bool,
    pretty: bool,
) -> Result<()> {
    let format = cfg.display_format()?;
    let dir = dir.unwrap_or_else(|| cfg.mailbox_path());
    let name = attachment.unwrap_or_else(|| cfg.attachment_name.clone());

    if !dir.is_dir() {
        anyhow::bail!(
            "Mailbox directory not found at {}\n\
            Set mailbox_dir in {} or pass --dir",
            dir.display(),
            PawsConfig::config_path()?.display()
        );
    }

    tracing::info!(dir = %dir.display(), attachment = %name, "Scanning mailbox");

    let attachments =
        tokio::task::spawn_blocking(move || mailbox::find_attachments(&dir, &name)).await??;

    tracing::info!(count = attachments.len(), "Found matching attachments");

    let inputs = attachments
        .into_iter()
        .map(|attachment| {
            if echo {
                eprintln!("{}", String::from_utf8_lossy(&attachment.body));
            }
            Input {
                label: format!(
                    "{} ({})",
                    attachment.message_path.display(),
                    attachment.filename
                ),
                body: attachment.body,
            }
        })
        .collect();

    render_all(inputs, &format, pretty).await
}
