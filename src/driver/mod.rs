//! Line-oriented command driver for the contact directory.
//!
//! Reads JSON commands one per line and writes one JSON response per line.

pub mod commands;

pub use commands::{execute, handle_line, Command, Response};

use crate::services::ContactService;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Run commands from `reader` against `service` until end of input.
///
/// Returns the number of commands processed (blank lines excluded).
pub async fn run<R, W>(service: &ContactService, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut processed = 0;

    while let Some(line) = lines.next_line().await? {
        let Some(response) = handle_line(service, &line) else {
            continue;
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        processed += 1;
    }

    writer.flush().await?;
    info!(processed, "Input exhausted");
    Ok(processed)
}
