//! Line-delimited JSON-RPC over any async byte stream.

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::mcp::{handle_line, internal_error, McpState};

/// Answer one request per line until `reader` is exhausted.
pub async fn serve<R, W>(reader: R, writer: W, state: Arc<McpState>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    serve_with(reader, writer, move |line: &str| handle_line(line, &state)).await
}

/// Drive `handler` over each line of `reader`.
///
/// Each line is handled on the blocking pool so a long trace never stalls
/// the reader. A handler that panics costs only its own line: the client
/// gets an internal error and the loop moves on.
pub async fn serve_with<R, W, F>(reader: R, mut writer: W, handler: F) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    let mut lines = reader.lines();
    let mut handled = 0u64;
    let mut failed = 0u64;

    while let Some(line) = lines.next_line().await? {
        let handler = Arc::clone(&handler);
        let task_line = line.clone();
        let response = match tokio::task::spawn_blocking(move || handler(&task_line)).await {
            Ok(response) => response,
            Err(e) => {
                failed += 1;
                warn!(error = %e, failed, "request handler failed");
                Some(internal_error(&line))
            }
        };

        if let Some(response) = response {
            writer.write_all(response.to_string().as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        handled += 1;
        debug!(handled, "line handled");
    }

    info!(handled, failed, "input closed, shutting down");
    Ok(())
}
