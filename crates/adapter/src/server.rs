//! Stream server for the adapter
//!
//! Reads request lines from any async reader and writes one response line per
//! request to any async writer, in order. The binary wires it to stdin/stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info, warn};

use crate::core::DirectionSet;
use crate::protocol::{create_error, ErrorCode, OutboundMessage};
use crate::runtime::{extract_seq_best_effort, Adapter};

/// Default cap on one request line (1 MiB)
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Seed for a reproducible `SimpleRng`; None uses the thread RNG
    pub seed: Option<u32>,
    /// Word-search placement directions
    pub directions: DirectionSet,
    pub max_line_bytes: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            directions: DirectionSet::forward(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

impl AdapterConfig {
    /// Load configuration from environment variables
    ///
    /// - `FLASHPLAY_SEED`: u32 seed (unset or invalid: thread RNG)
    /// - `FLASHPLAY_DIRECTIONS`: `4` or `8` (default 4)
    /// - `FLASHPLAY_MAX_LINE_BYTES`: request line cap (default 1 MiB)
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("FLASHPLAY_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let directions = env::var("FLASHPLAY_DIRECTIONS")
            .ok()
            .and_then(|s| DirectionSet::from_str(&s))
            .unwrap_or_default();

        let max_line_bytes = env::var("FLASHPLAY_MAX_LINE_BYTES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_MAX_LINE_BYTES);

        Self {
            seed,
            directions,
            max_line_bytes,
        }
    }
}

/// Counters reported when the input stream closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServeStats {
    pub requests: u64,
    pub errors: u64,
}

/// Read one `\n`-terminated line into `buf`, keeping at most `cap` bytes
///
/// The rest of an overlong line is consumed and discarded. Returns None at EOF,
/// otherwise whether the line was cut short.
async fn read_line_capped<R>(reader: &mut R, buf: &mut Vec<u8>, cap: usize) -> std::io::Result<Option<bool>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let mut read_any = false;
    let mut truncated = false;
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(read_any.then_some(truncated));
        }
        read_any = true;

        let newline = available.iter().position(|&b| b == b'\n');
        let end = newline.unwrap_or(available.len());
        let room = cap.saturating_sub(buf.len());
        if end > room {
            truncated = true;
        }
        buf.extend_from_slice(&available[..end.min(room)]);
        let used = newline.map_or(end, |i| i + 1);
        reader.consume(used);

        if newline.is_some() {
            return Ok(Some(truncated));
        }
    }
}

fn reject_line(raw: &[u8], message: &str) -> OutboundMessage {
    let seq = extract_seq_best_effort(&String::from_utf8_lossy(raw)).unwrap_or(0);
    OutboundMessage::Error(create_error(seq, ErrorCode::InvalidRequest, message))
}

/// Serve requests until the reader hits EOF
///
/// Lines that are too long or not UTF-8 get an `invalid_request` reply and the loop
/// carries on; only I/O failures end it early.
pub async fn serve_lines<R, W>(
    mut reader: R,
    mut writer: W,
    adapter: &mut Adapter,
) -> anyhow::Result<ServeStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let cap = adapter.config().max_line_bytes;
    let mut stats = ServeStats::default();
    let mut raw: Vec<u8> = Vec::with_capacity(4096);
    let mut buf: Vec<u8> = Vec::with_capacity(4096);

    info!("adapter serving line-delimited JSON");
    while let Some(truncated) = read_line_capped(&mut reader, &mut raw, cap).await? {
        let reply = if truncated {
            warn!(cap, "request line too long");
            Some(reject_line(&raw, "request line too long"))
        } else {
            match std::str::from_utf8(&raw) {
                Ok(line) => adapter.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "request line is not valid UTF-8");
                    Some(reject_line(&raw, "request line is not valid UTF-8"))
                }
            }
        };
        let Some(reply) = reply else {
            continue;
        };
        stats.requests += 1;
        if reply.is_error() {
            stats.errors += 1;
        }

        buf.clear();
        if let Err(e) = serde_json::to_writer(&mut buf, &reply) {
            error!(seq = reply.seq(), error = %e, "failed to encode response");
            continue;
        }
        buf.push(b'\n');
        writer.write_all(&buf).await?;
        writer.flush().await?;
    }

    info!(requests = stats.requests, errors = stats.errors, "input closed");
    Ok(stats)
}
