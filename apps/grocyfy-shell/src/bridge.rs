//! # Command Bridge
//!
//! Carries commands from the frontend to [`dispatch`] and replies back, one
//! JSON document per line.
//!
//! ```text
//!   reader ──► line ──► Command ──► dispatch ──► Reply ──► Envelope ──► writer
//!                 │                      │
//!                 └──── ApiError ◄───────┘   (bad JSON or rejected input)
//! ```
//!
//! A line that fails to decode gets an error envelope; the session keeps
//! going. Only I/O failures on the reader or writer end the loop.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::commands::{dispatch, Command, Reply};
use crate::error::ApiError;
use crate::state::Session;

/// One response line.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl From<Result<Reply, ApiError>> for Envelope {
    fn from(result: Result<Reply, ApiError>) -> Self {
        match result {
            Ok(reply) => Envelope {
                ok: true,
                data: Some(reply),
                error: None,
            },
            Err(err) => Envelope {
                ok: false,
                data: None,
                error: Some(err),
            },
        }
    }
}

/// Decodes and runs one line of input.
pub fn handle_line(session: &mut Session, line: &str) -> Envelope {
    let result = serde_json::from_str::<Command>(line)
        .map_err(ApiError::from)
        .and_then(|command| dispatch(session, command));

    if let Err(err) = &result {
        warn!(code = ?err.code, message = %err.message, "command failed");
    }
    Envelope::from(result)
}

/// Serves commands until the reader is exhausted.
pub fn serve<R, W>(session: &mut Session, reader: R, mut writer: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "command received");

        let envelope = handle_line(session, line);
        let encoded = match serde_json::to_string(&envelope) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(%err, "failed to encode reply");
                serde_json::to_string(&Envelope::from(Err(ApiError::internal(
                    "Failed to encode reply",
                ))))?
            }
        };

        writer.write_all(encoded.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}
