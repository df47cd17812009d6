//! Reading replies from a Redis connection.
//!
//! Bytes are accumulated in a [`BytesMut`] until the RESP decoder reports a
//! complete frame, so replies split over several TCP reads (large `INFO`
//! output typically is) are reassembled before they reach the caller.

use bytes::BytesMut;
use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::resp::{RespError, RespValue};

/// Errors that can occur while talking to a Redis server.
#[derive(Error, Debug, PartialEq)]
pub enum ClientError {
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Connection closed")]
    ConnectionClosed,
    #[error("Timed out waiting for the server")]
    Timeout,
    #[error("RESP parse error: {0}")]
    RespParseError(#[from] RespError),
    #[error("Server replied with an error: {0}")]
    ServerError(String),
    #[error("Connection is unusable after an earlier failed read")]
    ConnectionUnusable,
    #[error("Unexpected response from server: {0:?}")]
    UnexpectedResponse(RespValue),
}

/// Reads from `stream` until one full RESP value can be decoded from `buffer`.
///
/// Bytes following the decoded value stay in `buffer` for the next call.
///
/// # Returns
///
/// * `Ok(RespValue)` - The next reply sent by the server
/// * `Err(ClientError::ConnectionClosed)` - If the stream ends before a full frame arrived
/// * `Err(ClientError::IoError)` - If reading from the stream fails
/// * `Err(ClientError::RespParseError)` - If the bytes are not valid RESP
pub async fn read_reply<R>(stream: &mut R, buffer: &mut BytesMut) -> Result<RespValue, ClientError>
where
    R: AsyncReadExt + Unpin,
{
    loop {
        if let Some(value) = RespValue::decode(buffer)? {
            return Ok(value);
        }

        let number_of_bytes = stream
            .read_buf(buffer)
            .await
            .map_err(|e| ClientError::IoError(e.to_string()))?;

        if number_of_bytes == 0 {
            return Err(ClientError::ConnectionClosed);
        }
    }
}
