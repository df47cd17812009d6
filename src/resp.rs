//! Redis Serialization Protocol (RESP2) values.
//!
//! Commands are sent as arrays of bulk strings and replies are decoded from a
//! growable buffer. Bulk strings are read by their declared length, so a reply
//! such as the `INFO` text (which itself contains `\r\n`) comes back whole.

use bytes::{Buf, BytesMut};
use thiserror::Error;

/// Deepest array nesting accepted from a server. Real replies stay far below it.
const MAX_ARRAY_DEPTH: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum RespError {
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
    #[error("unknown RESP type")]
    UnknownRespType,
    #[error("failed to parse integer")]
    FailedToParseInteger,
    #[error("invalid bulk string")]
    InvalidBulkString,
    #[error("invalid array")]
    InvalidArray,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    SimpleString(String),
    Error(String),
    Integer(i64),
    BulkString(String),
    Array(Vec<RespValue>),
    NullBulkString,
    NullArray,
}

impl RespValue {
    /// Builds a command array out of its name and arguments.
    ///
    /// ```
    /// use redis_advisor::resp::RespValue;
    ///
    /// let command = RespValue::command(&["INFO", "memory"]);
    /// assert_eq!(command.encode(), "*2\r\n$4\r\nINFO\r\n$6\r\nmemory\r\n");
    /// ```
    pub fn command(parts: &[&str]) -> Self {
        RespValue::Array(
            parts
                .iter()
                .map(|part| RespValue::BulkString(part.to_string()))
                .collect(),
        )
    }

    pub fn encode(&self) -> String {
        match self {
            RespValue::SimpleString(s) => format!("+{}\r\n", s),
            RespValue::Error(s) => format!("-{}\r\n", s),
            RespValue::Integer(i) => format!(":{}\r\n", i),
            RespValue::BulkString(s) => format!("${}\r\n{}\r\n", s.len(), s),
            RespValue::Array(elements) => {
                let mut encoded = format!("*{}\r\n", elements.len());

                for element in elements {
                    encoded.push_str(&element.encode());
                }

                encoded
            }
            RespValue::NullBulkString => "$-1\r\n".to_string(),
            RespValue::NullArray => "*-1\r\n".to_string(),
        }
    }

    /// Decodes one value from the front of `buffer`.
    ///
    /// Returns `Ok(None)` while the buffer does not hold a complete frame yet; in
    /// that case nothing is consumed. On success the bytes of the decoded frame
    /// are removed from the buffer.
    pub fn decode(buffer: &mut BytesMut) -> Result<Option<RespValue>, RespError> {
        let mut cursor = 0;

        match Self::decode_at(&buffer[..], &mut cursor, 0)? {
            Some(value) => {
                buffer.advance(cursor);
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn decode_at(
        data: &[u8],
        cursor: &mut usize,
        depth: usize,
    ) -> Result<Option<RespValue>, RespError> {
        let Some(line) = read_line(data, cursor) else {
            return Ok(None);
        };

        let Some((&type_byte, rest)) = line.split_first() else {
            return Err(RespError::UnknownRespType);
        };

        let content = std::str::from_utf8(rest).map_err(|_| RespError::InvalidUtf8)?;

        match type_byte {
            b'+' => Ok(Some(RespValue::SimpleString(content.to_string()))),
            b'-' => Ok(Some(RespValue::Error(content.to_string()))),
            b':' => content
                .parse::<i64>()
                .map(|value| Some(RespValue::Integer(value)))
                .map_err(|_| RespError::FailedToParseInteger),
            b'$' => {
                let declared_length = content
                    .parse::<i64>()
                    .map_err(|_| RespError::InvalidBulkString)?;

                if declared_length == -1 {
                    return Ok(Some(RespValue::NullBulkString));
                }

                let length =
                    usize::try_from(declared_length).map_err(|_| RespError::InvalidBulkString)?;

                let start = *cursor;
                let end = start
                    .checked_add(length)
                    .ok_or(RespError::InvalidBulkString)?;

                if data.len().saturating_sub(2) < end {
                    return Ok(None);
                }

                if &data[end..end + 2] != b"\r\n" {
                    return Err(RespError::InvalidBulkString);
                }

                *cursor = end + 2;

                Ok(Some(RespValue::BulkString(
                    String::from_utf8_lossy(&data[start..end]).into_owned(),
                )))
            }
            b'*' => {
                let declared_length = content
                    .parse::<i64>()
                    .map_err(|_| RespError::InvalidArray)?;

                if declared_length == -1 {
                    return Ok(Some(RespValue::NullArray));
                }

                if depth >= MAX_ARRAY_DEPTH {
                    return Err(RespError::InvalidArray);
                }

                let length =
                    usize::try_from(declared_length).map_err(|_| RespError::InvalidArray)?;

                // Declared lengths are untrusted. Each element needs at least 3 bytes.
                let remaining = data.len().saturating_sub(*cursor);
                let mut elements = Vec::with_capacity(length.min(remaining / 3));

                for _ in 0..length {
                    match Self::decode_at(data, cursor, depth + 1)? {
                        Some(element) => elements.push(element),
                        None => return Ok(None),
                    }
                }

                Ok(Some(RespValue::Array(elements)))
            }
            _ => Err(RespError::UnknownRespType),
        }
    }
}

/// Returns the line starting at `cursor` without its `\r\n` terminator and moves
/// the cursor past it.
fn read_line<'a>(data: &'a [u8], cursor: &mut usize) -> Option<&'a [u8]> {
    let start = *cursor;
    let position = data
        .get(start..)?
        .windows(2)
        .position(|window| window == b"\r\n")?;

    *cursor = start + position + 2;

    Some(&data[start..start + position])
}
