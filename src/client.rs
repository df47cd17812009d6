//! A minimal Redis client: one TCP connection, one request in flight.

use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::AdvisorConfig;
use crate::info::{parse_info, ParsedInfo};
use crate::input::{read_reply, ClientError};
use crate::resp::RespValue;

/// A single connection to a Redis node.
///
/// Requests are strictly one at a time. After a failed write or read (timeout,
/// I/O or protocol error) every later command fails with
/// [`ClientError::ConnectionUnusable`].
pub struct RedisClient {
    stream: TcpStream,
    buffer: BytesMut,
    timeout: Duration,
    address: String,
    unusable: bool,
}

impl RedisClient {
    /// Connects to the node described by `config`, authenticating and selecting
    /// the logical database when the configuration asks for it.
    pub async fn connect(config: &AdvisorConfig) -> Result<Self, ClientError> {
        let address = config.address();

        let stream = timeout(config.timeout, TcpStream::connect(&address))
            .await
            .map_err(|_| ClientError::Timeout)?
            .map_err(|e| ClientError::IoError(e.to_string()))?;

        info!(%address, "connected to redis");

        let mut client = RedisClient {
            stream,
            buffer: BytesMut::with_capacity(4096),
            timeout: config.timeout,
            address,
            unusable: false,
        };

        if let Some(password) = &config.password {
            client.auth(config.username.as_deref(), password).await?;
        }

        if config.db != 0 {
            client.select(config.db).await?;
        }

        Ok(client)
    }

    /// The `host:port` this client is connected to.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sends one command and waits for its reply.
    ///
    /// Error replies (`-ERR ...`) are turned into [`ClientError::ServerError`].
    ///
    /// # Arguments
    ///
    /// * `parts` - The command name followed by its arguments
    ///
    /// # Returns
    ///
    /// * `Ok(RespValue)` - The server's reply
    /// * `Err(ClientError::Timeout)` - If no full reply arrived within the configured timeout
    /// * `Err(ClientError::ConnectionUnusable)` - If an earlier command failed to write or read
    pub async fn send_command(&mut self, parts: &[&str]) -> Result<RespValue, ClientError> {
        if self.unusable {
            return Err(ClientError::ConnectionUnusable);
        }

        let command = RespValue::command(parts);

        // Only the command name is logged, arguments may carry credentials.
        debug!(command = parts.first().copied().unwrap_or_default(), "sending command");

        if let Err(e) = self.write_command(&command).await {
            return Err(self.mark_unusable(ClientError::IoError(e.to_string())));
        }

        let read = timeout(self.timeout, read_reply(&mut self.stream, &mut self.buffer)).await;

        let reply = match read {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => return Err(self.mark_unusable(e)),
            Err(_) => return Err(self.mark_unusable(ClientError::Timeout)),
        };

        match reply {
            RespValue::Error(message) => Err(ClientError::ServerError(message)),
            reply => Ok(reply),
        }
    }

    async fn write_command(&mut self, command: &RespValue) -> tokio::io::Result<()> {
        self.stream.write_all(command.encode().as_bytes()).await?;
        self.stream.flush().await?;

        Ok(())
    }

    fn mark_unusable(&mut self, error: ClientError) -> ClientError {
        warn!(address = %self.address, %error, "connection marked unusable");

        self.buffer.clear();
        self.unusable = true;

        error
    }

    /// Sends `PING` and expects `PONG` back.
    pub async fn ping(&mut self) -> Result<(), ClientError> {
        let reply = self.send_command(&["PING"]).await?;
        expect_simple_string(reply, "PONG")
    }

    /// Authenticates with `AUTH <password>`, or `AUTH <username> <password>` for
    /// ACL users.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The server answered `OK`
    /// * `Err(ClientError::ServerError)` - If the credentials were rejected
    pub async fn auth(&mut self, username: Option<&str>, password: &str) -> Result<(), ClientError> {
        let reply = match username {
            Some(username) => self.send_command(&["AUTH", username, password]).await?,
            None => self.send_command(&["AUTH", password]).await?,
        };

        expect_simple_string(reply, "OK")
    }

    /// Switches the connection to logical database `db`.
    pub async fn select(&mut self, db: u32) -> Result<(), ClientError> {
        let db = db.to_string();
        let reply = self.send_command(&["SELECT", &db]).await?;
        expect_simple_string(reply, "OK")
    }

    /// Returns the raw text of `INFO`, or `INFO <section>` when one is given.
    pub async fn info(&mut self, section: Option<&str>) -> Result<String, ClientError> {
        let reply = match section {
            Some(section) => self.send_command(&["INFO", section]).await?,
            None => self.send_command(&["INFO"]).await?,
        };

        match reply {
            RespValue::BulkString(text) => {
                debug!(bytes = text.len(), "received INFO reply");
                Ok(text)
            }
            other => Err(ClientError::UnexpectedResponse(other)),
        }
    }

    /// Runs `INFO [section]` and parses the reply.
    ///
    /// # Returns
    ///
    /// * `Ok(ParsedInfo)` - The parsed reply, empty if the text was malformed
    /// * `Err(ClientError)` - If the round-trip fails or the reply is not a bulk string
    pub async fn fetch_info(&mut self, section: Option<&str>) -> Result<ParsedInfo, ClientError> {
        let reply = self.info(section).await?;
        Ok(parse_info(&reply))
    }
}

fn expect_simple_string(reply: RespValue, expected: &str) -> Result<(), ClientError> {
    match reply {
        RespValue::SimpleString(s) if s == expected => Ok(()),
        other => Err(ClientError::UnexpectedResponse(other)),
    }
}
