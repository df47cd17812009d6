use std::time::Duration;

use bytes::BytesMut;
use redis_advisor::{config::AdvisorConfig, input::read_reply, resp::RespValue};
use tokio::{io::AsyncWriteExt, net::TcpListener, task::JoinHandle};

/// Test utilities for building commands and INFO replies
pub struct TestUtils;

impl TestUtils {
    pub fn command(parts: &[&str]) -> RespValue {
        RespValue::command(parts)
    }

    pub fn ok() -> RespValue {
        RespValue::SimpleString("OK".to_string())
    }

    pub fn bulk(text: &str) -> RespValue {
        RespValue::BulkString(text.to_string())
    }

    /// An INFO reply shaped like a real server's, with the given fields in the
    /// Memory section.
    pub fn info_reply(memory_fields: &[&str]) -> String {
        let mut sections = vec![
            "# Server".to_string(),
            "redis_version:7.2.4".to_string(),
            "redis_mode:standalone".to_string(),
            "".to_string(),
            "# Clients".to_string(),
            "connected_clients:1".to_string(),
            "".to_string(),
            "# Memory".to_string(),
            "used_memory:1048576".to_string(),
        ];

        sections.extend(memory_fields.iter().map(|field| field.to_string()));
        sections.extend([
            "".to_string(),
            "# Keyspace".to_string(),
            "db0:keys=5,expires=0,avg_ttl=0".to_string(),
        ]);

        sections.join("\r\n")
    }

    pub fn config_for(address: &str) -> AdvisorConfig {
        let (host, port) = address.rsplit_once(':').unwrap();

        AdvisorConfig {
            host: host.to_string(),
            port: port.parse().unwrap(),
            timeout: Duration::from_millis(500),
            ..AdvisorConfig::default()
        }
    }
}

/// A single-connection server that checks the commands it receives and plays
/// back canned replies.
pub struct FakeRedisServer {
    pub address: String,
    pub handle: JoinHandle<()>,
}

impl FakeRedisServer {
    /// Expects `exchanges` in order, answering each command with its reply, then
    /// closes the connection.
    pub async fn start(exchanges: Vec<(RespValue, RespValue)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buffer = BytesMut::new();

            for (expected_command, reply) in exchanges {
                let command = read_reply(&mut stream, &mut buffer).await.unwrap();
                assert_eq!(command, expected_command);

                stream.write_all(reply.encode().as_bytes()).await.unwrap();
                stream.flush().await.unwrap();
            }
        });

        FakeRedisServer { address, handle }
    }

    /// Accepts one connection and keeps it open without ever answering.
    pub async fn start_silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        let handle = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        FakeRedisServer { address, handle }
    }

    pub async fn finish(self) {
        self.handle.await.unwrap();
    }
}
