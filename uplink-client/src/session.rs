//! Session state machine for the agent connection.
//!
//! A [`Session`] value only exists after a successful handshake, so
//! "request before authentication" is unrepresentable. Request methods
//! take `&mut self`, which serializes all protocol traffic on the single
//! underlying stream; share a session between tasks behind a `Mutex` if
//! you must, never by cloning the connection.

use std::time::Duration;

use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use common::models::DatabaseDescriptor;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufStream};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::framing;
use crate::pacing::{ChunkPacer, FixedDelay};
use crate::status::Status;

/// Upload chunk size, fixed by the agent's receive loop.
pub const CHUNK_SIZE: usize = 2048;

const CMD_SEND: &str = "send";
const CMD_DB_LIST: &str = "dbList";

/// One authenticated connection to the agent.
pub struct Session<S = TcpStream> {
    stream: BufStream<S>,
    pacer: Box<dyn ChunkPacer>,
    io_timeout: Duration,
}

impl<S> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("io_timeout", &self.io_timeout)
            .finish_non_exhaustive()
    }
}

impl Session<TcpStream> {
    /// Opens a TCP connection to the configured endpoint and performs the
    /// token handshake.
    ///
    /// Uses the agent's historical chunk pacing (50ms fixed delay). A
    /// rejected handshake or a connection failure is returned to the
    /// caller; deciding whether that ends the process is the caller's
    /// business, not this library's.
    pub async fn connect(config: &AppConfig, token: &str) -> AppResult<Self> {
        let endpoint = config.endpoint();
        tracing::debug!(endpoint = %endpoint, "connecting to agent");
        let stream = timeout(config.io_timeout, TcpStream::connect(&endpoint))
            .await
            .map_err(|_| AppError::Timeout(config.io_timeout))??;
        Self::establish(
            stream,
            token,
            config.io_timeout,
            Box::new(FixedDelay::agent_default()),
        )
        .await
    }
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Performs the token handshake over an already-open stream.
    ///
    /// Sends `<token>\0` and reads one status frame. Anything other than
    /// `ok` closes the stream and yields [`AppError::AuthRejected`]; the
    /// token is assumed single-use, so retrying it is pointless.
    pub async fn establish(
        stream: S,
        token: &str,
        io_timeout: Duration,
        pacer: Box<dyn ChunkPacer>,
    ) -> AppResult<Self> {
        let mut session = Self {
            stream: BufStream::new(stream),
            pacer,
            io_timeout,
        };
        framing::write_frame(&mut session.stream, token).await?;
        session.stream.flush().await?;
        let reply = session.read_reply().await?;
        if !Status::parse(&reply).is_ok() {
            tracing::warn!(reply = %reply, "agent rejected handshake");
            return Err(AppError::AuthRejected(reply));
        }
        tracing::debug!("session authenticated");
        Ok(session)
    }

    /// Pushes an opaque payload to the agent.
    ///
    /// Wire sequence: `send\0`, readiness ack, 4-byte big-endian length,
    /// payload in [`CHUNK_SIZE`] chunks (pacer between chunks), final
    /// ack. If the readiness ack is anything but `ok`, no length prefix
    /// or payload bytes are written.
    pub async fn send(&mut self, payload: &[u8]) -> AppResult<()> {
        let length = u32::try_from(payload.len())
            .map_err(|_| AppError::PayloadTooLarge(payload.len()))?;

        framing::write_frame(&mut self.stream, CMD_SEND).await?;
        self.stream.flush().await?;
        let reply = self.read_reply().await?;
        if !Status::parse(&reply).is_ok() {
            return Err(AppError::CommandRejected {
                command: CMD_SEND,
                reply,
            });
        }

        self.stream
            .write_all(&framing::encode_length(length))
            .await?;
        // The agent reads exactly `length` bytes; chunking exists only to
        // pace the writes, so an exact multiple produces no empty tail.
        let mut chunks = payload.chunks(CHUNK_SIZE).peekable();
        while let Some(chunk) = chunks.next() {
            self.stream.write_all(chunk).await?;
            self.stream.flush().await?;
            if chunks.peek().is_some() {
                self.pacer.pace().await;
            }
        }
        self.stream.flush().await?;
        tracing::debug!(bytes = payload.len(), "payload transmitted");

        let reply = self.read_reply().await?;
        if !Status::parse(&reply).is_ok() {
            return Err(AppError::UploadRejected(reply));
        }
        Ok(())
    }

    /// Fetches the database inventory provisioned for this session.
    ///
    /// Wire sequence: `dbList\0`, one frame holding a JSON array of
    /// descriptors. Malformed JSON (or a non-array top level) surfaces as
    /// [`AppError::Decode`]; there is no partial result.
    pub async fn list_databases(&mut self) -> AppResult<Vec<DatabaseDescriptor>> {
        framing::write_frame(&mut self.stream, CMD_DB_LIST).await?;
        self.stream.flush().await?;
        let body = self.read_reply().await?;
        let descriptors: Vec<DatabaseDescriptor> = serde_json::from_str(&body)?;
        tracing::debug!(count = descriptors.len(), "database inventory received");
        Ok(descriptors)
    }

    /// Reads one response frame under the configured deadline.
    async fn read_reply(&mut self) -> AppResult<String> {
        timeout(self.io_timeout, framing::read_frame(&mut self.stream))
            .await
            .map_err(|_| AppError::Timeout(self.io_timeout))?
    }
}
