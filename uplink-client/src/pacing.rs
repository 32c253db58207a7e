//! Pacing strategies for chunked uploads.
//!
//! The original driver paused 50ms between 2048-byte chunks to avoid
//! overwhelming the agent's receive buffer. Pacing is a strategy here so
//! callers (and tests) can pick something else, including nothing.

use std::time::Duration;

use async_trait::async_trait;

/// Controls the pause between upload chunks.
///
/// Invoked between chunks only — never before the first or after the
/// last, so a pacer cannot delay the final acknowledgement read.
#[async_trait]
pub trait ChunkPacer: Send + Sync {
    /// Waits until the next chunk may be written.
    async fn pace(&self);
}

/// No pause between chunks.
pub struct NoPacing;

#[async_trait]
impl ChunkPacer for NoPacing {
    async fn pace(&self) {}
}

/// Fixed pause between chunks.
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    /// The agent's historical 50ms throttle.
    pub fn agent_default() -> Self {
        Self(Duration::from_millis(50))
    }
}

#[async_trait]
impl ChunkPacer for FixedDelay {
    async fn pace(&self) {
        tokio::time::sleep(self.0).await;
    }
}
