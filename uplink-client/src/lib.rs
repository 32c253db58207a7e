//! Client for the host agent's framed TCP protocol.
//!
//! One [`Session`] owns one authenticated TCP connection and exposes the
//! two protocol operations:
//! - [`Session::send`] — push an opaque payload, chunked with a
//!   length prefix,
//! - [`Session::list_databases`] — fetch the database connection
//!   descriptors provisioned for this session.
//!
//! All replies from the agent are NUL-terminated frames; see [`framing`].

pub mod framing;
pub mod pacing;
pub mod session;
pub mod status;

pub use pacing::{ChunkPacer, FixedDelay, NoPacing};
pub use session::{Session, CHUNK_SIZE};
pub use status::Status;
