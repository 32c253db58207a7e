//! Wire framing for the agent protocol.
//!
//! Every message in either direction is a byte sequence terminated by a
//! single NUL; binary uploads additionally carry a 4-byte big-endian
//! length prefix ahead of the raw payload.

use common::errors::AppResult;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Frame terminator byte.
pub const FRAME_TERMINATOR: u8 = 0x00;

/// Reads one NUL-terminated frame and returns its text, excluding the
/// terminator.
///
/// Consumes exactly up to and including the terminator, so the stream is
/// left positioned at the first byte of the next frame. No maximum frame
/// length is enforced; callers wanting bounded latency wrap this in a
/// timeout. EOF before the terminator is an error.
pub async fn read_frame<R>(reader: &mut R) -> AppResult<String>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        let byte = reader.read_u8().await?;
        if byte == FRAME_TERMINATOR {
            break;
        }
        buf.push(byte);
    }
    Ok(String::from_utf8(buf)?)
}

/// Writes `text` followed by the frame terminator.
///
/// Does not flush; the caller decides when buffered bytes hit the wire.
pub async fn write_frame<W>(writer: &mut W, text: &str) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_u8(FRAME_TERMINATOR).await?;
    Ok(())
}

/// Encodes a payload length as exactly 4 big-endian bytes.
///
/// The single place the prefix format is defined. Lengths that do not fit
/// a u32 are rejected before this function is reached.
pub fn encode_length(len: u32) -> [u8; 4] {
    len.to_be_bytes()
}
