//! Framed point-cloud container decoding
//!
//! A container is a flat sequence of records, each
//! `[10-byte magic "POINTCLOUD"][u64 LE payload length][payload]`, where the
//! payload is a packed run of 12-byte points (`f32` x, y, z, little endian).
//! A zero-length record is an explicit empty-frame marker and produces no
//! frame.
//!
//! Decoding is strictly forward with no resync: the format carries no resync
//! marker, so the first structural anomaly ends the stream. Anomalies are not
//! errors; the frames validated before them are returned as-is so a truncated
//! or corrupted capture still plays back its valid prefix.

use cloudreel_core::{filter_finite, Frame, FrameVideo, Point3f, POINT_SIZE};

/// Magic tag opening every record, exact byte match, not null-terminated.
pub const MAGIC: &[u8; 10] = b"POINTCLOUD";

/// Fixed record header size: magic tag plus u64 payload length.
pub const HEADER_SIZE: usize = MAGIC.len() + 8;

/// Decode a whole container buffer into a frame video.
///
/// Never fails: malformed trailing data stops decoding and whatever was
/// validated before it is returned.
pub fn decode(buffer: &[u8]) -> FrameVideo {
    let mut frames = Vec::new();
    let mut cursor = 0usize;

    while buffer.len() - cursor >= HEADER_SIZE {
        if &buffer[cursor..cursor + MAGIC.len()] != MAGIC {
            // End of stream or trailing garbage, by policy not an error.
            log::debug!("non-matching magic tag at offset {cursor}, stopping");
            break;
        }

        let mut len_bytes = [0u8; 8];
        len_bytes.copy_from_slice(&buffer[cursor + MAGIC.len()..cursor + HEADER_SIZE]);
        let declared = u64::from_le_bytes(len_bytes);
        cursor += HEADER_SIZE;

        let Some(payload_len) = usize::try_from(declared)
            .ok()
            .filter(|len| *len <= buffer.len() - cursor)
        else {
            log::warn!(
                "payload of {declared} bytes at offset {cursor} extends past end of buffer, \
                 stopping"
            );
            break;
        };

        if payload_len == 0 {
            // Explicit empty-frame marker: consumed, no frame produced.
            continue;
        }

        if payload_len % POINT_SIZE != 0 {
            // Misaligned payload means the stream is desynchronized and the
            // format has no resync marker to scan for.
            log::warn!(
                "payload length {payload_len} at offset {cursor} is not a multiple of \
                 {POINT_SIZE}, stopping"
            );
            break;
        }

        let payload = &buffer[cursor..cursor + payload_len];
        frames.push(decode_frame(payload));
        cursor += payload_len;
    }

    FrameVideo::from_frames(frames)
}

/// Decode one record payload into a sanitized frame.
fn decode_frame(payload: &[u8]) -> Frame {
    let mut points = Vec::with_capacity(payload.len() / POINT_SIZE);
    for chunk in payload.chunks_exact(POINT_SIZE) {
        let x = read_f32_le(&chunk[0..4]);
        let y = read_f32_le(&chunk[4..8]);
        let z = read_f32_le(&chunk[8..12]);
        points.push(Point3f::new(x, y, z));
    }
    Frame::from_points(filter_finite(&points))
}

/// Read one little-endian `f32` from a 4-byte slice.
fn read_f32_le(bytes: &[u8]) -> f32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    f32::from_le_bytes(buf)
}
