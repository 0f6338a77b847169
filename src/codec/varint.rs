//! Base-128 varints and zigzag mapping.
//!
//! Each byte carries 7 payload bits, least significant group first. The
//! continuation bit (0x80) is set on every byte except the last.

use super::kind::CONTINUATION;
use super::sink::ByteSink;

/// Append `value` as an unsigned varint.
#[inline]
pub fn write_varint(sink: &mut ByteSink, mut value: u64) {
    while value >= CONTINUATION as u64 {
        sink.push((value as u8 & 0x7f) | CONTINUATION);
        value >>= 7;
    }
    sink.push(value as u8);
}

/// Read an unsigned varint of at most `max_len` bytes holding `bits` bits.
///
/// Returns the value and the number of bytes it occupied, or `None` when the
/// buffer ends first, no terminating byte appears within `max_len` bytes, or
/// the last permitted byte carries bits beyond the width.
#[inline]
pub fn read_varint(data: &[u8], max_len: usize, bits: u32) -> Option<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for i in 0..max_len {
        let byte = *data.get(i)?;
        let chunk = (byte & 0x7f) as u64;

        if byte & CONTINUATION == 0 {
            if i == max_len - 1 && chunk >> (bits - shift) != 0 {
                return None;
            }
            return Some((value | (chunk << shift), i + 1));
        }

        value |= chunk << shift;
        shift += 7;
    }

    None
}

/// Length in bytes of the varint at the start of `data`.
#[inline]
pub fn varint_len(data: &[u8], max_len: usize, bits: u32) -> Option<usize> {
    read_varint(data, max_len, bits).map(|(_, len)| len)
}

/// Number of bytes `value` occupies as a varint.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    ((bits + 6) / 7).max(1)
}

/// Map a signed 32-bit value onto an unsigned one, small magnitudes first.
#[inline]
pub fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_encode32`].
#[inline]
pub fn zigzag_decode32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Map a signed 64-bit value onto an unsigned one, small magnitudes first.
#[inline]
pub fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode64`].
#[inline]
pub fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
