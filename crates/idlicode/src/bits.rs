//! # Bit-Level Transcoding
//!
//! Byte stream <-> fixed-width bit group transcoding.
//!
//! Bits flow most-significant-bit first: each byte contributes its 8
//! bits in MSB order, and each group is the next `width` bits of that
//! stream. The groups are the bit patterns the alphabet maps to words.
//!
//! The accumulator never materializes the bit string; `width` is at
//! most 8 and a byte adds at most 8 bits, so a `u32` always has room.

use crate::{
    alphabet::Pattern,
    errors::{ICResult, IdlicodeError},
};

/// Chunk a byte stream into `width`-bit groups, MSB first.
///
/// The final group is zero-filled on the right when the bit count is
/// not a multiple of `width`.
///
/// ## Arguments
/// * `bytes` - the input byte stream.
/// * `width` - bits per group, `1..=8`.
///
/// ## Returns
/// The groups, and the number of fill bits in the final group
/// (`0 <= fill < width`).
pub fn pack_groups(bytes: &[u8], width: u32) -> (Vec<Pattern>, u32) {
    debug_assert!((1..=8).contains(&width));
    let mask: u32 = (1 << width) - 1;

    let mut groups = Vec::with_capacity((bytes.len() * 8).div_ceil(width as usize));
    let mut acc: u32 = 0;
    let mut acc_len: u32 = 0;

    for &b in bytes {
        acc = (acc << 8) | u32::from(b);
        acc_len += 8;
        while acc_len >= width {
            acc_len -= width;
            groups.push(((acc >> acc_len) & mask) as Pattern);
        }
    }

    let mut fill = 0;
    if acc_len > 0 {
        fill = width - acc_len;
        // Stale bits above acc_len shift past width and mask away.
        groups.push(((acc << fill) & mask) as Pattern);
    }

    (groups, fill)
}

/// Reassemble `width`-bit groups into bytes, stripping `pad` trailing
/// fill bits.
///
/// ## Arguments
/// * `groups` - the bit groups, MSB first.
/// * `width` - bits per group, `1..=8`.
/// * `pad` - trailing fill bits to strip, `0 <= pad < width`.
///
/// ## Returns
/// The payload bytes, or `StructuralMisalignment` when the stripped
/// bit length is not a multiple of 8. This check is mandatory under
/// both padding policies: `width` need not divide 8, so a structurally
/// short sequence cannot be detected any earlier.
pub fn unpack_groups(groups: &[Pattern], width: u32, pad: u32) -> ICResult<Vec<u8>> {
    debug_assert!((1..=8).contains(&width));
    debug_assert!(pad < width);

    let total = groups.len() as u64 * u64::from(width);
    let payload = total
        .checked_sub(u64::from(pad))
        .filter(|p| p % 8 == 0)
        .ok_or(IdlicodeError::StructuralMisalignment { bit_length: total })?;

    let mut bytes = Vec::with_capacity((payload / 8) as usize);
    let mut acc: u32 = 0;
    let mut acc_len: u32 = 0;

    for &g in groups {
        acc = (acc << width) | u32::from(g);
        acc_len += width;
        while acc_len >= 8 {
            acc_len -= 8;
            bytes.push(((acc >> acc_len) & 0xFF) as u8);
        }
    }

    // Greedy emission leaves exactly total % 8 bits behind, which the
    // payload check above pinned to the pad count.
    debug_assert_eq!(acc_len, total as u32 % 8);
    debug_assert_eq!(bytes.len() as u64, payload / 8);

    Ok(bytes)
}
