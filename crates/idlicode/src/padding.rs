//! # Padding Policies
//!
//! A byte is 8 bits and the alphabet width need not divide 8, so the
//! encoder may append fill bits to complete the final group. Two
//! disciplines for recovering the fill count on decode:
//!
//! * [`PaddingPolicy::Silent`] - nothing is emitted; the decoder infers
//!   the count from the total bit length.
//! * [`PaddingPolicy::Marker`] - the encoder appends one non-vocabulary
//!   token (`pad-N`) recording the exact count.

use crate::errors::{ICResult, IdlicodeError};

/// Marker token prefix; `pad-` is a reserved namespace no alphabet
/// word may shadow.
const MARKER_PREFIX: &str = "pad-";

/// How fill bits are communicated from encode to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PaddingPolicy {
    /// Zero-fill silently; decode infers the fill count from the total
    /// bit length.
    #[default]
    Silent,

    /// Append a trailing `pad-N` token; decode requires it on any
    /// non-empty sequence.
    Marker,
}

/// Render the marker token for a fill count.
pub fn marker_token(fill: u32) -> String {
    format!("{MARKER_PREFIX}{fill}")
}

/// Is this canonical token in the marker namespace?
///
/// Membership in the namespace does not imply the marker is well
/// formed; see [`parse_marker`].
pub fn is_marker_token(canonical: &str) -> bool {
    canonical.starts_with(MARKER_PREFIX)
}

/// Parse a canonical marker token into its fill count.
///
/// ## Arguments
/// * `canonical` - a canonical token in the marker namespace.
/// * `width` - the alphabet width; counts must be `< width`.
///
/// ## Returns
/// The fill count, or `CorruptPaddingMarker` when the count is not an
/// integer in `[0, width)`.
pub fn parse_marker(canonical: &str, width: u32) -> ICResult<u32> {
    let corrupt = || IdlicodeError::CorruptPaddingMarker {
        token: canonical.to_owned(),
    };

    let count: u32 = canonical
        .strip_prefix(MARKER_PREFIX)
        .ok_or_else(corrupt)?
        .parse()
        .map_err(|_| corrupt())?;

    if count >= width {
        return Err(corrupt());
    }
    Ok(count)
}

/// Infer the fill count under the silent policy.
///
/// The original payload was a whole number of bytes and received fewer
/// than `width` fill bits, so the only candidate is `bit_length % 8`;
/// when that remainder is not `< width` no valid payload length exists.
///
/// ## Arguments
/// * `bit_length` - total reassembled bit length.
/// * `width` - the alphabet width.
///
/// ## Returns
/// The fill count, or `StructuralMisalignment`.
pub fn infer_fill(bit_length: u64, width: u32) -> ICResult<u32> {
    let rem = (bit_length % 8) as u32;
    if rem >= width {
        return Err(IdlicodeError::StructuralMisalignment { bit_length });
    }
    Ok(rem)
}
