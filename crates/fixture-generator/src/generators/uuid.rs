//! Identifier deriver.

use super::Draw;
use uuid::Uuid;

/// Synthesize a version-4 shaped UUID from the sequence source.
///
/// Follows the `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` template: every `x`
/// takes one draw (`floor(draw * 16)`), the `4` takes none, and `y` takes
/// one draw masked to the RFC 4122 variant (`8`..`b`). 31 draws in total.
///
/// Uniqueness is probabilistic only.
pub fn identifier<D: Draw + ?Sized>(src: &mut D) -> Uuid {
    let mut bytes = [0u8; 16];

    for position in 0..32 {
        let nibble = match position {
            12 => 0x4,
            16 => (hex_nibble(src) & 0x3) | 0x8,
            _ => hex_nibble(src),
        };
        let shift = if position % 2 == 0 { 4 } else { 0 };
        bytes[position / 2] |= nibble << shift;
    }

    Uuid::from_bytes(bytes)
}

fn hex_nibble<D: Draw + ?Sized>(src: &mut D) -> u8 {
    ((src.draw() * 16.0).floor() as u8).min(0xf)
}
