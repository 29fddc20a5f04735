//! Vocoder-native frame layout.
//!
//! The vocoder engine does not take the 7-byte FEC layout directly. Its frame has a
//! reserved zero byte in front, and its unpacked form holds one `i16` per parameter bit.
//! Bytes 1..7 are unpacked MSB first. The last bit is taken from the whole of byte 7:
//! any non-zero value reads as 1.
//!
//! That last rule only agrees with the FEC layout while bits 1..8 of byte 7 stay clear.
//! `ParamFrame` guarantees this for frames built here. Raw native frames from elsewhere
//! may not.

use crate::bits::{read_bit, write_bit};
use crate::frame::ParamFrame;
use crate::{NATIVE_FRAME_BYTES, PARAM_FRAME_BITS, PARAM_FRAME_BYTES};

/// Bits carried in bytes 1..7 of the native frame.
const PACKED_BITS: usize = PARAM_FRAME_BITS - 1; // 48
const LAST_BYTE: usize = NATIVE_FRAME_BYTES - 1;

/// Parameter frame in the vocoder engine's layout: a reserved leading byte followed by
/// the 49 parameter bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeFrame([u8; NATIVE_FRAME_BYTES]);

impl NativeFrame {
    pub fn new(bytes: [u8; NATIVE_FRAME_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NATIVE_FRAME_BYTES] {
        &self.0
    }
}

/// Shift a parameter frame behind the reserved byte.
pub fn to_native(frame: &ParamFrame) -> NativeFrame {
    let mut bytes = [0u8; NATIVE_FRAME_BYTES];
    bytes[1..].copy_from_slice(frame.as_bytes());
    NativeFrame(bytes)
}

/// Drop the reserved byte. Stray low bits in the final byte are discarded.
pub fn from_native(native: &NativeFrame) -> ParamFrame {
    let mut bytes = [0u8; PARAM_FRAME_BYTES];
    bytes.copy_from_slice(&native.0[1..]);
    ParamFrame::from(bytes)
}

/// Expand a native frame to one value per parameter bit, as the engine consumes it.
pub fn unpack_bits(native: &NativeFrame) -> [i16; PARAM_FRAME_BITS] {
    let mut bits = [0i16; PARAM_FRAME_BITS];
    for (i, bit) in bits.iter_mut().take(PACKED_BITS).enumerate() {
        *bit = read_bit(&native.0, 8 + i) as i16;
    }
    // Truthiness of the whole byte, not its MSB
    bits[PACKED_BITS] = (native.0[LAST_BYTE] != 0) as i16;
    bits
}

/// Collapse per-bit values produced by the engine into a native frame. Any non-zero
/// value counts as a set bit.
///
/// The C glue ORs each raw value shifted into place instead, so inputs other than
/// 0 and 1 can pack to a different frame there.
pub fn pack_bits(bits: &[i16; PARAM_FRAME_BITS]) -> NativeFrame {
    let mut bytes = [0u8; NATIVE_FRAME_BYTES];
    for (i, &bit) in bits.iter().take(PACKED_BITS).enumerate() {
        write_bit(&mut bytes, 8 + i, bit != 0);
    }
    bytes[LAST_BYTE] = if bits[PACKED_BITS] != 0 { 0x80 } else { 0 };
    NativeFrame(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_layout() {
        let frame = ParamFrame::from([0xAB, 0xC1, 0x23, 0xAA, 0xD5, 0x7F, 0x80]);
        let native = to_native(&frame);

        assert_eq!(
            native.as_bytes(),
            &[0x00, 0xAB, 0xC1, 0x23, 0xAA, 0xD5, 0x7F, 0x80]
        );
        assert_eq!(from_native(&native), frame);
    }

    #[test]
    fn test_unpack_bits() {
        let native = NativeFrame::new([0xFF, 0x80, 0, 0, 0, 0, 0x01, 0x80]);
        let bits = unpack_bits(&native);

        // Reserved byte is never read
        assert_eq!(bits[0], 1);
        assert!(bits[1..47].iter().all(|&b| b == 0));
        assert_eq!(bits[47], 1);
        assert_eq!(bits[48], 1);
    }

    #[test]
    fn test_pack_bits() {
        let mut bits = [0i16; PARAM_FRAME_BITS];
        bits[0] = 1;
        bits[9] = 1;
        bits[47] = 1;
        bits[48] = 1;

        let native = pack_bits(&bits);
        assert_eq!(native.as_bytes(), &[0x00, 0x80, 0x40, 0, 0, 0, 0x01, 0x80]);
        assert_eq!(unpack_bits(&native), bits);
    }

    #[test]
    fn test_pack_treats_nonzero_as_set() {
        let mut bits = [0i16; PARAM_FRAME_BITS];
        bits[3] = -1;
        bits[48] = 7;

        let native = pack_bits(&bits);
        assert_eq!(native.as_bytes(), &[0x00, 0x10, 0, 0, 0, 0, 0, 0x80]);
    }

    #[test]
    fn test_last_bit_truthiness_edge_case() {
        // Only a stray low bit in the final byte: the engine sees bit 48 set while the
        // FEC layout sees it clear
        let native = NativeFrame::new([0, 0, 0, 0, 0, 0, 0, 0x01]);

        assert_eq!(unpack_bits(&native)[48], 1);
        assert_eq!(from_native(&native).field_c() & 1, 0);
    }

    #[test]
    fn test_param_frames_survive_native_round_trip() {
        for c in [0u32, 1, 0x1FF_FFFE, 0x1FF_FFFF, 0x0AA_AAAA] {
            let frame = ParamFrame::from_fields(0x5A5, 0xA5A, c);
            let native = to_native(&frame);
            assert_eq!(pack_bits(&unpack_bits(&native)), native);
            assert_eq!(from_native(&native), frame);
        }
    }
}
