use crate::bits::{read_bits, write_bits};
use crate::error::{AmbeError, Result};
use crate::{PARAM_FRAME_BYTES, PAYLOAD_BITS, WIRE_FRAME_BYTES};

const FIELD_A_START: usize = 0;
const FIELD_B_START: usize = PAYLOAD_BITS;
const FIELD_C_START: usize = 2 * PAYLOAD_BITS;
const FIELD_C_LEN: usize = crate::PARAM_FRAME_BITS - FIELD_C_START; // 25

/// 72-bit over-the-air voice frame, MSB first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WireFrame([u8; WIRE_FRAME_BYTES]);

impl WireFrame {
    pub fn new(bytes: [u8; WIRE_FRAME_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; WIRE_FRAME_BYTES] {
        &self.0
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; WIRE_FRAME_BYTES] {
        &mut self.0
    }

    pub fn into_bytes(self) -> [u8; WIRE_FRAME_BYTES] {
        self.0
    }
}

impl From<[u8; WIRE_FRAME_BYTES]> for WireFrame {
    fn from(bytes: [u8; WIRE_FRAME_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for WireFrame {
    type Error = AmbeError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; WIRE_FRAME_BYTES] =
            bytes.try_into().map_err(|_| AmbeError::InvalidFrameSize {
                expected: WIRE_FRAME_BYTES,
                got: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

/// 49-bit vocoder parameter frame packed MSB first into 7 bytes.
///
/// Layout:
/// - bits 0..12: field A payload
/// - bits 12..24: field B payload
/// - bits 24..49: field C
///
/// The trailing 7 bits of the last byte are always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParamFrame([u8; PARAM_FRAME_BYTES]);

impl ParamFrame {
    /// Build a frame from its three fields. Bits above each field's width are dropped.
    pub fn from_fields(a: u16, b: u16, c: u32) -> Self {
        let mut bytes = [0u8; PARAM_FRAME_BYTES];
        write_bits(&mut bytes, FIELD_A_START, PAYLOAD_BITS, a as u32);
        write_bits(&mut bytes, FIELD_B_START, PAYLOAD_BITS, b as u32);
        write_bits(&mut bytes, FIELD_C_START, FIELD_C_LEN, c);
        Self(bytes)
    }

    /// Field A payload (12 bits).
    pub fn field_a(&self) -> u16 {
        read_bits(&self.0, FIELD_A_START, PAYLOAD_BITS) as u16
    }

    /// Field B payload (12 bits).
    pub fn field_b(&self) -> u16 {
        read_bits(&self.0, FIELD_B_START, PAYLOAD_BITS) as u16
    }

    /// Field C (25 bits), never protected.
    pub fn field_c(&self) -> u32 {
        read_bits(&self.0, FIELD_C_START, FIELD_C_LEN)
    }

    pub fn as_bytes(&self) -> &[u8; PARAM_FRAME_BYTES] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; PARAM_FRAME_BYTES] {
        self.0
    }
}

impl From<[u8; PARAM_FRAME_BYTES]> for ParamFrame {
    /// Wrap raw bytes. Padding bits past bit 48 are cleared.
    fn from(bytes: [u8; PARAM_FRAME_BYTES]) -> Self {
        let mut bytes = bytes;
        bytes[PARAM_FRAME_BYTES - 1] &= 0x80;
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ParamFrame {
    type Error = AmbeError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PARAM_FRAME_BYTES] =
            bytes.try_into().map_err(|_| AmbeError::InvalidFrameSize {
                expected: PARAM_FRAME_BYTES,
                got: bytes.len(),
            })?;
        Ok(Self::from(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        let frame = ParamFrame::from_fields(0xABC, 0x123, 0x1_55AA_FF);

        assert_eq!(frame.field_a(), 0xABC);
        assert_eq!(frame.field_b(), 0x123);
        assert_eq!(frame.field_c(), 0x1_55AA_FF);

        // A and B pack into the first three bytes, C fills the rest MSB first
        assert_eq!(frame.as_bytes(), &[0xAB, 0xC1, 0x23, 0xAA, 0xD5, 0x7F, 0x80]);
    }

    #[test]
    fn test_from_fields_masks_wide_values() {
        let frame = ParamFrame::from_fields(0xFFFF, 0xF000, 0xFFFF_FFFF);

        assert_eq!(frame.field_a(), 0xFFF);
        assert_eq!(frame.field_b(), 0x000);
        assert_eq!(frame.field_c(), 0x1FF_FFFF);
        assert_eq!(frame.as_bytes()[6], 0x80);
    }

    #[test]
    fn test_param_frame_clears_padding() {
        let frame = ParamFrame::from([0xFF; 7]);

        assert_eq!(frame.as_bytes()[6], 0x80);
        assert_eq!(frame.field_c(), 0x1FF_FFFF);
    }

    #[test]
    fn test_slice_size_validation() {
        assert!(WireFrame::try_from(&[0u8; 9][..]).is_ok());
        assert!(ParamFrame::try_from(&[0u8; 7][..]).is_ok());

        match WireFrame::try_from(&[0u8; 8][..]) {
            Err(AmbeError::InvalidFrameSize { expected: 9, got: 8 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }

        match ParamFrame::try_from(&[0u8; 9][..]) {
            Err(AmbeError::InvalidFrameSize { expected: 7, got: 9 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }
    }
}
