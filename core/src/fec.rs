use crate::bits::{read_bit, write_bit};
use crate::error::{AmbeError, Result};
use crate::frame::{ParamFrame, WireFrame};
use crate::tables::{A_TABLE, B_TABLE, C_TABLE, GOLAY_23127, GOLAY_24128, PRNG_TABLE};
use crate::{PARAM_FRAME_BYTES, PAYLOAD_BITS, TABLE_SIZE, WIRE_FRAME_BYTES};
use log::trace;

/// Width of every entry in the code and PRNG tables.
const TABLE_WORD_BITS: usize = 24;

pub type CodeTable = [u32; TABLE_SIZE];

/// Keeps table indexes inside the 12-bit domain.
const INDEX_MASK: usize = TABLE_SIZE - 1;

/// How a field's payload is carried on the wire.
#[derive(Clone, Copy, Debug)]
pub enum FieldCoding {
    /// Systematic block code, payload in the high bits.
    Protected { code: &'static CodeTable },
    /// Block code followed by a whitening mask selected by field A's payload.
    ProtectedScrambled {
        code: &'static CodeTable,
        mask: &'static CodeTable,
    },
    /// Sent unmodified.
    Raw,
}

/// A logical field of the voice frame and the wire positions it occupies.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub positions: &'static [u8],
    pub coding: FieldCoding,
}

pub static FIELD_A: Field = Field {
    positions: &A_TABLE,
    coding: FieldCoding::Protected { code: &GOLAY_24128 },
};

pub static FIELD_B: Field = Field {
    positions: &B_TABLE,
    coding: FieldCoding::ProtectedScrambled {
        code: &GOLAY_23127,
        mask: &PRNG_TABLE,
    },
};

pub static FIELD_C: Field = Field {
    positions: &C_TABLE,
    coding: FieldCoding::Raw,
};

impl Field {
    /// Number of wire bits.
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    /// Shift that trims a 24-bit table word down to the wire width.
    fn table_shift(&self) -> usize {
        TABLE_WORD_BITS - self.width()
    }

    fn mask(&self, table: &CodeTable, key: u16) -> u32 {
        table[key as usize & INDEX_MASK] >> self.table_shift()
    }

    fn codeword(&self, table: &CodeTable, payload: u32) -> u32 {
        table[payload as usize & INDEX_MASK] >> self.table_shift()
    }

    /// Produce the wire word for `payload`. `key` is field A's payload and only
    /// matters for scrambled fields. Only the low 12 bits of a protected payload and
    /// of `key` are used; a raw payload is cut to the field width.
    pub fn encode(&self, payload: u32, key: u16) -> u32 {
        match self.coding {
            FieldCoding::Raw => payload & self.word_mask(),
            FieldCoding::Protected { code } => self.codeword(code, payload),
            FieldCoding::ProtectedScrambled { code, mask } => {
                self.codeword(code, payload) ^ self.mask(mask, key)
            }
        }
    }

    /// Recover the payload from a wire word by reading back the systematic bits.
    ///
    /// No syndrome is computed: errors in parity bits are ignored and errors in payload
    /// bits pass through undetected.
    pub fn decode(&self, word: u32, key: u16) -> u32 {
        let word = word & self.word_mask();
        let payload_shift = self.width() - PAYLOAD_BITS;
        match self.coding {
            FieldCoding::Raw => word,
            FieldCoding::Protected { .. } => word >> payload_shift,
            FieldCoding::ProtectedScrambled { mask, .. } => {
                (word ^ self.mask(mask, key)) >> payload_shift
            }
        }
    }

    fn word_mask(&self) -> u32 {
        (1 << self.width()) - 1
    }
}

/// Gather the bits at `positions` into a word, first position most significant.
pub fn gather(buf: &[u8], positions: &[u8]) -> u32 {
    positions
        .iter()
        .fold(0, |word, &pos| word << 1 | read_bit(buf, pos as usize) as u32)
}

/// Scatter the low `positions.len()` bits of `value` to `positions`, most significant
/// first. Exact inverse of `gather`.
pub fn scatter(value: u32, positions: &[u8], buf: &mut [u8]) {
    let len = positions.len();
    for (i, &pos) in positions.iter().enumerate() {
        write_bit(buf, pos as usize, (value >> (len - 1 - i)) & 1 == 1);
    }
}

/// Raw field words as found on the wire, before any decoding. Field B is still
/// scrambled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codewords {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

pub struct FecEncoder;
pub struct FecDecoder;

impl FecEncoder {
    /// Encode a parameter frame into a wire frame.
    pub fn encode(frame: &ParamFrame) -> WireFrame {
        let (a, b, c) = (frame.field_a(), frame.field_b(), frame.field_c());

        // B's mask comes from A's original payload
        let code_a = FIELD_A.encode(a as u32, a);
        let code_b = FIELD_B.encode(b as u32, a);
        let code_c = FIELD_C.encode(c, a);

        let mut wire = WireFrame::default();
        let buf = wire.as_mut_bytes();
        scatter(code_a, FIELD_A.positions, buf);
        scatter(code_b, FIELD_B.positions, buf);
        scatter(code_c, FIELD_C.positions, buf);

        trace!(
            "encoded a={:03X} b={:03X} c={:07X} -> {:06X} {:06X} {:07X}",
            a,
            b,
            c,
            code_a,
            code_b,
            code_c
        );

        wire
    }

    /// Encode exactly one 7-byte parameter frame.
    pub fn encode_bytes(data: &[u8]) -> Result<[u8; WIRE_FRAME_BYTES]> {
        let frame = ParamFrame::try_from(data)?;
        Ok(Self::encode(&frame).into_bytes())
    }

    /// Encode a run of back-to-back 7-byte parameter frames.
    pub fn encode_stream(data: &[u8]) -> Result<Vec<WireFrame>> {
        check_stream_len(data, PARAM_FRAME_BYTES)?;

        data.chunks(PARAM_FRAME_BYTES)
            .map(|chunk| ParamFrame::try_from(chunk).map(|frame| Self::encode(&frame)))
            .collect()
    }
}

impl FecDecoder {
    /// Decode a wire frame into a parameter frame.
    pub fn decode(wire: &WireFrame) -> ParamFrame {
        let words = Self::codewords(wire);

        // A first: its payload keys the descrambler for B
        let a = FIELD_A.decode(words.a, 0) as u16;
        let b = FIELD_B.decode(words.b, a) as u16;
        let c = FIELD_C.decode(words.c, a);

        trace!("decoded a={:03X} b={:03X} c={:07X}", a, b, c);

        ParamFrame::from_fields(a, b, c)
    }

    /// Decode exactly one 9-byte wire frame.
    pub fn decode_bytes(data: &[u8]) -> Result<[u8; PARAM_FRAME_BYTES]> {
        let wire = WireFrame::try_from(data)?;
        Ok(Self::decode(&wire).into_bytes())
    }

    /// Decode a run of back-to-back 9-byte wire frames.
    pub fn decode_stream(data: &[u8]) -> Result<Vec<ParamFrame>> {
        let wires = Self::wire_frames(data)?;
        Ok(wires.iter().map(Self::decode).collect())
    }

    /// Split a run of back-to-back 9-byte wire frames without decoding them.
    pub fn wire_frames(data: &[u8]) -> Result<Vec<WireFrame>> {
        check_stream_len(data, WIRE_FRAME_BYTES)?;

        data.chunks(WIRE_FRAME_BYTES)
            .map(|chunk| WireFrame::try_from(chunk))
            .collect()
    }

    /// Gather the three field words without decoding them.
    pub fn codewords(wire: &WireFrame) -> Codewords {
        let buf = wire.as_bytes();
        Codewords {
            a: gather(buf, FIELD_A.positions),
            b: gather(buf, FIELD_B.positions),
            c: gather(buf, FIELD_C.positions),
        }
    }
}

fn check_stream_len(data: &[u8], frame_bytes: usize) -> Result<()> {
    if data.len() % frame_bytes != 0 {
        return Err(AmbeError::InvalidFrameSize {
            expected: data.len().div_ceil(frame_bytes) * frame_bytes,
            got: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_frame(rng: &mut StdRng) -> ParamFrame {
        ParamFrame::from_fields(rng.gen(), rng.gen(), rng.gen())
    }

    #[test]
    fn test_gather_scatter() {
        let positions = [7u8, 0, 15, 8];
        let mut buf = [0u8; 2];

        scatter(0b1011, &positions, &mut buf);
        assert_eq!(buf, [0b0000_0001, 0b1000_0001]);
        assert_eq!(gather(&buf, &positions), 0b1011);
    }

    #[test]
    fn test_scatter_overwrites_previous_bits() {
        let positions = [0u8, 1, 2];
        let mut buf = [0xFFu8];

        scatter(0b010, &positions, &mut buf);
        assert_eq!(buf, [0b0101_1111]);
    }

    #[test]
    fn test_field_widths() {
        assert_eq!(FIELD_A.width(), crate::FIELD_A_BITS);
        assert_eq!(FIELD_B.width(), crate::FIELD_B_BITS);
        assert_eq!(FIELD_C.width(), crate::FIELD_C_BITS);
    }

    #[test]
    fn test_encode_decode() {
        let frame = ParamFrame::from_fields(0xABC, 0x5A5, 0x0F0_F0F0);
        let wire = FecEncoder::encode(&frame);
        let words = FecDecoder::codewords(&wire);

        assert_eq!(words.a, GOLAY_24128[0xABC]);
        assert_eq!(words.b, (GOLAY_23127[0x5A5] >> 1) ^ (PRNG_TABLE[0xABC] >> 1));
        assert_eq!(words.c, 0x0F0_F0F0);

        assert_eq!(FecDecoder::decode(&wire), frame);
    }

    #[test]
    fn test_round_trip_random_frames() {
        let mut rng = StdRng::seed_from_u64(0x4d44_3338);

        for _ in 0..2000 {
            let frame = random_frame(&mut rng);
            let wire = FecEncoder::encode(&frame);
            assert_eq!(FecDecoder::decode(&wire), frame);
        }
    }

    #[test]
    fn test_field_c_passthrough() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let mut wire = [0u8; WIRE_FRAME_BYTES];
            rng.fill(&mut wire[..]);
            let wire = WireFrame::new(wire);

            let decoded = FecDecoder::decode(&wire);
            assert_eq!(decoded.field_c(), gather(wire.as_bytes(), &C_TABLE));
        }
    }

    #[test]
    fn test_scrambling_depends_only_on_a() {
        let first = FecEncoder::encode(&ParamFrame::from_fields(0x123, 0x456, 0));
        let again = FecEncoder::encode(&ParamFrame::from_fields(0x123, 0x456, 0x1FF_FFFF));
        assert_eq!(
            FecDecoder::codewords(&first).b,
            FecDecoder::codewords(&again).b
        );

        // Changing A changes B's wire word by exactly the difference of the masks
        let other = FecEncoder::encode(&ParamFrame::from_fields(0x124, 0x456, 0));
        assert_eq!(
            FecDecoder::codewords(&first).b ^ FecDecoder::codewords(&other).b,
            (PRNG_TABLE[0x123] ^ PRNG_TABLE[0x124]) >> 1
        );
    }

    #[test]
    fn test_parity_errors_in_a_are_ignored() {
        let frame = ParamFrame::from_fields(0x9E1, 0x0C3, 0x123_4567);
        let wire = FecEncoder::encode(&frame);

        for &pos in &A_TABLE[PAYLOAD_BITS..] {
            let mut corrupted = wire;
            let buf = corrupted.as_mut_bytes();
            let bit = read_bit(buf, pos as usize);
            write_bit(buf, pos as usize, !bit);

            assert_ne!(corrupted, wire);
            assert_eq!(FecDecoder::decode(&corrupted), frame);
        }
    }

    #[test]
    fn test_payload_errors_in_a_are_not_corrected() {
        let frame = ParamFrame::from_fields(0x9E1, 0x0C3, 0x123_4567);
        let wire = FecEncoder::encode(&frame);

        for (i, &pos) in A_TABLE[..PAYLOAD_BITS].iter().enumerate() {
            let mut corrupted = wire;
            let buf = corrupted.as_mut_bytes();
            let bit = read_bit(buf, pos as usize);
            write_bit(buf, pos as usize, !bit);

            // A single flipped bit is within Golay's reach, yet the flip comes straight
            // through and B is descrambled with the wrong mask
            let decoded = FecDecoder::decode(&corrupted);
            let flipped_a = frame.field_a() ^ (1 << (PAYLOAD_BITS - 1 - i));
            assert_eq!(decoded.field_a(), flipped_a);

            let expected_b = ((GOLAY_23127[0x0C3] >> 1)
                ^ (PRNG_TABLE[frame.field_a() as usize] >> 1)
                ^ (PRNG_TABLE[flipped_a as usize] >> 1))
                >> 11;
            assert_eq!(decoded.field_b() as u32, expected_b);
            assert_eq!(decoded.field_c(), frame.field_c());
        }
    }

    #[test]
    fn test_all_zero_wire() {
        let decoded = FecDecoder::decode(&WireFrame::default());

        // An empty frame still descrambles B with PRNG_TABLE[0]
        assert_eq!(decoded.field_a(), 0);
        assert_eq!(decoded.field_b(), 0x42C);
        assert_eq!(decoded.field_c(), 0);
        assert_eq!(decoded.field_b() as u32, (PRNG_TABLE[0] >> 1) >> 11);
    }

    #[test]
    fn test_zero_params_encode() {
        let wire = FecEncoder::encode(&ParamFrame::default());
        let words = FecDecoder::codewords(&wire);

        assert_eq!(words.a, 0);
        assert_eq!(words.b, PRNG_TABLE[0] >> 1);
        assert_eq!(words.c, 0);
    }

    #[test]
    fn test_bytes_api() {
        let param = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0x80];
        let wire = FecEncoder::encode_bytes(&param).unwrap();
        assert_eq!(FecDecoder::decode_bytes(&wire).unwrap(), param);

        match FecEncoder::encode_bytes(&param[..6]) {
            Err(AmbeError::InvalidFrameSize { expected: 7, got: 6 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }
        match FecDecoder::decode_bytes(&[0u8; 10]) {
            Err(AmbeError::InvalidFrameSize { expected: 9, got: 10 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_field_inputs() {
        // Only the low 12 bits select a table entry
        assert_eq!(FIELD_A.encode(0x1ABC, 0), GOLAY_24128[0xABC]);
        assert_eq!(FIELD_A.encode(4096, 0), GOLAY_24128[0]);
        assert_eq!(FIELD_B.encode(0, 4096), FIELD_B.encode(0, 0));
        assert_eq!(FIELD_B.encode(0xF123, 0xF456), FIELD_B.encode(0x123, 0x456));
        assert_eq!(FIELD_B.decode(0, 0xFFFF), FIELD_B.decode(0, 0xFFF));

        // Words wider than the field are cut to the field width
        assert_eq!(FIELD_C.encode(0xFFFF_FFFF, 0), 0x1FF_FFFF);
        assert_eq!(FIELD_C.decode(0xFFFF_FFFF, 0), 0x1FF_FFFF);
        assert_eq!(FIELD_A.decode(0xFF00_0000 | GOLAY_24128[0x321], 0), 0x321);
        assert!(FIELD_B.decode(u32::MAX, u16::MAX) < 4096);
    }

    #[test]
    fn test_wire_frames_split() {
        let mut data = vec![0u8; 18];
        data[9] = 0xFF;

        let wires = FecDecoder::wire_frames(&data).unwrap();
        assert_eq!(wires.len(), 2);
        assert_eq!(wires[1].as_bytes()[0], 0xFF);

        match FecDecoder::wire_frames(&data[..10]) {
            Err(AmbeError::InvalidFrameSize { expected: 18, got: 10 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }
    }

    #[test]
    fn test_streams() {
        let mut rng = StdRng::seed_from_u64(42);
        let frames: Vec<ParamFrame> = (0..5).map(|_| random_frame(&mut rng)).collect();

        let params: Vec<u8> = frames.iter().flat_map(|f| *f.as_bytes()).collect();
        let wires = FecEncoder::encode_stream(&params).unwrap();
        assert_eq!(wires.len(), 5);

        let wire_bytes: Vec<u8> = wires.iter().flat_map(|w| *w.as_bytes()).collect();
        assert_eq!(FecDecoder::decode_stream(&wire_bytes).unwrap(), frames);

        assert!(FecDecoder::decode_stream(&[]).unwrap().is_empty());

        match FecDecoder::decode_stream(&wire_bytes[..20]) {
            Err(AmbeError::InvalidFrameSize { expected: 27, got: 20 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }
    }
}
