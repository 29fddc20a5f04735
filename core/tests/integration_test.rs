use ambefec_core::bits::{read_bit, write_bit};
use ambefec_core::fec::{gather, FIELD_A, FIELD_B, FIELD_C};
use ambefec_core::tables::{GOLAY_23127, PRNG_TABLE};
use ambefec_core::{FecDecoder, FecEncoder, ParamFrame, WireFrame, TABLE_SIZE, WIRE_FRAME_BYTES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn flip_bit(bytes: &mut [u8], pos: u8) {
    let pos = pos as usize;
    write_bit(bytes, pos, !read_bit(bytes, pos));
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_round_trip_every_a_payload() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1);

    for a in 0..TABLE_SIZE as u16 {
        let frame = ParamFrame::from_fields(a, rng.gen(), rng.gen());
        let decoded = FecDecoder::decode(&FecEncoder::encode(&frame));
        assert_eq!(decoded, frame, "round trip failed for a={:03X}", a);
    }
}

#[test]
fn test_round_trip_every_b_payload() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2);

    for b in 0..TABLE_SIZE as u16 {
        let frame = ParamFrame::from_fields(rng.gen(), b, rng.gen());
        let decoded = FecDecoder::decode(&FecEncoder::encode(&frame));
        assert_eq!(decoded, frame, "round trip failed for b={:03X}", b);
    }
}

#[test]
fn test_round_trip_field_c_extremes() {
    for c in [0, 1, 0x100_0000, 0x1FF_FFFF, 0x155_5555, 0x0AA_AAAA] {
        let frame = ParamFrame::from_fields(0x7FF, 0x800, c);
        assert_eq!(FecDecoder::decode(&FecEncoder::encode(&frame)), frame);
    }
}

#[test]
fn test_wire_round_trip_for_consistent_frames() {
    // Any wire frame whose A and B words are valid codewords survives decode+encode
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..1000 {
        let frame = ParamFrame::from_fields(rng.gen(), rng.gen(), rng.gen());
        let wire = FecEncoder::encode(&frame);
        assert_eq!(FecEncoder::encode(&FecDecoder::decode(&wire)), wire);
    }
}

#[test]
fn test_field_c_matches_encoded_positions() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..1000 {
        let frame = ParamFrame::from_fields(rng.gen(), rng.gen(), rng.gen());
        let wire = FecEncoder::encode(&frame);

        assert_eq!(gather(wire.as_bytes(), FIELD_C.positions), frame.field_c());
        assert_eq!(FecDecoder::decode(&wire).field_c(), frame.field_c());
    }
}

#[test]
fn test_field_c_errors_pass_through() {
    let frame = ParamFrame::from_fields(0x111, 0x222, 0x0333_333);
    let wire = FecEncoder::encode(&frame);

    for (i, &pos) in FIELD_C.positions.iter().enumerate() {
        let mut bytes = wire.into_bytes();
        flip_bit(&mut bytes, pos);

        let decoded = FecDecoder::decode(&WireFrame::new(bytes));
        assert_eq!(decoded.field_a(), frame.field_a());
        assert_eq!(decoded.field_b(), frame.field_b());
        assert_eq!(decoded.field_c(), frame.field_c() ^ (1 << (24 - i)));
    }
}

#[test]
fn test_b_word_is_masked_codeword() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..1000 {
        let (a, b): (u16, u16) = (rng.gen_range(0..4096), rng.gen_range(0..4096));
        let wire = FecEncoder::encode(&ParamFrame::from_fields(a, b, 0));

        let expected = (GOLAY_23127[b as usize] >> 1) ^ (PRNG_TABLE[a as usize] >> 1);
        assert_eq!(gather(wire.as_bytes(), FIELD_B.positions), expected);

        // Re-encoding is deterministic
        let again = FecEncoder::encode(&ParamFrame::from_fields(a, b, 0));
        assert_eq!(again, wire);
    }
}

#[test]
fn test_parity_bits_of_b_are_ignored() {
    let frame = ParamFrame::from_fields(0xC0F, 0xFEE, 0x1234);
    let wire = FecEncoder::encode(&frame);

    // The low 11 bits of B's 23-bit word are parity
    for &pos in &FIELD_B.positions[12..] {
        let mut bytes = wire.into_bytes();
        flip_bit(&mut bytes, pos);
        assert_eq!(FecDecoder::decode(&WireFrame::new(bytes)), frame);
    }
}

#[test]
fn test_field_a_parity_region_is_unchecked() {
    let frame = ParamFrame::from_fields(0x0F0, 0x00F, 0);
    let wire = FecEncoder::encode(&frame);

    // Wipe the whole parity half of A's codeword: nothing notices
    let mut bytes = wire.into_bytes();
    for &pos in &FIELD_A.positions[12..] {
        write_bit(&mut bytes, pos as usize, false);
    }
    assert_ne!(bytes, wire.into_bytes());
    assert_eq!(FecDecoder::decode(&WireFrame::new(bytes)), frame);
}

#[test]
fn test_concurrent_transcoding() {
    let frames: Vec<ParamFrame> = {
        let mut rng = StdRng::seed_from_u64(6);
        (0..4000)
            .map(|_| ParamFrame::from_fields(rng.gen(), rng.gen(), rng.gen()))
            .collect()
    };

    std::thread::scope(|scope| {
        for chunk in frames.chunks(500) {
            scope.spawn(move || {
                for frame in chunk {
                    let wire = FecEncoder::encode(frame);
                    assert_eq!(wire.as_bytes().len(), WIRE_FRAME_BYTES);
                    assert_eq!(&FecDecoder::decode(&wire), frame);
                }
            });
        }
    });
}
