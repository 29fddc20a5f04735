use std::collections::HashSet;

use ambefec_core::tables::{A_TABLE, B_TABLE, C_TABLE, GOLAY_23127, GOLAY_24128, PRNG_TABLE};
use ambefec_core::{FIELD_A_BITS, FIELD_B_BITS, FIELD_C_BITS, TABLE_SIZE, WIRE_FRAME_BITS};

/// Generator polynomial of the (23, 12) Golay code.
const GOLAY_POLY: u32 = 0xC75;

fn golay23(data: u32) -> u32 {
    let mut rem = data << 11;
    for bit in (11..23).rev() {
        if rem & (1 << bit) != 0 {
            rem ^= GOLAY_POLY << (bit - 11);
        }
    }
    data << 11 | rem
}

/// 24 output bits of the AMBE whitening generator seeded with `seed`.
fn prng_word(seed: u32) -> u32 {
    let mut state = (seed << 4) as u16;
    (0..24).fold(0, |word, _| {
        state = state.wrapping_mul(173).wrapping_add(13849);
        word << 1 | (state >> 15) as u32
    })
}

#[test]
fn test_table_sizes() {
    assert_eq!(GOLAY_24128.len(), TABLE_SIZE);
    assert_eq!(GOLAY_23127.len(), TABLE_SIZE);
    assert_eq!(PRNG_TABLE.len(), TABLE_SIZE);
    assert_eq!(TABLE_SIZE, 4096);
}

#[test]
fn test_table_widths() {
    for i in 0..TABLE_SIZE {
        assert_eq!(GOLAY_24128[i] >> 24, 0, "GOLAY_24128[{}] too wide", i);
        assert_eq!(GOLAY_23127[i] >> 24, 0, "GOLAY_23127[{}] too wide", i);
        assert_eq!(PRNG_TABLE[i] >> 24, 0, "PRNG_TABLE[{}] too wide", i);
    }
}

#[test]
fn test_pinned_entries() {
    assert_eq!(GOLAY_24128[0], 0);
    assert_eq!(GOLAY_23127[0], 0);
    assert_eq!(PRNG_TABLE[0], 0x42CC47);

    assert_eq!(GOLAY_24128[1], 0x0018EB);
    assert_eq!(GOLAY_23127[1], 0x0018EA);
    assert_eq!(PRNG_TABLE[1], 0x19D6FE);

    assert_eq!(GOLAY_24128[0xFFF], 0xFFFFFF);
    assert_eq!(GOLAY_23127[0xFFF], 0xFFFFFE);
}

#[test]
fn test_codes_are_systematic() {
    for i in 0..TABLE_SIZE as u32 {
        assert_eq!(GOLAY_24128[i as usize] >> 12, i);
        assert_eq!(GOLAY_23127[i as usize] >> 12, i);
        assert_eq!(GOLAY_23127[i as usize] & 1, 0);
    }
}

#[test]
fn test_golay_tables_match_generator() {
    for i in 0..TABLE_SIZE as u32 {
        let code = golay23(i);
        let parity = code.count_ones() & 1;

        assert_eq!(GOLAY_23127[i as usize], code << 1, "GOLAY_23127[{:03X}]", i);
        assert_eq!(GOLAY_24128[i as usize], code << 1 | parity, "GOLAY_24128[{:03X}]", i);
    }
}

#[test]
fn test_extended_golay_minimum_weight() {
    // Nonzero codewords of the extended code have weight 8, 12, 16 or 24
    for &word in &GOLAY_24128[1..] {
        let weight = word.count_ones();
        assert!(weight >= 8 && weight % 4 == 0, "weight {} for {:06X}", weight, word);
    }
}

#[test]
fn test_prng_table_matches_generator() {
    for i in 0..TABLE_SIZE as u32 {
        assert_eq!(PRNG_TABLE[i as usize], prng_word(i), "PRNG_TABLE[{:03X}]", i);
    }
}

#[test]
fn test_permutation_table_lengths() {
    assert_eq!(A_TABLE.len(), FIELD_A_BITS);
    assert_eq!(B_TABLE.len(), FIELD_B_BITS);
    assert_eq!(C_TABLE.len(), FIELD_C_BITS);
    assert_eq!(FIELD_A_BITS + FIELD_B_BITS + FIELD_C_BITS, WIRE_FRAME_BITS);
}

#[test]
fn test_permutation_tables_cover_frame_without_collisions() {
    let a: HashSet<u8> = A_TABLE.iter().copied().collect();
    let b: HashSet<u8> = B_TABLE.iter().copied().collect();
    let c: HashSet<u8> = C_TABLE.iter().copied().collect();

    // No repeats within a table
    assert_eq!(a.len(), A_TABLE.len());
    assert_eq!(b.len(), B_TABLE.len());
    assert_eq!(c.len(), C_TABLE.len());

    // No overlap between tables
    assert!(a.is_disjoint(&b));
    assert!(a.is_disjoint(&c));
    assert!(b.is_disjoint(&c));

    let all: HashSet<u8> = a.union(&b).chain(c.iter()).copied().collect();
    assert_eq!(all.len(), WIRE_FRAME_BITS);
    assert!(all.iter().all(|&pos| (pos as usize) < WIRE_FRAME_BITS));
}
