//! MSB-first bit addressing over byte buffers.
//!
//! Bit `pos` lives in byte `pos / 8` at bit `7 - pos % 8`, so bit 0 is the MSB of the
//! first byte. All frame layouts in this crate go through these two functions.

/// Read the bit at `pos`.
#[inline]
pub fn read_bit(buf: &[u8], pos: usize) -> bool {
    (buf[pos / 8] >> (7 - pos % 8)) & 1 == 1
}

/// Set or clear the bit at `pos`.
#[inline]
pub fn write_bit(buf: &mut [u8], pos: usize, value: bool) {
    let mask = 1u8 << (7 - pos % 8);
    if value {
        buf[pos / 8] |= mask;
    } else {
        buf[pos / 8] &= !mask;
    }
}

/// Read `count` consecutive bits starting at `start` into the low bits of a word, first
/// bit most significant.
pub fn read_bits(buf: &[u8], start: usize, count: usize) -> u32 {
    debug_assert!(count <= 32);
    (start..start + count).fold(0, |word, pos| word << 1 | read_bit(buf, pos) as u32)
}

/// Write the low `count` bits of `value` to consecutive positions starting at `start`,
/// most significant first.
pub fn write_bits(buf: &mut [u8], start: usize, count: usize, value: u32) {
    debug_assert!(count <= 32);
    for i in 0..count {
        write_bit(buf, start + i, (value >> (count - 1 - i)) & 1 == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bit_msb_first() {
        let buf = [0b1000_0001, 0b0100_0000];

        assert!(read_bit(&buf, 0));
        assert!(!read_bit(&buf, 1));
        assert!(read_bit(&buf, 7));
        assert!(!read_bit(&buf, 8));
        assert!(read_bit(&buf, 9));
        assert!(!read_bit(&buf, 15));
    }

    #[test]
    fn test_write_bit_sets_and_clears() {
        let mut buf = [0u8; 2];

        write_bit(&mut buf, 0, true);
        write_bit(&mut buf, 10, true);
        write_bit(&mut buf, 15, true);
        assert_eq!(buf, [0b1000_0000, 0b0010_0001]);

        write_bit(&mut buf, 10, false);
        assert_eq!(buf, [0b1000_0000, 0b0000_0001]);

        // Clearing an already clear bit leaves neighbours alone
        write_bit(&mut buf, 1, false);
        assert_eq!(buf, [0b1000_0000, 0b0000_0001]);
    }

    #[test]
    fn test_read_write_bits_span_bytes() {
        let mut buf = [0u8; 3];

        write_bits(&mut buf, 4, 12, 0xABC);
        assert_eq!(buf, [0x0A, 0xBC, 0x00]);
        assert_eq!(read_bits(&buf, 4, 12), 0xABC);
        assert_eq!(read_bits(&buf, 0, 8), 0x0A);
        assert_eq!(read_bits(&buf, 8, 4), 0xB);
    }

    #[test]
    fn test_write_bits_ignores_high_bits() {
        let mut buf = [0u8; 1];

        write_bits(&mut buf, 0, 3, 0b1111_0101);
        assert_eq!(buf, [0b1010_0000]);
    }

    #[test]
    #[should_panic]
    fn test_read_bit_out_of_range() {
        let buf = [0u8; 1];
        read_bit(&buf, 8);
    }
}
