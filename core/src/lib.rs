//! Forward error correction for AMBE+2 voice frames
//!
//! Converts between the 49-bit vocoder parameter frame and the 72-bit (9 byte)
//! over-the-air frame carried in DMR voice bursts. Field A is protected with the
//! (24, 12) extended Golay code, field B with the (23, 12) Golay code plus a PRNG
//! whitening mask keyed by field A, and field C is sent as-is.

pub mod bits;
pub mod error;
pub mod fec;
pub mod frame;
pub mod native;
pub mod tables;
pub mod vocoder;

pub use error::{AmbeError, Result};
pub use fec::{Codewords, FecDecoder, FecEncoder};
pub use frame::{ParamFrame, WireFrame};
pub use native::NativeFrame;
pub use vocoder::{Vocoder, VocoderEngine};

// Frame configuration
pub const WIRE_FRAME_BYTES: usize = 9;
pub const WIRE_FRAME_BITS: usize = WIRE_FRAME_BYTES * 8; // 72
pub const PARAM_FRAME_BYTES: usize = 7;
pub const PARAM_FRAME_BITS: usize = 49;
pub const NATIVE_FRAME_BYTES: usize = PARAM_FRAME_BYTES + 1; // reserved leading byte

// Field configuration (wire widths)
pub const FIELD_A_BITS: usize = 24;
pub const FIELD_B_BITS: usize = 23;
pub const FIELD_C_BITS: usize = 25;
pub const PAYLOAD_BITS: usize = 12;
pub const TABLE_SIZE: usize = 1 << PAYLOAD_BITS; // 4096

// Audio configuration
pub const SAMPLE_RATE: usize = 8000;
pub const FRAME_DURATION_MS: usize = 20;
pub const PCM_FRAME_SAMPLES: usize = (SAMPLE_RATE * FRAME_DURATION_MS) / 1000; // 160
