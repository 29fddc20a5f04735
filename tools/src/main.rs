use std::fmt::Write;
use std::fs;
use std::path::PathBuf;
use ambefec_core::{FIELD_A_BITS, FIELD_B_BITS, TABLE_SIZE, WIRE_FRAME_BITS};

/// Generator polynomial of the (23, 12) Golay code: x^11 + x^10 + x^6 + x^5 + x^4 + x^2 + 1
const GOLAY_POLY: u32 = 0xC75;

/// Interleave depth of the wire frame
const COLUMNS: usize = 4;

fn golay23(data: u32) -> u32 {
    let mut rem = data << 11;
    for bit in (11..23).rev() {
        if rem & (1 << bit) != 0 {
            rem ^= GOLAY_POLY << (bit - 11);
        }
    }
    data << 11 | rem
}

fn golay24(data: u32) -> u32 {
    let code = golay23(data);
    code << 1 | (code.count_ones() & 1)
}

/// 24 bits of the AMBE whitening sequence seeded by a 12-bit field A payload
fn prng(seed: u32) -> u32 {
    let mut state = (seed << 4) as u16;
    (0..24).fold(0, |word, _| {
        state = state.wrapping_mul(173).wrapping_add(13849);
        word << 1 | (state >> 15) as u32
    })
}

fn write_positions(out: &mut String, name: &str, doc: &str, positions: &[usize]) {
    writeln!(out, "/// {}", doc).unwrap();
    writeln!(out, "pub static {}: [u8; {}] = [", name, positions.len()).unwrap();
    for row in positions.chunks(12) {
        let items: Vec<String> = row.iter().map(|p| format!("{},", p)).collect();
        writeln!(out, "    {}", items.join(" ")).unwrap();
    }
    writeln!(out, "];").unwrap();
}

fn write_table(out: &mut String, name: &str, doc: &str, entry: fn(u32) -> u32) {
    writeln!(out, "/// {}", doc).unwrap();
    writeln!(out, "pub static {}: [u32; {}] = [", name, TABLE_SIZE).unwrap();
    let values: Vec<u32> = (0..TABLE_SIZE as u32).map(entry).collect();
    for row in values.chunks(8) {
        let items: Vec<String> = row.iter().map(|v| format!("0x{:06X},", v)).collect();
        writeln!(out, "    {}", items.join(" ")).unwrap();
    }
    writeln!(out, "];").unwrap();
}

fn main() {
    let tables_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("core/src/tables.rs");

    // Column-major walk over the 4-deep interleave, split A | B | C
    let order: Vec<usize> = (0..COLUMNS)
        .flat_map(|col| (col..WIRE_FRAME_BITS).step_by(COLUMNS))
        .collect();
    let (a, rest) = order.split_at(FIELD_A_BITS);
    let (b, c) = rest.split_at(FIELD_B_BITS);

    let mut content = String::from(
        "// AUTO-GENERATED FILE - DO NOT EDIT MANUALLY\n\
         // Run `cargo run -p generate-fec-tables` to regenerate\n\
         \n\
         //! Fixed protocol constants for the AMBE+2 voice frame FEC.\n\
         \n",
    );

    write_positions(&mut content, "A_TABLE", "Wire positions of the 24-bit field A codeword, MSB first.", a);
    content.push('\n');
    write_positions(&mut content, "B_TABLE", "Wire positions of the 23-bit field B codeword, MSB first.", b);
    content.push('\n');
    write_positions(&mut content, "C_TABLE", "Wire positions of the 25-bit field C word, MSB first.", c);
    content.push('\n');
    write_table(
        &mut content,
        "GOLAY_24128",
        "(24, 12) extended Golay codewords indexed by 12-bit payload.",
        golay24,
    );
    content.push('\n');
    write_table(
        &mut content,
        "GOLAY_23127",
        "(23, 12) Golay codewords indexed by 12-bit payload, shifted left by one bit.",
        |data| golay23(data) << 1,
    );
    content.push('\n');
    write_table(
        &mut content,
        "PRNG_TABLE",
        "24-bit scrambling words indexed by the field A payload. The top 23 bits mask field B.",
        prng,
    );

    fs::write(&tables_path, content).expect("Failed to write tables file");

    println!("Generated: {}", tables_path.display());
}
