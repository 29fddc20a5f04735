use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use ambefec_core::{FecEncoder, ParamFrame};

fn tmp_path(name: &str) -> PathBuf {
    let tmp_dir = std::env::temp_dir().join("ambefec-cli-tests");
    fs::create_dir_all(&tmp_dir).ok();
    tmp_dir.join(name)
}

fn create_test_file(name: &str, content: &[u8]) -> PathBuf {
    let path = tmp_path(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn run_ambefec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ambefec"))
        .args(args)
        .output()
        .expect("Failed to execute ambefec")
}

fn combined_output(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string() + &String::from_utf8_lossy(&output.stdout)
}

fn sample_params() -> Vec<u8> {
    [
        ParamFrame::from_fields(0x000, 0x000, 0),
        ParamFrame::from_fields(0xABC, 0x123, 0x1_55AA_FF),
        ParamFrame::from_fields(0xFFF, 0xFFF, 0x1FF_FFFF),
    ]
    .iter()
    .flat_map(|frame| *frame.as_bytes())
    .collect()
}

#[test]
fn test_encode_writes_wire_frames() {
    let params = sample_params();
    let input = create_test_file("encode_in.ambe49", &params);
    let output = tmp_path("encode_out.ambe72");

    let result = run_ambefec(&["encode", input.to_str().unwrap(), output.to_str().unwrap()]);
    let text = combined_output(&result);

    assert!(result.status.success(), "encode failed: {}", text);
    assert!(text.contains("Encoded 3 frames"), "unexpected output: {}", text);

    let encoded = fs::read(&output).expect("Output file not created");
    let expected: Vec<u8> = params
        .chunks(7)
        .flat_map(|chunk| FecEncoder::encode_bytes(chunk).unwrap())
        .collect();
    assert_eq!(encoded, expected);
}

#[test]
fn test_roundtrip_consistency() {
    let params = sample_params();
    let input = create_test_file("roundtrip_in.ambe49", &params);
    let encoded = tmp_path("roundtrip.ambe72");
    let decoded = tmp_path("roundtrip_out.ambe49");

    let result = run_ambefec(&["encode", input.to_str().unwrap(), encoded.to_str().unwrap()]);
    assert!(result.status.success(), "encode failed: {}", combined_output(&result));

    let result = run_ambefec(&["decode", encoded.to_str().unwrap(), decoded.to_str().unwrap()]);
    let text = combined_output(&result);
    assert!(result.status.success(), "decode failed: {}", text);
    assert!(text.contains("Decoded 3 frames"), "unexpected output: {}", text);

    let decoded_content = fs::read(&decoded).expect("Failed to read decoded output");
    assert_eq!(decoded_content, params, "Roundtrip mismatch");
}

#[test]
fn test_decode_rejects_partial_frame() {
    let input = create_test_file("partial.ambe72", &[0u8; 13]);
    let output = tmp_path("partial_out.ambe49");
    fs::remove_file(&output).ok();

    let result = run_ambefec(&["decode", input.to_str().unwrap(), output.to_str().unwrap()]);
    let text = combined_output(&result);

    assert!(!result.status.success(), "decode of 13 bytes should fail");
    assert!(
        text.contains("Error: Invalid frame size: expected 18 bytes, got 13"),
        "unexpected output: {}",
        text
    );
    assert!(!output.exists(), "No output should be written on failure");
}

#[test]
fn test_inspect_text() {
    let wire = FecEncoder::encode_bytes(&ParamFrame::from_fields(0xABC, 0x123, 0x42).into_bytes()).unwrap();
    let input = create_test_file("inspect_text.ambe72", &wire);

    let result = run_ambefec(&["inspect", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&result.stdout);

    assert!(result.status.success(), "inspect failed: {}", combined_output(&result));
    assert!(stdout.starts_with("#0"), "unexpected output: {}", stdout);
    assert!(stdout.contains("a=ABC b=123 c=0000042"), "unexpected output: {}", stdout);
}

#[test]
fn test_inspect_rejects_partial_frame() {
    let input = create_test_file("inspect_partial.ambe72", &[0u8; 20]);

    let result = run_ambefec(&["inspect", input.to_str().unwrap()]);
    let text = combined_output(&result);

    // Same message as decode
    assert!(!result.status.success(), "inspect of 20 bytes should fail");
    assert!(
        text.contains("Error: Invalid frame size: expected 27 bytes, got 20"),
        "unexpected output: {}",
        text
    );
    assert!(result.stdout.is_empty(), "No frames should be printed on failure");
}

#[test]
fn test_inspect_json() {
    let input = create_test_file("inspect_json.ambe72", &[0u8; 18]);

    let result = run_ambefec(&["inspect", "--json", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(result.status.success(), "inspect failed: {}", combined_output(&result));

    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("Invalid JSON line"))
        .collect();
    assert_eq!(lines.len(), 2);

    // All-zero frames still descramble B against PRNG_TABLE[0]
    assert_eq!(lines[1]["index"], 1);
    assert_eq!(lines[1]["wire"], "000000000000000000");
    assert_eq!(lines[1]["a"], 0);
    assert_eq!(lines[1]["b"], 0x42C);
    assert_eq!(lines[1]["c"], 0);
}
