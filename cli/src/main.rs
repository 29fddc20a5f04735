use ambefec_core::{FecDecoder, FecEncoder, WireFrame, PARAM_FRAME_BYTES, WIRE_FRAME_BYTES};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ambefec")]
#[command(about = "AMBE+2 voice frame FEC encoder/decoder")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode 7-byte parameter frames into 9-byte FEC frames
    Encode {
        /// Input file of concatenated 7-byte parameter frames
        #[arg(value_name = "INPUT.AMBE49")]
        input: PathBuf,

        /// Output file of concatenated 9-byte FEC frames
        #[arg(value_name = "OUTPUT.AMBE72")]
        output: PathBuf,
    },

    /// Decode 9-byte FEC frames into 7-byte parameter frames
    Decode {
        /// Input file of concatenated 9-byte FEC frames
        #[arg(value_name = "INPUT.AMBE72")]
        input: PathBuf,

        /// Output file of concatenated 7-byte parameter frames
        #[arg(value_name = "OUTPUT.AMBE49")]
        output: PathBuf,
    },

    /// Print the codewords and decoded fields of each 9-byte FEC frame
    Inspect {
        /// Input file of concatenated 9-byte FEC frames
        #[arg(value_name = "INPUT.AMBE72")]
        input: PathBuf,

        /// Emit one JSON object per frame
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct FrameReport {
    index: usize,
    wire: String,
    code_a: u32,
    code_b: u32,
    code_c: u32,
    a: u16,
    b: u16,
    c: u32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Encode { input, output } => encode_command(&input, &output)?,
        Commands::Decode { input, output } => decode_command(&input, &output)?,
        Commands::Inspect { input, json } => inspect_command(&input, json)?,
    }

    Ok(())
}

fn encode_command(input_path: &PathBuf, output_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input_path)?;
    println!("Read {} bytes from {}", data.len(), input_path.display());

    let frames = FecEncoder::encode_stream(&data)?;
    debug!("encoded {} frames of {} bytes", frames.len(), PARAM_FRAME_BYTES);

    let encoded: Vec<u8> = frames.iter().flat_map(|frame| *frame.as_bytes()).collect();
    std::fs::write(output_path, &encoded)?;

    println!("Encoded {} frames", frames.len());
    println!("Wrote {} bytes to {}", encoded.len(), output_path.display());
    Ok(())
}

fn decode_command(input_path: &PathBuf, output_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input_path)?;
    println!("Read {} bytes from {}", data.len(), input_path.display());

    let frames = FecDecoder::decode_stream(&data)?;
    debug!("decoded {} frames of {} bytes", frames.len(), WIRE_FRAME_BYTES);

    let decoded: Vec<u8> = frames.iter().flat_map(|frame| *frame.as_bytes()).collect();
    std::fs::write(output_path, &decoded)?;

    println!("Decoded {} frames", frames.len());
    println!("Wrote {} bytes to {}", decoded.len(), output_path.display());
    Ok(())
}

fn inspect_command(input_path: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input_path)?;
    info!("inspecting {} bytes from {}", data.len(), input_path.display());

    let wires = FecDecoder::wire_frames(&data)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (index, wire) in wires.iter().enumerate() {
        let report = frame_report(index, wire);

        if json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(
                out,
                "#{:<5} {}  A={:06X} B={:06X} C={:07X}  a={:03X} b={:03X} c={:07X}",
                report.index,
                report.wire,
                report.code_a,
                report.code_b,
                report.code_c,
                report.a,
                report.b,
                report.c
            )?;
        }
    }

    Ok(())
}

fn frame_report(index: usize, wire: &WireFrame) -> FrameReport {
    let words = FecDecoder::codewords(wire);
    let params = FecDecoder::decode(wire);

    FrameReport {
        index,
        wire: wire.as_bytes().iter().map(|b| format!("{:02x}", b)).collect(),
        code_a: words.a,
        code_b: words.b,
        code_c: words.c,
        a: params.field_a(),
        b: params.field_b(),
        c: params.field_c(),
    }
}
