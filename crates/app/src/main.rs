//! hufkey driver.
//!
//! Encrypts a file with a substitution key derived from its own byte
//! statistics, decrypts the result with the in-memory key, and verifies
//! the round trip. The key exists only for the lifetime of the process,
//! so both passes happen in one run.

mod config;
mod input_gen;

use config::Config;
use hufkey_core::codec;
use hufkey_core::metrics::RunMetrics;
use hufkey_core::Result;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

/// Run the full pipeline. Returns whether verification passed.
fn run(config: &Config) -> Result<bool> {
    let mut metrics = RunMetrics::new();

    // Resolve the input: an explicit file, or a generated sample.
    let input_path: PathBuf = match &config.input_file {
        Some(path) => path.clone(),
        None => {
            input_gen::write_sample_file(&config.sample_file, config.seed, config.sample_bytes)?;
            config.sample_file.clone()
        }
    };

    // Forward pass: derive the key from the source, then substitute.
    let mut source = File::open(&input_path)?;
    let mut encrypted_sink = BufWriter::new(File::create(&config.encrypted_file)?);
    let (table, encoded) = codec::build_and_encode(&mut source, &mut encrypted_sink)?;
    encrypted_sink.flush()?;
    metrics.encoded_bytes = encoded;
    metrics.table_entries = table.len();

    // Inverse pass against the file just written, with the same table.
    let mut encrypted_source = File::open(&config.encrypted_file)?;
    let mut decrypted_sink = BufWriter::new(File::create(&config.decrypted_file)?);
    let decoded = codec::decode(&mut encrypted_source, &table, &mut decrypted_sink)?;
    decrypted_sink.flush()?;
    metrics.decoded_bytes = decoded;

    // Verify the round trip without holding both files in memory.
    let (input_crc, input_len) = file_crc32(&input_path)?;
    let (output_crc, output_len) = file_crc32(&config.decrypted_file)?;
    metrics.input_bytes = input_len;
    metrics.verified = Some(input_len == output_len && input_crc == output_crc);

    metrics.complete();
    if config.print_metrics {
        metrics.print_summary();
    }
    metrics.print_result();

    Ok(metrics.verified == Some(true))
}

/// CRC32 and length of a file's contents.
fn file_crc32(path: &Path) -> std::io::Result<(u32, u64)> {
    let mut file = File::open(path)?;
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = [0u8; 8192];
    let mut len: u64 = 0;

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        len += n as u64;
    }

    Ok((hasher.finalize(), len))
}
