//! Configuration for the hufkey application.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults (including a reproducible seed for sample generation).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use std::path::PathBuf;

/// Complete configuration for a round-trip run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input file path (None = generate sample)
    pub input_file: Option<PathBuf>,

    /// Where generated sample data is written when no input is given
    pub sample_file: PathBuf,

    /// Encrypted output file path
    pub encrypted_file: PathBuf,

    /// Decrypted output file path
    pub decrypted_file: PathBuf,

    // === Sample generation ===
    /// Seed for sample generation
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided, a time-based seed is used (and printed
    /// via `print`, so a run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut sample_file: Option<PathBuf> = None;
        let mut encrypted_file: Option<PathBuf> = None;
        let mut decrypted_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--sample-file" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-file requires a path".to_string());
                    }
                    sample_file = Some(PathBuf::from(&args[i]));
                }
                "--encrypted" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--encrypted requires a path".to_string());
                    }
                    encrypted_file = Some(PathBuf::from(&args[i]));
                }
                "--decrypted" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decrypted requires a path".to_string());
                    }
                    decrypted_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            sample_file: sample_file.unwrap_or_else(|| PathBuf::from("./sample.bin")),
            encrypted_file: encrypted_file.unwrap_or_else(|| PathBuf::from("./encrypted.bin")),
            decrypted_file: decrypted_file.unwrap_or_else(|| PathBuf::from("./decrypted.bin")),
            seed,
            sample_bytes: sample_bytes.unwrap_or(256 * 1024), // 256 KiB
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:  {}", path.display()),
            None => println!(
                "Input file:  (generate {} byte sample at {})",
                self.sample_bytes,
                self.sample_file.display()
            ),
        }
        println!("Encrypted:   {}", self.encrypted_file.display());
        println!("Decrypted:   {}", self.decrypted_file.display());
        println!();
        println!("Seed: {}", self.seed);
        println!();
    }
}

fn print_help() {
    println!("hufkey: derive a substitution key from a file's byte statistics");
    println!("and round-trip the file through it (encrypt, then decrypt with");
    println!("the in-memory key, then verify)");
    println!();
    println!("USAGE:");
    println!("    hufkey [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>            Input file (default: generate sample)");
    println!("    --sample-file <PATH>   Where to write generated sample (default: ./sample.bin)");
    println!("    --encrypted <PATH>     Encrypted output (default: ./encrypted.bin)");
    println!("    --decrypted <PATH>     Decrypted output (default: ./decrypted.bin)");
    println!();
    println!("    --seed <N>             Seed for sample generation (default: time-based)");
    println!("    --sample-bytes <N>     Generated sample size (default: 262144)");
    println!();
    println!("    --print-config         Print resolved configuration");
    println!("    --no-metrics           Don't print metrics summary");
    println!("    --help, -h             Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    hufkey                         # Round-trip a generated sample");
    println!("    hufkey --seed 42               # Deterministic sample");
    println!("    hufkey --in archive.zip        # Round-trip a specific file");
    println!();
}
