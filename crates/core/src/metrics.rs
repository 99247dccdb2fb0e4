//! Metrics collection and reporting for a codec run.
//!
//! This module provides observable insights into a run:
//! - Byte counts at each stage (input, encoded, decoded)
//! - Key statistics (distinct symbols, table entries)
//! - Timing and throughput
//! - Round-trip verification outcome
//!
//! # Thread Safety
//!
//! The `RunMetrics` struct is NOT thread-safe. The codec itself is
//! single-threaded and sequential, so updates happen at each pipeline
//! stage from one thread.

use std::time::{Duration, Instant};

/// Metrics for one encode/decode run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input/Output ===
    /// Total bytes read from the input file
    pub input_bytes: u64,

    /// Bytes written by the forward transform
    pub encoded_bytes: u64,

    /// Bytes written by the inverse transform
    pub decoded_bytes: u64,

    // === Key ===
    /// Distinct byte values in the input (= key table entries)
    pub table_entries: usize,

    // === Verification ===
    /// Whether the decoded output matched the input (None until checked)
    pub verified: Option<bool>,
}

impl RunMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            encoded_bytes: 0,
            decoded_bytes: 0,
            table_entries: 0,
            verified: None,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compute throughput in bytes/second over the input.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.input_bytes as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Run Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("Input:   {} bytes", self.input_bytes);
        println!("Encoded: {} bytes", self.encoded_bytes);
        println!("Decoded: {} bytes", self.decoded_bytes);
        println!();

        println!("=== Key ===");
        println!("Table entries: {} of 256 possible", self.table_entries);
        println!();

        match self.verified {
            Some(true) => println!("Verification: PASSED"),
            Some(false) => println!("Verification: FAILED"),
            None => println!("Verification: not performed"),
        }
        println!();

        println!("=== Performance ===");
        println!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        match self.verified {
            Some(true) => {
                println!("Round trip completed successfully");
                println!(
                    "  {} bytes in {} ms",
                    self.input_bytes,
                    self.duration().as_millis()
                );
            }
            Some(false) if self.input_bytes != self.decoded_bytes => {
                println!(
                    "Round trip failed: size mismatch ({} != {})",
                    self.input_bytes, self.decoded_bytes
                );
            }
            Some(false) => {
                println!("Round trip failed: decoded output differs from input");
            }
            None => {
                println!("Round trip not verified");
            }
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             encoded_bytes={}\n\
             decoded_bytes={}\n\
             table_entries={}\n\
             verified={}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.encoded_bytes,
            self.decoded_bytes,
            self.table_entries,
            match self.verified {
                Some(true) => "pass",
                Some(false) => "fail",
                None => "none",
            },
        )
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}
