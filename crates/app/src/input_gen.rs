//! Input file generation for testing.
//!
//! When no input file is specified, we generate a sample file whose
//! byte histogram varies section by section. The key is derived from
//! the histogram, so the sections are chosen by frequency shape:
//!
//! - Single-symbol runs: one leaf dominates, the merge tree goes deep
//! - Biased pairs: two symbols at a 9:1 ratio
//! - Skewed alphabet: a small alphabet with geometrically decaying
//!   weights (text-like histograms)
//! - Uniform noise: a flat histogram, balanced tree
//!
//! Generation is seeded and fully reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Section size for the generator.
const SECTION_BYTES: usize = 8192;

/// Generate sample input data with mixed histogram shapes.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of generated data
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(SECTION_BYTES);

        match rng.gen_range(0..4u8) {
            0 => push_run(&mut rng, &mut data, section),
            1 => push_biased_pair(&mut rng, &mut data, section),
            2 => push_skewed_alphabet(&mut rng, &mut data, section),
            _ => push_uniform(&mut rng, &mut data, section),
        }
    }

    data.truncate(size_bytes);
    data
}

/// One symbol repeated for the whole section.
fn push_run(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    let symbol: u8 = rng.gen();
    data.extend(std::iter::repeat(symbol).take(len));
}

/// Two symbols at roughly a 9:1 ratio.
fn push_biased_pair(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    let common: u8 = rng.gen();
    let rare: u8 = common.wrapping_add(1);
    for _ in 0..len {
        if rng.gen_range(0..10u8) == 0 {
            data.push(rare);
        } else {
            data.push(common);
        }
    }
}

/// Small alphabet with geometrically decaying symbol weights.
fn push_skewed_alphabet(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    let base: u8 = rng.gen();
    let alphabet_size = rng.gen_range(4..=24u8);
    for _ in 0..len {
        // Halving probability per step gives a geometric histogram.
        let mut offset = 0u8;
        while offset + 1 < alphabet_size && rng.gen_bool(0.5) {
            offset += 1;
        }
        data.push(base.wrapping_add(offset));
    }
}

/// Uniform random bytes (flat histogram).
fn push_uniform(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    for _ in 0..len {
        data.push(rng.gen());
    }
}

/// Write generated data to a file.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<()> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_data() {
        let data = generate_sample_data(42, 1000);
        assert_eq!(data.len(), 1000);
    }

    #[test]
    fn test_determinism() {
        let data1 = generate_sample_data(12345, 5000);
        let data2 = generate_sample_data(12345, 5000);

        assert_eq!(data1, data2);
    }

    #[test]
    fn test_different_seeds() {
        let data1 = generate_sample_data(1, 1000);
        let data2 = generate_sample_data(2, 1000);

        assert_ne!(data1, data2);
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 100, 1000, 10_000, 100_000] {
            let data = generate_sample_data(999, size);
            assert_eq!(data.len(), size);
        }
    }

    #[test]
    fn test_histograms_vary() {
        // Across enough sections, more than one distinct byte must occur.
        let data = generate_sample_data(7, 64 * 1024);
        let mut seen = [false; 256];
        for &b in &data {
            seen[b as usize] = true;
        }
        assert!(seen.iter().filter(|&&s| s).count() > 1);
    }
}
