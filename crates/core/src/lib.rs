//! hufkey-core: frequency-keyed byte substitution codec
//!
//! This library derives a byte-substitution table from the statistical
//! content of an input and uses it to transform the input reversibly:
//! - Counts byte frequencies across the source
//! - Builds a Huffman-style merge tree over the counts
//! - Assigns each distinct byte a sequential code in traversal order
//! - Substitutes bytes one-for-one, forward or inverse
//!
//! The table is the "key": produced once by the forward path, required
//! unmodified by every inverse pass. One fixed-width output byte per
//! input byte -- this is a substitution codec, not compression, and the
//! key is derivable from the output by frequency analysis, so it offers
//! no real confidentiality.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: byte frequency collection
//! - `tree`: greedy minimum-weight merge tree
//! - `table`: leaf-code assignment and the substitution table
//! - `transform`: forward/inverse substitution passes
//! - `codec`: the two operations exposed to the surrounding driver
//! - `metrics`: observable run behavior
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Deterministic**: a documented tie-break makes key derivation
//!   reproducible for a given input
//! - **Degenerate inputs are valid**: empty and single-symbol sources
//!   produce trivial keys and round-trip correctly

pub mod codec;
pub mod error;
pub mod freq;
pub mod metrics;
pub mod table;
pub mod transform;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
