//! Top-level codec operations.
//!
//! Ties the pipeline together for the surrounding driver: frequency
//! collection, tree construction and code assignment on one side,
//! the substitution passes on the other.
//!
//! Deriving the key and applying it both consume the source, so the
//! forward operation scans the source twice and requires `Seek`. The
//! inverse operation needs only a forward-readable source plus the
//! table produced by the forward side -- the table is the only state
//! shared between the two.

use crate::error::Result;
use crate::freq::ByteFrequencies;
use crate::table::SubstitutionTable;
use crate::transform::{decode_stream, encode_stream};
use crate::tree::build_merge_tree;
use std::io::{Read, Seek, SeekFrom, Write};

/// Derive a substitution table from the full contents of `reader`.
///
/// Consumes the reader to end-of-stream. An empty source yields an
/// empty table; a source with one distinct byte yields a one-entry
/// table. Neither is an error.
pub fn derive_table<R: Read>(reader: &mut R) -> Result<SubstitutionTable> {
    let freqs = ByteFrequencies::collect(reader)?;
    let tree = build_merge_tree(&freqs);
    SubstitutionTable::from_tree(tree.as_ref())
}

/// Derive the key from `source`, rewind, and encode it into `sink`.
///
/// The source is read twice (statistics pass, then substitution pass),
/// which is why it must be seekable. Returns the table and the number
/// of bytes written to the sink.
///
/// # Errors
/// I/O errors from either pass or the rewind. Unmapped-symbol errors
/// cannot occur here: the key is complete relative to the data it was
/// just derived from.
pub fn build_and_encode<R, W>(source: &mut R, sink: &mut W) -> Result<(SubstitutionTable, u64)>
where
    R: Read + Seek,
    W: Write,
{
    let table = derive_table(source)?;
    source.seek(SeekFrom::Start(0))?;
    let written = encode_stream(source, sink, &table)?;
    Ok((table, written))
}

/// Decode `source` through `table` into `sink`.
///
/// Returns the number of bytes written.
///
/// # Errors
/// - `TransformError::UnmappedCode` if the source contains a code the
///   table does not cover (corrupt data or a mismatched key)
/// - I/O errors, propagated immediately
pub fn decode<R: Read, W: Write>(
    source: &mut R,
    table: &SubstitutionTable,
    sink: &mut W,
) -> Result<u64> {
    decode_stream(source, sink, table)
}
