//! Forward and inverse substitution passes.
//!
//! Both directions translate a byte stream one byte at a time through
//! the key: forward replaces each original byte with its assigned code,
//! inverse replaces each code with its original byte. The streams are
//! processed in fixed-size chunks; chunk size carries no semantics, byte
//! order is preserved exactly and partial final chunks are fully
//! written.
//!
//! A byte with no key entry is a data-integrity failure (the key was
//! derived from different data), reported with its absolute stream
//! offset and distinct from any I/O error. There is no recovery: a
//! failure mid-stream leaves the sink partially written and the whole
//! operation must be treated as failed.

use crate::error::{Result, TransformError};
use crate::table::SubstitutionTable;
use std::io::{Read, Write};

/// Buffer size for the translate loop.
const CHUNK_SIZE: usize = 8 * 1024;

/// Forward substitution: original bytes -> assigned codes.
///
/// Returns the number of bytes written (equal to the bytes read; the
/// transform is one-to-one and fixed width).
///
/// # Errors
/// - `TransformError::UnmappedSymbol` for a byte absent from the key
/// - I/O errors from the reader or writer, propagated immediately
pub fn encode_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    table: &SubstitutionTable,
) -> Result<u64> {
    let mut read_buf = [0u8; CHUNK_SIZE];
    let mut write_buf = [0u8; CHUNK_SIZE];
    let mut written: u64 = 0;

    loop {
        let n = reader.read(&mut read_buf)?;
        if n == 0 {
            break;
        }

        for i in 0..n {
            let symbol = read_buf[i];
            write_buf[i] = table.encode_byte(symbol).ok_or(TransformError::UnmappedSymbol {
                symbol,
                offset: written + i as u64,
            })?;
        }

        writer.write_all(&write_buf[..n])?;
        written += n as u64;
    }

    Ok(written)
}

/// Inverse substitution: assigned codes -> original bytes.
///
/// # Errors
/// - `TransformError::UnmappedCode` for a code absent from the key
/// - I/O errors from the reader or writer, propagated immediately
pub fn decode_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    table: &SubstitutionTable,
) -> Result<u64> {
    let mut read_buf = [0u8; CHUNK_SIZE];
    let mut write_buf = [0u8; CHUNK_SIZE];
    let mut written: u64 = 0;

    loop {
        let n = reader.read(&mut read_buf)?;
        if n == 0 {
            break;
        }

        for i in 0..n {
            let code = read_buf[i];
            write_buf[i] = table.decode_byte(code).ok_or(TransformError::UnmappedCode {
                code,
                offset: written + i as u64,
            })?;
        }

        writer.write_all(&write_buf[..n])?;
        written += n as u64;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::freq::ByteFrequencies;
    use crate::table::SubstitutionTable;
    use crate::tree::build_merge_tree;
    use std::io::Cursor;

    fn table_for(data: &[u8]) -> SubstitutionTable {
        let freqs = ByteFrequencies::from_bytes(data);
        let tree = build_merge_tree(&freqs);
        SubstitutionTable::from_tree(tree.as_ref()).unwrap()
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let data = b"hello substitution world".to_vec();
        let table = table_for(&data);

        let mut encoded = Vec::new();
        let n = encode_stream(&mut Cursor::new(&data), &mut encoded, &table).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(encoded.len(), data.len());

        let mut decoded = Vec::new();
        let n = decode_stream(&mut Cursor::new(&encoded), &mut decoded, &table).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_empty_stream() {
        let table = SubstitutionTable::from_tree(None).unwrap();

        let mut sink = Vec::new();
        let n = encode_stream(&mut Cursor::new(Vec::new()), &mut sink, &table).unwrap();
        assert_eq!(n, 0);
        assert!(sink.is_empty());

        let n = decode_stream(&mut Cursor::new(Vec::new()), &mut sink, &table).unwrap();
        assert_eq!(n, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unmapped_symbol_reports_offset() {
        // Key derived from "aaa" knows only 'a'; 'x' at offset 2 is foreign.
        let table = table_for(b"aaa");

        let mut sink = Vec::new();
        let result = encode_stream(&mut Cursor::new(b"aax".to_vec()), &mut sink, &table);

        assert!(matches!(
            result,
            Err(Error::Transform(TransformError::UnmappedSymbol {
                symbol: b'x',
                offset: 2,
            }))
        ));
    }

    #[test]
    fn test_unmapped_code_reports_offset() {
        // One-entry key: only code 0 is valid on the inverse path.
        let table = table_for(b"aaa");

        let mut sink = Vec::new();
        let result = decode_stream(&mut Cursor::new(vec![0, 0, 7]), &mut sink, &table);

        assert!(matches!(
            result,
            Err(Error::Transform(TransformError::UnmappedCode {
                code: 7,
                offset: 2,
            }))
        ));
    }

    #[test]
    fn test_multi_chunk_stream() {
        // Crosses the internal buffer boundary several times.
        let data: Vec<u8> = (0..=255u8).cycle().take(3 * CHUNK_SIZE + 17).collect();
        let table = table_for(&data);

        let mut encoded = Vec::new();
        encode_stream(&mut Cursor::new(&data), &mut encoded, &table).unwrap();

        let mut decoded = Vec::new();
        decode_stream(&mut Cursor::new(&encoded), &mut decoded, &table).unwrap();

        assert_eq!(decoded, data);
    }
}
