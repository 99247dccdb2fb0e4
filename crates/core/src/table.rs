//! Leaf-code assignment and the substitution table.
//!
//! The key is an ordered list of `(original, assigned)` byte pairs: a
//! pre-order traversal of the merge tree (left subtree fully before
//! right, at every internal node) hands each leaf the next value of a
//! sequential counter starting at 0. The table is produced once by the
//! forward path, never mutated afterwards, and is required symmetrically
//! by both transform directions.
//!
//! Lookup in both directions goes through 256-entry direct arrays
//! indexed by byte value. Observable behavior is identical to a linear
//! scan over the pair list; only the per-byte cost differs.

use crate::error::{Result, TableError};
use crate::tree::MergeNode;

/// One key entry: a source byte and the code assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePair {
    /// Byte value as it appears in the source
    pub original: u8,

    /// Byte value emitted in its place by the forward transform
    pub assigned: u8,
}

/// The substitution key.
///
/// Invariants, checked at construction:
/// - `original` values are pairwise distinct (exactly the distinct bytes
///   of the source the tree was built from)
/// - `assigned` values are pairwise distinct (`0..n` in traversal order;
///   a permutation of the full byte domain when n == 256)
///
/// Immutable and freely shareable once built; inverse transforms may use
/// the same table any number of times.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    pairs: Vec<CodePair>,
    forward: [Option<u8>; 256],
    inverse: [Option<u8>; 256],
}

impl SubstitutionTable {
    /// Assign codes over a merge tree and build the table.
    ///
    /// `None` (no tree, empty source) yields an empty table. A lone leaf
    /// root yields exactly one entry.
    ///
    /// # Errors
    /// `TableError::DuplicateSymbol` or `TableError::CodeCollision` if
    /// the traversal emits a repeated original or assigned value. Neither
    /// can happen for a tree built from a byte histogram, which has at
    /// most 256 leaves with distinct symbols; the wrapping counter is
    /// checked rather than trusted.
    pub fn from_tree(root: Option<&MergeNode>) -> Result<Self> {
        let mut pairs = Vec::new();
        if let Some(root) = root {
            let mut next_code = 0u8;
            assign_codes(root, &mut next_code, &mut pairs);
        }
        Self::from_pairs(pairs)
    }

    /// Build the lookup arrays, rejecting duplicates in either column.
    fn from_pairs(pairs: Vec<CodePair>) -> Result<Self> {
        let mut forward = [None; 256];
        let mut inverse = [None; 256];

        for pair in &pairs {
            if forward[pair.original as usize].is_some() {
                return Err(TableError::DuplicateSymbol {
                    symbol: pair.original,
                }
                .into());
            }
            if inverse[pair.assigned as usize].is_some() {
                return Err(TableError::CodeCollision {
                    code: pair.assigned,
                }
                .into());
            }
            forward[pair.original as usize] = Some(pair.assigned);
            inverse[pair.assigned as usize] = Some(pair.original);
        }

        Ok(Self {
            pairs,
            forward,
            inverse,
        })
    }

    /// Forward mapping: original byte -> assigned code.
    pub fn encode_byte(&self, symbol: u8) -> Option<u8> {
        self.forward[symbol as usize]
    }

    /// Inverse mapping: assigned code -> original byte.
    pub fn decode_byte(&self, code: u8) -> Option<u8> {
        self.inverse[code as usize]
    }

    /// Number of entries (distinct bytes of the keyed source).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True for the empty-source table.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The entries in assignment (traversal) order.
    pub fn pairs(&self) -> &[CodePair] {
        &self.pairs
    }
}

/// Pre-order leaf traversal with a wrapping one-byte counter.
///
/// Tree depth is bounded by the leaf count (at most 256), so recursion
/// depth stays small even for fully skewed trees.
fn assign_codes(node: &MergeNode, next_code: &mut u8, pairs: &mut Vec<CodePair>) {
    match node {
        MergeNode::Leaf { symbol } => {
            pairs.push(CodePair {
                original: *symbol,
                assigned: *next_code,
            });
            *next_code = next_code.wrapping_add(1);
        }
        MergeNode::Internal { left, right } => {
            assign_codes(left, next_code, pairs);
            assign_codes(right, next_code, pairs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::freq::ByteFrequencies;
    use crate::tree::build_merge_tree;

    fn table_for(data: &[u8]) -> SubstitutionTable {
        let freqs = ByteFrequencies::from_bytes(data);
        let tree = build_merge_tree(&freqs);
        SubstitutionTable::from_tree(tree.as_ref()).unwrap()
    }

    #[test]
    fn test_empty_tree_empty_table() {
        let table = SubstitutionTable::from_tree(None).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.encode_byte(0x00), None);
        assert_eq!(table.decode_byte(0x00), None);
    }

    #[test]
    fn test_single_leaf_single_entry() {
        let table = table_for(&[0x41; 100]);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.pairs(),
            &[CodePair {
                original: 0x41,
                assigned: 0,
            }]
        );
        assert_eq!(table.encode_byte(0x41), Some(0));
        assert_eq!(table.decode_byte(0), Some(0x41));
    }

    #[test]
    fn test_preorder_assignment() {
        // A:2, B:1, C:1 -- tree is (A, (B, C)), so pre-order leaf order
        // is A, B, C and codes are 0, 1, 2.
        let table = table_for(&[0x41, 0x41, 0x42, 0x43]);

        let expected = vec![
            CodePair {
                original: 0x41,
                assigned: 0,
            },
            CodePair {
                original: 0x42,
                assigned: 1,
            },
            CodePair {
                original: 0x43,
                assigned: 2,
            },
        ];
        assert_eq!(table.pairs(), expected.as_slice());
    }

    #[test]
    fn test_assigned_column_is_sequential() {
        let data = b"abracadabra".to_vec();
        let table = table_for(&data);

        let mut assigned: Vec<u8> = table.pairs().iter().map(|p| p.assigned).collect();
        assigned.sort_unstable();
        let expected: Vec<u8> = (0..table.len() as u8).collect();
        assert_eq!(assigned, expected);
    }

    #[test]
    fn test_full_alphabet_permutation() {
        let data: Vec<u8> = (0..=255).flat_map(|b| std::iter::repeat(b).take(1 + b as usize % 7)).collect();
        let table = table_for(&data);

        assert_eq!(table.len(), 256);
        let mut assigned: Vec<u8> = table.pairs().iter().map(|p| p.assigned).collect();
        assigned.sort_unstable();
        let full: Vec<u8> = (0..=255).collect();
        assert_eq!(assigned, full);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        // Hand-built invalid tree: the same byte at two leaves.
        let bad = MergeNode::Internal {
            left: Box::new(MergeNode::Leaf { symbol: 0x41 }),
            right: Box::new(MergeNode::Leaf { symbol: 0x41 }),
        };

        let result = SubstitutionTable::from_tree(Some(&bad));
        assert!(matches!(
            result,
            Err(Error::Table(TableError::DuplicateSymbol { symbol: 0x41 }))
        ));
    }

    #[test]
    fn test_forward_inverse_consistency() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");

        for pair in table.pairs() {
            assert_eq!(table.encode_byte(pair.original), Some(pair.assigned));
            assert_eq!(table.decode_byte(pair.assigned), Some(pair.original));
        }
    }
}
