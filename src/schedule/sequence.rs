//! Ordering of a screen's campaign sequence.
//!
//! The saved order travels as a comma-joined list of ad account references.

use std::collections::HashSet;

use signage_types::SequenceEntry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,

    #[error("Sequence contains a blank reference")]
    BlankReference,

    #[error("Sequence lists {0} more than once")]
    Duplicate(String),

    #[error("Position {index} is outside a sequence of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Move the item at `from` to `to`, shifting the items in between.
///
/// `to` is clamped to the last position; the result is always a permutation
/// of `list`.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Result<Vec<T>, SequenceError> {
    if from >= list.len() {
        return Err(SequenceError::OutOfRange {
            index: from,
            len: list.len(),
        });
    }

    let mut result = list.to_vec();
    let moved = result.remove(from);
    let to = to.min(result.len());
    result.insert(to, moved);
    Ok(result)
}

/// Comma-joined references in sequence order.
pub fn join_references(entries: &[SequenceEntry]) -> String {
    entries
        .iter()
        .map(|e| e.reference.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a submitted `a,b,c` order, trimming whitespace.
pub fn parse_references(raw: &str) -> Result<Vec<String>, SequenceError> {
    if raw.trim().is_empty() {
        return Err(SequenceError::Empty);
    }

    let mut seen = HashSet::new();
    let mut refs = Vec::new();
    for part in raw.split(',') {
        let reference = part.trim();
        if reference.is_empty() {
            return Err(SequenceError::BlankReference);
        }
        if !seen.insert(reference) {
            return Err(SequenceError::Duplicate(reference.to_string()));
        }
        refs.push(reference.to_string());
    }
    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(reference: &str) -> SequenceEntry {
        SequenceEntry {
            id: None,
            reference: reference.to_string(),
            name: reference.to_uppercase(),
        }
    }

    #[test]
    fn test_reorder_moves_down_and_up() {
        let list = vec!["a", "b", "c", "d"];
        assert_eq!(reorder(&list, 0, 2).unwrap(), vec!["b", "c", "a", "d"]);
        assert_eq!(reorder(&list, 3, 0).unwrap(), vec!["d", "a", "b", "c"]);
        assert_eq!(reorder(&list, 1, 1).unwrap(), list);
    }

    #[test]
    fn test_reorder_clamps_destination() {
        let list = vec![1, 2, 3];
        assert_eq!(reorder(&list, 0, 99).unwrap(), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_rejects_bad_source() {
        let list = vec![1, 2, 3];
        assert_eq!(
            reorder(&list, 3, 0),
            Err(SequenceError::OutOfRange { index: 3, len: 3 })
        );
        assert!(reorder::<u8>(&[], 0, 0).is_err());
    }

    #[test]
    fn test_reorder_preserves_membership_and_length() {
        let list: Vec<u32> = (0..7).collect();
        for from in 0..list.len() {
            for to in 0..list.len() + 2 {
                let mut result = reorder(&list, from, to).unwrap();
                assert_eq!(result.len(), list.len());
                result.sort_unstable();
                assert_eq!(result, list, "from {from} to {to}");
            }
        }
    }

    #[test]
    fn test_join_references_in_order() {
        let entries = vec![entry("acc-2"), entry("acc-1"), entry("acc-3")];
        assert_eq!(join_references(&entries), "acc-2,acc-1,acc-3");
        assert_eq!(join_references(&[]), "");
    }

    #[test]
    fn test_parse_references() {
        assert_eq!(
            parse_references(" a, b ,c").unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(parse_references("  "), Err(SequenceError::Empty));
        assert_eq!(parse_references("a,,b"), Err(SequenceError::BlankReference));
        assert_eq!(
            parse_references("a,b,a"),
            Err(SequenceError::Duplicate("a".to_string()))
        );
    }
}
