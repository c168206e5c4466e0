#![forbid(unsafe_code)]

//! Content checksums for golden assertions.
//!
//! Checksums are computed over the canonical [`outline`] rendering with the
//! standard library hasher. That is deterministic within a toolchain, which
//! is all a golden comparison needs; tests compare checksums against each
//! other, never against hard-coded values.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crumb_core::Node;

use crate::preview::outline;

/// Prefix marking the hash scheme in logs.
const CHECKSUM_PREFIX: &str = "h64:";

/// Checksum a rendered line sequence.
pub fn checksum_lines(lines: &[String]) -> String {
    let mut hasher = DefaultHasher::new();
    for line in lines {
        line.hash(&mut hasher);
    }
    format!("{CHECKSUM_PREFIX}{:016x}", hasher.finish())
}

/// Checksum a node tree via its canonical outline.
pub fn checksum_view(node: &Node) -> String {
    checksum_lines(&outline(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumb_core::{Element, Tag};

    #[test]
    fn equal_trees_share_a_checksum() {
        let a = Element::new(Tag::Div).text("hello").into_node();
        let b = Element::new(Tag::Div).text("hello").into_node();
        assert_eq!(checksum_view(&a), checksum_view(&b));
    }

    #[test]
    fn different_trees_differ() {
        let a = Element::new(Tag::Div).text("hello").into_node();
        let b = Element::new(Tag::Div).text("goodbye").into_node();
        assert_ne!(checksum_view(&a), checksum_view(&b));
    }

    #[test]
    fn line_boundaries_matter() {
        // The same characters split differently must not collide.
        let a = checksum_lines(&["ab".to_string(), "c".to_string()]);
        let b = checksum_lines(&["a".to_string(), "bc".to_string()]);
        assert_ne!(a, b);
    }

    #[test]
    fn checksums_carry_the_scheme_prefix() {
        let sum = checksum_lines(&[]);
        assert!(sum.starts_with("h64:"));
        assert_eq!(sum.len(), "h64:".len() + 16);
    }
}
