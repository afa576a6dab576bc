//! Block splitting — cuts an edit string into maximal runs of one character.
//!
//! Blocks cover the input exactly once, left to right, and adjacent blocks
//! always hold different characters. The compressor performs the same scan
//! fused with counting; this is the standalone decomposition.

/// Split an edit string into maximal same-character blocks.
///
/// Blocks are slices of `edits`, split on `char` boundaries.
///
/// ```
/// use cigar_core::split_blocks;
/// assert_eq!(split_blocks("MDMMMMMMIMMMM"), vec!["M", "D", "MMMMMM", "I", "MMMM"]);
/// assert!(split_blocks("").is_empty());
/// ```
pub fn split_blocks(edits: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut chars = edits.char_indices();
    let Some((_, mut current)) = chars.next() else {
        return blocks;
    };
    let mut start = 0;

    for (i, c) in chars {
        if c != current {
            blocks.push(&edits[start..i]);
            start = i;
            current = c;
        }
    }
    blocks.push(&edits[start..]);
    blocks
}
