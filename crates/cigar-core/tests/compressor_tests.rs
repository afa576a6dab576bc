use cigar_core::{compress, compress_to_runs, Run};

#[test]
fn compress_reference_example() {
    assert_eq!(compress("MDMMMMMMIMMMM"), "1M1D6M1I4M");
}

#[test]
fn compress_alternating() {
    assert_eq!(compress("MDIMID"), "1M1D1I1M1I1D");
}

#[test]
fn compress_empty() {
    assert_eq!(compress(""), "");
    assert!(compress_to_runs("").is_empty());
}

#[test]
fn compress_single_char() {
    assert_eq!(compress("M"), "1M");
}

#[test]
fn compress_long_run() {
    let edits = "M".repeat(1234);
    assert_eq!(compress(&edits), "1234M");
}

#[test]
fn compress_arbitrary_alphabet() {
    // Digits in an edit string are compressed like any other symbol.
    assert_eq!(compress("aa11 é"), "2a211 1é");
}

#[test]
fn compress_to_runs_matches_blocks() {
    assert_eq!(
        compress_to_runs("SSMMMI"),
        vec![Run::new(2, "S"), Run::new(3, "M"), Run::new(1, "I")]
    );
}

#[test]
fn compress_to_runs_display_matches_compress() {
    let edits = "MMDDDIMMMMX";
    let joined: String = compress_to_runs(edits)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(joined, compress(edits));
}
