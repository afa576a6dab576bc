use cigar_core::{expand, expand_runs, expand_with, tokenize, CigarError, Policy, Run};

#[test]
fn expand_reference_example() {
    assert_eq!(expand("1M1D6M1I4M").unwrap(), "MDMMMMMMIMMMM");
}

#[test]
fn expand_empty() {
    assert_eq!(expand("").unwrap(), "");
}

#[test]
fn expand_single_run() {
    assert_eq!(expand("5I").unwrap(), "IIIII");
}

#[test]
fn expand_zero_count_contributes_nothing() {
    assert_eq!(expand("0M2D").unwrap(), "DD");
    assert_eq!(expand("0M").unwrap(), "");
}

#[test]
fn expand_length_is_sum_of_counts() {
    let cigar = "10S90M2I3D40M5H";
    let total: usize = tokenize(cigar).unwrap().iter().map(|r| r.count).sum();
    assert_eq!(expand(cigar).unwrap().len(), total);
    assert_eq!(total, 150);
}

#[test]
fn expand_non_ascii_op() {
    assert_eq!(expand("2é1M").unwrap(), "ééM");
}

#[test]
fn expand_propagates_strict_error() {
    assert!(expand("5M3").is_err());
    assert!(expand("M").is_err());
    assert!(expand("1MM").is_err());
}

#[test]
fn expand_lenient_compound_op() {
    assert_eq!(expand_with("2MD1I", Policy::Lenient).unwrap(), "MDMDI");
}

#[test]
fn expand_lenient_drops_garbage() {
    assert_eq!(expand_with("xx2M9", Policy::Lenient).unwrap(), "MM");
}

#[test]
fn expand_runs_directly() {
    let runs = vec![Run::new(2, "M"), Run::new(0, "I"), Run::new(1, "D")];
    assert_eq!(expand_runs(&runs), "MMD");
    assert_eq!(expand_runs(&[]), "");
}

#[test]
fn expand_unrepresentable_length_is_error() {
    let cigar = format!("{}M", usize::MAX);
    assert!(tokenize(&cigar).is_ok());
    assert!(expand(&cigar).is_err());
    assert!(expand_with(&cigar, Policy::Lenient).is_err());
}

#[test]
fn expand_length_overflow_reports_run_offset() {
    // The running total overflows on the second run, which starts at byte 2.
    let cigar = format!("2M{}D", usize::MAX);
    match expand(&cigar) {
        Err(CigarError::InvalidCigarFormat { offset, message }) => {
            assert_eq!(offset, 2);
            assert!(message.contains("too large"), "{message}");
        }
        Ok(edits) => panic!("expected an error, got {} edits", edits.len()),
    }
}

#[test]
fn expand_multibyte_op_length_overflow() {
    // Fits as a count, but not once multiplied by the op's UTF-8 width.
    let cigar = format!("{}é", usize::MAX / 2 + 1);
    assert!(expand(&cigar).is_err());
}
