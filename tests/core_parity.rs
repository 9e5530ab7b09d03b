//! Parity checks between the CLI's rendered output and direct `tally_core` calls.

use tally::cli::args::ArgError;
use tally::cli::commands::{render_len, render_sum, render_tails};
use tally_core::aggregate::{sum, sum_all_tails};
use tally_core::text::{TextLength, banger, byte_len, char_len};

#[test]
fn sum_command_matches_core() {
    assert_eq!(render_sum(&["1", "2", "3", "4", "5"]).unwrap(), sum(&[1, 2, 3, 4, 5]).to_string());
    assert_eq!(render_sum::<&str>(&[]).unwrap(), sum(&[]).to_string());
}

#[test]
fn tails_command_matches_core() {
    let batch: Vec<Vec<i64>> = vec![vec![], vec![7], vec![1, 2, 3]];
    assert_eq!(sum_all_tails(&batch), vec![0, 0, 5]);
    assert_eq!(render_tails(&["", "7", "1,2,3"]).unwrap(), format!("{:?}", sum_all_tails(&batch)));

    assert_eq!(sum_all_tails(&[Vec::<i64>::new()]), vec![0]);
    assert_eq!(render_tails(&[""]).unwrap(), "[0]");
}

#[test]
fn len_command_matches_core() {
    for text in ["carl", "İnanç", "", "🦀 crab"] {
        let len = TextLength::measure(text);
        assert_eq!(len.bytes, byte_len(text));
        assert_eq!(len.chars, char_len(text));
        assert_eq!(
            render_len(text),
            format!("{text:?} is {} bytes\n{text:?} is {} characters", len.bytes, len.chars)
        );
    }
}

#[test]
fn reference_lengths() {
    assert_eq!((byte_len("carl"), char_len("carl")), (4, 4));
    assert_eq!((byte_len("İnanç"), char_len("İnanç")), (7, 5));
}

#[test]
fn banger_counts_bytes_not_characters() {
    assert_eq!(banger("İnanç").chars().filter(|c| *c == '!').count(), byte_len("İnanç"));
}

#[test]
fn bad_tokens_are_reported_not_panicked() {
    let err = render_tails(&["1,2", "3,x"]).unwrap_err();
    assert!(matches!(err, ArgError::InvalidInteger { ref token, .. } if token == "x"));
}
