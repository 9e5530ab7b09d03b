//! Sum integer sequences, whole or without their first element.
//!
//! ## Notes
//! - **Overflow**: sums wrap on `i64` overflow (two's complement). No operation here panics.
//! - **Empty input**: the sum of an empty sequence is `0`, and so is its tail sum.
//! - **Batches**: batch operations accept anything that borrows as `&[i64]` (`Vec<i64>`, arrays,
//!   slices) and always return one result per sequence, in batch order.

/// Sum every element of `numbers` in a single forward pass.
///
/// ## Parameters
/// - `numbers`: the sequence to sum.
///
/// ## Returns
/// - (`i64`): the wrapping sum; `0` for an empty sequence.
///
/// ## Examples
/// ```rust
/// use tally_core::aggregate::sum;
/// assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum(&[]), 0);
/// ```
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0_i64, |acc, n| acc.wrapping_add(*n))
}

/// Borrow everything after the first element.
///
/// ## Returns
/// - (`&[i64]`): `numbers[1..]`, or an empty slice when `numbers` is empty.
pub fn tail(numbers: &[i64]) -> &[i64] {
    numbers.get(1..).unwrap_or(&[])
}

/// Sum each sequence of `batch` without its first element.
///
/// ## Parameters
/// - `batch`: the sequences to process, in order.
///
/// ## Returns
/// - (`Vec<i64>`): one tail sum per sequence, same length and order as `batch`.
///
/// ## Notes
/// - An empty sequence has no head to drop and contributes `0` rather than an error.
/// - A single-element sequence also contributes `0`: its only element is the dropped head.
///
/// ## Examples
/// ```rust
/// use tally_core::aggregate::sum_all_tails;
/// let batch: [&[i64]; 3] = [&[], &[7], &[1, 2, 3]];
/// assert_eq!(sum_all_tails(&batch), vec![0, 0, 5]);
/// ```
pub fn sum_all_tails<S: AsRef<[i64]>>(batch: &[S]) -> Vec<i64> {
    batch.iter().map(|numbers| sum(tail(numbers.as_ref()))).collect()
}

/// Sum each sequence of `batch` in full.
///
/// ## Returns
/// - (`Vec<i64>`): one sum per sequence, same length and order as `batch`.
pub fn sum_all<S: AsRef<[i64]>>(batch: &[S]) -> Vec<i64> {
    batch.iter().map(|numbers| sum(numbers.as_ref())).collect()
}
