/// Natural (human) ordering for file names
///
/// Compares names by the numbers embedded in them, so "img2.png" sorts
/// before "img10.png". Plain character comparison would reverse them,
/// which makes numbered page scans unreadable.

use std::cmp::Ordering;

/// Compare two names by their embedded digit runs.
///
/// Every maximal contiguous digit run is parsed as an integer and the two
/// run sequences are compared pairwise in order of appearance. The first
/// differing pair decides. When all compared pairs match (one sequence is
/// a prefix of the other, or neither name contains digits), the shorter
/// name sorts first.
///
/// The fallback is a plain length comparison, not lexicographic: names
/// with equal numbers and equal length compare equal, and a stable sort
/// keeps them in listing order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_runs = digit_runs(a);
    let b_runs = digit_runs(b);

    for (x, y) in a_runs.iter().zip(b_runs.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    a.len().cmp(&b.len())
}

/// Extract each maximal contiguous digit run as an integer, left to right.
/// Leading zeros carry no weight ("007" parses as 7). Absurdly long runs
/// saturate rather than overflow.
fn digit_runs(s: &str) -> Vec<u128> {
    let mut runs = Vec::new();
    let mut current: Option<u128> = None;

    for ch in s.chars() {
        match ch.to_digit(10) {
            Some(d) => {
                let value = current.unwrap_or(0);
                current = Some(value.saturating_mul(10).saturating_add(u128::from(d)));
            }
            None => {
                if let Some(value) = current.take() {
                    runs.push(value);
                }
            }
        }
    }
    if let Some(value) = current {
        runs.push(value);
    }

    runs
}
