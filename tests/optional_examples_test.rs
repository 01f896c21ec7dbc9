//! Worked examples for `Optional`
//!
//! These tests pin down the presence/absence semantics:
//! - `head` on empty and non-empty sequences
//! - `map` nesting versus `chain` flattening
//! - extraction with `get_or_else` and `fold`

use fpcore::optional::{find, head, Optional};

fn number_to_string_if_greater_than_one(n: i32) -> Optional<String> {
    if n > 1 {
        Optional::present(n.to_string())
    } else {
        Optional::absent()
    }
}

#[test]
fn test_head_of_sequences() {
    assert_eq!(head(Vec::<i32>::new()), Optional::Absent);
    assert_eq!(head(vec![1, 2]), Optional::Present(1));
    assert_eq!(head(vec![2, 3]), Optional::Present(2));
}

#[test]
fn test_manipulate_values() {
    assert_eq!(head(vec![1, 2]).map(|n| n + 100), Optional::Present(101));
    assert_eq!(head(Vec::<i32>::new()).map(|n| n + 100), Optional::Absent);
}

#[test]
fn test_map_nests_the_result() {
    assert_eq!(
        head(vec![2, 3]).map(number_to_string_if_greater_than_one),
        Optional::Present(Optional::Present("2".to_string()))
    );
    assert_eq!(
        head(vec![1, 2]).map(number_to_string_if_greater_than_one),
        Optional::Present(Optional::Absent)
    );
    assert_eq!(
        head(Vec::<i32>::new()).map(number_to_string_if_greater_than_one),
        Optional::Absent
    );
}

#[test]
fn test_chain_flattens_the_result() {
    assert_eq!(
        head(vec![2, 3]).chain(number_to_string_if_greater_than_one),
        Optional::Present("2".to_string())
    );
    assert_eq!(
        head(vec![1, 2]).chain(number_to_string_if_greater_than_one),
        Optional::Absent
    );
    assert_eq!(
        head(Vec::<i32>::new()).chain(number_to_string_if_greater_than_one),
        Optional::Absent
    );
}

#[test]
fn test_extract_value() {
    assert_eq!(head(vec![42, 43]).get_or_else(|| -1), 42);
    assert_eq!(head(Vec::<i32>::new()).get_or_else(|| -1), -1);

    assert_eq!(head(vec![42, 43]).fold(|| -1, |n| n), 42);
    assert_eq!(head(Vec::<i32>::new()).fold(|| -1, |n| n), -1);
}

#[test]
fn test_safe_find() {
    assert_eq!(find(vec![1, 2, 3], |x| *x > 2), Optional::Present(3));
    assert_eq!(find(vec![1, 2, 3], |x| *x > 10), Optional::Absent);
}

#[test]
fn test_pipeline_with_filter() {
    let describe = |xs: Vec<f64>| {
        head(xs)
            .map(|n| n * 2.0)
            .chain(|n| {
                if n == 0.0 {
                    Optional::absent()
                } else {
                    Optional::present(1.0 / n)
                }
            })
            .filter(|n| *n > 1.0)
            .fold(|| "ko".to_string(), |a| format!("ok: {}", a))
    };

    assert_eq!(describe(vec![1.0, 2.0, 3.0, 4.0]), "ko");
    assert_eq!(describe(vec![0.0]), "ko");
    assert_eq!(describe(vec![0.25]), "ok: 2");
    assert_eq!(describe(vec![]), "ko");
}
