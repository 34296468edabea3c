//! Checked-access contract tests: in-range indices return the element,
//! the out-of-range path asserts (or fails const evaluation), and the
//! fallible variant reports what was asked of what.

use arity::{checked_get, try_get, ArityError};

#[test]
fn every_valid_index_is_reachable() {
    let primes = [2, 3, 5, 7, 11];
    for (i, p) in primes.iter().enumerate() {
        assert_eq!(checked_get(&primes, i), p);
    }
}

#[test]
fn last_and_first_elements_round_trip() {
    let letters = ['a', 'b', 'c'];
    assert_eq!(*checked_get(&letters, 0), 'a');
    assert_eq!(*checked_get(&letters, 2), 'c');
}

#[test]
#[should_panic(expected = "index out of range")]
fn one_past_the_end_asserts() {
    let letters = ['a', 'b', 'c'];
    checked_get(&letters, 3);
}

#[test]
fn const_context_access_is_evaluated_at_compile_time() {
    const TABLE: [u16; 4] = [10, 20, 30, 40];
    const THIRD: u16 = *checked_get(&TABLE, 2);
    assert_eq!(THIRD, 30);
}

#[test]
fn macro_form_is_the_same_access() {
    let primes = [2, 3, 5, 7, 11];
    assert_eq!(*arity::checked_get!(primes, 4), 11);
    assert_eq!(arity::checked_get!(primes, 1), checked_get(&primes, 1));
}

#[test]
fn try_get_returns_the_element_in_range() {
    let days = ["mon", "tue", "wed"];
    assert_eq!(try_get(&days, 0), Ok(&"mon"));
    assert_eq!(try_get(&days, 2), Ok(&"wed"));
}

#[test]
fn try_get_reports_index_and_length_out_of_range() {
    let days = ["mon", "tue", "wed"];
    assert_eq!(
        try_get(&days, 7),
        Err(ArityError::IndexOutOfBounds { index: 7, len: 3 })
    );
}

#[test]
fn error_message_names_both_numbers() {
    let err = ArityError::IndexOutOfBounds { index: 7, len: 3 };
    assert_eq!(
        err.to_string(),
        "index 7 is out of bounds for an array of length 3"
    );
}
