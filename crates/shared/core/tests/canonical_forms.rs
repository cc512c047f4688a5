//! Canonical-form properties over every numeral from I to MMMCMXCIX
//!
//! The sequence is built by repeated symbolic addition of `I`, so no integer
//! conversion is involved anywhere.

use numerus_core::{Numeral, NumeralError, Symbol};

fn n(s: &str) -> Numeral {
    Numeral::parse(s).unwrap()
}

/// Canonical numerals in counting order, starting at I
fn counting_sequence(steps: usize) -> Vec<Numeral> {
    let one = Numeral::from(Symbol::I);
    let mut current = Numeral::empty();
    let mut sequence = Vec::with_capacity(steps);
    for _ in 0..steps {
        current = current.checked_add(&one).unwrap();
        sequence.push(current.clone());
    }
    sequence
}

#[test]
fn test_counting_matches_known_numerals() {
    let sequence = counting_sequence(50);
    let expected = [
        "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
        "XV", "XVI", "XVII", "XVIII", "XIX", "XX",
    ];
    for (numeral, literal) in sequence.iter().zip(expected) {
        assert_eq!(numeral.to_string(), literal);
    }
    assert_eq!(sequence[39].to_string(), "XL");
    assert_eq!(sequence[43].to_string(), "XLIV");
    assert_eq!(sequence[48].to_string(), "XLIX");
}

#[test]
fn test_round_trip_through_additive_form() {
    let _ = env_logger::try_init();

    for numeral in counting_sequence(3999) {
        let additive = numeral.to_additive().unwrap();
        assert_eq!(
            additive.to_subtractive().unwrap(),
            numeral,
            "round trip failed for {} via {}",
            numeral,
            additive
        );
    }
}

#[test]
fn test_denumerated_form_has_no_collapsible_runs() {
    for numeral in counting_sequence(3999) {
        let consolidated = numeral.denumerate().unwrap();
        for symbol in Symbol::ALPHABET {
            let Some((lower, count)) = symbol.expansion() else {
                continue;
            };
            let run = vec![lower; count];
            assert!(
                !consolidated.symbols().windows(count).any(|w| w == run.as_slice()),
                "{} still holds {} after denumerate",
                consolidated,
                Numeral::from(symbol)
            );
        }
        assert!(consolidated.symbols().windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_subtraction_undoes_addition() {
    let sequence = counting_sequence(400);
    let step = n("XLVII");
    for numeral in &sequence {
        let sum = numeral.checked_add(&step).unwrap();
        assert_eq!(&sum.checked_sub(&step).unwrap(), numeral);
    }
}

#[test]
fn test_additive_minuends_subtract_like_canonical_ones() {
    let cases = [
        ("IIIII", "V", ""),
        ("IIIIII", "V", "I"),
        ("VV", "X", ""),
        ("VIIIII", "X", ""),
        ("LL", "XC", "X"),
        ("DCCCCCXXXXXIIIII", "M", "LV"),
    ];
    for (minuend, subtrahend, expected) in cases {
        assert_eq!(
            n(minuend).checked_sub(&n(subtrahend)).unwrap().to_string(),
            expected,
            "{} - {}",
            minuend,
            subtrahend
        );
    }

    // Spelled out the long way, every sum in the sequence subtracts back
    let step = n("XLVII");
    for numeral in counting_sequence(200) {
        let sum = numeral.plus(&step).unwrap();
        assert_eq!(sum.checked_sub(&step).unwrap(), numeral);
    }
}

#[test]
fn test_last_canonical_numeral() {
    let sequence = counting_sequence(3999);
    assert_eq!(sequence.last().unwrap().to_string(), "MMMCMXCIX");
}

#[test]
fn test_non_canonical_inputs_converge() {
    assert_eq!(n("IIIIIIIIIIIIII").to_subtractive().unwrap().to_string(), "XIV");
    assert_eq!(n("VVVV").to_subtractive().unwrap().to_string(), "XX");
    assert_eq!(n("LXXXXVIIII").to_subtractive().unwrap().to_string(), "XCIX");
    assert!(n("XIIII").equivalent(&n("VVIV")).unwrap());
}

#[test]
fn test_subtraction_failure_reports_magnitude() {
    assert_eq!(
        n("CM").checked_sub(&n("M")),
        Err(NumeralError::InsufficientMagnitude)
    );
}

#[test]
fn test_serde_round_trip_validates() {
    let numeral = n("MMXXIV");
    let json = serde_json::to_string(&numeral).unwrap();
    assert_eq!(json, "\"MMXXIV\"");

    let parsed: Numeral = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, numeral);

    let invalid: Result<Numeral, _> = serde_json::from_str("\"MMXXIQ\"");
    assert!(invalid.is_err());
}
