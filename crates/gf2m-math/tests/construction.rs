use std::sync::Arc;
use std::thread;

use gf2m_math::{GaloisField, GfError};

#[test]
fn test_log_table_is_permutation() {
    let gf = GaloisField::new(0x13, 4).unwrap();
    let mut seen = [false; 15];
    for a in 1..16u32 {
        let l = gf.log_table()[a as usize] as usize;
        assert!(l < 15);
        assert!(!seen[l], "Exponent {} assigned twice", l);
        seen[l] = true;
        assert_eq!(gf.exp_table()[l], a);
    }
}

#[test]
fn test_exp_table_period() {
    let gf = GaloisField::new(0x13, 4).unwrap();
    let exp = gf.exp_table();
    assert_eq!(exp.len(), 2 * 16);
    for i in 0..15 {
        assert_eq!(exp[i], exp[i + 15]);
    }
}

#[test]
fn test_generator_spans_group() {
    // Every catalogue entry must pass the primitivity walk.
    for m in 1..=gf2m_core::MAX_CATALOGUE_DEGREE {
        let poly = gf2m_core::primitive_poly(m).unwrap();
        let gf = GaloisField::new_checked(poly, m).unwrap();
        let order = gf.order() as usize;
        assert_eq!(gf.exp_table()[order], 1, "Degree {} doubled half starts wrong", m);
        assert_eq!(gf.mask(), gf.order());

        let mut seen = vec![false; order];
        for a in 1..gf.field_size() {
            let l = gf.log_table()[a as usize] as usize;
            assert!(!seen[l], "Degree {}: exponent {} assigned twice", m, l);
            seen[l] = true;
        }
        assert!(seen.iter().all(|&s| s), "Degree {}: log table not a permutation", m);
    }
}

#[test]
fn test_checked_rejects_short_cycle() {
    // Irreducible, but x has order 5 rather than 15.
    assert_eq!(
        GaloisField::new_checked(0x1F, 4),
        Err(GfError::NotPrimitive { poly: 0x1F, period: 5 })
    );
    // Rijndael polynomial: generator 2 has order 51.
    assert_eq!(
        GaloisField::new_checked(0x11B, 8),
        Err(GfError::NotPrimitive { poly: 0x11B, period: 51 })
    );
    // No constant term: x is not invertible, the walk never returns to 1.
    assert_eq!(
        GaloisField::new_checked(0x12, 4),
        Err(GfError::NotPrimitive { poly: 0x12, period: 0 })
    );
    assert_eq!(
        GaloisField::new_checked(0x10, 4),
        Err(GfError::NotPrimitive { poly: 0x10, period: 0 })
    );
    // Reducible: x^4 + 1 = (x + 1)^4
    assert!(matches!(
        GaloisField::new_checked(0x11, 4),
        Err(GfError::NotPrimitive { .. })
    ));
}

#[test]
fn test_unchecked_builds_degenerate_field() {
    // The unchecked path accepts a non-primitive polynomial as-is.
    let gf = GaloisField::new(0x1F, 4).unwrap();
    assert_eq!(&gf.exp_table()[..15], &[1, 2, 4, 8, 15, 1, 2, 4, 8, 15, 1, 2, 4, 8, 15]);
    assert_eq!(gf.log_table()[3], 0);
}

#[test]
fn test_bad_parameters() {
    assert_eq!(GaloisField::new(0x13, 0), Err(GfError::InvalidDegree(0)));
    assert_eq!(GaloisField::new(0x13, 40), Err(GfError::InvalidDegree(40)));
    assert_eq!(
        GaloisField::new(0x13, 5),
        Err(GfError::DegreeMismatch { poly: 0x13, m: 5 })
    );
    assert_eq!(GaloisField::with_degree(17), Err(GfError::UnknownDegree(17)));
}

#[test]
fn test_with_degree_matches_explicit() {
    assert_eq!(GaloisField::with_degree(8).unwrap(), GaloisField::new(0x11D, 8).unwrap());
    assert_eq!(GaloisField::with_degree(4).unwrap().to_string(), "GF(2^4) mod 0x13");
}

#[test]
fn test_shared_read_only() {
    let gf = Arc::new(GaloisField::with_degree(8).unwrap());
    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            let gf = Arc::clone(&gf);
            thread::spawn(move || {
                for a in (1 + t)..256 {
                    assert_eq!(gf.multiply(a, gf.inverse(a).unwrap()), 1);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
