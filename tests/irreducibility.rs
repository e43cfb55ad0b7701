use rabinpoly::{is_irreducible, known_irreducible, Gf2Poly};

/// Irreducibility by trial division against every polynomial of degree
/// 1..=deg(f)/2.
fn irreducible_by_trial_division(f: Gf2Poly) -> bool {
    let n = match f.degree() {
        Ok(d) if d >= 1 => d,
        _ => return false,
    };
    let limit = 1u64 << (n / 2 + 1);
    (2..limit).all(|g| !f.rem(Gf2Poly::new(g)).unwrap().is_zero())
}

#[test]
fn three_bit_patterns_exhaustive() {
    let expected = [false, false, true, true, false, false, false, true];
    for (bits, &want) in expected.iter().enumerate() {
        let f = Gf2Poly::new(bits as u64);
        assert_eq!(is_irreducible(f), want, "pattern {:#05b}", bits);
        assert_eq!(irreducible_by_trial_division(f), want, "pattern {:#05b}", bits);
    }
}

#[test]
fn agrees_with_trial_division_up_to_12_bits() {
    for bits in 0u64..(1 << 12) {
        let f = Gf2Poly::new(bits);
        assert_eq!(
            is_irreducible(f),
            irreducible_by_trial_division(f),
            "disagreement on {} ({:#x})",
            f,
            bits
        );
    }
}

#[test]
fn irreducible_counts_match_necklace_formula() {
    // Number of irreducible polynomials of degree n over GF(2)
    let counts = [(1, 2), (2, 1), (3, 2), (4, 3), (5, 6), (6, 9), (7, 18), (8, 30), (9, 56), (10, 99)];
    for (n, want) in counts {
        let lo = 1u64 << n;
        let got = (lo..lo << 1)
            .filter(|&b| Gf2Poly::new(b).is_irreducible())
            .count();
        assert_eq!(got, want, "degree {}", n);
    }
}

#[test]
fn cubic_examples() {
    assert!(is_irreducible(Gf2Poly::new(11)));
    assert!(!is_irreducible(Gf2Poly::new(15)));
}

#[test]
fn known_table_is_irreducible() {
    let mut seen = 0;
    for d in 0..=64 {
        if let Some(f) = known_irreducible(d) {
            assert_eq!(f.degree(), Ok(d));
            assert!(f.is_irreducible(), "known_irreducible({}) = {} is reducible", d, f);
            seen += 1;
        }
    }
    assert_eq!(seen, 22);
}

#[test]
fn products_of_known_irreducibles_are_reducible() {
    let factors: Vec<Gf2Poly> = [1, 2, 3, 5, 8, 13, 16, 24, 31, 32]
        .iter()
        .filter_map(|&d| known_irreducible(d))
        .collect();
    for &a in &factors {
        for &b in &factors {
            let product = a.widening_mul(b);
            if product >> 64 != 0 {
                continue;
            }
            let f = Gf2Poly::new(product as u64);
            assert!(!f.is_irreducible(), "{} * {} reported irreducible", a, b);
        }
    }
}

#[test]
fn large_degree_known_values() {
    // Both found by independent search; degree 63
    assert!(Gf2Poly::new(0xd804_f922_8386_8a29).is_irreducible());
    assert!(Gf2Poly::new((1 << 63) | 0b11).is_irreducible());
    // x^63 + 1 is divisible by x + 1
    assert!(!Gf2Poly::new((1 << 63) | 1).is_irreducible());
}

#[test]
fn squares_are_reducible() {
    for d in [2, 3, 4, 5, 7, 11, 16, 24, 31] {
        let g = known_irreducible(d).unwrap();
        let f = Gf2Poly::new(g.widening_mul(g) as u64);
        assert!(!f.is_irreducible(), "square of degree {} factor", d);
    }
}
