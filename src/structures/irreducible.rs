//! Irreducibility testing and standard irreducible polynomials over GF(2).

use crate::structures::poly::Gf2Poly;
use crate::utils::{clgcd, clmulmod, degree_u64};

impl Gf2Poly {
    /// Test if this polynomial is irreducible over GF(2) using Ben-Or's test.
    ///
    /// A polynomial f of degree n is reducible exactly when it has an
    /// irreducible factor of some degree k <= n/2, and such a factor divides
    /// `x^(2^k) - x`. The test walks k = 1..=n/2, squaring `u = x^(2^k) mod f`
    /// each round, and stops at the first k with `gcd(f, u - x) != 1`.
    ///
    /// Returns `false` for the zero polynomial and for constants.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// // x^3 + x + 1 is irreducible
    /// assert!(Gf2Poly::new(0b1011).is_irreducible());
    ///
    /// // x^3 + x^2 + x + 1 = (x + 1)(x^2 + 1) is not
    /// assert!(!Gf2Poly::new(0b1111).is_irreducible());
    /// ```
    pub fn is_irreducible(self) -> bool {
        let n = match self.degree() {
            Err(_) => return false, // zero polynomial
            Ok(0) => return false,  // constant polynomial
            Ok(1) => return true,   // linear polynomials are always irreducible
            Ok(d) => d,
        };

        // x divides anything without a constant term
        if !self.coeff(0) {
            return false;
        }

        debug_assert!(n >= 2);
        !self.has_reducibility_witness()
    }

    /// Search for `k <= deg(f) / 2` with `gcd(f, x^(2^k) - x) != 1`.
    ///
    /// `self` must be non-zero.
    fn has_reducibility_witness(self) -> bool {
        let f = self.bits();
        let rounds = degree_u64(f) / 2;
        let x = Gf2Poly::x().bits();

        let mut u = x;
        for _ in 0..rounds {
            u = clmulmod(u, u, f);
            if clgcd(f, u ^ x) != 1 {
                return true;
            }
        }
        false
    }
}

/// Test `f` for irreducibility. See [`Gf2Poly::is_irreducible`].
#[inline]
pub fn is_irreducible(f: Gf2Poly) -> bool {
    f.is_irreducible()
}

/// Returns a standard low-weight irreducible polynomial of the given degree.
///
/// Covers degrees 1 through 16 plus 24, 31, 32, 48, 62 and 63. Higher
/// degrees do not fit the 64-bit representation.
///
/// # Example
///
/// ```
/// use rabinpoly::known_irreducible;
///
/// // AES field: GF(2^8) with x^8 + x^4 + x^3 + x + 1
/// let f = known_irreducible(8).unwrap();
/// assert_eq!(f.bits(), 0x11b);
/// assert!(f.is_irreducible());
/// ```
pub const fn known_irreducible(degree: u32) -> Option<Gf2Poly> {
    let bits: u64 = match degree {
        1 => 0b11,                                         // x + 1
        2 => 0b111,                                        // x^2 + x + 1
        3 => 0b1011,                                       // x^3 + x + 1
        4 => 0b1_0011,                                     // x^4 + x + 1
        5 => 0b10_0101,                                    // x^5 + x^2 + 1
        6 => 0b100_0011,                                   // x^6 + x + 1
        7 => 0b1000_0011,                                  // x^7 + x + 1
        8 => 0b1_0001_1011,                                // x^8 + x^4 + x^3 + x + 1
        9 => 0b10_0001_0001,                               // x^9 + x^4 + 1
        10 => 0b100_0000_1001,                             // x^10 + x^3 + 1
        11 => 0b1000_0000_0101,                            // x^11 + x^2 + 1
        12 => 0b1_0000_0101_0011,                          // x^12 + x^6 + x^4 + x + 1
        13 => 0b10_0000_0001_1011,                         // x^13 + x^4 + x^3 + x + 1
        14 => 0b100_0000_0010_1011,                        // x^14 + x^5 + x^3 + x + 1
        15 => 0b1000_0000_0000_0011,                       // x^15 + x + 1
        16 => 0b1_0000_0000_0010_1101,                     // x^16 + x^5 + x^3 + x^2 + 1
        24 => (1 << 24) | 0b1_1011,                        // x^24 + x^4 + x^3 + x + 1
        31 => (1 << 31) | 0b1001,                          // x^31 + x^3 + 1
        32 => (1 << 32) | 0b1000_1101,                     // x^32 + x^7 + x^3 + x^2 + 1
        48 => (1 << 48) | (1 << 9) | (1 << 7) | 0b1_0001, // x^48 + x^9 + x^7 + x^4 + 1
        62 => (1 << 62) | (1 << 29) | 1,                   // x^62 + x^29 + 1
        63 => (1 << 63) | 0b11,                            // x^63 + x + 1
        _ => return None,
    };
    Some(Gf2Poly::new(bits))
}
