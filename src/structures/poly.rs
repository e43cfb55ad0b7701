use core::fmt;
use core::ops::{Add, AddAssign, BitXor, Sub, SubAssign};
use core::str::FromStr;

use crate::utils::{cldivrem, clgcd, clmul, clmulmod, clrem, degree_u64};

/// Error type for operations that need a polynomial with a defined degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The zero polynomial was used where a degree is required.
    ZeroPolynomial,
    /// The zero polynomial was used as a modulus or divisor.
    ZeroModulus,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroPolynomial => write!(f, "the zero polynomial has no degree"),
            DomainError::ZeroModulus => write!(f, "division by the zero polynomial"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

/// Error type for parsing a polynomial from hexadecimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePolyError {
    /// No digits were found.
    Empty,
    /// A character that is not a hex digit or `_`.
    InvalidDigit { position: usize, found: char },
    /// More than 64 significant bits.
    Overflow,
}

impl fmt::Display for ParsePolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePolyError::Empty => write!(f, "no hex digits to parse"),
            ParsePolyError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at byte {}", found, position)
            }
            ParsePolyError::Overflow => write!(f, "polynomial does not fit in 64 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParsePolyError {}

/// Polynomial over GF(2) packed into a `u64`.
///
/// Bit `i` is the coefficient of `x^i`, so the representable degrees are
/// `0..=63`. Addition and subtraction are both XOR; multiplication and
/// division are carry-less.
///
/// The zero polynomial is representable because it shows up as a
/// remainder, but it has no degree and is rejected as a modulus.
///
/// # Example
///
/// ```
/// use rabinpoly::Gf2Poly;
///
/// // x^3 + x + 1
/// let f = Gf2Poly::new(0b1011);
/// assert_eq!(f.degree(), Ok(3));
/// assert_eq!(f.to_string(), "x^3 + x + 1");
/// assert_eq!(format!("{:#x}", f), "0xb");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gf2Poly(u64);

impl Gf2Poly {
    /// Create a polynomial from its coefficient bit pattern.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The zero polynomial.
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The constant polynomial `1`.
    #[inline]
    pub const fn one() -> Self {
        Self(1)
    }

    /// The polynomial `x`.
    #[inline]
    pub const fn x() -> Self {
        Self(0b10)
    }

    /// The monomial `x^n`, or `None` if `n` does not fit in 64 bits.
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// assert_eq!(Gf2Poly::monomial(3), Some(Gf2Poly::new(0b1000)));
    /// assert_eq!(Gf2Poly::monomial(64), None);
    /// ```
    pub const fn monomial(n: u32) -> Option<Self> {
        if n >= u64::BITS {
            None
        } else {
            Some(Self(1 << n))
        }
    }

    /// The raw coefficient bit pattern.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Check if this is the zero polynomial.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if this is the constant polynomial `1`.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }

    /// Coefficient of `x^i`. Returns `false` for `i >= 64`.
    #[inline]
    pub const fn coeff(self, i: u32) -> bool {
        i < u64::BITS && (self.0 >> i) & 1 == 1
    }

    /// Number of non-zero terms.
    #[inline]
    pub const fn weight(self) -> u32 {
        self.0.count_ones()
    }

    /// Get the degree of the polynomial.
    ///
    /// The degree is the index of the highest set bit, read off with a
    /// bit-length primitive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroPolynomial` for the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::{DomainError, Gf2Poly};
    ///
    /// assert_eq!(Gf2Poly::new(0b1011).degree(), Ok(3));
    /// assert_eq!(Gf2Poly::one().degree(), Ok(0));
    /// assert_eq!(Gf2Poly::zero().degree(), Err(DomainError::ZeroPolynomial));
    /// ```
    pub const fn degree(self) -> Result<u32, DomainError> {
        if self.0 == 0 {
            Err(DomainError::ZeroPolynomial)
        } else {
            Ok(degree_u64(self.0))
        }
    }

    /// Divide by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The division is carry-less: `self = quotient * divisor + remainder`
    /// in GF(2)[x], and the remainder is zero or has degree below the
    /// divisor's.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroModulus` if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// // (x^3 + x^2 + x + 1) / (x + 1) = x^2 + 1, remainder 0
    /// let (q, r) = Gf2Poly::new(0b1111).div_rem(Gf2Poly::new(0b11)).unwrap();
    /// assert_eq!(q, Gf2Poly::new(0b101));
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(self, divisor: Self) -> Result<(Self, Self), DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        let (q, r) = cldivrem(self.0, divisor.0);
        Ok((Self(q), Self(r)))
    }

    /// Compute the remainder of carry-less division by `modulus`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroModulus` if `modulus` is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn rem(self, modulus: Self) -> Result<Self, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        Ok(Self(clrem(self.0, modulus.0)))
    }

    /// Full carry-less product as a 128-bit pattern.
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// // (x + 1)(x + 1) = x^2 + 1 over GF(2)
    /// assert_eq!(Gf2Poly::new(0b11).widening_mul(Gf2Poly::new(0b11)), 0b101);
    /// ```
    #[inline]
    pub const fn widening_mul(self, rhs: Self) -> u128 {
        clmul(self.0, rhs.0)
    }

    /// Compute `self * rhs mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroModulus` if `modulus` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// // The AES field: {57} * {83} = {c1}
    /// let aes = Gf2Poly::new(0x11b);
    /// let p = Gf2Poly::new(0x57).mulmod(Gf2Poly::new(0x83), aes).unwrap();
    /// assert_eq!(p, Gf2Poly::new(0xc1));
    /// ```
    pub fn mulmod(self, rhs: Self, modulus: Self) -> Result<Self, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        Ok(Self(clmulmod(self.0, rhs.0, modulus.0)))
    }

    /// Compute `self^2 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroModulus` if `modulus` is zero.
    #[inline]
    pub fn sqrmod(self, modulus: Self) -> Result<Self, DomainError> {
        self.mulmod(self, modulus)
    }

    /// Compute `self^exp mod modulus` using repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroModulus` if `modulus` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// // x has order 7 modulo the primitive polynomial x^3 + x + 1
    /// let f = Gf2Poly::new(0b1011);
    /// assert_eq!(Gf2Poly::x().powmod(7, f), Ok(Gf2Poly::one()));
    /// ```
    pub fn powmod(self, exp: u64, modulus: Self) -> Result<Self, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        let f = modulus.0;
        let mut base = clrem(self.0, f);
        let mut result = clrem(1, f);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = clmulmod(result, base, f);
            }
            base = clmulmod(base, base, f);
            e >>= 1;
        }

        Ok(Self(result))
    }

    /// Compute the greatest common divisor of two polynomials.
    ///
    /// Every non-zero polynomial over GF(2) is monic, so the result is
    /// unique. `gcd(a, 0) = a`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroPolynomial` if both inputs are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Gf2Poly;
    ///
    /// // gcd((x + 1)(x^2 + 1), (x + 1)(x^2 + x + 1)) = x + 1
    /// let a = Gf2Poly::new(0b1111);
    /// let b = Gf2Poly::new(0b1001);
    /// assert_eq!(Gf2Poly::gcd(a, b), Ok(Gf2Poly::new(0b11)));
    /// ```
    pub fn gcd(a: Self, b: Self) -> Result<Self, DomainError> {
        if a.is_zero() && b.is_zero() {
            return Err(DomainError::ZeroPolynomial);
        }
        Ok(Self(clgcd(a.0, b.0)))
    }
}

/// Degree of `f`. See [`Gf2Poly::degree`].
#[inline]
pub fn degree(f: Gf2Poly) -> Result<u32, DomainError> {
    f.degree()
}

/// Remainder of `a` divided by `f` in GF(2)[x]. See [`Gf2Poly::rem`].
#[inline]
pub fn gf2_mod(a: Gf2Poly, f: Gf2Poly) -> Result<Gf2Poly, DomainError> {
    a.rem(f)
}

/// `a * b mod f` in GF(2)[x]. See [`Gf2Poly::mulmod`].
#[inline]
pub fn gf2_mulmod(a: Gf2Poly, b: Gf2Poly, f: Gf2Poly) -> Result<Gf2Poly, DomainError> {
    a.mulmod(b, f)
}

/// Greatest common divisor in GF(2)[x]. See [`Gf2Poly::gcd`].
#[inline]
pub fn gf2_gcd(a: Gf2Poly, b: Gf2Poly) -> Result<Gf2Poly, DomainError> {
    Gf2Poly::gcd(a, b)
}

impl From<u64> for Gf2Poly {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Gf2Poly> for u64 {
    fn from(p: Gf2Poly) -> Self {
        p.0
    }
}

/* ---- Arithmetic operators ---- */

#[allow(clippy::suspicious_arithmetic_impl)]
impl Add for Gf2Poly {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Gf2Poly {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXor for Gf2Poly {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

#[allow(clippy::suspicious_op_assign_impl)]
impl AddAssign for Gf2Poly {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

#[allow(clippy::suspicious_op_assign_impl)]
impl SubAssign for Gf2Poly {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/* ---- Formatting and parsing ---- */

impl fmt::Debug for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for i in (0..u64::BITS).rev() {
            if !self.coeff(i) {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::LowerHex for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Octal for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl FromStr for Gf2Poly {
    type Err = ParsePolyError;

    /// Parse a hexadecimal bit pattern such as `0x800000000000001b`.
    ///
    /// The `0x` prefix is optional and `_` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let leading = s.len() - s.trim_start().len();
        let s = s.trim();
        let (offset, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(rest) => (leading + 2, rest),
            None => (leading, s),
        };

        let mut value: u64 = 0;
        let mut seen_digit = false;
        for (i, c) in digits.char_indices() {
            if c == '_' {
                continue;
            }
            let d = c.to_digit(16).ok_or(ParsePolyError::InvalidDigit {
                position: offset + i,
                found: c,
            })?;
            seen_digit = true;
            if value >> 60 != 0 {
                return Err(ParsePolyError::Overflow);
            }
            value = (value << 4) | u64::from(d);
        }

        if !seen_digit {
            return Err(ParsePolyError::Empty);
        }
        Ok(Self(value))
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConstantTimeEq for Gf2Poly {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        subtle::ConstantTimeEq::ct_eq(&self.0, &other.0)
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConditionallySelectable for Gf2Poly {
    fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
        Self(<u64 as subtle::ConditionallySelectable>::conditional_select(&a.0, &b.0, choice))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Gf2Poly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // "0x..." for text formats, the raw bits for binary ones
        if serializer.is_human_readable() {
            serializer.collect_str(&format_args!("{:#x}", self.0))
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Gf2Poly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PolyVisitor;

        impl serde::de::Visitor<'_> for PolyVisitor {
            type Value = Gf2Poly;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a hex string or an unsigned 64-bit integer")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Gf2Poly(v))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(PolyVisitor)
        } else {
            deserializer.deserialize_u64(PolyVisitor)
        }
    }
}
