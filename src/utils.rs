//! Raw bit kernels for GF(2) polynomial arithmetic.
//!
//! Everything here works on plain `u64`/`u128` bit patterns where bit `i` is
//! the coefficient of `x^i`. Addition is XOR and there is no carry. These
//! functions are infallible: callers must pass a non-zero modulus.
//! [`Gf2Poly`](crate::Gf2Poly) wraps them with checked entry points.

/// Index of the highest set bit of a non-zero `u64`.
#[inline]
pub const fn degree_u64(a: u64) -> u32 {
    debug_assert!(a != 0);
    63 - a.leading_zeros()
}

/// Index of the highest set bit of a non-zero `u128`.
#[inline]
pub const fn degree_u128(a: u128) -> u32 {
    debug_assert!(a != 0);
    127 - a.leading_zeros()
}

/// Carry-less product of two 64-bit patterns.
///
/// The result has degree at most 126, so it always fits in a `u128`.
pub const fn clmul(a: u64, b: u64) -> u128 {
    let mut acc: u128 = 0;
    let shifted = a as u128;
    let mut b = b;
    let mut i = 0;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= shifted << i;
        }
        b >>= 1;
        i += 1;
    }
    acc
}

/// Carry-less remainder of `a` modulo `f`.
///
/// `f` must be non-zero.
pub const fn clrem(mut a: u64, f: u64) -> u64 {
    let df = degree_u64(f);
    while a != 0 {
        let da = degree_u64(a);
        if da < df {
            break;
        }
        a ^= f << (da - df);
    }
    a
}

/// Carry-less quotient and remainder of `a` divided by `f`.
///
/// `f` must be non-zero.
pub const fn cldivrem(mut a: u64, f: u64) -> (u64, u64) {
    let df = degree_u64(f);
    let mut q = 0u64;
    while a != 0 {
        let da = degree_u64(a);
        if da < df {
            break;
        }
        let shift = da - df;
        q |= 1 << shift;
        a ^= f << shift;
    }
    (q, a)
}

/// Carry-less remainder of a 128-bit pattern modulo a 64-bit `f`.
///
/// `f` must be non-zero. The result has degree below `deg(f)`, so it fits
/// back into a `u64`.
pub const fn clrem_wide(mut a: u128, f: u64) -> u64 {
    let df = degree_u64(f);
    let wide_f = f as u128;
    while a != 0 {
        let da = degree_u128(a);
        if da < df {
            break;
        }
        a ^= wide_f << (da - df);
    }
    a as u64
}

/// `a * b mod f` over GF(2). `f` must be non-zero.
#[inline]
pub const fn clmulmod(a: u64, b: u64, f: u64) -> u64 {
    clrem_wide(clmul(a, b), f)
}

/// Euclidean GCD over GF(2). At least one argument must be non-zero.
pub const fn clgcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = clrem(a, b);
        a = b;
        b = r;
    }
    a
}
