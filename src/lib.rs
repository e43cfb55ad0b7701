//! Random irreducible polynomials over GF(2).
//!
//! Polynomials are packed into a `u64` ([`Gf2Poly`]) and all arithmetic is
//! carry-less: addition is XOR, multiplication and division are
//! shift-and-XOR. On top of that sit a Ben-Or irreducibility test and a
//! rejection sampler that produces characteristic polynomials for
//! Rabin-style rolling fingerprints.
//!
//! ```
//! use rabinpoly::{find_irreducible, Gf2Poly};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(2024);
//! let f: Gf2Poly = find_irreducible(&mut rng, 64, Some(100_000)).unwrap();
//! assert_eq!(f.degree(), Ok(63));
//! assert!(f.is_irreducible());
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod structures;
pub mod utils;

pub use structures::irreducible::{is_irreducible, known_irreducible};
pub use structures::poly::{
    degree, gf2_gcd, gf2_mod, gf2_mulmod, DomainError, Gf2Poly, ParsePolyError,
};
#[cfg(feature = "parallel")]
pub use structures::sampler::find_irreducible_parallel;
#[cfg(feature = "rand")]
pub use structures::sampler::{
    find_irreducible, find_irreducible_unbounded, random_candidate, random_candidate_unconstrained,
    Sample, SampleError, Sampler, SamplerConfig, MAX_DEGREE_BITS,
};
