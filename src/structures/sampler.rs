//! Rejection sampling of random irreducible polynomials.
//!
//! Candidates are drawn from an injected [`rand::Rng`] and tested with
//! [`Gf2Poly::is_irreducible`] until one is accepted or the attempt budget
//! runs out.

use core::fmt;

use log::{debug, trace, warn};
use rand::Rng;

use crate::structures::poly::Gf2Poly;

/// Widest candidate the 64-bit representation can hold.
pub const MAX_DEGREE_BITS: u32 = u64::BITS;

/// Error type for candidate generation and sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The requested width is outside the supported range.
    InvalidDegree { degree_bits: u32 },
    /// No irreducible polynomial was found within the attempt budget.
    Exhausted { attempts: u64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::InvalidDegree { degree_bits } => {
                write!(f, "unsupported polynomial width: {} bits", degree_bits)
            }
            SampleError::Exhausted { attempts } => write!(
                f,
                "no irreducible polynomial found in {} attempts",
                attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleError {}

/// Settings for a [`Sampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Width of the candidate bit pattern; the result has degree `degree_bits - 1`.
    pub degree_bits: u32,
    /// Maximum number of candidates to test (`None` = unbounded).
    pub max_attempts: Option<u64>,
    /// Force the constant term to 1 on every candidate.
    pub force_constant_term: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            degree_bits: MAX_DEGREE_BITS,
            max_attempts: None,
            force_constant_term: true,
        }
    }
}

impl SamplerConfig {
    /// Set the candidate width in bits.
    pub fn with_degree_bits(mut self, degree_bits: u32) -> Self {
        self.degree_bits = degree_bits;
        self
    }

    /// Set the attempt budget (`None` = unbounded).
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Choose whether candidates get their constant term forced to 1.
    pub fn with_force_constant_term(mut self, force: bool) -> Self {
        self.force_constant_term = force;
        self
    }

    /// Check that an irreducible polynomial of this width can exist.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidDegree` unless `2 <= degree_bits <= 64`.
    pub fn validate(&self) -> Result<(), SampleError> {
        if (2..=MAX_DEGREE_BITS).contains(&self.degree_bits) {
            Ok(())
        } else {
            Err(SampleError::InvalidDegree {
                degree_bits: self.degree_bits,
            })
        }
    }
}

/// An accepted polynomial together with the number of candidates tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// The accepted irreducible polynomial.
    pub poly: Gf2Poly,
    /// Candidates tested, including the accepted one.
    pub attempts: u64,
}

/// Reusable rejection-sampling driver.
///
/// # Example
///
/// ```
/// use rabinpoly::{Sampler, SamplerConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = SamplerConfig::default()
///     .with_degree_bits(16)
///     .with_max_attempts(Some(10_000));
/// let sampler = Sampler::new(config).unwrap();
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let f = sampler.find(&mut rng).unwrap();
/// assert_eq!(f.degree(), Ok(15));
/// assert!(f.is_irreducible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Create a sampler after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidDegree` if no irreducible polynomial of
    /// the configured width can exist.
    pub fn new(config: SamplerConfig) -> Result<Self, SampleError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draw one candidate of the configured shape.
    pub fn candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Gf2Poly {
        draw_candidate(rng, self.config.degree_bits, self.config.force_constant_term)
    }

    /// Sample until an irreducible polynomial is found.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::Exhausted` if the attempt budget runs out.
    pub fn find<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Gf2Poly, SampleError> {
        self.find_with_stats(rng).map(|s| s.poly)
    }

    /// Like [`Sampler::find`], also reporting how many candidates were tested.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::Exhausted` if the attempt budget runs out.
    pub fn find_with_stats<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sample, SampleError> {
        let SamplerConfig {
            degree_bits,
            max_attempts,
            force_constant_term,
        } = self.config;
        debug!(
            "searching for an irreducible polynomial of degree {} (budget: {:?})",
            degree_bits - 1,
            max_attempts
        );

        let mut attempts: u64 = 0;
        loop {
            if max_attempts.is_some_and(|max| attempts >= max) {
                warn!(
                    "no irreducible polynomial of degree {} after {} attempts",
                    degree_bits - 1,
                    attempts
                );
                return Err(SampleError::Exhausted { attempts });
            }

            let candidate = draw_candidate(rng, degree_bits, force_constant_term);
            attempts += 1;

            if candidate.is_irreducible() {
                debug!("accepted {:#x} after {} attempts", candidate, attempts);
                return Ok(Sample {
                    poly: candidate,
                    attempts,
                });
            }
            trace!("rejected {:#x}", candidate);
        }
    }
}

/// Draw `degree_bits` random bits and set the top bit (and the constant
/// term when `force_constant_term` is set). `degree_bits` must be in
/// `1..=64`. Consumes exactly one `u64` from `rng`.
fn draw_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    degree_bits: u32,
    force_constant_term: bool,
) -> Gf2Poly {
    debug_assert!((1..=MAX_DEGREE_BITS).contains(&degree_bits));
    let mask = u64::MAX >> (MAX_DEGREE_BITS - degree_bits);
    let top = 1u64 << (degree_bits - 1);
    let mut bits = (rng.gen::<u64>() & mask) | top;
    if force_constant_term {
        bits |= 1;
    }
    Gf2Poly::new(bits)
}

fn check_candidate_width(degree_bits: u32) -> Result<(), SampleError> {
    if (1..=MAX_DEGREE_BITS).contains(&degree_bits) {
        Ok(())
    } else {
        Err(SampleError::InvalidDegree { degree_bits })
    }
}

/// Draw a random candidate of exactly `degree_bits` bits with the constant
/// term set.
///
/// The result has degree `degree_bits - 1` and lies in
/// `[2^(degree_bits-1), 2^degree_bits - 1]`. Forcing the constant term
/// discards candidates that `x` divides, which could never be accepted.
///
/// # Errors
///
/// Returns `SampleError::InvalidDegree` unless `1 <= degree_bits <= 64`.
///
/// # Example
///
/// ```
/// use rabinpoly::random_candidate;
///
/// let mut rng = rand::thread_rng();
/// let c = random_candidate(&mut rng, 8).unwrap();
/// assert!((128..=255).contains(&c.bits()));
/// assert!(c.coeff(0));
/// ```
pub fn random_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    degree_bits: u32,
) -> Result<Gf2Poly, SampleError> {
    check_candidate_width(degree_bits)?;
    Ok(draw_candidate(rng, degree_bits, true))
}

/// Draw a random candidate with only the top bit forced.
///
/// # Errors
///
/// Returns `SampleError::InvalidDegree` unless `1 <= degree_bits <= 64`.
pub fn random_candidate_unconstrained<R: Rng + ?Sized>(
    rng: &mut R,
    degree_bits: u32,
) -> Result<Gf2Poly, SampleError> {
    check_candidate_width(degree_bits)?;
    Ok(draw_candidate(rng, degree_bits, false))
}

/// Generate a random irreducible polynomial of degree `degree_bits - 1`.
///
/// Draws candidates with [`random_candidate`] until one passes
/// [`Gf2Poly::is_irreducible`]. With `max_attempts = Some(n)` at most `n`
/// candidates are drawn; `Some(0)` fails without touching `rng`.
///
/// # Errors
///
/// Returns `SampleError::InvalidDegree` unless `2 <= degree_bits <= 64`, and
/// `SampleError::Exhausted` if the budget runs out.
///
/// # Example
///
/// ```
/// use rabinpoly::find_irreducible;
///
/// let mut rng = rand::thread_rng();
/// let f = find_irreducible(&mut rng, 64, Some(100_000)).unwrap();
/// assert_eq!(f.degree(), Ok(63));
/// assert!(f.is_irreducible());
/// println!("{:#x}", f);
/// ```
pub fn find_irreducible<R: Rng + ?Sized>(
    rng: &mut R,
    degree_bits: u32,
    max_attempts: Option<u64>,
) -> Result<Gf2Poly, SampleError> {
    let config = SamplerConfig::default()
        .with_degree_bits(degree_bits)
        .with_max_attempts(max_attempts);
    Sampler::new(config)?.find(rng)
}

/// [`find_irreducible`] without an attempt budget.
///
/// # Errors
///
/// Returns `SampleError::InvalidDegree` unless `2 <= degree_bits <= 64`.
pub fn find_irreducible_unbounded<R: Rng + ?Sized>(
    rng: &mut R,
    degree_bits: u32,
) -> Result<Gf2Poly, SampleError> {
    find_irreducible(rng, degree_bits, None)
}

/// Search for an irreducible polynomial on the rayon thread pool.
///
/// Trial `i` draws its candidate from a ChaCha8 stream keyed by
/// `(seed, i)`, so the candidate for each trial is fixed by the seed. Any
/// accepted trial may be returned; the others stop once one succeeds.
///
/// # Errors
///
/// Returns `SampleError::InvalidDegree` unless `2 <= degree_bits <= 64`, and
/// `SampleError::Exhausted` if none of the `max_attempts` trials succeeds.
#[cfg(feature = "parallel")]
pub fn find_irreducible_parallel(
    seed: u64,
    degree_bits: u32,
    max_attempts: Option<u64>,
) -> Result<Gf2Poly, SampleError> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rayon::prelude::*;

    let config = SamplerConfig::default()
        .with_degree_bits(degree_bits)
        .with_max_attempts(max_attempts);
    let sampler = Sampler::new(config)?;
    let budget = max_attempts.unwrap_or(u64::MAX);
    debug!(
        "parallel search for degree {} on {} threads (budget: {:?})",
        degree_bits - 1,
        rayon::current_num_threads(),
        max_attempts
    );

    let found = (0..budget).into_par_iter().find_map_any(|trial| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(trial);
        let candidate = sampler.candidate(&mut rng);
        candidate.is_irreducible().then_some(candidate)
    });

    match found {
        Some(poly) => {
            debug!("parallel search accepted {:#x}", poly);
            Ok(poly)
        }
        None => {
            warn!(
                "no irreducible polynomial of degree {} after {} parallel trials",
                degree_bits - 1,
                budget
            );
            Err(SampleError::Exhausted { attempts: budget })
        }
    }
}
