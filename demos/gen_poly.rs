//! Generate a random irreducible polynomial for Rabin fingerprinting
//!
//! Prints the accepted polynomial's bit pattern in hex, like `0x9ab8...`.
//!
//! Run with: cargo run --example gen_poly [-- <degree_bits> [seed]]
//!
//! `degree_bits` defaults to 64 (a degree-63 polynomial). Without a seed the
//! thread-local generator is used. Set `RUST_LOG=debug` to see the search.

use std::process::ExitCode;

use rabinpoly::{Sampler, SamplerConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let degree_bits = match args.next().map(|s| s.parse::<u32>()) {
        None => 64,
        Some(Ok(bits)) => bits,
        Some(Err(e)) => {
            eprintln!("invalid degree_bits: {}", e);
            return ExitCode::from(2);
        }
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(seed)) => Some(seed),
        Some(Err(e)) => {
            eprintln!("invalid seed: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = SamplerConfig::default().with_degree_bits(degree_bits);
    let sampler = match Sampler::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let result = match seed {
        Some(seed) => sampler.find(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => sampler.find(&mut rand::thread_rng()),
    };

    match result {
        Ok(poly) => {
            println!("{:#x}", poly);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
