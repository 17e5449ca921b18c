//! # /8 Network Sampler
//!
//! A full /8 holds 16.7M addresses, too many to probe in practice. Instead, every
//! `a.X.Y.0/24` inside the network contributes ten addresses:
//!
//! * the usual gateway and service addresses `.1`, `.2`, `.4` and `.5`,
//! * one random address from each band `6-55`, `56-100`, `101-150`, `151-200`
//!   and `201-253`,
//! * `.254`.
//!
//! That is 655,360 addresses per /8.

use std::iter;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

use hostexpand_common::error::SkipReason;
use rand::Rng;
use tracing::info;

const FIXED_LOW: [u8; 4] = [1, 2, 4, 5];
const RANDOM_BANDS: [RangeInclusive<u8>; 5] = [6..=55, 56..=100, 101..=150, 151..=200, 201..=253];
const FIXED_HIGH: u8 = 254;

/// Addresses produced for every (second, third) octet pair.
pub const SAMPLES_PER_SUBNET: usize = FIXED_LOW.len() + RANDOM_BANDS.len() + 1;
/// Addresses produced for a whole /8.
pub const SAMPLES_PER_NETWORK: usize = SAMPLES_PER_SUBNET * 256 * 256;

/// Samples the /8 network containing `base`, the address written in front of `/8`.
pub fn sample<R: Rng>(base: &str, rng: &mut R) -> Result<Vec<String>, SkipReason> {
    let base_addr = base
        .parse::<Ipv4Addr>()
        .map_err(|_| SkipReason::InvalidAddress)?;
    let first = base_addr.octets()[0];

    info!("Sampling network {first}.0.0.0/8");

    let mut hosts = Vec::with_capacity(SAMPLES_PER_NETWORK);
    for second in 0..=u8::MAX {
        for third in 0..=u8::MAX {
            hosts.extend(
                subnet_octets(rng)
                    .into_iter()
                    .map(|fourth| Ipv4Addr::new(first, second, third, fourth).to_string()),
            );
        }
    }

    info!("Generated {} sampled addresses", hosts.len());
    Ok(hosts)
}

/// Last octets sampled for one /24.
fn subnet_octets<R: Rng>(rng: &mut R) -> [u8; SAMPLES_PER_SUBNET] {
    let mut octets = [0u8; SAMPLES_PER_SUBNET];
    let picks = FIXED_LOW
        .into_iter()
        .chain(RANDOM_BANDS.iter().map(|band| rng.random_range(band.clone())))
        .chain(iter::once(FIXED_HIGH));

    for (slot, octet) in octets.iter_mut().zip(picks) {
        *slot = octet;
    }
    octets
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
