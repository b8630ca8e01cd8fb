//! Address generation strategies.
//!
//! Three interchangeable policies trade classification accuracy for
//! throughput:
//!
//! - **RejectResample**: screens the first octet, then runs the full
//!   classifier and redraws the whole address on a hit. Never emits a
//!   reserved address.
//! - **DirectRange**: samples a first octet from a precomputed interval table
//!   and only resamples the second octet for first octets that share space
//!   with a smaller reserved block. Best effort.
//! - **FlatEnumeration**: picks the first octet from a static allow-list and
//!   applies no further filtering. Fastest; may emit 169.254.0.0/16.
//!
//! All strategies draw from an explicit [`OctetSource`] so callers (and
//! tests) control the randomness.

use std::fmt;
use std::net::Ipv4Addr;

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::classifier::classify;
use super::ranges::{second_octet_exclusion, FLAT_ALLOW_LIST, MAX_UNICAST_OCTET, PUBLIC_RANGES};

/// First octets the reject-and-resample strategy redraws before classifying
const REJECTED_FIRST_OCTETS: [u8; 5] = [10, 127, 172, 192, 169];

/// Source of uniformly distributed values for address generation
pub trait OctetSource {
    /// Uniform octet in `low..=high`
    fn octet_between(&mut self, low: u8, high: u8) -> u8;

    /// Uniform index in `0..len`; `len` is never zero
    fn index_below(&mut self, len: usize) -> usize;

    /// Uniform octet over the full 0..=255 range
    fn any_octet(&mut self) -> u8 {
        self.octet_between(0, u8::MAX)
    }
}

impl<R: Rng + ?Sized> OctetSource for R {
    fn octet_between(&mut self, low: u8, high: u8) -> u8 {
        self.gen_range(low..=high)
    }

    fn index_below(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Address generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Strategy {
    /// Classify every candidate and redraw reserved ones
    #[default]
    #[serde(rename = "reject")]
    #[value(name = "reject", alias = "reject-resample")]
    RejectResample,
    /// Sample from precomputed public first-octet intervals
    #[serde(rename = "direct")]
    #[value(name = "direct", alias = "fast")]
    DirectRange,
    /// Pick the first octet from a flat allow-list, no filtering
    #[serde(rename = "flat")]
    #[value(name = "flat", alias = "ultra-fast")]
    FlatEnumeration,
}

impl Strategy {
    /// Generate one address using this policy
    pub fn generate<S: OctetSource + ?Sized>(self, source: &mut S) -> Ipv4Addr {
        match self {
            Strategy::RejectResample => reject_resample(source),
            Strategy::DirectRange => direct_range(source),
            Strategy::FlatEnumeration => flat_enumeration(source),
        }
    }

    /// Whether every emitted address is guaranteed to pass the classifier
    pub fn guarantees_public(self) -> bool {
        matches!(self, Strategy::RejectResample)
    }

    /// Number of distinct addresses this policy can produce
    pub fn address_space(self) -> u64 {
        let first_octets = match self {
            Strategy::RejectResample => {
                MAX_UNICAST_OCTET as u64 - REJECTED_FIRST_OCTETS.len() as u64
            }
            Strategy::DirectRange => PUBLIC_RANGES.iter().map(|r| r.len() as u64).sum(),
            Strategy::FlatEnumeration => FLAT_ALLOW_LIST.len() as u64,
        };
        first_octets << 24
    }

    /// Output file name prefix for this policy
    pub fn file_prefix(self) -> &'static str {
        match self {
            Strategy::RejectResample => "generated",
            Strategy::DirectRange => "fast_generated",
            Strategy::FlatEnumeration => "ultra_fast",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::RejectResample => "reject-and-resample",
            Strategy::DirectRange => "direct range sampling",
            Strategy::FlatEnumeration => "flat enumeration",
        };
        f.write_str(name)
    }
}

fn reject_resample<S: OctetSource + ?Sized>(source: &mut S) -> Ipv4Addr {
    loop {
        let first = loop {
            let octet = source.octet_between(1, MAX_UNICAST_OCTET);
            if !REJECTED_FIRST_OCTETS.contains(&octet) {
                break octet;
            }
        };
        let addr = Ipv4Addr::new(first, source.any_octet(), source.any_octet(), source.any_octet());

        match classify(addr) {
            None => return addr,
            Some(block) => debug!("Discarding {} inside {}", addr, block),
        }
    }
}

fn direct_range<S: OctetSource + ?Sized>(source: &mut S) -> Ipv4Addr {
    let rule = PUBLIC_RANGES[source.index_below(PUBLIC_RANGES.len())];
    let first = source.octet_between(rule.start, rule.end);
    let second = second_octet_for(first, source);
    Ipv4Addr::new(first, second, source.any_octet(), source.any_octet())
}

/// Draw a second octet, resampling only while it falls in the reserved
/// sub-block that shares `first`
pub(crate) fn second_octet_for<S: OctetSource + ?Sized>(first: u8, source: &mut S) -> u8 {
    match second_octet_exclusion(first) {
        Some(excluded) => loop {
            let second = source.any_octet();
            if !excluded.contains(second) {
                break second;
            }
        },
        None => source.any_octet(),
    }
}

fn flat_enumeration<S: OctetSource + ?Sized>(source: &mut S) -> Ipv4Addr {
    let first = FLAT_ALLOW_LIST[source.index_below(FLAT_ALLOW_LIST.len())];
    Ipv4Addr::new(first, source.any_octet(), source.any_octet(), source.any_octet())
}
