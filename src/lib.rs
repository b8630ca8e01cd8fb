//! # ipsynth - Synthetic public IPv4 address generator
//!
//! This library generates random, publicly routable-looking IPv4 addresses
//! for test data and writes them to timestamped text files.
//!
//! ## Overview
//!
//! Address quality and throughput pull in different directions, so
//! generation is driven by one of three interchangeable strategies:
//!
//! - **RejectResample** (`reject`): classifies every candidate and redraws
//!   reserved ones. Never emits a reserved address.
//! - **DirectRange** (`direct`): samples from precomputed public first-octet
//!   intervals, resampling only the second octet where a smaller reserved
//!   block shares the first octet.
//! - **FlatEnumeration** (`flat`): picks the first octet from a static
//!   allow-list with no further filtering. Fastest, least precise.
//!
//! Unique mode routes every candidate through a run-scoped deduplication
//! ledger so the output file never repeats an address.
//!
//! ## Architecture
//!
//! - `ip`: reserved-block classifier, first-octet tables, strategies, ledger
//! - `output`: output batch, buffered file writer, progress and summary
//! - `config`: generator settings and validation
//! - `config_loader`: YAML loading and command-line overrides
//! - `orchestrator`: end-to-end run
//! - `utils`: count parsing and timestamps
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ipsynth::config::GeneratorConfig;
//! use ipsynth::ip::Strategy;
//! use ipsynth::orchestrator;
//!
//! let config = GeneratorConfig {
//!     strategy: Strategy::FlatEnumeration,
//!     unique: true,
//!     ..GeneratorConfig::default()
//! };
//!
//! let summary = orchestrator::run(500_000, &config)?;
//! summary.print();
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! Single addresses can be drawn from any `rand::Rng`:
//!
//! ```rust
//! use ipsynth::ip::{is_reserved, Strategy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let addr = Strategy::RejectResample.generate(&mut rng);
//! assert!(!is_reserved(addr));
//! ```
//!
//! ## Error Handling
//!
//! The library uses `color_eyre` for I/O errors with context, and
//! `thiserror` enums for usage (`CountError`) and configuration
//! (`ValidationError`) problems.

pub mod config;
pub mod config_loader;
pub mod ip;
pub mod orchestrator;
pub mod output;
pub mod utils;
