//! Generation orchestrator.
//!
//! This module drives a complete run: seeding the random source, generating
//! the batch (through the deduplication ledger in unique mode), writing the
//! output file and assembling the summary.

use std::time::Instant;

use color_eyre::Result;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GeneratorConfig;
use crate::ip::{GenerationLedger, OctetSource, Strategy};
use crate::output::batch::MAX_PREALLOCATED;
use crate::output::{output_path, BatchEmitter, OutputBatch, ProgressTracker, RunSummary};
use crate::utils::timestamp::{local_file_timestamp, time_seed};

/// Addresses produced by one generation pass
#[derive(Debug)]
pub struct GeneratedBatch {
    pub batch: OutputBatch,
    /// Candidates discarded as duplicates (always zero outside unique mode)
    pub duplicates_rejected: u64,
}

/// Generate exactly `count` addresses with `strategy`.
///
/// In unique mode every candidate goes through a [`GenerationLedger`] and
/// duplicates are regenerated. `on_progress` is called with the batch length
/// after every accepted address.
pub fn generate_addresses<S, F>(
    count: usize,
    strategy: Strategy,
    unique: bool,
    source: &mut S,
    mut on_progress: F,
) -> GeneratedBatch
where
    S: OctetSource + ?Sized,
    F: FnMut(usize),
{
    let mut batch = OutputBatch::new(count);

    if !unique {
        while !batch.is_full() {
            batch.push(strategy.generate(source));
            on_progress(batch.len());
        }
        return GeneratedBatch { batch, duplicates_rejected: 0 };
    }

    let mut ledger = GenerationLedger::with_capacity(count.min(MAX_PREALLOCATED));
    while !batch.is_full() {
        let addr = strategy.generate(source);
        if ledger.try_emit(addr) {
            batch.push(addr);
            on_progress(batch.len());
        }
    }

    GeneratedBatch {
        batch,
        duplicates_rejected: ledger.duplicates(),
    }
}

/// How close a unique request comes to exhausting a strategy's address space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionRisk {
    /// More than half the space is requested; duplicate rejection dominates
    Slowdown,
    /// More addresses requested than the strategy can produce
    Unfinishable,
}

/// Classify a unique request of `count` addresses against `strategy`.
/// Returns `None` when the request stays within half of the address space.
pub fn exhaustion_risk(count: usize, strategy: Strategy) -> Option<ExhaustionRisk> {
    let space = strategy.address_space();
    let count = count as u64;
    if count > space {
        Some(ExhaustionRisk::Unfinishable)
    } else if count > space / 2 {
        Some(ExhaustionRisk::Slowdown)
    } else {
        None
    }
}

/// Run a complete generation: produce `count` addresses and write them to a
/// timestamped file under `config.output_dir`
pub fn run(count: usize, config: &GeneratorConfig) -> Result<RunSummary> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(time_seed);
    info!(
        "Generating {} addresses using {} (unique: {}, seed: {})",
        count, config.strategy, config.unique, seed
    );
    if !config.strategy.guarantees_public() {
        info!("Strategy {} may emit addresses inside reserved sub-blocks", config.strategy);
    }
    if config.unique {
        match exhaustion_risk(count, config.strategy) {
            Some(ExhaustionRisk::Unfinishable) => warn!(
                "Requested {} unique addresses but {} can only produce {}; the run cannot finish",
                count,
                config.strategy,
                config.strategy.address_space()
            ),
            Some(ExhaustionRisk::Slowdown) => warn!(
                "Requested {} unique addresses from a space of {}; duplicate rejection will dominate",
                count,
                config.strategy.address_space()
            ),
            None => {}
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let noun = if config.unique { "unique IPs" } else { "IPs generated" };
    let tracker = ProgressTracker::new(count, config.progress_steps, noun);

    let start = Instant::now();
    let generated = generate_addresses(count, config.strategy, config.unique, &mut rng, |done| {
        tracker.report(done)
    });

    let path = output_path(&config.output_dir, &config.file_prefix(), &local_file_timestamp());
    let emitter = BatchEmitter::new(config.buffer_size);
    let bytes_written = emitter.write_file(&path, generated.batch.as_slice())?;
    let elapsed = start.elapsed();

    info!("Run finished in {:?}", elapsed);

    Ok(RunSummary {
        generated: generated.batch.len(),
        strategy: config.strategy,
        unique: config.unique,
        seed,
        elapsed,
        output_path: path,
        bytes_written,
        duplicates_rejected: generated.duplicates_rejected,
        head: generated.batch.head(config.sample_head),
        tail: generated.batch.tail(config.sample_tail, config.sample_head),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip::is_reserved;
    use crate::ip::strategy::tests::ScriptedSource;
    use std::collections::HashSet;
    use std::net::Ipv4Addr;
    use tempfile::tempdir;

    #[test]
    fn test_generate_exact_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut calls = Vec::new();
        let generated = generate_addresses(25, Strategy::DirectRange, false, &mut rng, |d| calls.push(d));

        assert_eq!(generated.batch.len(), 25);
        assert_eq!(generated.duplicates_rejected, 0);
        assert_eq!(calls, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_unique_mode_regenerates_duplicates() {
        // Flat enumeration: index, then three octets; the second address
        // repeats the first and must be discarded
        let mut source = ScriptedSource::new(&[
            0, 1, 1, 1, //
            0, 1, 1, 1, //
            0, 1, 1, 2,
        ]);
        let generated = generate_addresses(2, Strategy::FlatEnumeration, true, &mut source, |_| {});

        assert_eq!(
            generated.batch.as_slice(),
            &[Ipv4Addr::new(1, 1, 1, 1), Ipv4Addr::new(1, 1, 1, 2)]
        );
        assert_eq!(generated.duplicates_rejected, 1);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_unique_mode_thousand() {
        let mut rng = StdRng::seed_from_u64(11);
        let generated = generate_addresses(1000, Strategy::RejectResample, true, &mut rng, |_| {});

        let unique: HashSet<Ipv4Addr> = generated.batch.as_slice().iter().copied().collect();
        assert_eq!(unique.len(), 1000);
        assert!(generated.batch.as_slice().iter().all(|a| !is_reserved(*a)));
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            strategy: Strategy::FlatEnumeration,
            unique: true,
            output_dir: dir.path().to_path_buf(),
            seed: Some(2024),
            ..GeneratorConfig::default()
        };

        let summary = run(40, &config).unwrap();
        assert_eq!(summary.generated, 40);
        assert_eq!(summary.seed, 2024);
        assert_eq!(summary.head.len(), 10);
        assert_eq!(summary.tail.len(), 5);

        let name = summary.output_path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("unique_ultra_fast_ips_"), "unexpected name {}", name);
        assert!(name.ends_with(".txt"));

        let content = std::fs::read_to_string(&summary.output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 40);
        assert_eq!(summary.bytes_written, content.len() as u64);
        assert_eq!(lines[0], summary.head[0].1.to_string());
        assert_eq!(lines[39], summary.tail[4].1.to_string());
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let first_dir = tempdir().unwrap();
        let second_dir = tempdir().unwrap();
        let config = |dir: &std::path::Path| GeneratorConfig {
            strategy: Strategy::DirectRange,
            output_dir: dir.to_path_buf(),
            seed: Some(77),
            ..GeneratorConfig::default()
        };

        let first = run(50, &config(first_dir.path())).unwrap();
        let second = run(50, &config(second_dir.path())).unwrap();

        assert_eq!(
            std::fs::read_to_string(first.output_path).unwrap(),
            std::fs::read_to_string(second.output_path).unwrap()
        );
    }

    #[test]
    fn test_exhaustion_risk() {
        assert_eq!(exhaustion_risk(1000, Strategy::RejectResample), None);
        assert_eq!(exhaustion_risk(218 << 23, Strategy::RejectResample), None);
        assert_eq!(
            exhaustion_risk((218 << 23) + 1, Strategy::RejectResample),
            Some(ExhaustionRisk::Slowdown)
        );
        assert_eq!(
            exhaustion_risk(218 << 24, Strategy::DirectRange),
            Some(ExhaustionRisk::Slowdown)
        );
        assert_eq!(
            exhaustion_risk((219 << 24) + 1, Strategy::FlatEnumeration),
            Some(ExhaustionRisk::Unfinishable)
        );
    }

    #[test]
    fn test_run_surfaces_file_creation_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_directory");
        std::fs::write(&blocker, "occupied").unwrap();

        let config = GeneratorConfig {
            output_dir: blocker.clone(),
            seed: Some(1),
            ..GeneratorConfig::default()
        };

        let err = run(5, &config).unwrap_err();
        assert!(
            err.to_string().contains("Failed to create output directory"),
            "unexpected error: {}",
            err
        );
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "occupied");
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = GeneratorConfig {
            progress_steps: 0,
            ..GeneratorConfig::default()
        };
        assert!(run(5, &config).is_err());
    }
}
