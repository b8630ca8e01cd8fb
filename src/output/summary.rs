//! Completion summary printed after a run.

use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

use crate::ip::Strategy;

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub generated: usize,
    pub strategy: Strategy,
    pub unique: bool,
    pub seed: u64,
    pub elapsed: Duration,
    pub output_path: PathBuf,
    pub bytes_written: u64,
    /// Candidates discarded by the deduplication ledger
    pub duplicates_rejected: u64,
    /// Leading addresses with their 1-based position
    pub head: Vec<(usize, Ipv4Addr)>,
    /// Trailing addresses with their 1-based position
    pub tail: Vec<(usize, Ipv4Addr)>,
}

impl RunSummary {
    /// Addresses per second; zero when the run was too fast to measure
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.generated as f64 / secs
        } else {
            0.0
        }
    }

    pub fn file_size_mib(&self) -> f64 {
        self.bytes_written as f64 / 1024.0 / 1024.0
    }

    /// Human-readable summary lines
    pub fn lines(&self) -> Vec<String> {
        let kind = if self.unique { "unique public" } else { "public" };
        let mut lines = vec![
            String::new(),
            "Completed successfully!".to_string(),
            format!("Generated {} {} IP addresses", self.generated, kind),
            format!("Strategy: {}", self.strategy),
            format!("Time taken: {:?}", self.elapsed),
            format!("Rate: {:.0} IPs/second", self.rate()),
            format!("File size: {:.2} MiB", self.file_size_mib()),
            format!("Output saved to: {}", self.output_path.display()),
            format!("Seed: {}", self.seed),
        ];

        if self.unique {
            lines.push(format!("Duplicates discarded: {}", self.duplicates_rejected));
        }

        if !self.head.is_empty() {
            lines.push(String::new());
            lines.push(format!("First {} generated IPs:", self.head.len()));
            lines.extend(self.head.iter().map(|(pos, addr)| format!("{}. {}", pos, addr)));
        }

        if !self.tail.is_empty() {
            lines.push(String::new());
            lines.push(format!("Last {} generated IPs:", self.tail.len()));
            lines.extend(self.tail.iter().map(|(pos, addr)| format!("{}. {}", pos, addr)));
        }

        lines
    }

    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            generated: 5,
            strategy: Strategy::FlatEnumeration,
            unique: false,
            seed: 7,
            elapsed: Duration::from_millis(500),
            output_path: PathBuf::from("ultra_fast_ips_20240101_000000.txt"),
            bytes_written: 2 * 1024 * 1024,
            duplicates_rejected: 0,
            head: vec![(1, Ipv4Addr::new(1, 2, 3, 4))],
            tail: Vec::new(),
        }
    }

    #[test]
    fn test_rate_and_size() {
        let summary = summary();
        assert_eq!(summary.rate(), 10.0);
        assert_eq!(summary.file_size_mib(), 2.0);

        let instant = RunSummary { elapsed: Duration::ZERO, ..summary };
        assert_eq!(instant.rate(), 0.0);
    }

    #[test]
    fn test_lines() {
        let lines = summary().lines();
        assert!(lines.contains(&"Generated 5 public IP addresses".to_string()));
        assert!(lines.contains(&"Strategy: flat enumeration".to_string()));
        assert!(lines.contains(&"Rate: 10 IPs/second".to_string()));
        assert!(lines.contains(&"File size: 2.00 MiB".to_string()));
        assert!(lines.contains(&"Output saved to: ultra_fast_ips_20240101_000000.txt".to_string()));
        assert!(lines.contains(&"1. 1.2.3.4".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Last")));
        assert!(!lines.iter().any(|l| l.starts_with("Duplicates")));
    }

    #[test]
    fn test_unique_lines() {
        let summary = RunSummary {
            unique: true,
            duplicates_rejected: 3,
            tail: vec![(6, Ipv4Addr::new(5, 6, 7, 8))],
            ..summary()
        };
        let lines = summary.lines();
        assert!(lines.contains(&"Generated 5 unique public IP addresses".to_string()));
        assert!(lines.contains(&"Duplicates discarded: 3".to_string()));
        assert!(lines.contains(&"Last 1 generated IPs:".to_string()));
        assert!(lines.contains(&"6. 5.6.7.8".to_string()));
    }
}
