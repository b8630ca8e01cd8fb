//! Count-based progress reporting.

/// Reports progress every `total / steps` addresses and on completion
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: usize,
    interval: usize,
    noun: &'static str,
}

impl ProgressTracker {
    /// `steps` is the number of evenly spaced reports over the run; zero is
    /// treated as one
    pub fn new(total: usize, steps: usize, noun: &'static str) -> Self {
        let interval = (total / steps.max(1)).max(1);
        ProgressTracker { total, interval, noun }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    pub fn should_report(&self, done: usize) -> bool {
        done > 0 && (done % self.interval == 0 || done == self.total)
    }

    pub fn percent(&self, done: usize) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        done as f64 / self.total as f64 * 100.0
    }

    /// Progress line, e.g. `Progress: 50.0% (10/20 IPs generated)`
    pub fn line(&self, done: usize) -> String {
        format!(
            "Progress: {:.1}% ({}/{} {})",
            self.percent(done),
            done,
            self.total,
            self.noun
        )
    }

    /// Print the progress line if `done` falls on a reporting threshold
    pub fn report(&self, done: usize) {
        if self.should_report(done) {
            println!("{}", self.line(done));
        }
    }
}
