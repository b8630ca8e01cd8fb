//! In-memory batch of generated addresses.

use std::net::Ipv4Addr;

/// Largest up-front allocation made for a batch; bigger runs grow on demand
pub(crate) const MAX_PREALLOCATED: usize = 1 << 24;

/// Ordered, append-only sequence of generated addresses bounded by the
/// requested count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBatch {
    addresses: Vec<Ipv4Addr>,
    target: usize,
}

impl OutputBatch {
    pub fn new(target: usize) -> Self {
        OutputBatch {
            addresses: Vec::with_capacity(target.min(MAX_PREALLOCATED)),
            target,
        }
    }

    /// Append an address; returns false once the batch already holds
    /// `target` addresses
    pub fn push(&mut self, addr: Ipv4Addr) -> bool {
        if self.is_full() {
            return false;
        }
        self.addresses.push(addr);
        true
    }

    pub fn is_full(&self) -> bool {
        self.addresses.len() >= self.target
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.addresses
    }

    /// First `n` addresses paired with their 1-based position
    pub fn head(&self, n: usize) -> Vec<(usize, Ipv4Addr)> {
        self.addresses
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, addr)| (i + 1, *addr))
            .collect()
    }

    /// Last `n` addresses not already covered by `head(skip)`, paired with
    /// their 1-based position
    pub fn tail(&self, n: usize, skip: usize) -> Vec<(usize, Ipv4Addr)> {
        let available = self.addresses.len().saturating_sub(skip);
        let start = self.addresses.len() - n.min(available);
        self.addresses[start..]
            .iter()
            .enumerate()
            .map(|(i, addr)| (start + i + 1, *addr))
            .collect()
    }
}
