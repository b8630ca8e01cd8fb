//! IPv4 address classification and generation module.
//!
//! This module holds the reserved-block classifier, the static first-octet
//! tables, the three generation strategies and the deduplication ledger
//! used in unique mode.

pub mod classifier;
pub mod ranges;
pub mod strategy;
pub mod ledger;

// Re-export commonly used types
pub use classifier::{classify, is_reserved, ReservedBlock};
pub use ranges::{RangeRule, FLAT_ALLOW_LIST, PUBLIC_RANGES};
pub use strategy::{OctetSource, Strategy};
pub use ledger::GenerationLedger;
