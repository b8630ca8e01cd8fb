//! Output module.
//!
//! Holds the in-memory batch, the buffered file writer, progress reporting
//! and the completion summary.

pub mod batch;
pub mod emitter;
pub mod progress;
pub mod summary;

pub use batch::OutputBatch;
pub use emitter::{output_path, BatchEmitter};
pub use progress::ProgressTracker;
pub use summary::RunSummary;
