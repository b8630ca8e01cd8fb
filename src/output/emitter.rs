//! Buffered output file writer.
//!
//! Writes a finished batch to a newly created text file, one dotted-decimal
//! address per line. The first write or flush failure aborts the run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};

/// Build the output path `<dir>/<prefix>_ips_<timestamp>.txt`
pub fn output_path(dir: &Path, prefix: &str, timestamp: &str) -> PathBuf {
    dir.join(format!("{}_ips_{}.txt", prefix, timestamp))
}

/// Writes batches of addresses through a fixed-size buffer
#[derive(Debug, Clone, Copy)]
pub struct BatchEmitter {
    buffer_size: usize,
}

impl BatchEmitter {
    pub fn new(buffer_size: usize) -> Self {
        BatchEmitter { buffer_size }
    }

    /// Create `path` and write every address to it. Returns the number of
    /// bytes written.
    pub fn write_file(&self, path: &Path, addresses: &[Ipv4Addr]) -> Result<u64> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create output directory '{}'", parent.display()))?;
        }

        let file = File::create(path)
            .wrap_err_with(|| format!("Error creating file '{}'", path.display()))?;

        info!("Writing {} addresses to {:?}", addresses.len(), path);
        let bytes = self
            .write_to(file, addresses)
            .wrap_err_with(|| format!("Error writing to file '{}'", path.display()))?;
        debug!("Flushed {} bytes to {:?}", bytes, path);

        Ok(bytes)
    }

    /// Write every address followed by `\n` to `sink`, then flush
    pub fn write_to<W: Write>(&self, sink: W, addresses: &[Ipv4Addr]) -> std::io::Result<u64> {
        let mut writer = BufWriter::with_capacity(self.buffer_size, sink);
        let mut bytes = 0u64;

        for addr in addresses {
            let line = addr.to_string();
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            bytes += line.len() as u64 + 1;
        }

        writer.flush()?;
        Ok(bytes)
    }
}
