//! Utility functions for the CLI.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Path meaning stdin or stdout.
pub const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Read an entire input into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    if is_stdio(path) {
        io::stdin()
            .lock()
            .read_to_end(&mut data)
            .context("Failed to read stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open input: {}", path.display()))?
            .read_to_end(&mut data)
            .with_context(|| format!("Failed to read input: {}", path.display()))?;
    }
    tracing::info!(path = %path.display(), len = data.len(), "read input");
    Ok(data)
}

/// Write `data` to a file, or stdout for `-`.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if is_stdio(path) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(data).context("Failed to write stdout")?;
        out.flush().context("Failed to flush stdout")?;
    } else {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(data)?;
        writer.flush()?;
    }
    tracing::info!(path = %path.display(), len = data.len(), "wrote output");
    Ok(())
}

/// Number of maximal runs of equal bytes.
pub fn count_runs(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    1 + data.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Share of zero bytes, as a percentage.
pub fn zero_percent(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let zeros = data.iter().filter(|&&b| b == 0).count();
    zeros as f64 * 100.0 / data.len() as f64
}
