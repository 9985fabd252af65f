//! Stage objects and the composed BWT + MTF front end.
//!
//! Compression runs the forward BWT, frames `(first, column)` and feeds the
//! whole frame through MTF. Decompression undoes each step in reverse order.

use crate::bwt::{self, BwtBlock};
use crate::config::RankerConfig;
use crate::mtf;
use rotsort_core::{Result, Transform};
use std::time::Instant;

/// Burrows-Wheeler stage over framed blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BwtStage {
    config: RankerConfig,
}

impl BwtStage {
    /// Create a stage with the given ranker tuning.
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }
}

impl Transform for BwtStage {
    fn name(&self) -> &'static str {
        "bwt"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(bwt::transform_with_config(input, self.config)?.to_bytes())
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        BwtBlock::from_bytes(input)?.inverse()
    }
}

/// Move-to-front stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MtfStage;

impl Transform for MtfStage {
    fn name(&self) -> &'static str {
        "mtf"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(mtf::transform(input))
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(mtf::inverse_transform(input))
    }
}

/// BWT followed by MTF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    bwt: BwtStage,
    mtf: MtfStage,
}

impl Pipeline {
    /// Create a pipeline with the given ranker tuning.
    pub fn new(config: RankerConfig) -> Self {
        Self {
            bwt: BwtStage::new(config),
            mtf: MtfStage,
        }
    }
}

impl Transform for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        let framed = timed(&self.bwt, input, BwtStage::forward)?;
        timed(&self.mtf, &framed, MtfStage::forward)
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        let framed = timed(&self.mtf, input, MtfStage::inverse)?;
        timed(&self.bwt, &framed, BwtStage::inverse)
    }
}

fn timed<T: Transform>(
    stage: &T,
    input: &[u8],
    run: fn(&T, &[u8]) -> Result<Vec<u8>>,
) -> Result<Vec<u8>> {
    let start = Instant::now();
    let output = run(stage, input)?;
    tracing::debug!(
        stage = stage.name(),
        input_len = input.len(),
        output_len = output.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "stage finished"
    );
    Ok(output)
}

/// Run BWT then MTF over `data`.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Pipeline::default().forward(data)
}

/// Undo [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Pipeline::default().inverse(data)
}
