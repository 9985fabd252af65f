//! Info command implementation.

use crate::utils::{count_runs, read_input, zero_percent};
use anyhow::Result;
use rotsort_bwt::{RankerConfig, bwt, mtf};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Transform statistics for one input.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InfoReport {
    /// Input path as given.
    pub input: String,
    /// Input length in bytes.
    pub length: usize,
    /// Sorted row of the unrotated input.
    pub first: u32,
    /// Runs of equal bytes in the input.
    pub input_runs: usize,
    /// Runs of equal bytes in the BWT column.
    pub bwt_runs: usize,
    /// Share of zero indices when MTF is applied to the raw input.
    pub mtf_zero_percent_raw: f64,
    /// Share of zero indices when MTF is applied to the BWT column.
    pub mtf_zero_percent_bwt: f64,
}

impl InfoReport {
    /// Compute statistics for `data`.
    pub fn from_data(input: &Path, data: &[u8], config: RankerConfig) -> Result<Self> {
        let block = bwt::transform_with_config(data, config)?;
        Ok(Self {
            input: input.display().to_string(),
            length: data.len(),
            first: block.first,
            input_runs: count_runs(data),
            bwt_runs: count_runs(&block.data),
            mtf_zero_percent_raw: zero_percent(&mtf::transform(data)),
            mtf_zero_percent_bwt: zero_percent(&mtf::transform(&block.data)),
        })
    }
}

pub fn cmd_info(input: &Path, json: bool, config: RankerConfig) -> Result<()> {
    let data = read_input(input)?;
    let report = InfoReport::from_data(input, &data, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Transform Information");
    println!("=====================");
    println!("Input: {}", report.input);
    println!("Length: {} bytes", report.length);
    println!("First row: {}", report.first);
    println!("Runs (input): {}", report.input_runs);
    println!("Runs (BWT): {}", report.bwt_runs);
    println!("MTF zeros (input): {:.1}%", report.mtf_zero_percent_raw);
    println!("MTF zeros (BWT): {:.1}%", report.mtf_zero_percent_bwt);

    Ok(())
}
