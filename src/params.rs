// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;

pub const DEFAULT_DATA_FILE: &str = "data/jobs.csv";
pub const DEFAULT_DERIVED_STEM: &str = "jobs_derived";
pub const DEFAULT_TOP_N: usize = 15;

#[derive(Clone, Debug)]
pub struct Params {
    pub data: PathBuf,            // scraped CSV to analyze
    pub city: Option<String>,     // keep only this city
    pub industry: Option<String>, // keep only this industry label
    pub out: Option<PathBuf>,     // write derived dataset here (file or dir hint)
    pub format: Delim,
    pub include_headers: bool,    // emit header row in the derived file
    pub report: bool,             // print the stats report
    pub top: usize,               // list length for top-N sections
}

impl Params {
    pub fn new() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            city: None,
            industry: None,
            out: None,
            format: Delim::Csv,
            include_headers: false,
            report: false,
            top: DEFAULT_TOP_N,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
