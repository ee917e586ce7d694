// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    core::industry::Industry,
    file,
    params::Params,
    progress::Progress,
    specs::postings::{self, JobPosting},
    stats, store,
};

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub written: Option<PathBuf>,
    pub report: Option<String>,
}

/// Top-level pipeline: load → filter → derive → export and/or report.
/// `progress` can be None (no status updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    // Validate the industry filter before touching the data; a typo should
    // fail fast with the known labels, not silently match nothing.
    let industry_filter = match &params.industry {
        Some(label) => match Industry::from_label(label) {
            Some(industry) => Some(industry),
            None => {
                let known: Vec<&str> = Industry::ALL.iter().map(|i| i.label()).collect();
                return Err(format!(
                    "Unknown industry '{}'. Known labels: {}",
                    label,
                    known.join(", ")
                )
                .into());
            }
        },
        None => None,
    };

    logf!("Run: data={}", params.data.display());
    let mut posts = store::load_postings(&params.data)?;
    let rows_loaded = posts.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows_loaded);
        p.log(&format!(
            "Loaded {} postings from {}",
            rows_loaded,
            params.data.display()
        ));
        p.phase_done("load");
    }

    if let Some(city) = &params.city {
        posts.retain(|p| p.city == *city);
    }
    if let Some(industry) = industry_filter {
        posts.retain(|p| p.industry() == industry);
    }
    let rows_kept = posts.len();
    if params.city.is_some() || industry_filter.is_some() {
        logf!("Run: {} of {} rows kept after filtering", rows_kept, rows_loaded);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!(
                "{} of {} postings kept after filtering",
                rows_kept, rows_loaded
            ));
            p.phase_done("filter");
        }
    }

    // Derive salaries once; export and stats both read this vector.
    let salaries: Vec<Option<f64>> = posts.iter().map(JobPosting::monthly_salary).collect();

    let mut written = None;
    if let Some(hint) = &params.out {
        let default_name = join!(crate::params::DEFAULT_DERIVED_STEM, ".", params.format.ext());
        let path = file::resolve_out_path(hint, &default_name)?;

        let headers = params.include_headers.then(postings::derived_headers);
        let rows: Vec<Vec<String>> = posts.iter().map(JobPosting::derived_row).collect();
        file::write_dataset(&path, headers.as_deref(), &rows, params.format)?;

        logf!("Run: wrote {} rows to {}", rows.len(), path.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Wrote {} rows to {}", rows.len(), path.display()));
            p.phase_done("export");
        }
        written = Some(path);
    }

    let report = params
        .report
        .then(|| stats::render_report(&posts, &salaries, params.top));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        rows_loaded,
        rows_kept,
        written,
        report,
    })
}
