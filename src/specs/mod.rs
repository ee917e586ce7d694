// src/specs/mod.rs
//! # Dataset “specs” module
//!
//! This module hosts the **column contract** for the scraped dataset. The
//! upstream scraper (browser-driven, outside this repo) appends one CSV row
//! per job posting; everything downstream — normalization, stats, export —
//! relies on the shapes declared here.
//!
//! ## What lives here
//! - The **raw column names** in scraper order, and the two derived columns
//!   appended on export.
//! - **Row ⇄ record conversion** (`JobPosting::from_row`, `derived_row`).
//! - The **null-filling contract**: missing categorical cells become defined
//!   sentinels before any derived field is computed, so grouping never drops
//!   a row silently.
//! - The **derivation seams** into `core` (salary, industry, tokens).
//!
//! ## What does **not** live here
//! - File I/O and CSV mechanics — `store`, `csv`, `file`.
//! - Aggregation — `stats`.
//!
//! In short: **`specs` knows what a posting row means.** Other layers decide
//! where rows come from and what to compute over them.

pub mod postings;
