// src/store.rs
use std::{error::Error, fs, path::Path};

use crate::csv::{self, Delim};
use crate::specs::postings::{ColumnMap, JobPosting};

/// One loaded table: optional header row + raw rows.
#[derive(Clone, Debug)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Read the scraped CSV from disk. A missing/unreadable file is a visible
/// error that aborts the operation; there is no partial state to corrupt.
pub fn load_dataset(path: &Path) -> Result<DataSet, Box<dyn Error>> {
    logd!("Store: reading {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    let rows = csv::parse_rows(&text, Delim::Csv);
    let (headers, rows) = csv::detect_headers(rows);
    logd!(
        "Store: {} rows, header row {}",
        rows.len(),
        if headers.is_some() { "present" } else { "absent" }
    );
    Ok(DataSet { headers, rows })
}

/// Convert a dataset into postings: resolve columns (by header name, else
/// canonical scraper order) and apply the null-filling contract so every
/// categorical field is a visible value before anything is derived.
pub fn postings_from(ds: &DataSet) -> Result<Vec<JobPosting>, Box<dyn Error>> {
    let map = match &ds.headers {
        Some(h) => ColumnMap::resolve(h)?,
        None => ColumnMap::canonical(),
    };

    let mut out = Vec::with_capacity(ds.rows.len());
    for row in &ds.rows {
        let mut posting = JobPosting::from_row(row, &map);
        posting.fill_missing();
        out.push(posting);
    }
    Ok(out)
}

pub fn load_postings(path: &Path) -> Result<Vec<JobPosting>, Box<dyn Error>> {
    let ds = load_dataset(path)?;
    postings_from(&ds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::postings::{COLUMNS, UNSPECIFIED_DEGREE};

    fn dataset(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> DataSet {
        DataSet { headers, rows }
    }

    #[test]
    fn headerless_rows_use_canonical_order() {
        let ds = dataset(
            None,
            vec![row![
                "数据分析师", "10-15K", "[]", "['SQL']", "1-3年", "本科", "上海", "甲公司",
                "100-499人", "[]"
            ]],
        );
        let posts = postings_from(&ds).unwrap();
        assert_eq!(posts[0].city, "上海");
        assert_eq!(posts[0].skills, "['SQL']");
    }

    #[test]
    fn header_row_drives_column_resolution() {
        let mut headers: Vec<String> = COLUMNS.iter().map(|c| s!(*c)).collect();
        headers.swap(0, 6); // 城市 first, 职位 where 城市 was
        let ds = dataset(
            Some(headers),
            vec![row![
                "上海", "10-15K", "[]", "['SQL']", "1-3年", "本科", "数据分析师", "甲公司",
                "100-499人", "[]"
            ]],
        );
        let posts = postings_from(&ds).unwrap();
        assert_eq!(posts[0].title, "数据分析师");
        assert_eq!(posts[0].city, "上海");
    }

    #[test]
    fn missing_columns_abort_loudly() {
        let ds = dataset(Some(row!["职位", "城市"]), vec![row!["客服", "北京"]]);
        assert!(postings_from(&ds).is_err());
    }

    #[test]
    fn null_filling_runs_during_conversion() {
        let ds = dataset(None, vec![row!["客服专员", "4-6K"]]);
        let posts = postings_from(&ds).unwrap();
        assert_eq!(posts[0].degree, UNSPECIFIED_DEGREE);
    }
}
