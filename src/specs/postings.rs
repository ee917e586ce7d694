// src/specs/postings.rs

use std::error::Error;

use crate::core::industry::{self, Industry};
use crate::core::salary;
use crate::core::tokens::{self, EMPTY_LIST};

/// Raw columns, in the order the scraper writes them.
pub const COLUMNS: [&str; 10] = [
    "职位",
    "期待薪资",
    "工作标签",
    "技能要求",
    "工作经验",
    "学历",
    "城市",
    "公司",
    "公司规模",
    "福利列表",
];

/// Columns appended to each exported row, in this order.
pub const DERIVED_COLUMNS: [&str; 2] = ["平均薪资", "行业"];

// Sentinels for missing categorical cells. Grouping treats these as their
// own visible category instead of dropping the row.
pub const UNSPECIFIED_EXPERIENCE: &str = "经验不限";
pub const UNSPECIFIED_DEGREE: &str = "学历不限";
pub const UNDISCLOSED_SCALE: &str = "未公布";

/// One scraped job posting. All fields are the raw text as published;
/// an empty string is "missing" until [`JobPosting::fill_missing`] runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobPosting {
    pub title: String,
    pub salary_desc: String,
    pub tags: String,
    pub skills: String,
    pub experience: String,
    pub degree: String,
    pub city: String,
    pub company: String,
    pub company_size: String,
    pub benefits: String,
}

/// Column-name → row-index resolution. Built once per dataset from the
/// header row, or in canonical order for headerless files.
#[derive(Clone, Debug)]
pub struct ColumnMap {
    ix: [usize; COLUMNS.len()],
}

impl ColumnMap {
    /// Identity mapping: row cells already in `COLUMNS` order.
    pub fn canonical() -> Self {
        let mut ix = [0usize; COLUMNS.len()];
        for (i, slot) in ix.iter_mut().enumerate() {
            *slot = i;
        }
        Self { ix }
    }

    /// Resolve every raw column by header name. Fails loudly when a column
    /// is missing — a half-mapped dataset would corrupt every aggregate
    /// built on top of it.
    pub fn resolve(headers: &[String]) -> Result<Self, Box<dyn Error>> {
        let mut ix = [0usize; COLUMNS.len()];
        let mut missing: Vec<&str> = Vec::new();

        for (slot, name) in ix.iter_mut().zip(COLUMNS) {
            match headers.iter().position(|h| h.trim() == name) {
                Some(pos) => *slot = pos,
                None => missing.push(name),
            }
        }

        if missing.is_empty() {
            Ok(Self { ix })
        } else {
            Err(format!("dataset is missing required columns: {}", missing.join(", ")).into())
        }
    }

    fn cell<'a>(&self, row: &'a [String], col: usize) -> &'a str {
        row.get(self.ix[col]).map(String::as_str).unwrap_or("")
    }
}

impl JobPosting {
    /// Build a posting from one raw row. Short rows are tolerated; absent
    /// cells come through as empty strings.
    pub fn from_row(row: &[String], map: &ColumnMap) -> JobPosting {
        JobPosting {
            title: s!(map.cell(row, 0)),
            salary_desc: s!(map.cell(row, 1)),
            tags: s!(map.cell(row, 2)),
            skills: s!(map.cell(row, 3)),
            experience: s!(map.cell(row, 4)),
            degree: s!(map.cell(row, 5)),
            city: s!(map.cell(row, 6)),
            company: s!(map.cell(row, 7)),
            company_size: s!(map.cell(row, 8)),
            benefits: s!(map.cell(row, 9)),
        }
    }

    /// Replace missing categorical cells with their sentinels. Idempotent:
    /// a filled value is non-empty and is left alone on a second pass.
    pub fn fill_missing(&mut self) {
        fill(&mut self.experience, UNSPECIFIED_EXPERIENCE);
        fill(&mut self.degree, UNSPECIFIED_DEGREE);
        fill(&mut self.company_size, UNDISCLOSED_SCALE);
        fill(&mut self.benefits, EMPTY_LIST);
    }

    /// Estimated monthly salary in yuan; None when the descriptor is
    /// unparseable (excluded from salary stats, never counted as zero).
    pub fn monthly_salary(&self) -> Option<f64> {
        salary::parse(&self.salary_desc)
    }

    pub fn industry(&self) -> Industry {
        industry::classify(&self.title, &self.skills, &self.tags)
    }

    pub fn tag_tokens(&self) -> Vec<String> {
        tokens::parse_tokens(&self.tags)
    }

    pub fn skill_tokens(&self) -> Vec<String> {
        tokens::parse_tokens(&self.skills)
    }

    pub fn benefit_tokens(&self) -> Vec<String> {
        tokens::parse_tokens(&self.benefits)
    }

    /// Export row: the ten raw fields plus the derived columns. Absent
    /// salary becomes an empty cell.
    pub fn derived_row(&self) -> Vec<String> {
        let salary_cell = match self.monthly_salary() {
            Some(v) => format!("{v}"),
            None => s!(),
        };
        vec![
            self.title.clone(),
            self.salary_desc.clone(),
            self.tags.clone(),
            self.skills.clone(),
            self.experience.clone(),
            self.degree.clone(),
            self.city.clone(),
            self.company.clone(),
            self.company_size.clone(),
            self.benefits.clone(),
            salary_cell,
            s!(self.industry().label()),
        ]
    }
}

/// Headers for the exported dataset: raw columns then derived columns.
pub fn derived_headers() -> Vec<String> {
    COLUMNS
        .iter()
        .chain(DERIVED_COLUMNS.iter())
        .map(|c| s!(*c))
        .collect()
}

fn fill(field: &mut String, sentinel: &str) {
    if field.trim().is_empty() {
        *field = s!(sentinel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Vec<String> {
        row![
            "Python后端工程师",
            "15-25K",
            "['互联网']",
            "['Python', 'MySQL']",
            "3-5年",
            "本科",
            "北京",
            "某某科技",
            "500-999人",
            "['五险一金', '年终奖']",
        ]
    }

    #[test]
    fn from_row_maps_canonical_order() {
        let p = JobPosting::from_row(&sample_row(), &ColumnMap::canonical());
        assert_eq!(p.title, "Python后端工程师");
        assert_eq!(p.city, "北京");
        assert_eq!(p.benefits, "['五险一金', '年终奖']");
    }

    #[test]
    fn from_row_tolerates_short_rows() {
        let p = JobPosting::from_row(&row!["只有职位"], &ColumnMap::canonical());
        assert_eq!(p.title, "只有职位");
        assert_eq!(p.salary_desc, "");
    }

    #[test]
    fn resolve_maps_reordered_headers() {
        let mut headers: Vec<String> = COLUMNS.iter().map(|c| s!(*c)).collect();
        headers.reverse();
        let map = ColumnMap::resolve(&headers).unwrap();

        let mut cells = sample_row();
        cells.reverse();
        let p = JobPosting::from_row(&cells, &map);
        assert_eq!(p.title, "Python后端工程师");
        assert_eq!(p.company_size, "500-999人");
    }

    #[test]
    fn resolve_reports_missing_columns() {
        let headers = vec![s!("职位"), s!("期待薪资")];
        let err = ColumnMap::resolve(&headers).unwrap_err();
        assert!(err.to_string().contains("工作标签"));
    }

    #[test]
    fn fill_missing_is_idempotent() {
        let mut p = JobPosting {
            title: s!("客服专员"),
            ..JobPosting::default()
        };
        p.fill_missing();
        assert_eq!(p.experience, UNSPECIFIED_EXPERIENCE);
        assert_eq!(p.degree, UNSPECIFIED_DEGREE);
        assert_eq!(p.company_size, UNDISCLOSED_SCALE);
        assert_eq!(p.benefits, EMPTY_LIST);

        let filled = p.clone();
        p.fill_missing();
        assert_eq!(p, filled);
    }

    #[test]
    fn fill_missing_keeps_present_values() {
        let mut p = JobPosting::from_row(&sample_row(), &ColumnMap::canonical());
        p.fill_missing();
        assert_eq!(p.experience, "3-5年");
        assert_eq!(p.degree, "本科");
    }

    #[test]
    fn derived_row_appends_salary_and_industry() {
        let p = JobPosting::from_row(&sample_row(), &ColumnMap::canonical());
        let r = p.derived_row();
        assert_eq!(r.len(), COLUMNS.len() + DERIVED_COLUMNS.len());
        assert_eq!(r[10], "20000");
        assert_eq!(r[11], "软件开发");
    }

    #[test]
    fn derived_row_leaves_absent_salary_empty() {
        let mut p = JobPosting::from_row(&sample_row(), &ColumnMap::canonical());
        p.salary_desc = s!("面议");
        assert_eq!(p.derived_row()[10], "");
    }
}
