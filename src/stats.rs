// src/stats.rs
//
// The numbers behind the dashboard. Everything here is a pure function over
// loaded postings plus their derived salaries; absent salaries are excluded
// from every mean (never counted as zero).

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use crate::specs::postings::JobPosting;

/// Headline figures for a (possibly filtered) dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub postings: usize,
    pub with_salary: usize,
    pub mean_salary: Option<f64>,
    pub companies: usize,
}

pub fn summarize(posts: &[JobPosting], salaries: &[Option<f64>]) -> Summary {
    let mut sum = 0.0;
    let mut with_salary = 0usize;
    for v in salaries.iter().flatten() {
        sum += v;
        with_salary += 1;
    }

    let companies: HashSet<&str> = posts.iter().map(|p| p.company.as_str()).collect();

    Summary {
        postings: posts.len(),
        with_salary,
        mean_salary: (with_salary > 0).then(|| sum / with_salary as f64),
        companies: companies.len(),
    }
}

/// One grouped-mean line: label, mean salary, posting count behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
    pub count: usize,
}

/// Mean salary per category, highest first. Rows without a parsed salary
/// are skipped; a category whose rows are all unparseable does not appear.
/// Ties break by label so output is deterministic.
pub fn mean_salary_by<F>(posts: &[JobPosting], salaries: &[Option<f64>], key: F) -> Vec<GroupMean>
where
    F: Fn(&JobPosting) -> &str,
{
    let mut acc: HashMap<String, (f64, usize)> = HashMap::new();
    for (post, salary) in posts.iter().zip(salaries) {
        if let Some(v) = salary {
            let slot = acc.entry(s!(key(post))).or_insert((0.0, 0));
            slot.0 += v;
            slot.1 += 1;
        }
    }

    let mut out: Vec<GroupMean> = acc
        .into_iter()
        .map(|(label, (sum, count))| GroupMean {
            label,
            mean: sum / count as f64,
            count,
        })
        .collect();
    out.sort_by(|a, b| b.mean.total_cmp(&a.mean).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Postings per category, most common first; ties break by label.
pub fn value_counts<F>(posts: &[JobPosting], key: F) -> Vec<(String, usize)>
where
    F: Fn(&JobPosting) -> &str,
{
    let mut acc: HashMap<String, usize> = HashMap::new();
    for post in posts {
        *acc.entry(s!(key(post))).or_insert(0) += 1;
    }
    sorted_counts(acc)
}

/// Token frequency across a token-list column, truncated to `top` entries.
/// Duplicates within one posting count every occurrence.
pub fn token_frequency<F>(posts: &[JobPosting], tokens: F, top: usize) -> Vec<(String, usize)>
where
    F: Fn(&JobPosting) -> Vec<String>,
{
    let mut acc: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for token in tokens(post) {
            *acc.entry(token).or_insert(0) += 1;
        }
    }
    let mut out = sorted_counts(acc);
    out.truncate(top);
    out
}

fn sorted_counts(acc: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = acc.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/* ---------------- Report rendering ---------------- */

/// Plain-text report covering what the dashboard charts show: overview,
/// grouped salary means, industry mix, top titles/skills/tags/benefits.
pub fn render_report(posts: &[JobPosting], salaries: &[Option<f64>], top: usize) -> String {
    let mut out = s!();
    let summary = summarize(posts, salaries);

    let _ = writeln!(out, "== Overview ==");
    let _ = writeln!(out, "Postings:    {}", summary.postings);
    let _ = writeln!(out, "With salary: {}", summary.with_salary);
    match summary.mean_salary {
        Some(v) => {
            let _ = writeln!(out, "Mean salary: {:.0} yuan/month", v);
        }
        None => {
            let _ = writeln!(out, "Mean salary: n/a");
        }
    }
    let _ = writeln!(out, "Companies:   {}", summary.companies);

    salary_section(&mut out, "Mean salary by degree", {
        mean_salary_by(posts, salaries, |p| p.degree.as_str())
    });
    salary_section(&mut out, "Mean salary by experience", {
        mean_salary_by(posts, salaries, |p| p.experience.as_str())
    });
    salary_section(&mut out, "Mean salary by city (top 10)", {
        let mut groups = mean_salary_by(posts, salaries, |p| p.city.as_str());
        groups.truncate(10);
        groups
    });
    salary_section(&mut out, "Mean salary by industry", {
        mean_salary_by(posts, salaries, |p| p.industry().label())
    });

    count_section(&mut out, "Postings by industry", {
        value_counts(posts, |p| p.industry().label())
    });
    count_section(&mut out, "Top job titles", {
        let mut counts = value_counts(posts, |p| p.title.as_str());
        counts.truncate(10);
        counts
    });
    count_section(
        &mut out,
        &format!("Top skills (top {top})"),
        token_frequency(posts, JobPosting::skill_tokens, top),
    );
    count_section(
        &mut out,
        &format!("Top tags (top {top})"),
        token_frequency(posts, JobPosting::tag_tokens, top),
    );
    count_section(
        &mut out,
        &format!("Top benefits (top {top})"),
        token_frequency(posts, JobPosting::benefit_tokens, top),
    );

    out
}

fn salary_section(out: &mut String, title: &str, groups: Vec<GroupMean>) {
    let _ = writeln!(out, "\n== {title} ==");
    if groups.is_empty() {
        let _ = writeln!(out, "(no salary data)");
        return;
    }
    for g in groups {
        let _ = writeln!(out, "{}  {:.0} yuan  ({} postings)", g.label, g.mean, g.count);
    }
}

fn count_section(out: &mut String, title: &str, counts: Vec<(String, usize)>) {
    let _ = writeln!(out, "\n== {title} ==");
    if counts.is_empty() {
        let _ = writeln!(out, "(no data)");
        return;
    }
    for (label, count) in counts {
        let _ = writeln!(out, "{}  {}", label, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::postings::{ColumnMap, JobPosting};

    fn posting(cells: &[&str]) -> JobPosting {
        let owned: Vec<String> = cells.iter().map(|c| s!(*c)).collect();
        let mut p = JobPosting::from_row(&owned, &ColumnMap::canonical());
        p.fill_missing();
        p
    }

    fn fixture() -> (Vec<JobPosting>, Vec<Option<f64>>) {
        let posts = vec![
            posting(&["后端开发", "15-25K", "[]", "['Python']", "3-5年", "本科", "北京", "甲", "", "[]"]),
            posting(&["后端开发", "25-35K", "[]", "['Python', 'Go']", "5-10年", "硕士", "北京", "乙", "", "[]"]),
            posting(&["客服专员", "面议", "[]", "[]", "", "大专", "成都", "丙", "", "[]"]),
        ];
        let salaries: Vec<Option<f64>> = posts.iter().map(JobPosting::monthly_salary).collect();
        (posts, salaries)
    }

    #[test]
    fn summary_excludes_absent_salaries_from_the_mean() {
        let (posts, salaries) = fixture();
        let summary = summarize(&posts, &salaries);
        assert_eq!(summary.postings, 3);
        assert_eq!(summary.with_salary, 2);
        assert_eq!(summary.mean_salary, Some(25000.0));
        assert_eq!(summary.companies, 3);
    }

    #[test]
    fn summary_of_nothing_has_no_mean() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.mean_salary, None);
        assert_eq!(summary.postings, 0);
    }

    #[test]
    fn grouped_means_sort_highest_first() {
        let (posts, salaries) = fixture();
        let by_degree = mean_salary_by(&posts, &salaries, |p| p.degree.as_str());
        assert_eq!(by_degree.len(), 2); // 大专 has no parsed salary
        assert_eq!(by_degree[0].label, "硕士");
        assert_eq!(by_degree[0].mean, 30000.0);
        assert_eq!(by_degree[1].label, "本科");
        assert_eq!(by_degree[1].count, 1);
    }

    #[test]
    fn value_counts_break_ties_by_label() {
        let (posts, _) = fixture();
        let counts = value_counts(&posts, |p| p.city.as_str());
        assert_eq!(counts, vec![(s!("北京"), 2), (s!("成都"), 1)]);
    }

    #[test]
    fn token_frequency_counts_across_postings() {
        let (posts, _) = fixture();
        let skills = token_frequency(&posts, JobPosting::skill_tokens, 10);
        assert_eq!(skills[0], (s!("Python"), 2));
        assert_eq!(skills[1], (s!("Go"), 1));
    }

    #[test]
    fn token_frequency_truncates_to_top() {
        let (posts, _) = fixture();
        let skills = token_frequency(&posts, JobPosting::skill_tokens, 1);
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn report_mentions_every_section() {
        let (posts, salaries) = fixture();
        let report = render_report(&posts, &salaries, 15);
        for heading in [
            "== Overview ==",
            "Mean salary by degree",
            "Postings by industry",
            "Top skills",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("Mean salary: 25000 yuan/month"));
    }
}
