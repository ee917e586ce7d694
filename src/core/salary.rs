// src/core/salary.rs
//
// Salary descriptors come off the site in several shapes:
//   "15-25K"          monthly, thousands
//   "7-10K·13薪"      monthly with a bonus-month annotation
//   "100-5000元/天"   daily rate
//   "20-25元/时"      hourly rate
//   "面议"            negotiable → no number at all
//
// Everything is reduced to an estimated monthly figure in yuan, or None
// when no recognized pattern is present. None means "exclude from salary
// stats" — it is never collapsed to zero.

use std::sync::LazyLock;

use regex::Regex;

const DAYS_PER_MONTH: f64 = 30.0;
const HOURS_PER_DAY: f64 = 8.0;
const WORKDAYS_PER_MONTH: f64 = 22.0;

// Patterns are immutable configuration, compiled once on first use.
static DAY_RANGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)-(\d+)元/天").unwrap());
static DAY_SINGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)元/天").unwrap());
static HOUR_RANGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)-(\d+)元/时").unwrap());
static HOUR_SINGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)元/时").unwrap());
static K_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)(?:-(\d+(?:\.\d+)?))?K").unwrap());
static PLAIN_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)(?:-(\d+(?:\.\d+)?))?").unwrap());

/// Unit-marker branches, tried in order; the first whose marker occurs in
/// the descriptor owns the string. Monthly/K notation is the default branch
/// when no marker matches.
const BRANCHES: &[(&str, fn(&str) -> Option<f64>)] =
    &[("元/天", per_day), ("元/时", per_hour)];

/// Estimated monthly salary in yuan, or None when the descriptor carries no
/// recognized numeric pattern. Total over arbitrary text; never panics,
/// never returns a negative value.
pub fn parse(raw: &str) -> Option<f64> {
    let desc = raw.trim();
    if desc.is_empty() {
        return None;
    }
    for (marker, branch) in BRANCHES {
        if desc.contains(marker) {
            return branch(desc);
        }
    }
    monthly(desc)
}

/// "100-5000元/天" → midpoint × 30. Single figure: "300元/天" → 300 × 30.
fn per_day(desc: &str) -> Option<f64> {
    if let Some((low, high)) = capture_range(&DAY_RANGE, desc) {
        return Some((low + high) / 2.0 * DAYS_PER_MONTH);
    }
    capture_single(&DAY_SINGLE, desc).map(|n| n * DAYS_PER_MONTH)
}

/// "20-25元/时" → midpoint × 8h × 22 workdays. Single figure analogous.
fn per_hour(desc: &str) -> Option<f64> {
    if let Some((low, high)) = capture_range(&HOUR_RANGE, desc) {
        return Some((low + high) / 2.0 * HOURS_PER_DAY * WORKDAYS_PER_MONTH);
    }
    capture_single(&HOUR_SINGLE, desc).map(|n| n * HOURS_PER_DAY * WORKDAYS_PER_MONTH)
}

/// Default branch: monthly, with or without the K (thousands) suffix.
/// Anything after `·` is an annotation ("·13薪" bonus months) and is
/// discarded, not used to scale the figure. Known accuracy gap, kept as-is.
fn monthly(desc: &str) -> Option<f64> {
    let base = desc.split('·').next().unwrap_or(desc);

    if let Some(caps) = K_RANGE.captures(base) {
        let low: f64 = caps[1].parse().ok()?;
        let high = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => low,
        };
        return Some((low + high) / 2.0 * 1000.0);
    }

    if let Some(caps) = PLAIN_RANGE.captures(base) {
        let low: f64 = caps[1].parse().ok()?;
        let high = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => low,
        };
        return Some((low + high) / 2.0);
    }

    None
}

fn capture_range(re: &Regex, desc: &str) -> Option<(f64, f64)> {
    let caps = re.captures(desc)?;
    let low: f64 = caps[1].parse().ok()?;
    let high: f64 = caps[2].parse().ok()?;
    Some((low, high))
}

fn capture_single(re: &Regex, desc: &str) -> Option<f64> {
    let caps = re.captures(desc)?;
    caps[1].parse().ok()
}
