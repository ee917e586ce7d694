// src/core/industry.rs
//
// Keyword-priority industry tagging. Title, skills and tags are folded into
// one lowercase haystack and the groups below are tried in order; the first
// group with any substring hit wins. Matching is substring-based, not
// tokenized — "ai" inside an unrelated word counts. Accepted limitation.

use std::fmt;

/// Closed set of industry tags. `Other` is the universal fallback, so
/// classification is total over arbitrary text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Industry {
    Ai,
    Software,
    Data,
    Hardware,
    Sales,
    Education,
    Service,
    Operations,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::Ai,
        Industry::Software,
        Industry::Data,
        Industry::Hardware,
        Industry::Sales,
        Industry::Education,
        Industry::Service,
        Industry::Operations,
        Industry::Other,
    ];

    /// Display label, as it appears in the derived CSV column.
    pub fn label(self) -> &'static str {
        match self {
            Industry::Ai => "人工智能",
            Industry::Software => "软件开发",
            Industry::Data => "数据分析",
            Industry::Hardware => "硬件/嵌入式",
            Industry::Sales => "销售/市场",
            Industry::Education => "教育培训",
            Industry::Service => "客服",
            Industry::Operations => "运营",
            Industry::Other => "其他",
        }
    }

    /// Reverse lookup for CLI filters. None for labels outside the set.
    pub fn from_label(label: &str) -> Option<Industry> {
        Industry::ALL.into_iter().find(|i| i.label() == label)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword groups in priority order. AI terms outrank the generic software
/// terms on purpose: "AI Python 工程师" is AI, not software development.
const GROUPS: &[(Industry, &[&str])] = &[
    (Industry::Ai, &["ai", "机器学习", "深度学习", "nlp", "计算机视觉", "llm", "aigc"]),
    (Industry::Software, &["python", "java", "c++", "前端", "后端", "全栈", "开发", "软件"]),
    (Industry::Data, &["数据", "大数据", "数据分析", "数据挖掘"]),
    (Industry::Hardware, &["嵌入式", "硬件", "单片机", "物联网", "芯片", "ic"]),
    (Industry::Sales, &["销售", "市场", "商务", "bd"]),
    (Industry::Education, &["教育", "培训", "教师"]),
    (Industry::Service, &["客服"]),
    (Industry::Operations, &["运营"]),
];

/// Tag a posting from its title plus the raw skills/tags text. Inputs are
/// the serialized list strings as scraped; tokenization is not needed for
/// substring matching.
pub fn classify(title: &str, skills: &str, tags: &str) -> Industry {
    let haystack = join!(
        title.to_lowercase().as_str(),
        skills.to_lowercase().as_str(),
        tags.to_lowercase().as_str(),
    );

    for (industry, keywords) in GROUPS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return *industry;
        }
    }
    Industry::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_outranks_software_development() {
        // Both groups match; priority order decides.
        assert_eq!(classify("AI Python 工程师", "", ""), Industry::Ai);
    }

    #[test]
    fn classification_is_case_folded() {
        assert_eq!(classify("NLP算法实习生", "", ""), Industry::Ai);
        assert_eq!(classify("JAVA开发", "", ""), Industry::Software);
    }

    #[test]
    fn skills_and_tags_count_toward_the_match() {
        assert_eq!(classify("实习生", "['Python', 'Django']", ""), Industry::Software);
        assert_eq!(classify("专员", "", "['销售经验']"), Industry::Sales);
    }

    #[test]
    fn one_label_per_group() {
        assert_eq!(classify("数据分析师", "", ""), Industry::Data);
        assert_eq!(classify("嵌入式工程师", "", ""), Industry::Hardware);
        assert_eq!(classify("课程培训顾问", "", ""), Industry::Education);
        assert_eq!(classify("电话客服", "", ""), Industry::Service);
        assert_eq!(classify("新媒体运营", "", ""), Industry::Operations);
    }

    #[test]
    fn total_with_other_fallback() {
        assert_eq!(classify("", "", ""), Industry::Other);
        assert_eq!(classify("行政助理", "", ""), Industry::Other);
    }

    #[test]
    fn labels_round_trip() {
        for industry in Industry::ALL {
            assert_eq!(Industry::from_label(industry.label()), Some(industry));
        }
        assert_eq!(Industry::from_label("不存在"), None);
    }
}
