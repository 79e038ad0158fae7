// fragment.rs - Restriction-site fragment splitting

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How restriction-site occurrences are matched against the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteMatching {
    /// Case-sensitive literal match
    #[default]
    Exact,
    /// ASCII case-insensitive match; fragments keep the input's case
    IgnoreCase,
}

impl FromStr for SiteMatching {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" | "case-sensitive" => Ok(SiteMatching::Exact),
            "ignore-case" | "case-insensitive" => Ok(SiteMatching::IgnoreCase),
            _ => Err(format!(
                "Invalid site matching mode: {}. Use: exact, ignore-case",
                s
            )),
        }
    }
}

impl SiteMatching {
    pub fn description(&self) -> &str {
        match self {
            SiteMatching::Exact => "case-sensitive",
            SiteMatching::IgnoreCase => "case-insensitive",
        }
    }
}

/// Split `sequence` at every non-overlapping occurrence of `site`, scanning left to right.
///
/// The site text is dropped. Empty fragments at the sequence ends or between adjacent sites are
/// kept, so `n` site occurrences always yield `n + 1` fragments. An empty site cuts nothing.
pub fn split_fragments<'a>(sequence: &'a str, site: &str, matching: SiteMatching) -> Vec<&'a str> {
    if site.is_empty() {
        return vec![sequence];
    }

    match matching {
        SiteMatching::Exact => sequence.split(site).collect(),
        SiteMatching::IgnoreCase => split_ignore_case(sequence, site),
    }
}

fn split_ignore_case<'a>(sequence: &'a str, site: &str) -> Vec<&'a str> {
    let haystack = sequence.as_bytes();
    let needle = site.as_bytes();
    let mut fragments = Vec::new();
    let mut fragment_start = 0;
    let mut i = 0;

    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            fragments.push(&sequence[fragment_start..i]);
            i += needle.len();
            fragment_start = i;
        } else {
            i += 1;
        }
    }
    fragments.push(&sequence[fragment_start..]);

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let fragments = split_fragments("AAAGATCCCC", "GATC", SiteMatching::Exact);
        assert_eq!(fragments, vec!["AAA", "CCC"]);
    }

    #[test]
    fn test_site_absent_returns_whole_sequence() {
        let fragments = split_fragments("ACGTACGT", "GATC", SiteMatching::Exact);
        assert_eq!(fragments, vec!["ACGTACGT"]);
    }

    #[test]
    fn test_boundary_sites_give_empty_fragments() {
        let fragments = split_fragments("GATCAAAGATC", "GATC", SiteMatching::Exact);
        assert_eq!(fragments, vec!["", "AAA", ""]);

        let fragments = split_fragments("AAGATCGATCTT", "GATC", SiteMatching::Exact);
        assert_eq!(fragments, vec!["AA", "", "TT"]);
    }

    #[test]
    fn test_non_overlapping_scan() {
        // "AAAA" in "AAAAAA" matches once at 0, then the remaining "AA" has no room
        let fragments = split_fragments("AAAAAA", "AAAA", SiteMatching::Exact);
        assert_eq!(fragments, vec!["", "AA"]);
    }

    #[test]
    fn test_exact_matching_is_case_sensitive() {
        let fragments = split_fragments("AAAgatcCCC", "GATC", SiteMatching::Exact);
        assert_eq!(fragments, vec!["AAAgatcCCC"]);
    }

    #[test]
    fn test_ignore_case_matching_keeps_input_case() {
        let fragments = split_fragments("aaagatcCCCGaTcTt", "GATC", SiteMatching::IgnoreCase);
        assert_eq!(fragments, vec!["aaa", "CCC", "Tt"]);
    }

    #[test]
    fn test_ignore_case_agrees_with_exact_on_uppercase() {
        let seq = "GATCAAGATCGATCTTTGATC";
        assert_eq!(
            split_fragments(seq, "GATC", SiteMatching::IgnoreCase),
            split_fragments(seq, "GATC", SiteMatching::Exact)
        );
    }

    #[test]
    fn test_empty_site_and_sequence() {
        assert_eq!(split_fragments("ACGT", "", SiteMatching::Exact), vec!["ACGT"]);
        assert_eq!(split_fragments("", "GATC", SiteMatching::Exact), vec![""]);
        assert_eq!(split_fragments("", "GATC", SiteMatching::IgnoreCase), vec![""]);
    }

    #[test]
    fn test_site_matching_from_str() {
        assert_eq!(SiteMatching::from_str("exact").unwrap(), SiteMatching::Exact);
        assert_eq!(
            SiteMatching::from_str("Ignore-Case").unwrap(),
            SiteMatching::IgnoreCase
        );
        assert!(SiteMatching::from_str("fuzzy").is_err());
    }
}
