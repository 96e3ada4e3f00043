use serde::Serialize;

use crate::catalog::OffenseKind;
use crate::models::ViolationRecord;

/// Records whose student name or id contains `term` (case-insensitive) and
/// whose kind equals `offense`, in ledger order. An empty term matches all.
pub fn search(
    records: &[ViolationRecord],
    term: &str,
    offense: Option<OffenseKind>,
) -> Vec<ViolationRecord> {
    let needle = term.to_lowercase();

    records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.student_name.to_lowercase().contains(&needle)
                || record.student_id.to_lowercase().contains(&needle)
        })
        .filter(|record| offense.map_or(true, |kind| record.offense_kind == kind))
        .cloned()
        .collect()
}

pub fn total_points(records: &[ViolationRecord]) -> u32 {
    records.iter().map(|record| record.points).sum()
}

/// Result of a consultation search: the matching records and their summed
/// points. The sum covers only the filtered subset and is not a risk signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub record_count: usize,
    pub matching_points: u32,
    pub records: Vec<ViolationRecord>,
}

impl SearchSummary {
    pub fn new(records: Vec<ViolationRecord>) -> Self {
        Self {
            record_count: records.len(),
            matching_points: total_points(&records),
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::testing::ledger_with;

    fn sample_ledger() -> Ledger {
        ledger_with(&[
            ("Juan García", "EST001", OffenseKind::Violence),
            ("Juan García", "EST001", OffenseKind::Lateness),
            ("Kiara Patel", "EST002", OffenseKind::Cheating),
            ("Jules Moreno", "EST010", OffenseKind::Violence),
        ])
    }

    #[test]
    fn empty_term_without_filter_returns_everything() {
        let ledger = sample_ledger();
        let hits = search(ledger.all(), "", None);
        assert_eq!(hits, ledger.all().to_vec());
        assert_eq!(total_points(&hits), total_points(ledger.all()));
        assert_eq!(total_points(&hits), 30 + 5 + 20 + 30);
    }

    #[test]
    fn term_and_offense_filter_combine() {
        let ledger = sample_ledger();
        let hits = search(ledger.all(), "garcía", Some(OffenseKind::Violence));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].student_name, "Juan García");
        assert_eq!(hits[0].offense_kind, OffenseKind::Violence);
    }

    #[test]
    fn term_matches_name_or_id_case_insensitively() {
        let ledger = sample_ledger();

        let by_name = search(ledger.all(), "PATEL", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].student_id, "EST002");

        let by_id = search(ledger.all(), "est01", None);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].student_name, "Jules Moreno");
    }

    #[test]
    fn results_preserve_ledger_order() {
        let ledger = sample_ledger();
        let hits = search(ledger.all(), "", Some(OffenseKind::Violence));
        let ids: Vec<&str> = hits.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, vec!["EST001", "EST010"]);
    }

    #[test]
    fn empty_ledger_yields_empty_results() {
        let ledger = Ledger::new();
        assert!(search(ledger.all(), "", None).is_empty());
        assert!(search(ledger.all(), "garcía", Some(OffenseKind::Absence)).is_empty());
        assert_eq!(total_points(&[]), 0);
    }

    #[test]
    fn repeated_search_is_stable() {
        let ledger = sample_ledger();
        let first = ledger.search("juan", None);
        let second = ledger.search("juan", None);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_reports_matching_points() {
        let ledger = sample_ledger();
        let summary = SearchSummary::new(ledger.search("juan", None));
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.matching_points, 35);
    }
}
