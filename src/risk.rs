use std::collections::{BTreeMap, HashMap, HashSet};

use crate::catalog::OffenseKind;
use crate::models::{OffenseTally, RiskTier, StudentAggregate, StudentStanding, ViolationRecord};

pub const WARNING_THRESHOLD: u32 = 60;
pub const EXPULSION_THRESHOLD: u32 = 90;

pub fn by_student(records: &[ViolationRecord]) -> HashMap<String, StudentAggregate> {
    let mut totals: HashMap<String, StudentAggregate> = HashMap::new();

    for record in records {
        let entry = totals
            .entry(record.student_id.clone())
            .or_insert_with(|| StudentAggregate {
                student_id: record.student_id.clone(),
                total_points: 0,
                record_count: 0,
            });

        entry.total_points += record.points;
        entry.record_count += 1;
    }

    totals
}

pub fn classify(total_points: u32) -> RiskTier {
    match total_points {
        p if p >= EXPULSION_THRESHOLD => RiskTier::Expelled,
        p if p >= WARNING_THRESHOLD => RiskTier::Warning,
        _ => RiskTier::Normal,
    }
}

/// Students at or above the expulsion threshold, in order of first appearance.
pub fn at_risk(records: &[ViolationRecord]) -> Vec<(String, u32)> {
    students_in_tier(records, RiskTier::Expelled)
}

/// Students in the warning band, in order of first appearance.
pub fn warned(records: &[ViolationRecord]) -> Vec<(String, u32)> {
    students_in_tier(records, RiskTier::Warning)
}

/// Count and points per offense kind present in `records`, in catalog order.
pub fn by_offense_kind(records: &[ViolationRecord]) -> BTreeMap<OffenseKind, OffenseTally> {
    let mut tallies: BTreeMap<OffenseKind, OffenseTally> = BTreeMap::new();

    for record in records {
        let entry = tallies.entry(record.offense_kind).or_default();
        entry.count += 1;
        entry.points += record.points;
    }

    tallies
}

/// Every student with totals and tier, highest total first. Ties keep first
/// appearance order.
pub fn standings(records: &[ViolationRecord]) -> Vec<StudentStanding> {
    let totals = by_student(records);
    let mut values: Vec<StudentStanding> = first_appearances(records)
        .into_iter()
        .filter_map(|record| {
            totals.get(&record.student_id).map(|aggregate| StudentStanding {
                student_id: aggregate.student_id.clone(),
                student_name: record.student_name.clone(),
                total_points: aggregate.total_points,
                record_count: aggregate.record_count,
                tier: classify(aggregate.total_points),
            })
        })
        .collect();

    values.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    values
}

fn students_in_tier(records: &[ViolationRecord], tier: RiskTier) -> Vec<(String, u32)> {
    let totals = by_student(records);

    first_appearances(records)
        .into_iter()
        .filter_map(|record| totals.get(&record.student_id))
        .filter(|aggregate| classify(aggregate.total_points) == tier)
        .map(|aggregate| (aggregate.student_id.clone(), aggregate.total_points))
        .collect()
}

fn first_appearances(records: &[ViolationRecord]) -> Vec<&ViolationRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.student_id.as_str()))
        .collect()
}
