use chrono::Utc;
use tracing::debug;

use crate::catalog::OffenseKind;
use crate::error::{ConductError, ConductResult};
use crate::models::{DraftRecord, RecordId, ViolationRecord};
use crate::query;

/// Append-only, insertion-ordered collection of violation records.
///
/// Records are never mutated or removed once inserted. Callers get read-only
/// access through [`Ledger::all`].
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<ViolationRecord>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a draft, assigning its id, points and creation timestamp.
    pub fn insert(&mut self, draft: DraftRecord) -> ConductResult<RecordId> {
        validate(&draft)?;

        self.next_id += 1;
        let id = RecordId(self.next_id);
        let points = draft.offense_kind.points();

        self.records.push(ViolationRecord {
            id,
            student_name: draft.student_name,
            student_id: draft.student_id,
            offense_kind: draft.offense_kind,
            description: draft.description,
            incident_date: draft.incident_date,
            points,
            registered_by: draft.registered_by,
            created_at: Utc::now(),
        });

        debug!(%id, points, "violation recorded");
        Ok(id)
    }

    pub fn all(&self) -> &[ViolationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search(&self, term: &str, offense: Option<OffenseKind>) -> Vec<ViolationRecord> {
        query::search(&self.records, term, offense)
    }
}

fn validate(draft: &DraftRecord) -> ConductResult<()> {
    let required = [
        ("student name", &draft.student_name),
        ("student id", &draft.student_id),
        ("registered by", &draft.registered_by),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConductError::invalid(format!("{field} must not be empty")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::draft;

    #[test]
    fn insert_copies_catalog_points() {
        let mut ledger = Ledger::new();
        let id = ledger
            .insert(draft("Avery Lee", "EST001", OffenseKind::Bullying))
            .unwrap();

        let records = ledger.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].points, 25);
        assert_eq!(records[0].student_id, "EST001");
    }

    #[test]
    fn ids_increase_with_insertion_order() {
        let mut ledger = Ledger::new();
        let first = ledger
            .insert(draft("Avery Lee", "EST001", OffenseKind::Lateness))
            .unwrap();
        let second = ledger
            .insert(draft("Jules Moreno", "EST002", OffenseKind::Absence))
            .unwrap();

        assert!(second > first);
        let ids: Vec<RecordId> = ledger.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut ledger = Ledger::new();

        let mut blank_name = draft("Avery Lee", "EST001", OffenseKind::Lateness);
        blank_name.student_name = "   ".to_string();
        let mut blank_id = draft("Avery Lee", "EST001", OffenseKind::Lateness);
        blank_id.student_id = String::new();
        let mut blank_registrar = draft("Avery Lee", "EST001", OffenseKind::Lateness);
        blank_registrar.registered_by = String::new();

        for bad in [blank_name, blank_id, blank_registrar] {
            let err = ledger.insert(bad).unwrap_err();
            assert!(matches!(err, ConductError::InvalidRecord { .. }));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn empty_description_is_accepted() {
        let mut ledger = Ledger::new();
        let mut record = draft("Avery Lee", "EST001", OffenseKind::Lateness);
        record.description = String::new();

        assert!(ledger.insert(record).is_ok());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn rejected_insert_does_not_consume_an_id() {
        let mut ledger = Ledger::new();
        let mut bad = draft("Avery Lee", "EST001", OffenseKind::Lateness);
        bad.student_id = String::new();
        assert!(ledger.insert(bad).is_err());

        let id = ledger
            .insert(draft("Avery Lee", "EST001", OffenseKind::Lateness))
            .unwrap();
        assert_eq!(id, RecordId(1));
    }
}
