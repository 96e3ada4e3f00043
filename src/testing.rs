use chrono::NaiveDate;

use crate::catalog::OffenseKind;
use crate::ledger::Ledger;
use crate::models::DraftRecord;

pub fn draft(name: &str, student_id: &str, kind: OffenseKind) -> DraftRecord {
    DraftRecord {
        student_name: name.to_string(),
        student_id: student_id.to_string(),
        offense_kind: kind,
        description: "reported in class".to_string(),
        incident_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        registered_by: "Prof. Ruiz".to_string(),
    }
}

pub fn ledger_with(entries: &[(&str, &str, OffenseKind)]) -> Ledger {
    let mut ledger = Ledger::new();
    for (name, id, kind) in entries {
        ledger.insert(draft(name, id, *kind)).unwrap();
    }
    ledger
}
