//! CSV boundary standing in for the registration form.
//!
//! Rows are parsed into [`DraftRecord`]s and registered one by one, so every
//! row passes through the same validation as an interactive insert.

use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::OffenseKind;
use crate::error::{ConductError, ConductResult};
use crate::ledger::Ledger;
use crate::models::DraftRecord;

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    student_name: String,
    student_id: String,
    offense_kind: String,
    description: String,
    incident_date: NaiveDate,
    registered_by: String,
}

impl CsvRow {
    fn into_draft(self) -> ConductResult<DraftRecord> {
        Ok(DraftRecord {
            offense_kind: self.offense_kind.parse()?,
            student_name: self.student_name,
            student_id: self.student_id,
            description: self.description,
            incident_date: self.incident_date,
            registered_by: self.registered_by,
        })
    }
}

impl From<&DraftRecord> for CsvRow {
    fn from(draft: &DraftRecord) -> Self {
        Self {
            student_name: draft.student_name.clone(),
            student_id: draft.student_id.clone(),
            offense_kind: draft.offense_kind.code().to_string(),
            description: draft.description.clone(),
            incident_date: draft.incident_date,
            registered_by: draft.registered_by.clone(),
        }
    }
}

/// Registers every row of `reader` into `ledger`, stopping at the first bad row.
pub fn import_into<R: Read>(ledger: &mut Ledger, reader: R) -> ConductResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut inserted = 0usize;

    for (index, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = index + 1;
        let draft = result
            .map_err(ConductError::from)
            .and_then(CsvRow::into_draft)
            .map_err(|err| ConductError::at_row(row, err))?;

        ledger
            .insert(draft)
            .map_err(|err| ConductError::at_row(row, err))?;
        inserted += 1;
    }

    Ok(inserted)
}

/// Builds a fresh ledger from a CSV file.
pub fn load_ledger(csv_path: &Path) -> ConductResult<Ledger> {
    let file = std::fs::File::open(csv_path)?;
    let mut ledger = Ledger::new();
    let inserted = import_into(&mut ledger, file)?;

    info!(inserted, path = %csv_path.display(), "ledger loaded");
    Ok(ledger)
}

pub fn write_drafts<W: Write>(writer: W, drafts: &[DraftRecord]) -> ConductResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for draft in drafts {
        csv_writer.serialize(CsvRow::from(draft))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Sample incidents used by the `seed` command.
pub fn seed_drafts() -> Vec<DraftRecord> {
    let entries = [
        ("Juan García", "EST2024001", OffenseKind::Violence, "Pelea en el patio", (2026, 2, 2), "Prof. Ruiz"),
        ("Juan García", "EST2024001", OffenseKind::Bullying, "Burlas reiteradas a un compañero", (2026, 2, 9), "Prof. Ruiz"),
        ("Juan García", "EST2024001", OffenseKind::Cheating, "Copia en examen parcial", (2026, 2, 16), "Prof. Díaz"),
        ("Juan García", "EST2024001", OffenseKind::Disrespect, "Insulto al docente", (2026, 2, 20), "Prof. Díaz"),
        ("María López", "EST2024002", OffenseKind::Violence, "Empujón en el pasillo", (2026, 1, 28), "Coord. Vega"),
        ("María López", "EST2024002", OffenseKind::Cheating, "Plagio en ensayo", (2026, 2, 3), "Prof. Díaz"),
        ("María López", "EST2024002", OffenseKind::Absence, "Falta sin justificante", (2026, 2, 11), "Coord. Vega"),
        ("Pedro Sánchez", "EST2024003", OffenseKind::Lateness, "Tres retrasos en la semana", (2026, 1, 30), "Prof. Ruiz"),
    ];

    entries
        .into_iter()
        .filter_map(|(name, id, kind, description, (y, m, d), registered_by)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|incident_date| DraftRecord {
                student_name: name.to_string(),
                student_id: id.to_string(),
                offense_kind: kind,
                description: description.to_string(),
                incident_date,
                registered_by: registered_by.to_string(),
            })
        })
        .collect()
}
