use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::OffenseKind;
use crate::models::{OffenseTally, ViolationRecord};
use crate::query;
use crate::risk;

const NONE_PLACEHOLDER: &str = "Ninguno";

/// Everything the text report needs, computed once from the full ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSnapshot {
    pub generated_on: NaiveDate,
    pub total_records: usize,
    pub distinct_students: usize,
    pub total_points: u32,
    pub at_risk: Vec<(String, u32)>,
    pub warned: Vec<(String, u32)>,
    pub breakdown: BTreeMap<OffenseKind, OffenseTally>,
}

impl ReportSnapshot {
    pub fn from_records(records: &[ViolationRecord], generated_on: NaiveDate) -> Self {
        let distinct_students = records
            .iter()
            .map(|record| record.student_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            generated_on,
            total_records: records.len(),
            distinct_students,
            total_points: query::total_points(records),
            at_risk: risk::at_risk(records),
            warned: risk::warned(records),
            breakdown: risk::by_offense_kind(records),
        }
    }
}

pub fn format(snapshot: &ReportSnapshot) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "REPORTE DE FALTAS DE CONDUCTA ESTUDIANTIL");
    let _ = writeln!(output, "Generado: {}", snapshot.generated_on.format("%-d/%-m/%Y"));
    let _ = writeln!(output);

    let _ = writeln!(output, "ESTADÍSTICAS GENERALES");
    let _ = writeln!(output, "- Total de registros: {}", snapshot.total_records);
    let _ = writeln!(output, "- Total de estudiantes: {}", snapshot.distinct_students);
    let _ = writeln!(output, "- Puntos totales acumulados: {}", snapshot.total_points);
    let _ = writeln!(output);

    let _ = writeln!(output, "ESTUDIANTES EN RIESGO DE EXPULSIÓN (≥90 puntos)");
    write_student_list(&mut output, &snapshot.at_risk);
    let _ = writeln!(output);

    let _ = writeln!(output, "ESTUDIANTES EN ADVERTENCIA (60-89 puntos)");
    write_student_list(&mut output, &snapshot.warned);
    let _ = writeln!(output);

    let _ = writeln!(output, "DESGLOSE POR TIPO DE FALTA");
    if snapshot.breakdown.is_empty() {
        let _ = writeln!(output, "{NONE_PLACEHOLDER}");
    } else {
        for (kind, tally) in &snapshot.breakdown {
            let _ = writeln!(
                output,
                "- {}: {} registros ({} puntos)",
                kind.label(),
                tally.count,
                tally.points
            );
        }
    }

    output
}

/// Export file name for a report generated on `date`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("reporte_conducta_{}.txt", date.format("%Y-%m-%d"))
}

fn write_student_list(output: &mut String, students: &[(String, u32)]) {
    if students.is_empty() {
        let _ = writeln!(output, "{NONE_PLACEHOLDER}");
        return;
    }

    for (student_id, points) in students {
        let _ = writeln!(output, "- {student_id}: {points} puntos");
    }
}
