use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::OffenseKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Incident as supplied by the registration side, before the ledger
/// assigns id, points and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRecord {
    pub student_name: String,
    pub student_id: String,
    pub offense_kind: OffenseKind,
    pub description: String,
    pub incident_date: NaiveDate,
    pub registered_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationRecord {
    pub id: RecordId,
    pub student_name: String,
    pub student_id: String,
    pub offense_kind: OffenseKind,
    pub description: String,
    pub incident_date: NaiveDate,
    /// Catalog value of `offense_kind` at registration time.
    pub points: u32,
    pub registered_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentAggregate {
    pub student_id: String,
    pub total_points: u32,
    pub record_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OffenseTally {
    pub count: usize,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskTier {
    Normal,
    Warning,
    Expelled,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Advertencia",
            Self::Expelled => "Expulsión automática",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the per-student score listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentStanding {
    pub student_id: String,
    pub student_name: String,
    pub total_points: u32,
    pub record_count: usize,
    pub tier: RiskTier,
}
