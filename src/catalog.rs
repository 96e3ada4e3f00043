//! Fixed catalog of offense kinds and their point values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConductError;

/// Kind of conduct violation. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffenseKind {
    Violence,
    Bullying,
    Cheating,
    Disrespect,
    Absence,
    Lateness,
}

impl OffenseKind {
    pub const ALL: [OffenseKind; 6] = [
        OffenseKind::Violence,
        OffenseKind::Bullying,
        OffenseKind::Cheating,
        OffenseKind::Disrespect,
        OffenseKind::Absence,
        OffenseKind::Lateness,
    ];

    /// Lowercase code used on the command line and in CSV files.
    pub fn code(self) -> &'static str {
        match self {
            Self::Violence => "violence",
            Self::Bullying => "bullying",
            Self::Cheating => "cheating",
            Self::Disrespect => "disrespect",
            Self::Absence => "absence",
            Self::Lateness => "lateness",
        }
    }

    /// Display label shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Violence => "Violencia",
            Self::Bullying => "Acoso/Bullying",
            Self::Cheating => "Deshonestidad Académica",
            Self::Disrespect => "Falta de Respeto",
            Self::Absence => "Inasistencia Injustificada",
            Self::Lateness => "Retrasos Reiterados",
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Self::Violence => 30,
            Self::Bullying => 25,
            Self::Cheating => 20,
            Self::Disrespect => 15,
            Self::Absence => 10,
            Self::Lateness => 5,
        }
    }
}

impl fmt::Display for OffenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OffenseKind {
    type Err = ConductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| ConductError::invalid(format!("unknown offense kind '{}'", s.trim())))
    }
}
