//! Student conduct violation ledger with point scoring and risk tiers.
//!
//! Records enter through [`Ledger::insert`]; searching, aggregation and the
//! text report are read-only views over [`Ledger::all`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod import;
pub mod ledger;
pub mod models;
pub mod query;
pub mod report;
pub mod risk;

#[cfg(test)]
mod testing;

pub use catalog::OffenseKind;
pub use config::AppConfig;
pub use error::{ConductError, ConductResult};
pub use ledger::Ledger;
pub use models::{
    DraftRecord, OffenseTally, RecordId, RiskTier, StudentAggregate, StudentStanding,
    ViolationRecord,
};
pub use query::SearchSummary;
pub use report::ReportSnapshot;
