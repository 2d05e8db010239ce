//! Core record-keeping logic: repositories, grouping, persistence and reports.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod parse;
pub mod persist;
pub mod repo;
pub mod report;
pub mod service;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::finance::{AccountSummary, Transaction, TransactionKind};
pub use model::patient::{Patient, Prescription};
pub use model::stock::{InventoryItem, StockItem};
pub use model::student::{Grade, Student};
pub use model::{Entity, RecordId, ValidationError};
pub use parse::{GradeFileError, GradeFileResult};
pub use persist::{PersistError, PersistResult, PersistentLog, ReloadOutcome};
pub use repo::group_index::GroupIndex;
pub use repo::indexed_repo::IndexedRepository;
pub use repo::vec_repo::VecRepository;
pub use repo::{RepoError, RepoResult, Repository};
pub use report::{ReportError, ReportResult};
pub use service::finance_service::FinanceService;
pub use service::grading_service::{GradeSummary, GradingError, GradingService};
pub use service::inventory_log_service::InventoryLogService;
pub use service::pharmacy_service::{LookupError, PharmacyService};
pub use service::warehouse_service::WarehouseService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
