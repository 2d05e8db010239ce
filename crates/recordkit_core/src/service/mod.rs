//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repositories, group indexes, persistence and reports into
//!   one entry point per record program.
//! - Keep the CLI decoupled from storage details.

pub mod finance_service;
pub mod grading_service;
pub mod inventory_log_service;
pub mod pharmacy_service;
pub mod warehouse_service;
