//! Audits markup documents for the CSS classes they use and reports where each
//! class is currently styled: inline on the element, in a linked stylesheet,
//! or both.

pub mod config;
pub mod correlate;
pub mod discovery;
pub mod dom;
pub mod error;
pub mod ordered;
pub mod parser;
pub mod report;
pub mod source;
pub mod style;

pub use config::AuditConfig;
pub use correlate::{correlate, run_audit, Audit, AuditStats, ElementRecord, ElementTable};
pub use error::{AuditError, Result};
pub use report::{write_report, ClassUsage, Report, StylesheetMatch};
