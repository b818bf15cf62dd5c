//! Pure domain logic for SpecForge.
//!
//! This crate holds everything that needs no I/O: the fixed spec templates,
//! the variables-schema parser, workspace/module filtering, selection
//! defaulting, and the dashboard data container with its load-version gate.
//! The backend adapter and the GUI both build on these types.

pub mod data;
pub mod filter;
pub mod row;
pub mod schema;
pub mod selection;
pub mod templates;

pub use data::{DashboardData, LoadOutcome, SeedTable};
pub use filter::filtered_modules;
pub use row::{Row, row_id, row_label, row_str};
pub use schema::{FieldType, VariableField, parse_variables_schema};
pub use selection::{Selection, set_default_selections};
pub use templates::{SpecTemplate, TemplateKey, template};
