//! flow-card-editor: visual editor schema for power flow dashboard cards
//!
//! This library provides:
//! - Composition of shared and variant-specific field groups into one
//!   ordered editor schema
//! - Conditional field visibility evaluated against the live card config
//! - Localized group titles
//! - Authoring checks for hand-written schemas
//! - Editor settings

pub mod check;
pub mod config;
pub mod localize;
pub mod schema;

// Re-export commonly used types
pub use check::{check_schema, AuthoringError};
pub use config::EditorSettings;
pub use flow_card_editor_types as types;
pub use flow_card_editor_types::{
    is_visible, FieldDescriptor, GroupDescriptor, Predicate, Schema, SchemaEntry, Selector,
    ValueMap,
};
pub use localize::{Localize, Translations};
pub use schema::{build_schema, individual_schema};
