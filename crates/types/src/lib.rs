//! flow-card-editor-types: Shared data types for the flow card visual editor.
//!
//! This crate contains the pure data vocabulary of an editor schema
//! (selectors, field and group descriptors, visibility predicates) and the
//! evaluator the renderer calls on every pass. Nothing here performs I/O or
//! holds state between calls.

pub mod color;
pub mod field;
pub mod selector;
pub mod visibility;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorError};
pub use field::{FieldDescriptor, GroupDescriptor, GroupKind, Schema, SchemaEntry};
pub use selector::{
    BooleanSelector, ColorRgbSelector, EntitySelector, IconSelector, NumberMode, NumberSelector,
    Selector, TemplateSelector, TextSelector, UiActionSelector,
};
pub use visibility::{is_visible, Condition, Predicate, ValueMap};
