//! Ordered concatenation of field groups into one schema

use flow_card_editor_types::{
    FieldDescriptor, GroupDescriptor, GroupKind, Schema, SchemaEntry, Selector,
};
use log::debug;

/// Name of the color field every composed schema carries
pub const COLOR_FIELD: &str = "color";

pub fn color_field() -> FieldDescriptor {
    FieldDescriptor::new(COLOR_FIELD, "Color", Selector::color_rgb())
}

/// Build a schema for one editor context.
///
/// Order: `identity`, the entries of `base` flattened to the top level,
/// `extra`, the color field, then each group of `expandables` as supplied.
///
/// Each of `expandables` must be a titled [`GroupKind::Expandable`] group.
/// Callers must not bind the same non-empty name twice across the inputs;
/// this is not checked here (see [`crate::check::check_schema`]).
pub fn build_schema(
    identity: FieldDescriptor,
    base: &GroupDescriptor,
    extra: &Schema,
    expandables: &[GroupDescriptor],
) -> Schema {
    debug_assert!(
        expandables
            .iter()
            .all(|group| group.kind == GroupKind::Expandable && group.title.is_some()),
        "expandable subgroups must be titled expandable groups"
    );

    let identity_name = identity.name.clone();
    let mut schema = Schema::new();
    schema.push(identity);
    schema.extend(base.schema.iter().cloned());
    schema.extend(extra.iter().cloned());
    schema.push(color_field());
    schema.extend(expandables.iter().cloned().map(SchemaEntry::Group));

    debug!(
        "Composed schema for '{}' with {} top-level entries",
        identity_name,
        schema.len()
    );
    schema
}
