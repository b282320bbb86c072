//! Render-order walk of a schema for a given set of values

use flow_card_editor_types::{Schema, SchemaEntry, ValueMap};

/// Dotted paths of every field the renderer would draw, in order.
///
/// Named groups contribute a path prefix and are walked against their
/// nested object; unnamed groups are transparent.
pub fn visible_field_paths(schema: &Schema, values: &ValueMap) -> Vec<String> {
    let mut paths = Vec::new();
    walk(schema, values, "", &mut paths);
    paths
}

fn walk(schema: &Schema, values: &ValueMap, prefix: &str, paths: &mut Vec<String>) {
    for entry in schema.visible(values) {
        match entry {
            SchemaEntry::Field(field) => paths.push(join(prefix, &field.name)),
            SchemaEntry::Group(group) => {
                let nested_prefix = if group.binds_key() {
                    join(prefix, &group.name)
                } else {
                    prefix.to_string()
                };
                walk(&group.schema, &group.scope(values), &nested_prefix, paths);
            }
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
