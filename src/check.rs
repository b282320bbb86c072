//! Authoring checks for hand-written schemas
//!
//! Schemas are authored data, so these checks run from tests and the
//! `check` command rather than on every build.

use flow_card_editor_types::{FieldDescriptor, GroupDescriptor, Schema, SchemaEntry};
use std::collections::HashSet;
use thiserror::Error;

/// Label used for the top-level scope in reports
pub const ROOT_SCOPE: &str = "<root>";

/// A mistake in a schema definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthoringError {
    #[error("'{name}' is bound more than once in {scope}")]
    DuplicateName { scope: String, name: String },

    #[error("'{field}' in {scope} is shown based on '{referenced}', which is not bound in that scope")]
    DanglingPredicate {
        scope: String,
        field: String,
        referenced: String,
    },

    #[error("'{field}' in {scope} is shown based on its own value")]
    SelfReference { scope: String, field: String },

    #[error("default of '{field}' in {scope} does not fit its {selector} selector")]
    DefaultMismatch {
        scope: String,
        field: String,
        selector: &'static str,
    },
}

/// Everything bound directly in one scope (unnamed groups are transparent)
#[derive(Default)]
struct Scope<'a> {
    names: Vec<&'a str>,
    fields: Vec<&'a FieldDescriptor>,
    nested: Vec<&'a GroupDescriptor>,
}

impl<'a> Scope<'a> {
    fn collect(&mut self, schema: &'a Schema) {
        for entry in schema {
            match entry {
                SchemaEntry::Field(field) => {
                    self.names.push(&field.name);
                    self.fields.push(field);
                }
                SchemaEntry::Group(group) if group.binds_key() => {
                    self.names.push(&group.name);
                    self.nested.push(group);
                }
                SchemaEntry::Group(group) => self.collect(&group.schema),
            }
        }
    }
}

/// Inspect `schema` and every nested scope. An empty result means the
/// schema is well formed.
pub fn check_schema(schema: &Schema) -> Vec<AuthoringError> {
    let mut errors = Vec::new();
    check_scope(schema, "", &mut errors);
    errors
}

fn check_scope(schema: &Schema, path: &str, errors: &mut Vec<AuthoringError>) {
    let label = if path.is_empty() { ROOT_SCOPE } else { path };

    let mut scope = Scope::default();
    scope.collect(schema);

    let mut bound = HashSet::new();
    for name in scope.names.iter().filter(|name| !name.is_empty()) {
        if !bound.insert(*name) {
            errors.push(AuthoringError::DuplicateName {
                scope: label.to_string(),
                name: name.to_string(),
            });
        }
    }

    for field in &scope.fields {
        if let Some(predicate) = &field.visibility {
            if predicate.field == field.name {
                errors.push(AuthoringError::SelfReference {
                    scope: label.to_string(),
                    field: field.name.clone(),
                });
            } else if !bound.contains(predicate.field.as_str()) {
                errors.push(AuthoringError::DanglingPredicate {
                    scope: label.to_string(),
                    field: field.name.clone(),
                    referenced: predicate.field.clone(),
                });
            }
        }

        if let Some(default) = &field.default {
            if !field.selector.accepts(default) {
                errors.push(AuthoringError::DefaultMismatch {
                    scope: label.to_string(),
                    field: field.name.clone(),
                    selector: field.selector.type_name(),
                });
            }
        }
    }

    for group in scope.nested {
        let nested_path = if path.is_empty() {
            group.name.clone()
        } else {
            format!("{}.{}", path, group.name)
        };
        check_scope(&group.schema, &nested_path, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_card_editor_types::{Predicate, Selector};

    fn text(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, name, Selector::text())
    }

    #[test]
    fn test_well_formed_schema() {
        let mut schema = Schema::new();
        schema.push(text("conditional_entity"));
        schema.push(text("conditional_state").show_if(Predicate::not_equal("conditional_entity", "")));
        schema.push(GroupDescriptor::expandable("", "One", Schema::new()));
        schema.push(GroupDescriptor::expandable("", "Two", Schema::new()));
        assert!(check_schema(&schema).is_empty());
    }

    #[test]
    fn test_duplicate_through_unnamed_group() {
        let mut schema = Schema::new();
        schema.push(text("decimals"));
        schema.push(GroupDescriptor::grid(Schema::from(vec![text("decimals")])));

        assert_eq!(
            check_schema(&schema),
            vec![AuthoringError::DuplicateName {
                scope: ROOT_SCOPE.to_string(),
                name: "decimals".to_string(),
            }]
        );
    }

    #[test]
    fn test_named_groups_have_their_own_scope() {
        let mut schema = Schema::new();
        schema.push(text("entity"));
        schema.push(GroupDescriptor::expandable(
            "secondary_info",
            "Secondary Info",
            Schema::from(vec![text("entity"), text("entity")]),
        ));

        assert_eq!(
            check_schema(&schema),
            vec![AuthoringError::DuplicateName {
                scope: "secondary_info".to_string(),
                name: "entity".to_string(),
            }]
        );
    }

    #[test]
    fn test_dangling_and_self_reference() {
        let mut schema = Schema::new();
        schema.push(text("state").show_if(Predicate::not_equal("missing", "")));
        schema.push(text("loop").show_if(Predicate::not_equal("loop", "")));

        let errors = check_schema(&schema);
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            AuthoringError::DanglingPredicate { referenced, .. } if referenced == "missing"
        ));
        assert!(matches!(&errors[1], AuthoringError::SelfReference { field, .. } if field == "loop"));
    }

    #[test]
    fn test_predicate_does_not_see_parent_scope() {
        let mut schema = Schema::new();
        schema.push(text("conditional_entity"));
        schema.push(GroupDescriptor::expandable(
            "secondary_info",
            "Secondary Info",
            Schema::from(vec![text("state").show_if(Predicate::not_equal("conditional_entity", ""))]),
        ));

        let errors = check_schema(&schema);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "'state' in secondary_info is shown based on 'conditional_entity', which is not bound in that scope"
        );
    }

    #[test]
    fn test_default_mismatch() {
        let mut schema = Schema::new();
        schema.push(FieldDescriptor::new("unit_white_space", "Unit White Space", Selector::boolean()).with_default("yes"));
        schema.push(FieldDescriptor::new("decimals", "Decimals", Selector::number_box(0.0, 4.0, 1.0)).with_default(2));

        assert_eq!(
            check_schema(&schema),
            vec![AuthoringError::DefaultMismatch {
                scope: ROOT_SCOPE.to_string(),
                field: "unit_white_space".to_string(),
                selector: "boolean",
            }]
        );
    }

    #[test]
    fn test_color_defaults() {
        let mut schema = Schema::new();
        schema.push(FieldDescriptor::new("color", "Color", Selector::color_rgb()).with_default("#ff8000"));
        schema.push(FieldDescriptor::new("icon_color", "Icon Color", Selector::color_rgb()).with_default(vec![0, 128, 255]));
        schema.push(FieldDescriptor::new("text_color", "Text Color", Selector::color_rgb()).with_default("#+f+f+f"));

        assert_eq!(
            check_schema(&schema),
            vec![AuthoringError::DefaultMismatch {
                scope: ROOT_SCOPE.to_string(),
                field: "text_color".to_string(),
                selector: "color_rgb",
            }]
        );
    }
}
