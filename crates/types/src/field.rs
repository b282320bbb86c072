//! Field and group descriptors, and the ordered schema built from them

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

use crate::selector::Selector;
use crate::visibility::{is_visible, Predicate, ValueMap};

/// One configurable item bound to a configuration key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key into the configuration object
    pub name: String,
    /// Display label (raw or already localized)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Value used when the key is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub selector: Selector,
    /// Help text shown beneath the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Condition for drawing the field; absent means always drawn
    #[serde(
        rename = "show_if",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility: Option<Predicate>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, selector: Selector) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default: None,
            selector,
            description: None,
            visibility: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn show_if(mut self, predicate: Predicate) -> Self {
        self.visibility = Some(predicate);
        self
    }

    /// Whether the renderer should draw this field for `values`
    pub fn is_visible(&self, values: &ValueMap) -> bool {
        is_visible(self.visibility.as_ref(), values)
    }
}

/// Container presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Titled, collapsible section
    Expandable,
    /// Untitled column layout
    Grid,
}

/// A container holding a nested schema.
///
/// A non-empty `name` binds a nested configuration object; the empty name
/// binds nothing and its children live in the enclosing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    #[serde(rename = "type")]
    pub kind: GroupKind,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_min_width: Option<String>,
    pub schema: Schema,
}

impl GroupDescriptor {
    pub fn expandable(name: impl Into<String>, title: impl Into<String>, schema: Schema) -> Self {
        Self {
            kind: GroupKind::Expandable,
            name: name.into(),
            title: Some(title.into()),
            column_min_width: None,
            schema,
        }
    }

    /// Unnamed grid, used for field sets meant to be flattened or laid out in columns
    pub fn grid(schema: Schema) -> Self {
        Self {
            kind: GroupKind::Grid,
            name: String::new(),
            title: None,
            column_min_width: None,
            schema,
        }
    }

    pub fn with_column_min_width(mut self, width: impl Into<String>) -> Self {
        self.column_min_width = Some(width.into());
        self
    }

    /// Whether this group binds a nested configuration object
    pub fn binds_key(&self) -> bool {
        !self.name.is_empty()
    }

    /// Values the children are evaluated against
    pub fn scope<'v>(&self, values: &'v ValueMap) -> Cow<'v, ValueMap> {
        if !self.binds_key() {
            return Cow::Borrowed(values);
        }
        match values.get(&self.name).and_then(Value::as_object) {
            Some(nested) => Cow::Borrowed(nested),
            None => Cow::Owned(ValueMap::new()),
        }
    }

    /// Children to draw, given the values of the enclosing scope
    pub fn visible_children(&self, values: &ValueMap) -> Vec<&SchemaEntry> {
        self.schema.visible(&self.scope(values))
    }
}

/// One entry of a schema: a field or a nested group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaEntry {
    Group(GroupDescriptor),
    Field(FieldDescriptor),
}

impl SchemaEntry {
    pub fn name(&self) -> &str {
        match self {
            SchemaEntry::Field(field) => &field.name,
            SchemaEntry::Group(group) => &group.name,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDescriptor> {
        match self {
            SchemaEntry::Field(field) => Some(field),
            SchemaEntry::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupDescriptor> {
        match self {
            SchemaEntry::Group(group) => Some(group),
            SchemaEntry::Field(_) => None,
        }
    }

    /// Groups carry no predicate and are always drawn
    pub fn is_visible(&self, values: &ValueMap) -> bool {
        match self {
            SchemaEntry::Field(field) => field.is_visible(values),
            SchemaEntry::Group(_) => true,
        }
    }
}

impl From<FieldDescriptor> for SchemaEntry {
    fn from(field: FieldDescriptor) -> Self {
        SchemaEntry::Field(field)
    }
}

impl From<GroupDescriptor> for SchemaEntry {
    fn from(group: GroupDescriptor) -> Self {
        SchemaEntry::Group(group)
    }
}

/// Ordered description of the editor form. Order is render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<SchemaEntry>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level names in order, the empty sentinel included
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(SchemaEntry::name).collect()
    }

    /// Find a field bound in this scope, looking through unnamed groups
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.entries.iter().find_map(|entry| match entry {
            SchemaEntry::Field(field) if field.name == name => Some(field),
            SchemaEntry::Group(group) if !group.binds_key() => group.schema.field(name),
            _ => None,
        })
    }

    /// Find a group by its bound name
    pub fn group(&self, name: &str) -> Option<&GroupDescriptor> {
        self.entries
            .iter()
            .filter_map(SchemaEntry::as_group)
            .find(|group| group.name == name)
    }

    /// Entries the renderer should draw for `values`, in order
    pub fn visible(&self, values: &ValueMap) -> Vec<&SchemaEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_visible(values))
            .collect()
    }
}

impl From<Vec<SchemaEntry>> for Schema {
    fn from(entries: Vec<SchemaEntry>) -> Self {
        Self { entries }
    }
}

impl From<Vec<FieldDescriptor>> for Schema {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        fields.into_iter().map(SchemaEntry::Field).collect()
    }
}

impl FromIterator<SchemaEntry> for Schema {
    fn from_iter<I: IntoIterator<Item = SchemaEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<SchemaEntry> for Schema {
    fn extend<I: IntoIterator<Item = SchemaEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Schema {
    type Item = SchemaEntry;
    type IntoIter = std::vec::IntoIter<SchemaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a SchemaEntry;
    type IntoIter = std::slice::Iter<'a, SchemaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(json: Value) -> ValueMap {
        json.as_object().cloned().unwrap_or_default()
    }

    fn sample_schema() -> Schema {
        let mut schema = Schema::new();
        schema.push(FieldDescriptor::new("entity", "Entity", Selector::entity()));
        schema.push(GroupDescriptor::grid(Schema::from(vec![FieldDescriptor::new(
            "icon",
            "Icon",
            Selector::icon(),
        )])));
        schema.push(FieldDescriptor::new("conditional_entity", "Conditional Entity", Selector::entity()));
        schema.push(
            FieldDescriptor::new("conditional_state", "Conditional State", Selector::text())
                .show_if(Predicate::not_equal("conditional_entity", "")),
        );
        schema.push(GroupDescriptor::expandable(
            "secondary_info",
            "Secondary Info",
            Schema::from(vec![
                FieldDescriptor::new("entity", "Entity", Selector::entity()),
                FieldDescriptor::new("decimals", "Decimals", Selector::number_box(0.0, 4.0, 1.0))
                    .show_if(Predicate::not_equal("entity", "")),
            ]),
        ));
        schema
    }

    #[test]
    fn test_field_wire_shape() {
        let field = FieldDescriptor::new("conditional_state", "Conditional State (optional)", Selector::text())
            .with_description("Shown below")
            .show_if(Predicate::not_equal("conditional_entity", ""));
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "name": "conditional_state",
                "label": "Conditional State (optional)",
                "selector": {"text": {}},
                "description": "Shown below",
                "show_if": {"conditional_entity": {"$ne": ""}}
            })
        );
    }

    #[test]
    fn test_group_wire_shape() {
        let group = GroupDescriptor::expandable("", "Tap Action", Schema::new());
        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({"type": "expandable", "name": "", "title": "Tap Action", "schema": []})
        );
    }

    #[test]
    fn test_schema_deserializes_mixed_entries() {
        let schema: Schema = serde_json::from_value(json!([
            {"name": "entity", "selector": {"entity": {}}},
            {"type": "expandable", "name": "secondary_info", "title": "Secondary", "schema": [
                {"name": "unit_white_space", "default": true, "selector": {"boolean": {}}}
            ]}
        ]))
        .unwrap();

        assert_eq!(schema.names(), vec!["entity", "secondary_info"]);
        let group = schema.group("secondary_info").unwrap();
        assert_eq!(group.kind, GroupKind::Expandable);
        assert_eq!(
            group.schema.field("unit_white_space").unwrap().default,
            Some(json!(true))
        );
    }

    #[test]
    fn test_field_lookup_through_unnamed_groups() {
        let schema = sample_schema();
        assert!(schema.field("icon").is_some());
        assert!(schema.field("decimals").is_none());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_visible_skips_hidden_fields() {
        let schema = sample_schema();
        let names = |entries: Vec<&SchemaEntry>| {
            entries.into_iter().map(|e| e.name().to_string()).collect::<Vec<_>>()
        };

        assert_eq!(
            names(schema.visible(&ValueMap::new())),
            vec!["entity", "", "conditional_entity", "secondary_info"]
        );
        assert_eq!(
            names(schema.visible(&values(json!({"conditional_entity": "binary_sensor.x"})))),
            vec!["entity", "", "conditional_entity", "conditional_state", "secondary_info"]
        );
    }

    #[test]
    fn test_named_group_evaluates_nested_scope() {
        let schema = sample_schema();
        let group = schema.group("secondary_info").unwrap();

        // Top-level entity does not leak into the nested scope
        let top_only = values(json!({"entity": "sensor.grid"}));
        assert_eq!(group.visible_children(&top_only).len(), 1);

        let nested = values(json!({"secondary_info": {"entity": "sensor.cost"}}));
        assert_eq!(group.visible_children(&nested).len(), 2);
    }
}
