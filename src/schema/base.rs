//! Field groups shared by every editor variant

use flow_card_editor_types::{FieldDescriptor, GroupDescriptor, Schema, Selector};

/// Fields common to every main entity entry. Authored as a grid and
/// flattened into the variant schema by the composer.
pub fn base_main_config_schema() -> GroupDescriptor {
    GroupDescriptor::grid(Schema::from(vec![
        FieldDescriptor::new("name", "Name", Selector::text()),
        FieldDescriptor::new("icon", "Icon", Selector::icon()),
        FieldDescriptor::new("show_state", "Show State", Selector::boolean()),
    ]))
    .with_column_min_width("200px")
}

/// Fields of the `secondary_info` object
pub fn secondary_info_schema() -> Schema {
    Schema::from(vec![
        FieldDescriptor::new("entity", "Entity", Selector::entity()),
        FieldDescriptor::new("template", "Template (overrides entity)", Selector::template()),
        FieldDescriptor::new("unit_of_measurement", "Unit of Measurement", Selector::text()),
        FieldDescriptor::new("icon", "Icon", Selector::icon()),
        FieldDescriptor::new("display_zero", "Display Zero", Selector::boolean()),
        FieldDescriptor::new(
            "display_zero_tolerance",
            "Display Zero Tolerance",
            Selector::number_box(0.0, 1_000_000.0, 0.1),
        ),
        FieldDescriptor::new("decimals", "Decimals", Selector::number_box(0.0, 4.0, 1.0)),
        FieldDescriptor::new("unit_white_space", "Unit White Space", Selector::boolean())
            .with_default(true),
        FieldDescriptor::new("accept_negative", "Accept Negative", Selector::boolean()),
        FieldDescriptor::new("color_value", "Color Value", Selector::boolean()),
    ])
}

pub fn tap_action_schema() -> Schema {
    Schema::from(vec![
        FieldDescriptor::new("tap_action", "Tap Action", Selector::ui_action()),
        FieldDescriptor::new("hold_action", "Hold Action", Selector::ui_action()),
        FieldDescriptor::new("double_tap_action", "Double Tap Action", Selector::ui_action()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check_schema;

    #[test]
    fn test_shared_schemas_are_well_formed() {
        assert!(check_schema(&base_main_config_schema().schema).is_empty());
        assert!(check_schema(&secondary_info_schema()).is_empty());
        assert!(check_schema(&tap_action_schema()).is_empty());
    }

    #[test]
    fn test_base_group_is_unnamed_grid() {
        let base = base_main_config_schema();
        assert!(!base.binds_key());
        assert_eq!(base.column_min_width.as_deref(), Some("200px"));
        assert_eq!(base.schema.names(), vec!["name", "icon", "show_state"]);
    }
}
