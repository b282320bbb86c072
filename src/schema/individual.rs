//! Editor schema for an individual device entry

use flow_card_editor_types::{FieldDescriptor, GroupDescriptor, Predicate, Schema, Selector};

use super::base::{base_main_config_schema, secondary_info_schema, tap_action_schema};
use super::compose::build_schema;
use crate::localize::Localize;

/// Help text for `conditional_state`. The fallback matching it describes
/// is applied by the card at runtime, not by the editor.
pub const CONDITIONAL_STATE_HELP: &str = "Show only if conditional entity has this state \
(e.g., 'on', 'playing', '10'). If empty, defaults to 'on', 'true', 'home', or positive numbers.";

/// Fields specific to individual entries, in render order
pub fn individual_extra_fields() -> Schema {
    Schema::from(vec![
        FieldDescriptor::new("color_value", "Color Value", Selector::boolean()),
        FieldDescriptor::new("color_icon", "Color Icon", Selector::boolean()),
        FieldDescriptor::new("display_zero", "Display Zero", Selector::boolean()),
        FieldDescriptor::new(
            "display_zero_tolerance",
            "Display Zero Tolerance",
            Selector::number_box(0.0, 1_000_000.0, 0.1),
        ),
        FieldDescriptor::new("display_zero_state", "Display Zero State", Selector::boolean()),
        FieldDescriptor::new("unit_of_measurement", "Unit of Measurement", Selector::text()),
        FieldDescriptor::new("calculate_flow_rate", "Calculate Flow Rate", Selector::boolean()),
        FieldDescriptor::new("decimals", "Decimals", Selector::number_box(0.0, 4.0, 1.0)),
        FieldDescriptor::new("inverted_animation", "Invert Animation", Selector::boolean()),
        FieldDescriptor::new("show_direction", "Show Direction", Selector::boolean()),
        FieldDescriptor::new("unit_white_space", "Unit White Space", Selector::boolean())
            .with_default(true),
        FieldDescriptor::new("use_metadata", "Use Metadata", Selector::boolean()),
        FieldDescriptor::new("conditional_entity", "Conditional Entity", Selector::entity()),
        FieldDescriptor::new("conditional_state", "Conditional State (optional)", Selector::text())
            .with_description(CONDITIONAL_STATE_HELP)
            .show_if(Predicate::not_equal("conditional_entity", "")),
    ])
}

/// Schema for an individual entry; group titles are resolved through `localizer`
pub fn individual_schema(localizer: &dyn Localize) -> Schema {
    let identity = FieldDescriptor::new("entity", "Entity (Primary)", Selector::entity());
    let expandables = [
        GroupDescriptor::expandable(
            "secondary_info",
            localizer.localize("editor.secondary_info"),
            secondary_info_schema(),
        ),
        GroupDescriptor::expandable("", localizer.localize("editor.tap_action"), tap_action_schema()),
    ];

    build_schema(
        identity,
        &base_main_config_schema(),
        &individual_extra_fields(),
        &expandables,
    )
}
