//! Editor schema composition
//!
//! Shared field groups live in [`base`], editor variants in [`individual`],
//! and [`compose`] concatenates them into the schema the renderer walks.

mod base;
mod compose;
mod individual;
mod render;

pub use base::{base_main_config_schema, secondary_info_schema, tap_action_schema};
pub use compose::{build_schema, color_field, COLOR_FIELD};
pub use individual::{individual_extra_fields, individual_schema, CONDITIONAL_STATE_HELP};
pub use render::visible_field_paths;
