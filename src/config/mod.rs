//! Configuration management

mod settings;

pub use settings::{EditorSettings, SETTINGS_VERSION};
