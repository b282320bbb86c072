//! Selector vocabulary: which input widget a field renders as
//!
//! Serialized in the renderer's externally tagged form, e.g.
//! `{"number": {"mode": "box", "min": 0.0, "max": 4.0, "step": 1.0}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;

/// Input widget for a field. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Toggle switch
    Boolean(BooleanSelector),
    /// Numeric input with optional range
    Number(NumberSelector),
    /// Free text
    Text(TextSelector),
    /// Entity picker (single or multiple)
    Entity(EntitySelector),
    /// RGB color picker
    ColorRgb(ColorRgbSelector),
    /// Icon picker
    Icon(IconSelector),
    /// Template editor
    Template(TemplateSelector),
    /// Tap/hold action editor
    #[serde(rename = "ui-action")]
    UiAction(UiActionSelector),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanSelector {}

/// How a numeric input is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberMode {
    #[default]
    Box,
    Slider,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberSelector {
    #[serde(default)]
    pub mode: NumberMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl NumberSelector {
    /// Check a number against the configured range
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSelector {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySelector {
    /// Allow picking several entities (value becomes a list)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
    /// Restrict the picker to these domains (e.g. "sensor")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRgbSelector {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconSelector {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSelector {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiActionSelector {}

impl Selector {
    pub fn boolean() -> Self {
        Selector::Boolean(BooleanSelector::default())
    }

    /// Numeric box input bounded to `min..=max`
    pub fn number_box(min: f64, max: f64, step: f64) -> Self {
        Selector::Number(NumberSelector {
            mode: NumberMode::Box,
            min: Some(min),
            max: Some(max),
            step: Some(step),
        })
    }

    pub fn text() -> Self {
        Selector::Text(TextSelector::default())
    }

    pub fn entity() -> Self {
        Selector::Entity(EntitySelector::default())
    }

    pub fn entities() -> Self {
        Selector::Entity(EntitySelector {
            multiple: true,
            ..Default::default()
        })
    }

    pub fn color_rgb() -> Self {
        Selector::ColorRgb(ColorRgbSelector::default())
    }

    pub fn icon() -> Self {
        Selector::Icon(IconSelector::default())
    }

    pub fn template() -> Self {
        Selector::Template(TemplateSelector::default())
    }

    pub fn ui_action() -> Self {
        Selector::UiAction(UiActionSelector::default())
    }

    /// Short type name as it appears in serialized schemas
    pub fn type_name(&self) -> &'static str {
        match self {
            Selector::Boolean(_) => "boolean",
            Selector::Number(_) => "number",
            Selector::Text(_) => "text",
            Selector::Entity(_) => "entity",
            Selector::ColorRgb(_) => "color_rgb",
            Selector::Icon(_) => "icon",
            Selector::Template(_) => "template",
            Selector::UiAction(_) => "ui-action",
        }
    }

    /// Whether `value` has the shape this selector produces.
    ///
    /// Only the shape implied by the widget is checked (and numeric range);
    /// this is not a general validator for configuration values.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Selector::Boolean(_) => value.is_boolean(),
            Selector::Number(number) => value.as_f64().is_some_and(|n| number.contains(n)),
            Selector::Text(_) | Selector::Icon(_) | Selector::Template(_) => value.is_string(),
            Selector::Entity(entity) if entity.multiple => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Selector::Entity(_) => value.is_string(),
            Selector::ColorRgb(_) => Color::from_value(value).is_ok(),
            Selector::UiAction(_) => value.is_object(),
        }
    }
}
