//! Positioned content elements of a template.
use crate::deser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_TABLE_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_CELL_PADDING: f32 = 10.0;
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Currency,
    Date,
    Label,
    #[serde(other)]
    Other,
}

/// A single bound or static text field.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(deserialize_with = "deser::length")]
    pub x: f32,
    #[serde(deserialize_with = "deser::length")]
    pub y: f32,
    #[serde(
        default,
        deserialize_with = "deser::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub bind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Field {
    pub fn new(x: f32, y: f32, bind: impl Into<String>) -> Self {
        Self {
            x,
            y,
            bind: bind.into(),
            ..Default::default()
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FIELD_FONT_SIZE)
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub bind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub align: Align,
}

impl Column {
    pub fn new(bind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

/// A summary row cell. Computed cells are resolved by the renderer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FinalCell {
    Static {
        #[serde(default)]
        text: String,
    },
    Aggregate {
        function: Aggregation,
        bind: String,
    },
    Formula {
        expression: String,
    },
    Empty,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinalRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default)]
    pub cells: Vec<FinalCell>,
}

impl FinalRow {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// A data-bound table. Its height depends on the number of runtime rows.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableElement {
    #[serde(deserialize_with = "deser::length")]
    pub x: f32,
    #[serde(deserialize_with = "deser::length")]
    pub y: f32,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(
        default,
        deserialize_with = "deser::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,
    #[serde(
        default,
        deserialize_with = "deser::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub cell_padding: Option<f32>,
    #[serde(
        default,
        deserialize_with = "deser::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub final_rows: Vec<FinalRow>,
}

impl TableElement {
    pub fn new(x: f32, y: f32, columns: Vec<Column>) -> Self {
        Self {
            x,
            y,
            columns,
            ..Default::default()
        }
    }

    pub fn with_final_rows(mut self, final_rows: Vec<FinalRow>) -> Self {
        self.final_rows = final_rows;
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_TABLE_FONT_SIZE)
    }

    pub fn cell_padding(&self) -> f32 {
        self.cell_padding.unwrap_or(DEFAULT_CELL_PADDING)
    }

    pub fn border_width(&self) -> f32 {
        self.border_width.unwrap_or(DEFAULT_BORDER_WIDTH)
    }

    pub fn visible_final_rows(&self) -> impl Iterator<Item = &FinalRow> {
        self.final_rows.iter().filter(|r| r.is_visible())
    }
}

/// A table bound to a named entry of the runtime content details.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NamedTable {
    #[serde(alias = "name")]
    pub content_name: String,
    #[serde(flatten)]
    pub table: TableElement,
}

impl NamedTable {
    pub fn new(content_name: impl Into<String>, table: TableElement) -> Self {
        Self {
            content_name: content_name.into(),
            table,
        }
    }
}
