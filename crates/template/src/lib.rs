//! Bill template definitions.
//!
//! A template is authored in a visual designer and stored as JSON. This crate
//! deserializes it into strongly typed elements and validates the values the
//! layout engine depends on.

pub mod definition;
pub mod element;
pub mod error;
pub mod page;
mod deser;

pub use definition::{BillContent, TemplateDefinition};
pub use element::{
    Aggregation, Align, Column, Field, FieldType, FinalCell, FinalRow, NamedTable, TableElement,
};
pub use error::TemplateError;
pub use page::{Orientation, PageSettings, PageSize, SectionSettings, Sections};
