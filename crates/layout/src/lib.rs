use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "Section heights leave {available:.2}px for bill content on the first page of a {page_height:.2}px page."
    )]
    NoContentSpace { available: f32, page_height: f32 },
}

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod estimate;
pub mod flow;
pub mod geometry;
pub mod output;
pub mod paginator;

pub use self::config::{PaginationConfig, ReanchorRule};
pub use self::diagnostics::LayoutWarning;
pub use self::estimate::TableMetrics;
pub use self::flow::{ElementKind, ElementRef, FlowElement, FlowSource, TableKind, build_flow};
pub use self::geometry::PageGeometry;
pub use self::output::{Page, PaginatedDocument, PaginationOutcome, PlacedField, PlacedTable};
pub use self::paginator::{Paginator, WalkState};

use folio_template::TemplateDefinition;
use folio_types::RuntimeData;

/// Paginates a template's bill content against one set of runtime data.
///
/// The only failure is a geometry with no room for bill content; once the
/// page budgets resolve, every element and row is placed somewhere.
pub fn paginate<'t>(
    template: &'t TemplateDefinition,
    data: &RuntimeData,
    config: PaginationConfig,
) -> Result<PaginationOutcome<'t>, LayoutError> {
    let geometry = PageGeometry::resolve(template)?;
    Ok(paginate_with_geometry(template, data, geometry, config))
}

/// Paginates against an explicit geometry instead of the template's own.
pub fn paginate_with_geometry<'t>(
    template: &'t TemplateDefinition,
    data: &RuntimeData,
    geometry: PageGeometry,
    config: PaginationConfig,
) -> PaginationOutcome<'t> {
    let flow = build_flow(template, data);
    Paginator::new(geometry, config).run(&flow)
}

#[cfg(test)]
mod test_utils;
