//! Non-fatal layout findings reported back to the caller.
use crate::flow::ElementRef;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutWarning {
    /// An element (or table chunk) was placed with its bottom edge below the
    /// page ceiling.
    #[serde(rename_all = "camelCase")]
    Overflow {
        page_number: usize,
        element: ElementRef,
        bottom: f32,
        ceiling: f32,
    },
    /// A single table row plus its header cannot fit even on an empty
    /// continuation page.
    #[serde(rename_all = "camelCase")]
    RowTallerThanPage {
        element: ElementRef,
        row_height: f32,
        ceiling: f32,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::Overflow {
                page_number,
                element,
                bottom,
                ceiling,
            } => write!(
                f,
                "{:?} #{} overflows page {}: bottom edge {:.2} exceeds ceiling {:.2}",
                element.kind, element.index, page_number, bottom, ceiling
            ),
            LayoutWarning::RowTallerThanPage {
                element,
                row_height,
                ceiling,
            } => write!(
                f,
                "{:?} #{} has rows of {:.2}px that cannot fit with their header in {:.2}px",
                element.kind, element.index, row_height, ceiling
            ),
        }
    }
}
