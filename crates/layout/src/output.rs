//! Output types from the paginator.
//!
//! This module contains the page layout handed to the renderer: per page, the
//! fields and table chunks with their resolved offsets inside the bill
//! content band.

use crate::diagnostics::LayoutWarning;
use crate::flow::TableKind;
use folio_template::{Field, TableElement};
use folio_types::{Row, RuntimeData, TableBinding};
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedField<'t> {
    pub field: &'t Field,
    pub resolved_y: f32,
}

/// A contiguous run of rows of one table, rendered under a repeated header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTable<'t> {
    pub table: &'t TableElement,
    #[serde(rename = "type")]
    pub kind: TableKind,
    pub resolved_y: f32,
    pub start_row_index: usize,
    pub end_row_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_name: Option<&'t str>,
    /// Set only on the chunk that reaches the table's last row.
    pub include_final_rows: bool,
    /// Estimated height of this chunk, header and summary rows included.
    pub height: f32,
}

impl<'t> PlacedTable<'t> {
    pub fn row_range(&self) -> Range<usize> {
        self.start_row_index..self.end_row_index
    }

    pub fn binding(&self) -> TableBinding<'t> {
        match self.content_name {
            Some(name) => TableBinding::Named(name),
            None => TableBinding::Items,
        }
    }

    /// The data rows this chunk renders.
    pub fn rows<'d>(&self, data: &'d RuntimeData) -> &'d [Row] {
        let rows = data.rows_for(self.binding());
        let end = self.end_row_index.min(rows.len());
        let start = self.start_row_index.min(end);
        &rows[start..end]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'t> {
    pub page_number: usize,
    pub fields: Vec<PlacedField<'t>>,
    pub tables: Vec<PlacedTable<'t>>,
}

impl<'t> Page<'t> {
    pub fn new(page_number: usize) -> Self {
        Self {
            page_number,
            fields: Vec::new(),
            tables: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.tables.is_empty()
    }
}

/// The page layout of one bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDocument<'t> {
    pub pages: Vec<Page<'t>>,
    pub total_pages: usize,
}

impl<'t> PaginatedDocument<'t> {
    pub fn new(pages: Vec<Page<'t>>) -> Self {
        let total_pages = pages.iter().map(|p| p.page_number).max().unwrap_or(0);
        Self { pages, total_pages }
    }

    pub fn page(&self, page_number: usize) -> Option<&Page<'t>> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
    }

    /// All chunks of one table element, in page order.
    pub fn chunks_of<'a>(
        &'a self,
        table: &'t TableElement,
    ) -> impl Iterator<Item = (usize, &'a PlacedTable<'t>)> + 'a {
        self.pages.iter().flat_map(move |page| {
            page.tables
                .iter()
                .filter(move |chunk| std::ptr::eq(chunk.table, table))
                .map(move |chunk| (page.page_number, chunk))
        })
    }
}

/// A finished pagination run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOutcome<'t> {
    #[serde(flatten)]
    pub document: PaginatedDocument<'t>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LayoutWarning>,
}
