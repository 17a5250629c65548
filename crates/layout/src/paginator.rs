//! Splits the bill content flow into pages.
//!
//! The walk visits elements in flow order with a [`WalkState`] carried by
//! value. Fields move to a new page whole; tables are cut row-wise into
//! chunks, each under a repeated header, with summary rows only on the chunk
//! that reaches the last row. Nothing is ever dropped: a row or field taller
//! than a page is placed anyway and reported as a [`LayoutWarning`].

use crate::algorithms::pagination::{check_fit, overflows};
use crate::config::{PaginationConfig, ReanchorRule};
use crate::diagnostics::LayoutWarning;
use crate::estimate::TableMetrics;
use crate::flow::{ElementRef, FlowElement, FlowSource, TableKind, total_flow_height};
use crate::geometry::PageGeometry;
use crate::output::{Page, PaginatedDocument, PaginationOutcome, PlacedField, PlacedTable};
use folio_template::{Field, NamedTable, TableElement};

/// Cursor state threaded through the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkState {
    pub current_page: usize,
    pub y_on_page: f32,
    /// Kind of the most recently placed table, if any.
    pub last_table_kind: Option<TableKind>,
}

impl WalkState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            y_on_page: 0.0,
            last_table_kind: None,
        }
    }

    fn next_page(self) -> Self {
        Self {
            current_page: self.current_page + 1,
            y_on_page: 0.0,
            ..self
        }
    }
}

impl Default for WalkState {
    fn default() -> Self {
        Self::new()
    }
}

/// A table about to be chunked, with what the walk needs to know about it.
#[derive(Clone, Copy)]
struct TableEntry<'t> {
    table: &'t TableElement,
    kind: TableKind,
    content_name: Option<&'t str>,
    metrics: TableMetrics,
}

impl<'t> TableEntry<'t> {
    fn row_table(table: &'t TableElement, metrics: TableMetrics) -> Self {
        Self {
            table,
            kind: TableKind::RowTable,
            content_name: None,
            metrics,
        }
    }

    fn named_table(table: &'t NamedTable, metrics: TableMetrics) -> Self {
        Self {
            table: &table.table,
            kind: TableKind::NamedTable,
            content_name: Some(table.content_name.as_str()),
            metrics,
        }
    }
}

pub struct Paginator<'t> {
    geometry: PageGeometry,
    config: PaginationConfig,
    pages: Vec<Page<'t>>,
    warnings: Vec<LayoutWarning>,
}

impl<'t> Paginator<'t> {
    pub fn new(geometry: PageGeometry, config: PaginationConfig) -> Self {
        Self {
            geometry,
            config,
            pages: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Lays out an ordered, gap-annotated flow.
    pub fn run(mut self, elements: &[FlowElement<'t>]) -> PaginationOutcome<'t> {
        if self.config.fast_path && self.fits_first_page(elements) {
            log::debug!(
                "Flow of {} elements fits on the first page; skipping the row walk",
                elements.len()
            );
            self.single_page(elements);
        } else {
            let end = elements
                .iter()
                .fold(WalkState::new(), |state, element| self.place(state, element));
            log::debug!(
                "Paginated {} elements onto {} pages",
                elements.len(),
                end.current_page
            );
        }
        self.finish()
    }

    fn fits_first_page(&self, elements: &[FlowElement<'t>]) -> bool {
        !check_fit(0.0, total_flow_height(elements), self.geometry.available_height_first_page)
            .should_break
    }

    fn finish(mut self) -> PaginationOutcome<'t> {
        if self.pages.is_empty() {
            self.pages.push(Page::new(1));
        }
        PaginationOutcome {
            document: PaginatedDocument::new(self.pages),
            warnings: self.warnings,
        }
    }

    // --- Fast path ---

    fn single_page(&mut self, elements: &[FlowElement<'t>]) {
        let mut cursor = 0.0;
        for element in elements {
            let resolved_y = cursor + element.gap_from_previous;
            match element.source {
                FlowSource::Field(field) => self.push_field(1, field, resolved_y),
                FlowSource::RowTable { table, metrics } => {
                    let entry = TableEntry::row_table(table, metrics);
                    self.push_chunk(1, &entry, resolved_y, 0, metrics.row_count);
                }
                FlowSource::NamedTable { table, metrics } => {
                    let entry = TableEntry::named_table(table, metrics);
                    self.push_chunk(1, &entry, resolved_y, 0, metrics.row_count);
                }
            }
            cursor = resolved_y + element.height;
        }
    }

    // --- Multi-page walk ---

    fn place(&mut self, state: WalkState, element: &FlowElement<'t>) -> WalkState {
        match element.source {
            FlowSource::Field(field) => self.place_field(state, element, field),
            FlowSource::RowTable { table, metrics } => {
                self.place_table(state, element, TableEntry::row_table(table, metrics))
            }
            FlowSource::NamedTable { table, metrics } => {
                self.place_table(state, element, TableEntry::named_table(table, metrics))
            }
        }
    }

    fn place_field(
        &mut self,
        mut state: WalkState,
        element: &FlowElement<'t>,
        field: &'t Field,
    ) -> WalkState {
        let height = element.height;
        let mut resolved_y = state.y_on_page + element.gap_from_previous;

        if check_fit(resolved_y, height, self.ceiling(&state)).should_break {
            if self.page_has_content(state.current_page) {
                state = state.next_page();
                log::debug!(
                    "Field #{} does not fit; moving to page {}",
                    element.index,
                    state.current_page
                );
            }
            resolved_y = 0.0;
        }

        self.push_field(state.current_page, field, resolved_y);
        let bottom = resolved_y + height;
        self.check_overflow(&state, element.element_ref(), bottom);
        WalkState {
            y_on_page: bottom,
            ..state
        }
    }

    fn place_table(
        &mut self,
        mut state: WalkState,
        element: &FlowElement<'t>,
        entry: TableEntry<'t>,
    ) -> WalkState {
        let metrics = entry.metrics;
        let element_ref = element.element_ref();
        let authored_y = element.nominal_y;

        if metrics.header_height + metrics.row_height > self.geometry.available_height_other_pages {
            let warning = LayoutWarning::RowTallerThanPage {
                element: element_ref,
                row_height: metrics.row_height,
                ceiling: self.geometry.available_height_other_pages,
            };
            log::warn!("{}", warning);
            self.warnings.push(warning);
        }

        let mut table_start = if self.reanchors(&state, entry.kind) {
            authored_y
        } else {
            state.y_on_page + element.gap_from_previous
        };

        // The first chunk needs its header plus one row (or the header and
        // summary rows of an empty table). Start over on a new page rather
        // than forcing it under content already placed; on an empty page,
        // start at the top like a field does.
        let first_chunk_height = if metrics.row_count == 0 {
            metrics.chunk_height(0, true)
        } else {
            metrics.chunk_height(1, metrics.row_count == 1)
        };
        if check_fit(table_start, first_chunk_height, self.ceiling(&state)).should_break {
            if self.page_has_content(state.current_page) {
                state = state.next_page();
                table_start = self.fresh_page_start(&state, entry.kind, authored_y);
                log::debug!(
                    "{:?} #{} does not fit; moving to page {}",
                    entry.kind,
                    element.index,
                    state.current_page
                );
            }
            if check_fit(table_start, first_chunk_height, self.ceiling(&state)).should_break {
                table_start = 0.0;
            }
        }

        if metrics.row_count == 0 {
            let bottom = self.push_chunk(state.current_page, &entry, table_start, 0, 0);
            self.check_overflow(&state, element_ref, bottom);
            return WalkState {
                y_on_page: bottom,
                last_table_kind: Some(entry.kind),
                ..state
            };
        }

        let mut start_row = 0;
        loop {
            let rows_this_chunk = metrics.rows_fitting(table_start, self.ceiling(&state));
            let end_row = (start_row + rows_this_chunk).min(metrics.row_count);
            let bottom = self.push_chunk(state.current_page, &entry, table_start, start_row, end_row);
            self.check_overflow(&state, element_ref, bottom);

            state.y_on_page = bottom;
            state.last_table_kind = Some(entry.kind);

            if end_row == metrics.row_count {
                return state;
            }

            state = state.next_page();
            start_row = end_row;
            table_start = self.fresh_page_start(&state, entry.kind, authored_y);
            log::debug!(
                "{:?} #{} continues at row {} on page {}",
                entry.kind,
                element.index,
                start_row,
                state.current_page
            );
        }
    }

    /// Whether a table on an untouched page takes its authored `y` instead of
    /// the carried-over gap.
    fn reanchors(&self, state: &WalkState, kind: TableKind) -> bool {
        match self.config.reanchor {
            ReanchorRule::LastTableKind => {
                state.y_on_page == 0.0
                    && state.last_table_kind.is_some_and(|last| last != kind)
            }
            ReanchorRule::MaxPreviousEnd => false,
        }
    }

    fn fresh_page_start(&self, state: &WalkState, kind: TableKind, authored_y: f32) -> f32 {
        if self.reanchors(state, kind) {
            authored_y
        } else {
            0.0
        }
    }

    fn ceiling(&self, state: &WalkState) -> f32 {
        self.geometry.ceiling(state.current_page)
    }

    fn check_overflow(&mut self, state: &WalkState, element: ElementRef, bottom: f32) {
        let ceiling = self.ceiling(state);
        if overflows(bottom, ceiling) {
            let warning = LayoutWarning::Overflow {
                page_number: state.current_page,
                element,
                bottom,
                ceiling,
            };
            log::warn!("{}", warning);
            self.warnings.push(warning);
        }
    }

    // --- Output ---

    fn page_mut(&mut self, page_number: usize) -> &mut Page<'t> {
        while self.pages.len() < page_number {
            let next = self.pages.len() + 1;
            self.pages.push(Page::new(next));
        }
        &mut self.pages[page_number - 1]
    }

    fn page_has_content(&self, page_number: usize) -> bool {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .is_some_and(|page| !page.is_empty())
    }

    fn push_field(&mut self, page_number: usize, field: &'t Field, resolved_y: f32) {
        self.page_mut(page_number)
            .fields
            .push(PlacedField { field, resolved_y });
    }

    /// Records a chunk and returns its bottom edge.
    fn push_chunk(
        &mut self,
        page_number: usize,
        entry: &TableEntry<'t>,
        resolved_y: f32,
        start_row_index: usize,
        end_row_index: usize,
    ) -> f32 {
        let include_final_rows = end_row_index == entry.metrics.row_count;
        let height = entry
            .metrics
            .chunk_height(end_row_index - start_row_index, include_final_rows);
        self.page_mut(page_number).tables.push(PlacedTable {
            table: entry.table,
            kind: entry.kind,
            resolved_y,
            start_row_index,
            end_row_index,
            content_name: entry.content_name,
            include_final_rows,
            height,
        });
        resolved_y + height
    }
}
