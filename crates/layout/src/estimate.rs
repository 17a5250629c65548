//! Single-pass height estimates for bill content elements.
use crate::algorithms::pagination::{EPSILON, check_fit};
use folio_template::{Field, TableElement};

/// Extra pixels per row that `border-collapse` adds in the rendered table.
pub const BORDER_COLLAPSE_ALLOWANCE: f32 = 2.0;

/// Line height multiplier applied to a field's font size.
pub const FIELD_LINE_HEIGHT: f32 = 1.5;

pub fn field_height(field: &Field) -> f32 {
    field.font_size() * FIELD_LINE_HEIGHT
}

/// Row metrics of a table bound to a concrete number of data rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableMetrics {
    pub row_height: f32,
    /// The header uses the same metrics as a data row.
    pub header_height: f32,
    /// Height of all visible summary rows together.
    pub final_rows_height: f32,
    pub row_count: usize,
}

impl TableMetrics {
    pub fn measure(table: &TableElement, row_count: usize) -> Self {
        let row_height = table.font_size()
            + 2.0 * table.cell_padding()
            + 2.0 * table.border_width()
            + BORDER_COLLAPSE_ALLOWANCE;
        let final_rows_height = row_height * table.visible_final_rows().count() as f32;
        Self {
            row_height,
            header_height: row_height,
            final_rows_height,
            row_count,
        }
    }

    /// Height of the whole table rendered in one piece.
    pub fn estimated_height(&self) -> f32 {
        self.chunk_height(self.row_count, true)
    }

    /// Height of a chunk with a repeated header and `rows` data rows.
    pub fn chunk_height(&self, rows: usize, with_final_rows: bool) -> f32 {
        let final_rows = if with_final_rows {
            self.final_rows_height
        } else {
            0.0
        };
        self.header_height + self.row_height * rows as f32 + final_rows
    }

    /// How many rows fit below a header starting at `start_y`.
    ///
    /// Never less than one, so a chunk always consumes a row even when that
    /// row overflows the page.
    ///
    /// Uses the same tolerance as [`check_fit`], so rows the fit check accepts
    /// are never split off by float noise.
    pub fn rows_fitting(&self, start_y: f32, ceiling: f32) -> usize {
        if self.row_height <= 0.0 {
            return 1;
        }
        let available_for_rows = check_fit(start_y + self.header_height, 0.0, ceiling).remaining_height;
        (((available_for_rows + EPSILON) / self.row_height).floor() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_template::{Column, FinalRow};

    #[test]
    fn test_field_height_defaults_to_14px_font() {
        assert_eq!(field_height(&Field::new(0.0, 0.0, "x")), 21.0);
        assert_eq!(field_height(&Field::new(0.0, 0.0, "x").with_font_size(20.0)), 30.0);
    }

    #[test]
    fn test_default_table_row_height() {
        let table = TableElement::new(0.0, 0.0, vec![Column::new("name", "Name")]);
        let metrics = TableMetrics::measure(&table, 3);
        // 12 + 2*10 + 2*1 + 2
        assert_eq!(metrics.row_height, 36.0);
        assert_eq!(metrics.header_height, 36.0);
        assert_eq!(metrics.estimated_height(), 36.0 * 4.0);
    }

    #[test]
    fn test_hidden_final_rows_are_not_counted() {
        let table = TableElement {
            font_size: Some(10.0),
            cell_padding: Some(5.0),
            border_width: Some(0.0),
            ..Default::default()
        }
        .with_final_rows(vec![
            FinalRow::default(),
            FinalRow {
                visible: Some(false),
                cells: vec![],
            },
        ]);
        let metrics = TableMetrics::measure(&table, 2);
        assert_eq!(metrics.row_height, 22.0);
        assert_eq!(metrics.final_rows_height, 22.0);
        assert_eq!(metrics.estimated_height(), 22.0 + 44.0 + 22.0);
    }

    #[test]
    fn test_zero_rows_keeps_header_footprint() {
        let table = TableElement::default();
        let metrics = TableMetrics::measure(&table, 0);
        assert_eq!(metrics.estimated_height(), metrics.header_height);
    }

    #[test]
    fn test_rows_fitting_floors_and_forces_one() {
        let metrics = TableMetrics {
            row_height: 24.0,
            header_height: 24.0,
            final_rows_height: 0.0,
            row_count: 40,
        };
        assert_eq!(metrics.rows_fitting(30.0, 700.0), 26);
        assert_eq!(metrics.rows_fitting(0.0, 700.0), 28);
        assert_eq!(metrics.rows_fitting(690.0, 700.0), 1);
    }

    #[test]
    fn test_rows_fitting_tolerates_fractional_ceiling() {
        let metrics = TableMetrics {
            row_height: 24.0,
            header_height: 24.0,
            final_rows_height: 0.0,
            row_count: 2,
        };
        // 47.995px left for rows is two 24px rows within the fit tolerance.
        assert_eq!(metrics.rows_fitting(0.0, 71.995), 2);
        assert_eq!(metrics.rows_fitting(0.0, 71.9), 1);
    }
}
