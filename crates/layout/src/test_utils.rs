use folio_template::{
    BillContent, Column, Field, NamedTable, Orientation, PageSettings, PageSize, TableElement,
    TemplateDefinition,
};
use folio_types::Row;

pub fn field_at(y: f32) -> Field {
    Field::new(0.0, y, "value")
}

/// A table whose rows and header are exactly 24px tall.
pub fn table_at(y: f32) -> TableElement {
    TableElement {
        font_size: Some(12.0),
        cell_padding: Some(4.0),
        border_width: Some(1.0),
        ..TableElement::new(0.0, y, vec![Column::new("name", "Name")])
    }
}

pub fn items(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| [("name", format!("Item {}", i + 1))].into_iter().collect())
        .collect()
}

pub fn template_with(
    fields: Vec<Field>,
    row_tables: Vec<TableElement>,
    named_tables: Vec<NamedTable>,
) -> TemplateDefinition {
    TemplateDefinition {
        bill_content: BillContent {
            fields,
            row_tables,
            named_tables,
        },
        ..TemplateDefinition::new(PageSettings::new(PageSize::A4, Orientation::Portrait))
    }
}
