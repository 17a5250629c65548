//! Builds the ordered, gap-annotated element flow of the bill content band.
use crate::estimate::{TableMetrics, field_height};
use folio_template::{Field, NamedTable, TableElement, TemplateDefinition};
use folio_types::{RuntimeData, TableBinding};
use itertools::Itertools;
use serde::Serialize;

/// The two table flavours, distinguished by where their rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableKind {
    RowTable,
    NamedTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Field,
    RowTable,
    NamedTable,
}

impl From<TableKind> for ElementKind {
    fn from(kind: TableKind) -> Self {
        match kind {
            TableKind::RowTable => ElementKind::RowTable,
            TableKind::NamedTable => ElementKind::NamedTable,
        }
    }
}

/// The template element behind a flow entry.
#[derive(Debug, Clone, Copy)]
pub enum FlowSource<'t> {
    Field(&'t Field),
    RowTable {
        table: &'t TableElement,
        metrics: TableMetrics,
    },
    NamedTable {
        table: &'t NamedTable,
        metrics: TableMetrics,
    },
}

impl<'t> FlowSource<'t> {
    pub fn kind(&self) -> ElementKind {
        match self {
            FlowSource::Field(_) => ElementKind::Field,
            FlowSource::RowTable { .. } => ElementKind::RowTable,
            FlowSource::NamedTable { .. } => ElementKind::NamedTable,
        }
    }

    pub fn nominal_y(&self) -> f32 {
        match self {
            FlowSource::Field(field) => field.y,
            FlowSource::RowTable { table, .. } => table.y,
            FlowSource::NamedTable { table, .. } => table.table.y,
        }
    }

    pub fn estimated_height(&self) -> f32 {
        match self {
            FlowSource::Field(field) => field_height(field),
            FlowSource::RowTable { metrics, .. } | FlowSource::NamedTable { metrics, .. } => {
                metrics.estimated_height()
            }
        }
    }
}

/// Identifies an element by its collection and authoring position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRef {
    pub kind: ElementKind,
    pub index: usize,
    pub nominal_y: f32,
}

#[derive(Debug, Clone)]
pub struct FlowElement<'t> {
    pub source: FlowSource<'t>,
    /// Position within the element's own collection in the template.
    pub index: usize,
    pub nominal_y: f32,
    pub gap_from_previous: f32,
    pub height: f32,
}

impl<'t> FlowElement<'t> {
    fn new(source: FlowSource<'t>, index: usize) -> Self {
        Self {
            nominal_y: source.nominal_y(),
            height: source.estimated_height(),
            gap_from_previous: 0.0,
            source,
            index,
        }
    }

    pub fn element_ref(&self) -> ElementRef {
        ElementRef {
            kind: self.source.kind(),
            index: self.index,
            nominal_y: self.nominal_y,
        }
    }

    /// Bottom edge used as the reference for the next element's gap.
    fn gap_reference_bottom(&self) -> f32 {
        self.nominal_y + self.gap_from_previous + self.height
    }
}

/// Collects every visible bill content element, sorted by nominal `y`, with
/// gaps computed against the previous element's bottom edge.
pub fn build_flow<'t>(template: &'t TemplateDefinition, data: &RuntimeData) -> Vec<FlowElement<'t>> {
    let content = &template.bill_content;

    let fields = content
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_visible())
        .map(|(i, field)| FlowElement::new(FlowSource::Field(field), i));

    let row_tables = content.row_tables.iter().enumerate().map(|(i, table)| {
        let rows = data.rows_for(TableBinding::Items).len();
        let metrics = TableMetrics::measure(table, rows);
        FlowElement::new(FlowSource::RowTable { table, metrics }, i)
    });

    let named_tables = content.named_tables.iter().enumerate().map(|(i, table)| {
        let rows = data
            .rows_for(TableBinding::Named(&table.content_name))
            .len();
        if !data.content_details.contains_key(&table.content_name) {
            log::debug!(
                "No content details for named table '{}'; treating it as empty",
                table.content_name
            );
        }
        let metrics = TableMetrics::measure(&table.table, rows);
        FlowElement::new(FlowSource::NamedTable { table, metrics }, i)
    });

    // `sorted_by` is stable, so equal positions keep authoring order.
    let mut elements: Vec<FlowElement<'t>> = fields
        .chain(row_tables)
        .chain(named_tables)
        .sorted_by(|a, b| a.nominal_y.total_cmp(&b.nominal_y))
        .collect();

    assign_gaps(&mut elements);
    elements
}

/// Fills `gap_from_previous`: the first element keeps its nominal `y`, every
/// later one the non-negative distance below the previous reference bottom.
pub fn assign_gaps(elements: &mut [FlowElement<'_>]) {
    let mut previous_bottom: Option<f32> = None;
    for element in elements.iter_mut() {
        element.gap_from_previous = match previous_bottom {
            None => element.nominal_y,
            Some(bottom) => (element.nominal_y - bottom).max(0.0),
        };
        previous_bottom = Some(element.gap_reference_bottom());
    }
}

/// Cumulative end offset of the flow laid out without page breaks.
pub fn total_flow_height(elements: &[FlowElement<'_>]) -> f32 {
    elements
        .iter()
        .map(|e| e.gap_from_previous + e.height)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{field_at, items, table_at, template_with};
    use folio_template::NamedTable;

    #[test]
    fn test_elements_sorted_by_nominal_y() {
        let template = template_with(
            vec![field_at(300.0), field_at(0.0)],
            vec![table_at(100.0)],
            vec![NamedTable::new("payments", table_at(200.0))],
        );
        let flow = build_flow(&template, &RuntimeData::new(items(2)));
        let order: Vec<_> = flow.iter().map(|e| (e.source.kind(), e.nominal_y)).collect();
        assert_eq!(
            order,
            vec![
                (ElementKind::Field, 0.0),
                (ElementKind::RowTable, 100.0),
                (ElementKind::NamedTable, 200.0),
                (ElementKind::Field, 300.0),
            ]
        );
    }

    #[test]
    fn test_ties_keep_authoring_order() {
        let template = template_with(
            vec![field_at(50.0), field_at(50.0)],
            vec![table_at(50.0)],
            vec![],
        );
        let flow = build_flow(&template, &RuntimeData::default());
        let kinds: Vec<_> = flow.iter().map(|e| (e.source.kind(), e.index)).collect();
        assert_eq!(
            kinds,
            vec![
                (ElementKind::Field, 0),
                (ElementKind::Field, 1),
                (ElementKind::RowTable, 0),
            ]
        );
    }

    #[test]
    fn test_gaps_are_measured_from_previous_bottom() {
        // Field heights are 21px.
        let template = template_with(
            vec![field_at(0.0), field_at(30.0), field_at(40.0)],
            vec![],
            vec![],
        );
        let flow = build_flow(&template, &RuntimeData::default());
        let gaps: Vec<f32> = flow.iter().map(|e| e.gap_from_previous).collect();
        // 30 - (0 + 0 + 21) = 9; 40 - (30 + 9 + 21) < 0, so 0.
        assert_eq!(gaps, vec![0.0, 9.0, 0.0]);
    }

    #[test]
    fn test_first_gap_is_nominal_y() {
        let template = template_with(vec![field_at(25.0)], vec![], vec![]);
        let flow = build_flow(&template, &RuntimeData::default());
        assert_eq!(flow[0].gap_from_previous, 25.0);
        assert_eq!(total_flow_height(&flow), 46.0);
    }

    #[test]
    fn test_hidden_fields_are_skipped() {
        let mut hidden = field_at(10.0);
        hidden.visible = Some(false);
        let template = template_with(vec![hidden, field_at(20.0)], vec![], vec![]);
        let flow = build_flow(&template, &RuntimeData::default());
        assert_eq!(flow.len(), 1);
        assert_eq!(flow[0].index, 1);
    }

    #[test]
    fn test_named_table_binds_its_content_rows() {
        let template = template_with(
            vec![],
            vec![table_at(0.0)],
            vec![
                NamedTable::new("payments", table_at(100.0)),
                NamedTable::new("missing", table_at(200.0)),
            ],
        );
        let data = RuntimeData::new(items(5)).with_content("payments", items(2));
        let flow = build_flow(&template, &data);
        let counts: Vec<usize> = flow
            .iter()
            .map(|e| match e.source {
                FlowSource::RowTable { metrics, .. } | FlowSource::NamedTable { metrics, .. } => {
                    metrics.row_count
                }
                FlowSource::Field(_) => unreachable!(),
            })
            .collect();
        assert_eq!(counts, vec![5, 2, 0]);
    }
}
