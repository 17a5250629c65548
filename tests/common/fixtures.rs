use serde_json::{Value, json};

/// Create a minimal valid A4 portrait template with the given bill content
pub fn template_with_content(bill_content: Value) -> Value {
    json!({
        "page": { "size": "A4", "orientation": "portrait" },
        "billContent": bill_content
    })
}

/// Create a template with custom page settings and section heights
pub fn template_with_page(size: &str, orientation: &str, sections: Value, bill_content: Value) -> Value {
    json!({
        "page": { "size": size, "orientation": orientation },
        "sections": sections,
        "billContent": bill_content
    })
}

/// Create a bound text field
pub fn field(y: f32, bind: &str) -> Value {
    json!({ "x": 40, "y": y, "bind": bind })
}

/// Create a table with 24px rows (12px font, 4px padding, 1px border)
pub fn table(y: f32, columns: &[(&str, &str)]) -> Value {
    let columns: Vec<Value> = columns
        .iter()
        .map(|(bind, label)| json!({ "bind": bind, "label": label }))
        .collect();
    json!({
        "x": 0,
        "y": y,
        "fontSize": 12,
        "cellPadding": 4,
        "borderWidth": 1,
        "columns": columns
    })
}

/// Add a "Total" summary row that sums `bind`
pub fn with_total_row(mut table: Value, bind: &str) -> Value {
    table["finalRows"] = json!([{
        "cells": [
            { "type": "static", "text": "Total" },
            { "type": "aggregate", "function": "sum", "bind": bind }
        ]
    }]);
    table
}

/// Create a named table bound to a content details entry
pub fn named_table(name: &str, y: f32, columns: &[(&str, &str)]) -> Value {
    let mut t = table(y, columns);
    t["contentName"] = json!(name);
    t
}

/// Create `count` item rows
pub fn item_rows(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| json!({ "name": format!("Item {}", i), "qty": i, "price": 2.5 }))
        .collect()
}

/// Runtime data with items and optional named content
pub fn runtime_data(items: Vec<Value>, content_details: Value) -> Value {
    json!({ "items": items, "contentDetails": content_details })
}
