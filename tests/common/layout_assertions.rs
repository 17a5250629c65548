use serde_json::Value;

/// All chunks of the table of `kind` authored at `y`, as
/// `(page_number, start, end, include_final_rows)`.
pub fn table_chunks(layout: &Value, kind: &str, y: f64) -> Vec<(u64, u64, u64, bool)> {
    let mut chunks = Vec::new();
    for page in layout["pages"].as_array().into_iter().flatten() {
        let page_number = page["pageNumber"].as_u64().unwrap_or(0);
        for chunk in page["tables"].as_array().into_iter().flatten() {
            if chunk["type"] == kind && chunk["table"]["y"].as_f64() == Some(y) {
                chunks.push((
                    page_number,
                    chunk["startRowIndex"].as_u64().unwrap_or(0),
                    chunk["endRowIndex"].as_u64().unwrap_or(0),
                    chunk["includeFinalRows"].as_bool().unwrap_or(false),
                ));
            }
        }
    }
    chunks
}

/// Asserts that chunk row ranges tile `0..row_count` with a single summary
/// attachment on the last chunk.
pub fn assert_rows_complete(chunks: &[(u64, u64, u64, bool)], row_count: u64) {
    assert!(!chunks.is_empty(), "table not found in layout");
    let mut next = 0;
    for (i, (_, start, end, finals)) in chunks.iter().enumerate() {
        assert_eq!(*start, next, "row ranges are not contiguous: {:?}", chunks);
        assert!(end >= start);
        assert_eq!(*finals, i == chunks.len() - 1, "summary rows misplaced: {:?}", chunks);
        next = *end;
    }
    assert_eq!(next, row_count, "rows missing from layout: {:?}", chunks);
}
