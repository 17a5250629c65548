// Reuse the configuration struct defined in the layout crate so both layers agree.
pub use folio_layout::PaginationConfig as PipelineConfig;
pub use folio_layout::ReanchorRule;
