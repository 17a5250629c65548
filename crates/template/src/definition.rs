use crate::element::{Field, NamedTable, TableElement};
use crate::error::TemplateError;
use crate::page::{PageSettings, Sections};
use serde::{Deserialize, Serialize};

/// The variable-height flow between the bill header and the footer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillContent {
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub row_tables: Vec<TableElement>,
    #[serde(default)]
    pub named_tables: Vec<NamedTable>,
}

/// A complete bill template as produced by the designer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    pub page: PageSettings,
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub page_header: Vec<Field>,
    /// Bill header fields, printed on the first page only.
    #[serde(default)]
    pub header: Vec<Field>,
    #[serde(default)]
    pub bill_content: BillContent,
    #[serde(default)]
    pub page_footer: Vec<Field>,
    #[serde(default)]
    pub bill_footer: Vec<Field>,
}

impl TemplateDefinition {
    pub fn new(page: PageSettings) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Parses and validates a template document.
    pub fn from_json(source: &str) -> Result<Self, TemplateError> {
        let template: TemplateDefinition = serde_json::from_str(source)?;
        template.validate()?;
        log::debug!(
            "Loaded {} {:?} template: {} fields, {} row tables, {} named tables",
            template.page.size.as_str(),
            template.page.orientation,
            template.bill_content.fields.len(),
            template.bill_content.row_tables.len(),
            template.bill_content.named_tables.len()
        );
        Ok(template)
    }

    /// Checks the values serde cannot: ranges and finiteness.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let sections = [
            ("sections.pageHeader.height", self.sections.page_header.height),
            ("sections.billHeader.height", self.sections.bill_header.height),
            ("sections.pageFooter.height", self.sections.page_footer.height),
        ];
        for (path, height) in sections {
            if let Some(h) = height {
                non_negative(path, h)?;
            }
        }

        let field_groups = [
            ("pageHeader", &self.page_header),
            ("header", &self.header),
            ("billContent.fields", &self.bill_content.fields),
            ("pageFooter", &self.page_footer),
            ("billFooter", &self.bill_footer),
        ];
        for (group, fields) in field_groups {
            for (i, field) in fields.iter().enumerate() {
                validate_field(&format!("{}[{}]", group, i), field)?;
            }
        }

        for (i, table) in self.bill_content.row_tables.iter().enumerate() {
            validate_table(&format!("billContent.rowTables[{}]", i), table)?;
        }
        for (i, named) in self.bill_content.named_tables.iter().enumerate() {
            let path = format!("billContent.namedTables[{}]", i);
            if named.content_name.trim().is_empty() {
                return Err(TemplateError::invalid(
                    format!("{}.contentName", path),
                    "must name a content details entry",
                ));
            }
            validate_table(&path, &named.table)?;
        }
        Ok(())
    }
}

fn non_negative(path: &str, value: f32) -> Result<(), TemplateError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TemplateError::invalid(
            path,
            format!("must be a finite, non-negative number (got {})", value),
        ))
    }
}

fn positive(path: &str, value: f32) -> Result<(), TemplateError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TemplateError::invalid(
            path,
            format!("must be a finite, positive number (got {})", value),
        ))
    }
}

fn validate_field(path: &str, field: &Field) -> Result<(), TemplateError> {
    non_negative(&format!("{}.x", path), field.x)?;
    non_negative(&format!("{}.y", path), field.y)?;
    if let Some(size) = field.font_size {
        positive(&format!("{}.fontSize", path), size)?;
    }
    Ok(())
}

fn validate_table(path: &str, table: &TableElement) -> Result<(), TemplateError> {
    non_negative(&format!("{}.x", path), table.x)?;
    non_negative(&format!("{}.y", path), table.y)?;
    if let Some(size) = table.font_size {
        positive(&format!("{}.fontSize", path), size)?;
    }
    if let Some(padding) = table.cell_padding {
        non_negative(&format!("{}.cellPadding", path), padding)?;
    }
    if let Some(border) = table.border_width {
        non_negative(&format!("{}.borderWidth", path), border)?;
    }
    Ok(())
}
