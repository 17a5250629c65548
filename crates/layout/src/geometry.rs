//! Resolves the fixed bands of a template into per-page content budgets.
use crate::LayoutError;
use folio_template::{PageSettings, Sections, TemplateDefinition};
use folio_types::Size;
use serde::Serialize;

/// Padding of the page container (40 top + 40 bottom). Not configurable.
pub const CONTAINER_PADDING: f32 = 80.0;

/// Space between the last header band and the bill content band.
pub const CONTENT_BAND_GAP: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_size: Size,
    pub page_header_height: f32,
    pub bill_header_height: f32,
    pub page_footer_height: f32,
    /// Bill content height on page 1, below the bill header.
    pub available_height_first_page: f32,
    /// Bill content height on continuation pages, which omit the bill header.
    pub available_height_other_pages: f32,
}

impl PageGeometry {
    pub fn resolve(template: &TemplateDefinition) -> Result<Self, LayoutError> {
        Self::from_parts(template.page, &template.sections)
    }

    pub fn from_parts(page: PageSettings, sections: &Sections) -> Result<Self, LayoutError> {
        let page_size = page.dimensions_px();
        let page_header_height = sections.page_header_height();
        let bill_header_height = sections.bill_header_height();
        let page_footer_height = sections.page_footer_height();

        let available_height_other_pages =
            page_size.height - page_header_height - page_footer_height - CONTAINER_PADDING;
        let available_height_first_page = available_height_other_pages - bill_header_height;

        if available_height_first_page <= 0.0 {
            return Err(LayoutError::NoContentSpace {
                available: available_height_first_page,
                page_height: page_size.height,
            });
        }

        Ok(Self {
            page_size,
            page_header_height,
            bill_header_height,
            page_footer_height,
            available_height_first_page,
            available_height_other_pages,
        })
    }

    /// A geometry with explicit content heights and no header or footer bands.
    pub fn with_content_heights(first_page: f32, other_pages: f32) -> Self {
        Self {
            page_size: Size::new(0.0, other_pages + CONTAINER_PADDING),
            page_header_height: 0.0,
            bill_header_height: other_pages - first_page,
            page_footer_height: 0.0,
            available_height_first_page: first_page,
            available_height_other_pages: other_pages,
        }
    }

    /// The hard ceiling for content on a 1-based page.
    pub fn ceiling(&self, page_number: usize) -> f32 {
        if page_number <= 1 {
            self.available_height_first_page
        } else {
            self.available_height_other_pages
        }
    }

    /// Offset of the bill content band from the top of the container, which
    /// the renderer adds to every resolved Y on that page.
    pub fn content_band_top(&self, page_number: usize) -> f32 {
        let bill_header = if page_number <= 1 {
            self.bill_header_height
        } else {
            0.0
        };
        self.page_header_height + bill_header + CONTENT_BAND_GAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_template::{Orientation, PageSize, SectionSettings};

    #[test]
    fn test_a4_portrait_defaults() {
        let page = PageSettings::new(PageSize::A4, Orientation::Portrait);
        let geometry = PageGeometry::from_parts(page, &Sections::default()).unwrap();
        assert_eq!(geometry.available_height_first_page, 1123.0 - 60.0 - 200.0 - 60.0 - 80.0);
        assert_eq!(geometry.available_height_other_pages, 1123.0 - 60.0 - 60.0 - 80.0);
        assert_eq!(geometry.ceiling(1), 723.0);
        assert_eq!(geometry.ceiling(2), 923.0);
        assert_eq!(geometry.ceiling(7), 923.0);
    }

    #[test]
    fn test_a4_landscape_with_overrides() {
        let page = PageSettings::new(PageSize::A4, Orientation::Landscape);
        let sections = Sections {
            page_header: SectionSettings { height: Some(40.0) },
            bill_header: SectionSettings { height: Some(100.0) },
            page_footer: SectionSettings { height: None },
        };
        let geometry = PageGeometry::from_parts(page, &sections).unwrap();
        assert_eq!(geometry.available_height_first_page, 794.0 - 40.0 - 100.0 - 60.0 - 80.0);
        assert_eq!(geometry.available_height_other_pages, 794.0 - 40.0 - 60.0 - 80.0);
        assert_eq!(geometry.content_band_top(1), 40.0 + 100.0 + 20.0);
        assert_eq!(geometry.content_band_top(2), 40.0 + 20.0);
    }

    #[test]
    fn test_sections_taller_than_page_are_rejected() {
        let page = PageSettings::new(PageSize::A4, Orientation::Landscape);
        let sections = Sections {
            bill_header: SectionSettings { height: Some(600.0) },
            ..Default::default()
        };
        assert!(matches!(
            PageGeometry::from_parts(page, &sections),
            Err(LayoutError::NoContentSpace { .. })
        ));
    }
}
