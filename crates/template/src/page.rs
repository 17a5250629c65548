//! Page geometry as declared by the template.
use crate::deser;
use folio_types::Size;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

pub const DEFAULT_PAGE_HEADER_HEIGHT: f32 = 60.0;
pub const DEFAULT_BILL_HEADER_HEIGHT: f32 = 200.0;
pub const DEFAULT_PAGE_FOOTER_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Portrait dimensions in CSS pixels at 96 DPI.
    pub fn dimensions_px(&self) -> Size {
        match self {
            PageSize::A4 => Size::new(794.0, 1123.0),
            PageSize::Letter => Size::new(816.0, 1056.0),
            PageSize::Legal => Size::new(816.0, 1344.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSettings {
    pub size: PageSize,
    pub orientation: Orientation,
}

impl PageSettings {
    pub fn new(size: PageSize, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    /// Physical page size with orientation applied.
    pub fn dimensions_px(&self) -> Size {
        let portrait = self.size.dimensions_px();
        match self.orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => portrait.transposed(),
        }
    }
}

/// Designer overrides for a fixed section band.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionSettings {
    #[serde(
        default,
        deserialize_with = "deser::optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,
}

/// Height overrides for the fixed bands. Bill content height is derived.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    #[serde(default)]
    pub page_header: SectionSettings,
    #[serde(default)]
    pub bill_header: SectionSettings,
    #[serde(default)]
    pub page_footer: SectionSettings,
}

impl Sections {
    pub fn page_header_height(&self) -> f32 {
        self.page_header.height.unwrap_or(DEFAULT_PAGE_HEADER_HEIGHT)
    }

    pub fn bill_header_height(&self) -> f32 {
        self.bill_header.height.unwrap_or(DEFAULT_BILL_HEADER_HEIGHT)
    }

    pub fn page_footer_height(&self) -> f32 {
        self.page_footer.height.unwrap_or(DEFAULT_PAGE_FOOTER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_axes() {
        let page = PageSettings::new(PageSize::A4, Orientation::Landscape);
        assert_eq!(page.dimensions_px(), Size::new(1123.0, 794.0));
        let page = PageSettings::new(PageSize::A4, Orientation::Portrait);
        assert_eq!(page.dimensions_px(), Size::new(794.0, 1123.0));
    }

    #[test]
    fn test_letter_and_legal_dimensions() {
        let letter = PageSettings::new(PageSize::Letter, Orientation::Portrait);
        assert_eq!(letter.dimensions_px(), Size::new(816.0, 1056.0));
        let legal = PageSettings::new(PageSize::Legal, Orientation::Portrait);
        assert_eq!(legal.dimensions_px(), Size::new(816.0, 1344.0));
        let legal = PageSettings::new(PageSize::Legal, Orientation::Landscape);
        assert_eq!(legal.dimensions_px(), Size::new(1344.0, 816.0));
    }

    #[test]
    fn test_page_size_parse_is_case_insensitive() {
        let page: PageSettings =
            serde_json::from_str(r#"{ "size": "letter", "orientation": "portrait" }"#).unwrap();
        assert_eq!(page.size, PageSize::Letter);
        assert!(serde_json::from_str::<PageSettings>(r#"{ "size": "B5", "orientation": "portrait" }"#).is_err());
    }

    #[test]
    fn test_section_defaults() {
        let sections: Sections =
            serde_json::from_str(r#"{ "billHeader": { "height": "150px" } }"#).unwrap();
        assert_eq!(sections.page_header_height(), 60.0);
        assert_eq!(sections.bill_header_height(), 150.0);
        assert_eq!(sections.page_footer_height(), 60.0);
    }
}
