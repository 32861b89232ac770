//! `[hero]` props: the content an editor configures for one hero.
//!
//! Keys are camelCase, identical to the page-builder schema, so the same
//! struct deserializes from `hero.toml` and from a JSON props export.
//!
//! ```toml
//! [hero]
//! titleTag = "h1"
//! titleText = "Summer Sale"
//! ctaText = "Shop now"
//! ctaLink = "/sale"
//! desktopImage = "/img/hero-desktop.jpg"
//! desktopSize = "1680 510"
//! mobileImage = "/img/hero-mobile.jpg"
//! mobileSize = "450 137"
//! maxHeight = "60vh"
//! ```

use serde::{Deserialize, Serialize};

use super::size::ImageDimensions;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::markup::html::is_valid_tag_name;

/// Tag wrapping the title when `titleTag` is blank.
pub const DEFAULT_TITLE_TAG: &str = "div";

/// Allowed relative difference between desktop and mobile aspect ratios.
const ASPECT_TOLERANCE: f64 = 0.01;

/// Declarative input of one hero instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    /// Element wrapping the title (h1, h2...), `div` when blank.
    pub title_tag: String,
    pub title_text: String,
    pub subtitle_text: String,
    pub cta_text: String,
    /// Relative or absolute path.
    pub cta_link: String,
    pub new_tab: bool,
    pub alt_text: String,
    pub desktop_image: String,
    pub mobile_image: String,
    /// `"WIDTH HEIGHT"`, e.g. `"1680 510"`.
    pub desktop_size: String,
    /// `"WIDTH HEIGHT"`, e.g. `"450 137"`.
    pub mobile_size: String,
    /// CSS `max-height` value, e.g. `60vh`.
    pub max_height: String,
    /// Defer loading until scrolled into view. Off for above-the-fold heroes.
    pub lazy_loading: bool,
    /// Suffix appended to every class token.
    pub block_class: String,
}

pub struct HeroConfigFields {
    pub title_tag: FieldPath,
    pub title_text: FieldPath,
    pub subtitle_text: FieldPath,
    pub cta_text: FieldPath,
    pub cta_link: FieldPath,
    pub new_tab: FieldPath,
    pub alt_text: FieldPath,
    pub desktop_image: FieldPath,
    pub mobile_image: FieldPath,
    pub desktop_size: FieldPath,
    pub mobile_size: FieldPath,
    pub max_height: FieldPath,
    pub lazy_loading: FieldPath,
    pub block_class: FieldPath,
}

impl HeroConfig {
    pub const FIELDS: HeroConfigFields = HeroConfigFields {
        title_tag: FieldPath::new("hero.titleTag"),
        title_text: FieldPath::new("hero.titleText"),
        subtitle_text: FieldPath::new("hero.subtitleText"),
        cta_text: FieldPath::new("hero.ctaText"),
        cta_link: FieldPath::new("hero.ctaLink"),
        new_tab: FieldPath::new("hero.newTab"),
        alt_text: FieldPath::new("hero.altText"),
        desktop_image: FieldPath::new("hero.desktopImage"),
        mobile_image: FieldPath::new("hero.mobileImage"),
        desktop_size: FieldPath::new("hero.desktopSize"),
        mobile_size: FieldPath::new("hero.mobileSize"),
        max_height: FieldPath::new("hero.maxHeight"),
        lazy_loading: FieldPath::new("hero.lazyLoading"),
        block_class: FieldPath::new("hero.blockClass"),
    };

    /// Lower-cased `titleTag`, or [`DEFAULT_TITLE_TAG`] when blank or not an
    /// element name.
    pub fn title_element(&self) -> String {
        let tag = self.title_tag.to_lowercase();
        if is_valid_tag_name(&tag) {
            tag
        } else {
            DEFAULT_TITLE_TAG.to_string()
        }
    }

    /// The whole hero becomes the link when there is a destination but no label.
    pub fn wraps_in_link(&self) -> bool {
        self.cta_text.is_empty() && !self.cta_link.is_empty()
    }

    /// Link `target`, present only for new-tab links.
    pub fn link_target(&self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }

    /// Validate hero props.
    ///
    /// # Checks
    /// - both image sources are set
    /// - both sizes parse to two finite numbers
    /// - desktop and mobile aspect ratios match (warning)
    /// - `titleTag` is a plausible element name (warning)
    /// - `ctaText` without `ctaLink` (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.desktop_image, &self.desktop_image),
            (Self::FIELDS.mobile_image, &self.mobile_image),
        ] {
            if value.trim().is_empty() {
                diag.error_with_hint(
                    field,
                    format!("{field} is required"),
                    "set an image URL, e.g. \"/img/hero.jpg\"",
                );
            }
        }

        let desktop = Self::check_size(Self::FIELDS.desktop_size, &self.desktop_size, "1680 510", diag);
        let mobile = Self::check_size(Self::FIELDS.mobile_size, &self.mobile_size, "450 137", diag);

        if let (Some(desktop), Some(mobile)) = (desktop, mobile) {
            let (d, m) = (desktop.aspect_ratio(), mobile.aspect_ratio());
            if ((d - m) / d).abs() > ASPECT_TOLERANCE {
                diag.warn(
                    Self::FIELDS.mobile_size,
                    format!(
                        "aspect ratio {:.3} differs from desktop {:.3}, layout will shift between breakpoints",
                        m, d
                    ),
                );
            }
        }

        if !self.title_tag.is_empty() && !is_valid_tag_name(&self.title_tag) {
            diag.warn(
                Self::FIELDS.title_tag,
                format!(
                    "'{}' is not a valid element name, falling back to {DEFAULT_TITLE_TAG}",
                    self.title_tag
                ),
            );
        }

        if !self.cta_text.is_empty() && self.cta_link.is_empty() {
            diag.warn(
                Self::FIELDS.cta_link,
                format!("{} is set but the link has no destination", Self::FIELDS.cta_text),
            );
        }
    }

    /// Returns the parsed size when it is usable for layout.
    fn check_size(
        field: FieldPath,
        size: &str,
        example: &str,
        diag: &mut ConfigDiagnostics,
    ) -> Option<ImageDimensions> {
        let dims = ImageDimensions::parse(size);
        if dims.is_finite() && dims.width > 0.0 && dims.height > 0.0 {
            return Some(dims);
        }

        let message = if size.trim().is_empty() {
            format!("{field} is required")
        } else {
            format!("'{size}' is not \"WIDTH HEIGHT\" (parsed as {dims})")
        };
        diag.error_with_hint(field, message, format!("width space height, e.g. \"{example}\""));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> HeroConfig {
        HeroConfig {
            desktop_image: "/d.jpg".into(),
            mobile_image: "/m.jpg".into(),
            desktop_size: "1680 510".into(),
            mobile_size: "450 137".into(),
            ..HeroConfig::default()
        }
    }

    #[test]
    fn test_defaults_are_blank() {
        let config = HeroConfig::default();
        assert!(!config.new_tab);
        assert!(!config.lazy_loading);
        assert!(config.title_text.is_empty());
    }

    #[test]
    fn test_title_element() {
        let mut config = HeroConfig::default();
        assert_eq!(config.title_element(), "div");
        config.title_tag = "H2".into();
        assert_eq!(config.title_element(), "h2");
        config.title_tag = "h1><script>".into();
        assert_eq!(config.title_element(), "div");
    }

    #[test]
    fn test_wraps_in_link() {
        let mut config = HeroConfig {
            cta_link: "/sale".into(),
            ..HeroConfig::default()
        };
        assert!(config.wraps_in_link());
        config.cta_text = "Shop".into();
        assert!(!config.wraps_in_link());
        config.cta_link.clear();
        assert!(!config.wraps_in_link());
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let config: HeroConfig = serde_json::from_str(
            r#"{"titleTag":"h1","ctaLink":"/sale","newTab":true,"lazyLoading":true}"#,
        )
        .unwrap();
        assert_eq!(config.title_tag, "h1");
        assert_eq!(config.cta_link, "/sale");
        assert!(config.new_tab);
        assert!(config.lazy_loading);
        assert_eq!(config.link_target(), Some("_blank"));
    }

    #[test]
    fn test_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        valid().validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut diag = ConfigDiagnostics::new();
        HeroConfig::default().validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                HeroConfig::FIELDS.desktop_image,
                HeroConfig::FIELDS.mobile_image,
                HeroConfig::FIELDS.desktop_size,
                HeroConfig::FIELDS.mobile_size,
            ]
        );
    }

    #[test]
    fn test_validate_malformed_size() {
        let mut diag = ConfigDiagnostics::new();
        HeroConfig {
            desktop_size: "1680x510".into(),
            ..valid()
        }
        .validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].message.contains("NaN"));
    }

    #[test]
    fn test_validate_aspect_mismatch_warns() {
        let mut diag = ConfigDiagnostics::new();
        HeroConfig {
            mobile_size: "450 300".into(),
            ..valid()
        }
        .validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].field, HeroConfig::FIELDS.mobile_size);
    }

    #[test]
    fn test_validate_title_tag_and_cta() {
        let mut diag = ConfigDiagnostics::new();
        HeroConfig {
            title_tag: "h1 class".into(),
            cta_text: "Shop".into(),
            ..valid()
        }
        .validate(&mut diag);
        let fields: Vec<_> = diag.warnings().iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            vec![HeroConfig::FIELDS.title_tag, HeroConfig::FIELDS.cta_link]
        );
    }
}
