//! Page-builder schema describing the editable hero props.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Widget hint telling the authoring tool to show an upload control.
const IMAGE_UPLOADER: &str = "image-uploader";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Boolean,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Widget {
    #[serde(rename = "ui:widget")]
    pub ui_widget: &'static str,
}

/// One configurable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaProperty {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: PropType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
}

impl SchemaProperty {
    const fn string(title: &'static str) -> Self {
        Self {
            title,
            description: None,
            kind: PropType::String,
            widget: None,
        }
    }

    const fn boolean(title: &'static str) -> Self {
        Self {
            title,
            description: None,
            kind: PropType::Boolean,
            widget: None,
        }
    }

    const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    const fn image(title: &'static str) -> Self {
        let mut prop = Self::string(title);
        prop.widget = Some(Widget {
            ui_widget: IMAGE_UPLOADER,
        });
        prop
    }
}

/// Top-level schema object. Property order is the editor's display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSchema {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: PropType,
    #[serde(serialize_with = "ordered_properties")]
    pub properties: Vec<(&'static str, SchemaProperty)>,
}

impl HeroSchema {
    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, prop)| prop)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn ordered_properties<S: Serializer>(
    properties: &[(&'static str, SchemaProperty)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(properties.len()))?;
    for (key, prop) in properties {
        map.serialize_entry(key, prop)?;
    }
    map.end()
}

const SIZE_DESCRIPTION_DESKTOP: &str = "REQUIRED | Width space Height. Desktop and Mobile must have identical aspect ratios. Example: 1680 510";
const SIZE_DESCRIPTION_MOBILE: &str = "REQUIRED | Width space Height. Desktop and Mobile must have identical aspect ratios. Example: 450 137";

/// Schema for [`HeroConfig`](super::HeroConfig). `blockClass` is supplied by
/// the host and is not editable.
pub fn hero_schema() -> HeroSchema {
    HeroSchema {
        title: "Full Hero",
        kind: PropType::Object,
        properties: vec![
            ("desktopImage", SchemaProperty::image("Desktop Image Source")),
            (
                "desktopSize",
                SchemaProperty::string("Desktop Image Size").describe(SIZE_DESCRIPTION_DESKTOP),
            ),
            ("mobileImage", SchemaProperty::image("Mobile Image Source")),
            (
                "mobileSize",
                SchemaProperty::string("Mobile Image Size").describe(SIZE_DESCRIPTION_MOBILE),
            ),
            (
                "titleTag",
                SchemaProperty::string("Title Tag").describe("h1, h2... Will default to div if blank."),
            ),
            (
                "titleText",
                SchemaProperty::string("Title Text").describe("Hidden if blank."),
            ),
            (
                "subtitleText",
                SchemaProperty::string("Sub Title Text").describe("Hidden if blank."),
            ),
            (
                "ctaText",
                SchemaProperty::string("Button / CTA Text").describe("Hidden if blank."),
            ),
            (
                "ctaLink",
                SchemaProperty::string("Button / CTA Link").describe("Relative or Absolute Path"),
            ),
            ("newTab", SchemaProperty::boolean("Open Link in New Tab?")),
            ("altText", SchemaProperty::string("Alt Text")),
            (
                "maxHeight",
                SchemaProperty::string("Maximum Height of Image")
                    .describe("CSS Value for max-height. Example: 60vh"),
            ),
            (
                "lazyLoading",
                SchemaProperty::boolean("Lazy Load Image?")
                    .describe("Leave off for heroes visible without scrolling."),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_order() {
        let schema = hero_schema();
        let keys: Vec<_> = schema.properties.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "desktopImage",
                "desktopSize",
                "mobileImage",
                "mobileSize",
                "titleTag",
                "titleText",
                "subtitleText",
                "ctaText",
                "ctaLink",
                "newTab",
                "altText",
                "maxHeight",
                "lazyLoading",
            ]
        );
    }

    #[test]
    fn test_image_fields_have_uploader_widget() {
        let schema = hero_schema();
        for (key, prop) in &schema.properties {
            let expect_widget = key.ends_with("Image");
            assert_eq!(prop.widget.is_some(), expect_widget, "{key}");
        }
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&hero_schema().to_json(false).unwrap()).unwrap();
        assert_eq!(json["title"], "Full Hero");
        assert_eq!(json["type"], "object");
        assert_eq!(json["properties"]["newTab"]["type"], "boolean");
        assert_eq!(
            json["properties"]["desktopImage"]["widget"]["ui:widget"],
            "image-uploader"
        );
        assert!(json["properties"]["altText"].get("description").is_none());
    }

    #[test]
    fn test_json_preserves_order() {
        let json = hero_schema().to_json(true).unwrap();
        let desktop = json.find("\"desktopImage\"").unwrap();
        let lazy = json.find("\"lazyLoading\"").unwrap();
        assert!(desktop < lazy);
    }

    #[test]
    fn test_every_prop_field_is_described() {
        // Every editable prop deserializes from its schema key
        let schema = hero_schema();
        let mut object = serde_json::Map::new();
        for (key, prop) in &schema.properties {
            let value = match prop.kind {
                PropType::Boolean => serde_json::Value::Bool(true),
                _ => serde_json::Value::String("x".into()),
            };
            object.insert((*key).to_string(), value);
        }
        let config: super::super::HeroConfig =
            serde_json::from_value(serde_json::Value::Object(object)).unwrap();
        assert!(config.new_tab && config.lazy_loading);
        assert_eq!(config.desktop_size, "x");
        assert!(schema.property("blockClass").is_none());
    }
}
