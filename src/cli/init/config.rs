//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::hero::{BREAKPOINT_PX, StyleTokens};

/// Generate hero.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Full Hero configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(HERO_SECTION);
    out.push('\n');
    out.push_str(&styles_section());
    out.push('\n');
    out.push_str(&render_section());

    out
}

/// Write default hero.toml configuration
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

const HERO_SECTION: &str = r#"[hero]
# Image sources and their intrinsic sizes ("WIDTH HEIGHT").
# Desktop and mobile must have identical aspect ratios.
desktopImage = "/images/hero-desktop.jpg"
desktopSize = "1680 510"
mobileImage = "/images/hero-mobile.jpg"
mobileSize = "450 137"
altText = ""

# Element wrapping the title (h1, h2...). Defaults to div if blank.
titleTag = "h1"
# Text elements are hidden when blank.
titleText = ""
subtitleText = ""
ctaText = ""
# With ctaLink set and ctaText blank, the whole hero becomes the link.
ctaLink = ""
newTab = false

# CSS max-height of the image, e.g. "60vh".
maxHeight = ""
# Leave off for heroes visible without scrolling.
lazyLoading = false
# Appended to every class token as "token--blockClass".
blockClass = ""
"#;

fn styles_section() -> String {
    let defaults = StyleTokens::default();
    let mut out = String::from("[styles]\n# Class-name tokens resolved by your CSS build.\n");
    for (field, token) in defaults.entries() {
        let key = field.as_str().trim_start_matches("styles.");
        out.push_str(&format!("{key} = \"{token}\"\n"));
    }
    out
}

fn render_section() -> String {
    format!(
        "[render]\n\
         # Preview width for `fullhero render`. Desktop from {BREAKPOINT_PX}px.\n\
         # Remove to render headless (empty placeholder).\n\
         viewport_width = 1200\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_without_unknown_fields() {
        let config = test_parse_config(&generate_config_template());
        assert_eq!(config.hero.title_tag, "h1");
        assert_eq!(config.hero.desktop_size, "1680 510");
        assert_eq!(config.styles, StyleTokens::default());
        assert_eq!(config.render.viewport_width, Some(1200));
    }

    #[test]
    fn test_template_validates() {
        let diag = test_parse_config(&generate_config_template()).diagnostics();
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_write_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hero.toml");
        write_config(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Full Hero configuration file"));
    }
}
