//! `render` command: mount the hero against the configured viewport and
//! write the resulting HTML.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write, stdout},
    path::Path,
};

use crate::config::ProjectConfig;
use crate::hero::FullHero;
use crate::{debug, log};

/// Render the configured hero.
pub fn render_hero(config: &ProjectConfig, output: Option<&Path>) -> Result<()> {
    let html = render_to_string(config);

    if html.is_empty() {
        log!("render"; "no viewport, rendered empty placeholder");
    }

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("render"; "wrote {} bytes to {}", html.len(), path.display());
        }
        None => write_html(stdout().lock(), &html)?,
    }
    Ok(())
}

/// The empty placeholder writes nothing, not even a newline.
fn write_html(mut out: impl Write, html: &str) -> io::Result<()> {
    if !html.is_empty() {
        writeln!(out, "{html}")?;
    }
    out.flush()
}

/// Render to an HTML string without touching the filesystem.
pub fn render_to_string(config: &ProjectConfig) -> String {
    let mut hero = FullHero::with_styles(config.hero.clone(), config.styles.clone());
    let viewport = config.render.viewport();

    if hero.mount(viewport.as_ref())
        && let Some(layout) = hero.state().layout()
    {
        debug!("render"; "{} layout, image {}", layout.device, layout.selected());
    }

    hero.render().to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
[hero]
titleText = "Summer"
desktopImage = "/d.jpg"
desktopSize = "1680 510"
mobileImage = "/m.jpg"
mobileSize = "450 137"
"#;

    #[test]
    fn test_render_to_string_desktop() {
        let mut config = test_parse_config(CONFIG);
        config.render.viewport_width = Some(1440);
        let html = render_to_string(&config);
        assert!(html.starts_with(r#"<div class="container">"#));
        assert!(html.contains(r#"<img src="/d.jpg" alt="" width="1680" height="510""#));
    }

    #[test]
    fn test_render_to_string_headless_is_empty() {
        let config = test_parse_config(CONFIG);
        assert_eq!(render_to_string(&config), "");
    }

    #[test]
    fn test_write_html_placeholder_is_empty() {
        let mut out = Vec::new();
        write_html(&mut out, "").unwrap();
        assert!(out.is_empty());

        write_html(&mut out, "<div></div>").unwrap();
        assert_eq!(out, b"<div></div>\n");
    }

    #[test]
    fn test_render_hero_writes_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("hero.html");
        let mut config = test_parse_config(CONFIG);
        config.render.viewport_width = Some(375);

        render_hero(&config, Some(&out)).unwrap();
        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains(r#"width="450" height="137""#));
        assert!(html.contains("Summer"));
    }
}
