//! Full Hero: responsive banner with optional title, subtitle and CTA.
//!
//! # Module Structure
//!
//! ```text
//! hero/
//! ├── props.rs     # HeroConfig ([hero] props) and validation
//! ├── size.rs      # "W H" size strings -> ImageDimensions
//! ├── device.rs    # DeviceClass and the 1026px breakpoint
//! ├── viewport.rs  # Viewport capability (FixedViewport, Headless)
//! ├── style.rs     # StyleTokens and block-class suffixing
//! ├── schema.rs    # page-builder schema
//! └── mod.rs       # FullHero component (this file)
//! ```
//!
//! # Lifecycle
//!
//! ```text
//! FullHero::new ─► Uninitialized ──mount(viewport with width)──► Ready(layout)
//!                       │                                          │
//!                       └─ render(): empty placeholder              └─ render(): hero
//! ```
//!
//! The layout (device class and both image sizes) is computed once, in the
//! first `mount` that sees a viewport. Later prop updates reuse it.

pub mod device;
pub mod props;
pub mod schema;
pub mod size;
pub mod style;
pub mod viewport;

pub use device::{BREAKPOINT_PX, DeviceClass};
pub use props::HeroConfig;
pub use schema::hero_schema;
pub use size::ImageDimensions;
pub use style::StyleTokens;
pub use viewport::{FixedViewport, Headless, Viewport};

use crate::debug;
use crate::markup::{Element, MarkupTree, Node};
use device::DESKTOP_MEDIA;
use size::format_number;

/// Values derived once at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroLayout {
    pub device: DeviceClass,
    pub desktop: ImageDimensions,
    pub mobile: ImageDimensions,
}

impl HeroLayout {
    /// Derive the layout for a viewport `width` pixels wide.
    pub fn compute(config: &HeroConfig, width: u32) -> Self {
        Self {
            device: DeviceClass::classify(width),
            desktop: ImageDimensions::parse(&config.desktop_size),
            mobile: ImageDimensions::parse(&config.mobile_size),
        }
    }

    /// Dimensions of the variant the current device displays.
    pub fn selected(&self) -> ImageDimensions {
        match self.device {
            DeviceClass::Desktop => self.desktop,
            DeviceClass::Mobile => self.mobile,
        }
    }
}

/// One-shot initialization latch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitState {
    #[default]
    Uninitialized,
    Ready(HeroLayout),
}

impl InitState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn layout(&self) -> Option<&HeroLayout> {
        match self {
            Self::Ready(layout) => Some(layout),
            Self::Uninitialized => None,
        }
    }
}

/// A hero instance: props, styling tokens and its private init latch.
#[derive(Debug, Clone)]
pub struct FullHero {
    config: HeroConfig,
    styles: StyleTokens,
    state: InitState,
}

impl FullHero {
    pub fn new(config: HeroConfig) -> Self {
        Self::with_styles(config, StyleTokens::default())
    }

    pub fn with_styles(config: HeroConfig, styles: StyleTokens) -> Self {
        Self {
            config,
            styles,
            state: InitState::Uninitialized,
        }
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn state(&self) -> &InitState {
        &self.state
    }

    /// Lifecycle callback after the host commits the first render.
    ///
    /// Opens the gate when `viewport` reports a width. Returns `true` only for
    /// the call that performed the transition; once ready, further calls do
    /// nothing.
    pub fn mount(&mut self, viewport: &dyn Viewport) -> bool {
        if self.state.is_ready() {
            return false;
        }

        let Some(width) = viewport.inner_width() else {
            debug!("hero"; "no viewport, staying uninitialized");
            return false;
        };

        let layout = HeroLayout::compute(&self.config, width);
        debug!("hero"; "viewport {}px -> {} ({})", width, layout.device, layout.selected());
        self.state = InitState::Ready(layout);
        true
    }

    /// Replace props. The layout computed at mount is kept as is.
    pub fn update(&mut self, config: HeroConfig) {
        self.config = config;
    }

    /// Render the current state.
    pub fn render(&self) -> MarkupTree {
        let Some(layout) = self.state.layout() else {
            return MarkupTree::Empty;
        };

        let hero = self.render_block(layout);

        if self.config.wraps_in_link() {
            let mut link = Element::new("a").with_attr("href", &self.config.cta_link);
            if let Some(target) = self.config.link_target() {
                link.set_attr("target", target);
            }
            MarkupTree::Root(link.with_child(hero).into())
        } else {
            MarkupTree::Root(hero.into())
        }
    }

    fn render_block(&self, layout: &HeroLayout) -> Element {
        let config = &self.config;
        let classes = self.styles.themed(&config.block_class);

        let mut text = Element::new("div").with_attr("class", classes.text_container());

        if !config.title_text.is_empty() {
            text.push(
                Element::new(config.title_element())
                    .with_attr("class", classes.title_text())
                    .with_child(Node::text(&config.title_text)),
            );
        }

        if !config.subtitle_text.is_empty() {
            text.push(
                Element::new("div")
                    .with_attr("class", classes.subtitle_text())
                    .with_child(Node::text(&config.subtitle_text)),
            );
        }

        if !config.cta_text.is_empty() {
            let mut cta = Element::new("a").with_attr("href", &config.cta_link);
            if let Some(target) = config.link_target() {
                cta.set_attr("target", target);
            }
            text.push(
                cta.with_attr("class", classes.cta())
                    .with_child(Node::text(&config.cta_text)),
            );
        }

        Element::new("div")
            .with_attr("class", classes.container())
            .with_child(text)
            .with_child(self.render_picture(layout, &classes.image()))
    }

    fn render_picture(&self, layout: &HeroLayout, image_class: &str) -> Element {
        let config = &self.config;
        let selected = layout.selected();
        let src = match layout.device {
            DeviceClass::Desktop => &config.desktop_image,
            DeviceClass::Mobile => &config.mobile_image,
        };

        let mut img = Element::new("img")
            .with_attr("src", src)
            .with_attr("alt", &config.alt_text)
            .with_attr("width", format_number(selected.width))
            .with_attr("height", format_number(selected.height))
            .with_attr("class", image_class);

        if config.lazy_loading {
            img.set_attr("loading", "lazy");
        } else {
            img.set_attr("loading", "eager");
            img.set_attr("fetchpriority", "high");
        }

        if !config.max_height.is_empty() {
            img.set_attr("style", format!("max-height: {}", config.max_height));
        }

        Element::new("picture")
            .with_child(source(Some(DESKTOP_MEDIA), &config.desktop_image, layout.desktop))
            .with_child(source(None, &config.mobile_image, layout.mobile))
            .with_child(img)
    }
}

/// A source without `media` matches whatever the earlier sources did not.
fn source(media: Option<&str>, srcset: &str, dims: ImageDimensions) -> Element {
    let mut elem = Element::new("source");
    if let Some(media) = media {
        elem.set_attr("media", media);
    }
    elem.with_attr("srcset", srcset)
        .with_attr("width", format_number(dims.width))
        .with_attr("height", format_number(dims.height))
}

/// Mount a fresh hero against `viewport` and render it.
pub fn render(config: HeroConfig, styles: StyleTokens, viewport: &dyn Viewport) -> MarkupTree {
    let mut hero = FullHero::with_styles(config, styles);
    hero.mount(viewport);
    hero.render()
}
