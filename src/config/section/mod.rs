//! Configuration section definitions.
//!
//! Each module corresponds to a section in `hero.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `render`   | `[render]`     | Preview viewport                  |
//!
//! `[hero]` and `[styles]` are owned by the `hero` module
//! (`HeroConfig`, `StyleTokens`) since the component consumes them directly.

mod render;

pub use render::RenderConfig;
