//! Rendering-environment capability query.

/// Answers whether a windowing environment exists and how wide it is.
pub trait Viewport {
    /// Inner width in CSS pixels, or `None` without a DOM (server rendering).
    fn inner_width(&self) -> Option<u32>;
}

/// A viewport of known width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl Viewport for FixedViewport {
    fn inner_width(&self) -> Option<u32> {
        Some(self.0)
    }
}

/// No windowing environment at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl Viewport for Headless {
    fn inner_width(&self) -> Option<u32> {
        None
    }
}
