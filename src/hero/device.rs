//! Viewport-width device classification.

use std::fmt;

/// Viewport width (px) at which the desktop image variant takes over.
pub const BREAKPOINT_PX: u32 = 1026;

/// Media query selecting the desktop variant. The mobile variant has none.
pub const DESKTOP_MEDIA: &str = "(min-width: 1026px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Desktop at or above [`BREAKPOINT_PX`], mobile below.
    pub const fn classify(viewport_width: u32) -> Self {
        if viewport_width >= BREAKPOINT_PX {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_at_breakpoint() {
        assert_eq!(DeviceClass::classify(1026), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify(1025), DeviceClass::Mobile);
    }

    #[test]
    fn test_classify_ranges() {
        for width in [0, 320, 768, 1024] {
            assert_eq!(DeviceClass::classify(width), DeviceClass::Mobile);
        }
        for width in [1200, 1680, 3840, u32::MAX] {
            assert_eq!(DeviceClass::classify(width), DeviceClass::Desktop);
        }
    }

    #[test]
    fn test_media_query_matches_breakpoint() {
        assert!(DESKTOP_MEDIA.contains(&BREAKPOINT_PX.to_string()));
    }
}
