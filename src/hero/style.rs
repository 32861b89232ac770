//! `[styles]` class-name tokens and block-class theming.
//!
//! Tokens normally come from a CSS module build step; each element's class
//! is `"{token}--{blockClass}"` so several heroes on one page can be themed
//! independently.
//!
//! ```toml
//! [styles]
//! container = "fullHero_container_x1"
//! image = "fullHero_image_x1"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::FieldPath;

/// Externally resolved class-name tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleTokens {
    pub container: String,
    pub text_container: String,
    pub title_text: String,
    pub subtitle_text: String,
    pub cta: String,
    pub image: String,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            container: "container".into(),
            text_container: "textContainer".into(),
            title_text: "titleText".into(),
            subtitle_text: "subtitleText".into(),
            cta: "cta".into(),
            image: "image".into(),
        }
    }
}

pub struct StyleTokensFields {
    pub container: FieldPath,
    pub text_container: FieldPath,
    pub title_text: FieldPath,
    pub subtitle_text: FieldPath,
    pub cta: FieldPath,
    pub image: FieldPath,
}

impl StyleTokens {
    pub const FIELDS: StyleTokensFields = StyleTokensFields {
        container: FieldPath::new("styles.container"),
        text_container: FieldPath::new("styles.textContainer"),
        title_text: FieldPath::new("styles.titleText"),
        subtitle_text: FieldPath::new("styles.subtitleText"),
        cta: FieldPath::new("styles.cta"),
        image: FieldPath::new("styles.image"),
    };

    /// Every token paired with its field path.
    pub fn entries(&self) -> [(FieldPath, &str); 6] {
        [
            (Self::FIELDS.container, self.container.as_str()),
            (Self::FIELDS.text_container, self.text_container.as_str()),
            (Self::FIELDS.title_text, self.title_text.as_str()),
            (Self::FIELDS.subtitle_text, self.subtitle_text.as_str()),
            (Self::FIELDS.cta, self.cta.as_str()),
            (Self::FIELDS.image, self.image.as_str()),
        ]
    }

    /// Bind the tokens to one block class.
    pub fn themed<'a>(&'a self, block_class: &'a str) -> ThemedClasses<'a> {
        ThemedClasses {
            tokens: self,
            block_class,
        }
    }

    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for (field, token) in self.entries() {
            if token.trim().is_empty() {
                diag.warn(field, "empty class token, element will be unstyled");
            } else if token.contains(char::is_whitespace) {
                diag.warn(field, "class token contains whitespace");
            }
        }
    }
}

/// Class names for one hero instance.
#[derive(Debug, Clone, Copy)]
pub struct ThemedClasses<'a> {
    tokens: &'a StyleTokens,
    block_class: &'a str,
}

impl ThemedClasses<'_> {
    pub fn container(&self) -> String {
        self.apply(&self.tokens.container)
    }

    pub fn text_container(&self) -> String {
        self.apply(&self.tokens.text_container)
    }

    pub fn title_text(&self) -> String {
        self.apply(&self.tokens.title_text)
    }

    pub fn subtitle_text(&self) -> String {
        self.apply(&self.tokens.subtitle_text)
    }

    pub fn cta(&self) -> String {
        self.apply(&self.tokens.cta)
    }

    pub fn image(&self) -> String {
        self.apply(&self.tokens.image)
    }

    fn apply(&self, token: &str) -> String {
        if self.block_class.is_empty() {
            token.to_string()
        } else {
            format!("{token}--{}", self.block_class)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_class_suffix() {
        let tokens = StyleTokens::default();
        let classes = tokens.themed("home");
        assert_eq!(classes.container(), "container--home");
        assert_eq!(classes.text_container(), "textContainer--home");
        assert_eq!(classes.image(), "image--home");
    }

    #[test]
    fn test_empty_block_class_keeps_bare_token() {
        let tokens = StyleTokens::default();
        assert_eq!(tokens.themed("").cta(), "cta");
    }

    #[test]
    fn test_validate_flags_bad_tokens() {
        let tokens = StyleTokens {
            cta: String::new(),
            image: "a b".into(),
            ..StyleTokens::default()
        };
        let mut diag = crate::config::ConfigDiagnostics::new();
        tokens.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 2);
        assert_eq!(diag.warnings()[0].field, StyleTokens::FIELDS.cta);
    }
}
