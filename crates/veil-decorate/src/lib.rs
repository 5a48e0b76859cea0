//! Decorator pipeline - ordered post-render text transforms
//!
//! Transforms are identified by opaque string tokens. Unknown tokens are
//! skipped, duplicates re-apply, and order is significant: `["html",
//! "disclaimer"]` puts the disclaimer outside the markup, `["disclaimer",
//! "html"]` puts it inside.

use tracing::debug;

/// A single named text transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decorator {
    /// Wrap the text in `<div class='user'>...</div>`
    Html,
    /// Append the partial-redaction disclaimer
    Disclaimer,
}

impl Decorator {
    /// Parse a pipeline token. Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "html" => Some(Decorator::Html),
            "disclaimer" => Some(Decorator::Disclaimer),
            _ => None,
        }
    }

    /// The token this transform answers to.
    pub fn token(&self) -> &'static str {
        match self {
            Decorator::Html => "html",
            Decorator::Disclaimer => "disclaimer",
        }
    }

    /// Apply this transform to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Decorator::Html => format!("<div class='user'>{text}</div>"),
            Decorator::Disclaimer => {
                format!("{text}\n\nNote: This information is partially redacted.")
            }
        }
    }
}

/// An ordered decorator chain applied by a single left fold.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    chain: Vec<Decorator>,
}

impl Pipeline {
    /// Build a pipeline from tokens, preserving order and duplicates.
    /// Unrecognized tokens are skipped, not errors.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chain = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let decorator = Decorator::parse(token);
                if decorator.is_none() {
                    debug!("Skipping unknown decorator token: {}", token);
                }
                decorator
            })
            .collect();

        Self { chain }
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Run the chain over `text`, left to right.
    pub fn apply(&self, text: String) -> String {
        self.chain
            .iter()
            .fold(text, |acc, decorator| decorator.apply(&acc))
    }
}
