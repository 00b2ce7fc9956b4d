//! HTML output
//!
//! Tokens become `<span>` elements carrying the Pygments short CSS class of their kind, so
//! any Pygments stylesheet applies unchanged. Text tokens have no class and are written bare.
//!
//! With `wrap` enabled the spans are enclosed in `<div class="highlight"><pre>...</pre></div>`,
//! the block Pygments' own HTML formatter produces.

use super::registry::{FormatError, Formatter};
use crate::madx::config::HtmlConfig;
use crate::madx::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormatter {
    class_prefix: String,
    wrap: bool,
    css_class: String,
}

impl HtmlFormatter {
    pub fn new(class_prefix: impl Into<String>, wrap: bool, css_class: impl Into<String>) -> Self {
        HtmlFormatter {
            class_prefix: class_prefix.into(),
            wrap,
            css_class: css_class.into(),
        }
    }

    pub fn from_config(config: &HtmlConfig) -> Self {
        Self::new(&config.class_prefix, config.wrap, &config.css_class)
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new("", true, "highlight")
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, FormatError> {
        let mut out = String::new();
        if self.wrap {
            out.push_str("<div class=\"");
            out.push_str(&escape(&self.css_class));
            out.push_str("\"><pre>");
        }
        for token in tokens {
            let class = token.kind.css_class();
            if class.is_empty() {
                out.push_str(&escape(token.text));
            } else {
                out.push_str("<span class=\"");
                out.push_str(&escape(&self.class_prefix));
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&escape(token.text));
                out.push_str("</span>");
            }
        }
        if self.wrap {
            out.push_str("</pre></div>\n");
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "HTML spans with Pygments CSS classes"
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
