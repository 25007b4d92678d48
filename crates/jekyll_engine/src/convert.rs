use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use scraper::Html;

use crate::codec::{Html2MdCodec, MarkdownCodec};

/// Markdown produced for one body, plus the reason when the codec output
/// could not be used and plain text was substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyConversion {
    pub markdown: String,
    pub fallback: Option<String>,
}

/// Turns record bodies into Markdown through an injected [`MarkdownCodec`].
#[derive(Clone)]
pub struct ContentBodyConverter {
    codec: Arc<dyn MarkdownCodec>,
}

impl Default for ContentBodyConverter {
    fn default() -> Self {
        Self::new(Arc::new(Html2MdCodec))
    }
}

impl ContentBodyConverter {
    pub fn new(codec: Arc<dyn MarkdownCodec>) -> Self {
        Self { codec }
    }

    /// Never fails: a codec that panics or loses all text degrades to the
    /// plain text of the HTML. The result never contains a `---` run.
    pub fn convert(&self, html: &str) -> BodyConversion {
        if html.trim().is_empty() {
            return BodyConversion {
                markdown: String::new(),
                fallback: None,
            };
        }

        let converted = panic::catch_unwind(AssertUnwindSafe(|| self.codec.html_to_markdown(html)));
        match converted {
            Ok(markdown) if !markdown.trim().is_empty() => BodyConversion {
                markdown: escape_dash_runs(markdown.trim()),
                fallback: None,
            },
            Ok(_) => {
                let text = escape_dash_runs(&plain_text(html));
                // Markup without any text (a lone image, an empty paragraph) is
                // legitimately empty.
                let fallback = (!text.is_empty())
                    .then(|| "markdown codec produced no output".to_string());
                BodyConversion {
                    markdown: text,
                    fallback,
                }
            }
            Err(payload) => BodyConversion {
                markdown: escape_dash_runs(&plain_text(html)),
                fallback: Some(format!("markdown codec panicked: {}", panic_message(&*payload))),
            },
        }
    }
}

/// Text content of an HTML fragment with blank-line runs collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let raw: String = fragment.root_element().text().collect();

    let mut lines: Vec<&str> = Vec::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() && lines.last().is_none_or(|prev| prev.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Backslash-escapes every dash after the first in a run of three or more,
/// so `---` becomes `-\-\-`. Markdown renders both the same.
pub fn escape_dash_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('-') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let run = tail.len() - tail.trim_start_matches('-').len();
        if run >= 3 {
            out.push('-');
            out.push_str(&"\\-".repeat(run - 1));
        } else {
            out.push_str(&tail[..run]);
        }
        rest = &tail[run..];
    }
    out.push_str(rest);
    out
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_collapses_blank_lines() {
        let text = plain_text("<p>One</p>\n\n\n<p>Two</p>\n");
        assert_eq!(text, "One\n\nTwo");
    }

    #[test]
    fn dash_runs_are_broken_up() {
        assert_eq!(escape_dash_runs("a---b"), "a-\\-\\-b");
        assert_eq!(escape_dash_runs("-----"), "-\\-\\-\\-\\-");
        assert_eq!(escape_dash_runs("a - b -- c"), "a - b -- c");
        assert!(!escape_dash_runs("x\\----y").contains("---"));
    }

    #[test]
    fn plain_text_of_markup_without_text_is_empty() {
        assert_eq!(plain_text("<img src=\"a.png\">"), "");
    }
}
