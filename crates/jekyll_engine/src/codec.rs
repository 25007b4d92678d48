use std::collections::HashMap;

use html2md::{Handle, NodeData, StructuredPrinter, TagHandler, TagHandlerFactory};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// HTML to Markdown capability.
pub trait MarkdownCodec: Send + Sync {
    fn html_to_markdown(&self, html: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdCodec;

impl MarkdownCodec for Html2MdCodec {
    fn html_to_markdown(&self, html: &str) -> String {
        html2md::parse_html_custom(html, &jekyll_handlers())
    }
}

/// Overrides for the html2md defaults: `_` emphasis, `* * *` rules and ATX
/// headings. None of them emit a `---` run.
fn jekyll_handlers() -> HashMap<String, Box<dyn TagHandlerFactory>> {
    let mut handlers: HashMap<String, Box<dyn TagHandlerFactory>> = HashMap::new();
    for tag in ["em", "i"] {
        handlers.insert(tag.to_string(), Box::new(EmphasisHandler::default));
    }
    handlers.insert("hr".to_string(), Box::new(RuleHandler::default));
    for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        handlers.insert(tag.to_string(), Box::new(HeadingHandler::default));
    }
    handlers
}

#[derive(Default)]
struct EmphasisHandler {
    start_pos: usize,
}

impl TagHandler for EmphasisHandler {
    fn handle(&mut self, _tag: &Handle, printer: &mut StructuredPrinter) {
        self.start_pos = printer.data.len();
    }

    fn after_handle(&mut self, printer: &mut StructuredPrinter) {
        let Some(offset) = printer.data[self.start_pos..].find(|c: char| !c.is_whitespace()) else {
            return;
        };
        let start = self.start_pos + offset;
        let end = printer.data.trim_end().len();
        printer.insert_str(end, "_");
        printer.insert_str(start, "_");
    }
}

#[derive(Default)]
struct RuleHandler;

impl TagHandler for RuleHandler {
    fn handle(&mut self, _tag: &Handle, _printer: &mut StructuredPrinter) {}

    fn after_handle(&mut self, printer: &mut StructuredPrinter) {
        printer.append_str("\n\n* * *\n\n");
    }
}

#[derive(Default)]
struct HeadingHandler;

impl TagHandler for HeadingHandler {
    fn handle(&mut self, tag: &Handle, printer: &mut StructuredPrinter) {
        let level = match tag.data {
            NodeData::Element { ref name, .. } => name.local[1..].parse().unwrap_or(1),
            _ => 1,
        };
        printer.append_str("\n\n");
        printer.append_str(&"#".repeat(level));
        printer.append_str(" ");
    }

    fn after_handle(&mut self, printer: &mut StructuredPrinter) {
        printer.append_str("\n\n");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YamlError {
    #[error("yaml dump failed: {0}")]
    Dump(String),
    #[error("yaml parse failed: {0}")]
    Parse(String),
    #[error("yaml document is not a mapping")]
    NotAMapping,
}

/// YAML capability: mappings in, text out and back.
pub trait YamlCodec: Send + Sync {
    fn dump(&self, mapping: &Mapping) -> Result<String, YamlError>;

    fn load(&self, text: &str) -> Result<Mapping, YamlError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeYamlCodec;

impl YamlCodec for SerdeYamlCodec {
    fn dump(&self, mapping: &Mapping) -> Result<String, YamlError> {
        serde_yaml::to_string(mapping).map_err(|e| YamlError::Dump(e.to_string()))
    }

    fn load(&self, text: &str) -> Result<Mapping, YamlError> {
        match serde_yaml::from_str::<Value>(text) {
            Ok(Value::Mapping(mapping)) => Ok(mapping),
            Ok(_) => Err(YamlError::NotAMapping),
            Err(e) => Err(YamlError::Parse(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_uses_underscores() {
        assert_eq!(Html2MdCodec.html_to_markdown("<p><i>a</i> and <em>b</em></p>"), "_a_ and _b_");
    }

    #[test]
    fn rules_and_headings_avoid_dash_runs() {
        let markdown = Html2MdCodec.html_to_markdown("<h2>Top</h2><p>x</p><hr><h6>End</h6>");
        assert_eq!(markdown, "## Top\n\nx\n\n* * *\n\n###### End");
    }

    #[test]
    fn scalar_document_is_not_a_mapping() {
        assert_eq!(SerdeYamlCodec.load("just text"), Err(YamlError::NotAMapping));
        assert_eq!(SerdeYamlCodec.load("- a\n- b"), Err(YamlError::NotAMapping));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = SerdeYamlCodec.load("title: [unclosed").unwrap_err();
        assert!(matches!(err, YamlError::Parse(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn dump_keeps_insertion_order() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::from("title"), Value::from("T"));
        mapping.insert(Value::from("author"), Value::from("A"));
        let text = SerdeYamlCodec.dump(&mapping).unwrap();
        assert_eq!(text, "title: T\nauthor: A\n");
    }
}
