use std::fmt::Write as _;
use std::sync::Arc;

use jekyll_core::{ExportDocument, FrontMatter, FrontMatterValue};
use serde_yaml::{Mapping, Value};

use crate::codec::{SerdeYamlCodec, YamlCodec};
use crate::error::ExportError;

pub const DELIMITER: &str = "---";

/// Renders documents as `---\n<yaml>---\n<body>` and reads them back.
///
/// Splitting rendered text on `---` gives an empty prefix, the YAML block and
/// the body segment; the body segment starts with the newline that ends the
/// closing delimiter line. Front matter scalars holding a `---` run are
/// written double-quoted with `\x2D` escapes. The body is written as given.
#[derive(Clone)]
pub struct FrontMatterSerializer {
    yaml: Arc<dyn YamlCodec>,
}

impl Default for FrontMatterSerializer {
    fn default() -> Self {
        Self::new(Arc::new(SerdeYamlCodec))
    }
}

impl FrontMatterSerializer {
    pub fn new(yaml: Arc<dyn YamlCodec>) -> Self {
        Self { yaml }
    }

    pub fn serialize(&self, doc: &ExportDocument) -> Result<String, ExportError> {
        let mut escapes = DelimiterEscapes::for_front_matter(&doc.front_matter);
        let mapping = to_mapping(&doc.front_matter, &mut escapes);
        let mut yaml = escapes.restore(self.yaml.dump(&mapping)?);
        if !yaml.ends_with('\n') {
            yaml.push('\n');
        }
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", doc.body))
    }

    pub fn parse(&self, text: &str) -> Result<ExportDocument, ExportError> {
        let segments: Vec<&str> = text.split(DELIMITER).collect();
        if segments.len() != 3 {
            return Err(ExportError::MalformedDocument(format!(
                "expected 3 delimiter segments, found {}",
                segments.len()
            )));
        }
        if !segments[0].is_empty() {
            return Err(ExportError::MalformedDocument(
                "text before the opening delimiter".to_string(),
            ));
        }

        let mapping = self
            .yaml
            .load(segments[1])
            .map_err(|e| ExportError::MalformedDocument(e.to_string()))?;
        let front_matter = from_mapping(mapping)?;
        let body = segments[2].strip_prefix('\n').unwrap_or(segments[2]);
        Ok(ExportDocument::new(front_matter, body))
    }

    /// Serializes and checks that the text parses back to the same document.
    pub fn serialize_verified(&self, doc: &ExportDocument) -> Result<String, ExportError> {
        let text = self.serialize(doc)?;
        let parsed = self.parse(&text)?;
        if parsed != *doc {
            return Err(ExportError::MalformedDocument(
                "document does not survive a round trip".to_string(),
            ));
        }
        Ok(text)
    }
}

fn to_mapping(front_matter: &FrontMatter, escapes: &mut DelimiterEscapes) -> Mapping {
    let mut mapping = Mapping::new();
    for (key, value) in front_matter.iter() {
        let value = match value {
            FrontMatterValue::Text(text) => escapes.scalar(text),
            FrontMatterValue::List(items) => {
                Value::Sequence(items.iter().map(|item| escapes.scalar(item)).collect())
            }
        };
        mapping.insert(escapes.scalar(key), value);
    }
    mapping
}

/// The YAML codec picks its own scalar style, so scalars holding a `---` run
/// are dumped as placeholders and swapped for their escaped form afterwards.
struct DelimiterEscapes {
    prefix: String,
    quoted: Vec<String>,
}

impl DelimiterEscapes {
    /// The placeholder prefix is extended until no key or value contains it.
    fn for_front_matter(front_matter: &FrontMatter) -> Self {
        let texts: Vec<&str> = front_matter
            .iter()
            .flat_map(|(key, value)| {
                let values: Vec<&str> = match value {
                    FrontMatterValue::Text(text) => vec![text.as_str()],
                    FrontMatterValue::List(items) => items.iter().map(String::as_str).collect(),
                };
                std::iter::once(key).chain(values)
            })
            .collect();
        let mut prefix = String::from("dash-escape");
        while texts.iter().any(|text| text.contains(prefix.as_str())) {
            prefix.push('x');
        }
        Self {
            prefix,
            quoted: Vec::new(),
        }
    }

    fn placeholder(&self, index: usize) -> String {
        format!("{}-{index}-", self.prefix)
    }

    fn scalar(&mut self, text: &str) -> Value {
        if !text.contains(DELIMITER) {
            return Value::from(text);
        }
        let placeholder = self.placeholder(self.quoted.len());
        self.quoted.push(double_quoted(text));
        Value::from(placeholder)
    }

    fn restore(&self, mut yaml: String) -> String {
        for (index, quoted) in self.quoted.iter().enumerate() {
            yaml = yaml.replace(&self.placeholder(index), quoted);
        }
        yaml
    }
}

/// YAML double-quoted scalar in which no two dashes appear side by side.
fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut prev = None;
    for c in text.chars() {
        match c {
            '-' if prev == Some('-') => out.push_str("\\x2D"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
        prev = Some(c);
    }
    out.push('"');
    out
}

fn from_mapping(mapping: Mapping) -> Result<FrontMatter, ExportError> {
    let mut front_matter = FrontMatter::new();
    for (key, value) in mapping {
        let key = scalar_text(&key)
            .ok_or_else(|| ExportError::MalformedDocument("non-scalar front matter key".into()))?;
        let value = match value {
            Value::Sequence(items) => FrontMatterValue::List(
                items
                    .iter()
                    .map(|item| {
                        scalar_text(item).ok_or_else(|| {
                            ExportError::MalformedDocument(format!("nested value in list {key:?}"))
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ),
            other => FrontMatterValue::Text(scalar_text(&other).ok_or_else(|| {
                ExportError::MalformedDocument(format!("nested value for key {key:?}"))
            })?),
        };
        front_matter.insert(key, value);
    }
    Ok(front_matter)
}

/// Hand-edited front matter may hold numbers, booleans or nulls; they are
/// read back as their text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
