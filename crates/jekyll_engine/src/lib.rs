//! Jekyll export engine: conversion pipeline and file emission.
mod codec;
mod convert;
mod document;
mod dump;
mod error;
mod export;
mod filename;
mod frontmatter;
mod metadata;
mod options;
mod persist;
mod site_config;
mod taxonomy;
mod writer;

pub use codec::{Html2MdCodec, MarkdownCodec, SerdeYamlCodec, YamlCodec, YamlError};
pub use convert::{escape_dash_runs, plain_text, BodyConversion, ContentBodyConverter};
pub use document::assemble_document;
pub use dump::{load_dump, parse_dump, DumpError};
pub use error::ExportError;
pub use export::{BuiltDocument, ExportItem, ExportReport, Exporter, ItemFailure};
pub use filename::{page_filename, post_filename, sanitize_slug};
pub use frontmatter::{FrontMatterSerializer, DELIMITER};
pub use metadata::convert_meta;
pub use options::ExportOptions;
pub use persist::{ensure_output_dir, write_atomic, AtomicFileWriter, PersistError};
pub use site_config::{build_config_mapping, ConfigExporter};
pub use taxonomy::{convert_terms, Taxonomy};
pub use writer::ExportWriter;
