use jekyll_core::{ExportDocument, FrontMatter};

use crate::taxonomy::Taxonomy;

/// Appends `categories` and `tags` after the metadata keys and pairs the result
/// with the Markdown body. With metadata from [`convert_meta`](crate::convert_meta)
/// the key order is `title, author, excerpt, layout, permalink, categories, tags`.
pub fn assemble_document(
    meta: FrontMatter,
    terms: Taxonomy,
    body_markdown: impl Into<String>,
) -> ExportDocument {
    let mut front_matter = meta;
    front_matter.insert("categories", terms.categories);
    front_matter.insert("tags", terms.tags);
    ExportDocument::new(front_matter, body_markdown)
}
