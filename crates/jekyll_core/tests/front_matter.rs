use jekyll_core::{ExportDocument, FrontMatter, FrontMatterValue};
use pretty_assertions::assert_eq;

#[test]
fn keys_keep_insertion_order() {
    let mut fm = FrontMatter::new();
    fm.insert("title", "Test Post");
    fm.insert("author", "Tester");
    fm.insert("categories", vec!["Testing".to_string()]);

    assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["title", "author", "categories"]);
}

#[test]
fn reinserting_a_key_replaces_in_place() {
    let mut fm: FrontMatter = [("title", "Old"), ("layout", "post")].into_iter().collect();
    fm.insert("title", "New");

    assert_eq!(fm.len(), 2);
    assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["title", "layout"]);
    assert_eq!(fm.text("title"), Some("New"));
}

#[test]
fn typed_accessors_distinguish_text_and_lists() {
    let mut fm = FrontMatter::new();
    fm.insert("title", "T");
    fm.insert("tags", vec!["a".to_string(), "b".to_string()]);

    assert_eq!(fm.text("tags"), None);
    assert_eq!(fm.list("title"), None);
    assert_eq!(fm.list("tags"), Some(&["a".to_string(), "b".to_string()][..]));
    assert_eq!(fm.get("missing"), None);
    assert_eq!(
        fm.get("title"),
        Some(&FrontMatterValue::Text("T".to_string()))
    );
}

#[test]
fn empty_lists_are_kept() {
    let mut fm = FrontMatter::new();
    fm.insert("tags", Vec::<String>::new());
    let doc = ExportDocument::new(fm, "body");

    assert_eq!(doc.front_matter.list("tags"), Some(&[][..]));
    assert_eq!(doc.body, "body");
}
