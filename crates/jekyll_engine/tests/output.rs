mod common;

use std::fs;

use chrono::NaiveDate;
use jekyll_engine::{
    page_filename, post_filename, sanitize_slug, ExportError, ExportOptions, ExportWriter,
    FrontMatterSerializer,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use common::{test_page, test_post};

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()
}

#[test]
fn post_filename_has_date_prefix() {
    assert_eq!(
        post_filename(new_year(), "test-post", "md").as_deref(),
        Some("2014-01-01-test-post.md")
    );
    assert_eq!(page_filename("about", "md").as_deref(), Some("about.md"));
}

#[test]
fn slugs_are_made_path_safe() {
    assert_eq!(sanitize_slug("a/b\\c").as_deref(), Some("a_b_c"));
    assert_eq!(sanitize_slug("../../etc").as_deref(), Some("etc"));
    assert_eq!(sanitize_slug("con").as_deref(), Some("con_"));
    assert_eq!(sanitize_slug("ok-slug").as_deref(), Some("ok-slug"));
    assert_eq!(sanitize_slug(" ./ "), None);
    assert_eq!(sanitize_slug(""), None);
}

#[test]
fn init_temp_dir_is_repeatable() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path().join("export"));

    writer.init_temp_dir().unwrap();
    writer.init_temp_dir().unwrap();
    assert!(writer.root().is_dir());
    assert!(writer.root().join("_posts").is_dir());
}

#[test]
fn record_paths_follow_the_layout() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path());

    assert_eq!(
        writer.record_path(&test_post()).unwrap(),
        temp.path().join("_posts").join("2014-01-01-test-post.md")
    );
    assert_eq!(
        writer.record_path(&test_page()).unwrap(),
        temp.path().join("test-page.md")
    );
}

#[test]
fn write_record_places_posts_and_pages() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path());
    let mut doc = jekyll_core::ExportDocument::default();
    doc.front_matter.insert("title", "Either");

    let post = writer.write_record(&test_post(), &doc).unwrap();
    assert_eq!(post, temp.path().join("_posts/2014-01-01-test-post.md"));
    let page = writer.write_record(&test_page(), &doc).unwrap();
    assert_eq!(page, temp.path().join("test-page.md"));
    assert_eq!(fs::read_to_string(&page).unwrap(), "---\ntitle: Either\n---\n");

    let mut undated = test_post();
    undated.published_date = None;
    let err = writer.write_record(&undated, &doc).unwrap_err();
    assert!(matches!(err, ExportError::InvalidRecord { id: 9, .. }));
}

#[test]
fn write_post_creates_posts_dir_and_overwrites() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path());
    let mut doc = jekyll_core::ExportDocument::default();
    doc.front_matter.insert("title", "First");
    doc.body = "one".to_string();

    let path = writer.write_post(&doc, new_year(), "test-post").unwrap();
    assert_eq!(path, temp.path().join("_posts/2014-01-01-test-post.md"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "---\ntitle: First\n---\none");

    doc.front_matter.insert("title", "Second");
    let again = writer.write_post(&doc, new_year(), "test-post").unwrap();
    assert_eq!(again, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "---\ntitle: Second\n---\none");
}

#[test]
fn write_page_lives_at_the_root() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path());
    let doc = jekyll_core::ExportDocument::default();

    let path = writer.write_page(&doc, "about").unwrap();
    assert_eq!(path, temp.path().join("about.md"));
    assert!(!temp.path().join("_posts").exists());
}

#[test]
fn write_raw_is_last_write_wins() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path());
    let path = writer.record_path(&test_post()).unwrap();

    writer.write_raw("Foo", &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Foo");
    writer.write_raw("Bar", &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Bar");
}

#[test]
fn unusable_slug_is_rejected() {
    let temp = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp.path());
    let doc = jekyll_core::ExportDocument::default();

    let err = writer.write_page(&doc, "..").unwrap_err();
    assert!(matches!(err, ExportError::InvalidSlug(_)));
}

#[test]
fn custom_layout_options_are_honoured() {
    let temp = TempDir::new().unwrap();
    let options = ExportOptions {
        posts_dir: "posts".to_string(),
        extension: "markdown".to_string(),
        ..ExportOptions::default()
    };
    let writer = ExportWriter::with_options(temp.path(), options, FrontMatterSerializer::default());

    assert_eq!(
        writer.record_path(&test_post()).unwrap(),
        temp.path().join("posts/2014-01-01-test-post.markdown")
    );
}
