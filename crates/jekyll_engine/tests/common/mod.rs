#![allow(dead_code)]

use chrono::NaiveDate;
use jekyll_core::{ContentRecord, InMemorySource, RecordStatus, RecordType, SiteSettings};

pub fn test_post() -> ContentRecord {
    ContentRecord {
        id: 9,
        slug: "test-post".to_string(),
        title: "Test Post".to_string(),
        body_html: "This is a test <strong>post</strong>.".to_string(),
        excerpt: None,
        author_display_name: "Tester".to_string(),
        published_date: NaiveDate::from_ymd_opt(2014, 1, 1),
        record_type: RecordType::Post,
        status: RecordStatus::Published,
        categories: vec!["Testing".to_string()],
        tags: vec!["tag1".to_string(), "tag2".to_string()],
        permalink: "/?p=9".to_string(),
    }
}

pub fn test_page() -> ContentRecord {
    ContentRecord {
        id: 10,
        slug: "test-page".to_string(),
        title: "Test Page".to_string(),
        body_html: "This is a test <strong>page</strong>.".to_string(),
        excerpt: None,
        author_display_name: "Tester".to_string(),
        published_date: None,
        record_type: RecordType::Page,
        status: RecordStatus::Published,
        categories: Vec::new(),
        tags: Vec::new(),
        permalink: "/?page_id=10".to_string(),
    }
}

pub fn test_settings() -> SiteSettings {
    SiteSettings::new("Test Blog", "Just another WordPress site", "http://example.org")
}

pub fn test_source() -> InMemorySource {
    InMemorySource::with_records(test_settings(), vec![test_post(), test_page()])
}
