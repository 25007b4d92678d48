use jekyll_core::ContentRecord;

/// Category and tag names of one record, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Collects taxonomy names for a record. The store decides the order; repeated
/// names are dropped after their first occurrence. Empty lists stay empty
/// lists so both keys always reach the front matter.
pub fn convert_terms(record: &ContentRecord) -> Taxonomy {
    Taxonomy {
        categories: dedupe(&record.categories),
        tags: dedupe(&record.tags),
    }
}

fn dedupe(names: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(name) {
            unique.push(name.clone());
        }
    }
    unique
}
