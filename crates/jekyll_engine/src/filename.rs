use chrono::NaiveDate;

/// Post filename: `{YYYY-MM-DD}-{slug}.{extension}`.
pub fn post_filename(date: NaiveDate, slug: &str, extension: &str) -> Option<String> {
    let slug = sanitize_slug(slug)?;
    Some(format!("{}-{slug}.{extension}", date.format("%Y-%m-%d")))
}

/// Page filename: `{slug}.{extension}`.
pub fn page_filename(slug: &str, extension: &str) -> Option<String> {
    let slug = sanitize_slug(slug)?;
    Some(format!("{slug}.{extension}"))
}

/// Makes a store slug safe to use as a single path component.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_slug(input: &str) -> Option<String> {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]);
    if cleaned.is_empty() {
        return None;
    }

    // Collapse multiple underscores
    let mut compacted = String::with_capacity(cleaned.len());
    let mut prev_underscore = false;
    for c in cleaned.chars() {
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }
    if is_reserved_windows_name(&compacted) {
        compacted.push('_');
    }
    Some(compacted)
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
