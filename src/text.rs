use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W+").unwrap();
}

/// Space-free, lowercased form used both for course matching and for the
/// per-course directory name.
pub fn normalize(s: &str) -> String {
    s.replace(' ', "").to_lowercase().trim().to_string()
}

/// Collapse every run of non-word characters into a single underscore.
pub fn slugify(s: &str) -> String {
    NON_WORD.replace_all(s, "_").into_owned()
}

/// Normalized search string, computed once from user input.
#[derive(Debug, Clone)]
pub struct CourseQuery {
    normalized: String,
}

impl CourseQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: normalize(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    // Prefix match against the normalized course title, not an exact one.
    pub fn matches(&self, course_title: &str) -> bool {
        normalize(course_title).starts_with(&self.normalized)
    }
}
