/// An empty filter counts as "no filter".
pub fn normalize_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
