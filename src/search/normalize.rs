/// Trim surrounding whitespace and lowercase.
///
/// An empty result means "no search": callers fall back to the default
/// listing instead of matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
