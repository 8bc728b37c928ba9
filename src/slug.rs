//! Project name normalization.

/// Converts a free-form project name into a slug usable both as a directory
/// name and as a package name.
///
/// ASCII letters are lowercased and digits kept; every run of any other
/// character becomes a single `-`. Leading and trailing separators are
/// dropped, so `"  My App! "` becomes `"my-app"`.
///
/// An input made only of separators yields an empty string. Callers must
/// not build a project from such a name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
