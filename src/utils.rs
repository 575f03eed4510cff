/// Utility helpers for Mezmur Hub

/// Create a simple slug from a string suitable for element anchors.
/// Lowercases the string, converts groups of non-alphanumeric chars to single hyphens,
/// and trims leading/trailing hyphens.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;

    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else {
            if !prev_dash {
                out.push('-');
                prev_dash = true;
            }
        }
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Praise & Worship"), "praise-worship");
        assert_eq!(slugify("  Kidase  "), "kidase");
        assert_eq!(slugify("መዝሙር"), "");
    }
}
