//! Pluralization for diagnostics summaries.

/// `""` for exactly one item, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, e.g. `plural_count(3, "violation")` -> `"3 violations"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "violation"), "0 violations");
        assert_eq!(plural_count(1, "locale"), "1 locale");
        assert_eq!(plural_count(12, "node"), "12 nodes");
    }
}
