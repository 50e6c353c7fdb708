pub struct StringUtils {}

impl StringUtils {
    pub fn maybe_pluralize((singular, plural) : (&str, &str), qty: usize) -> String {
        format!("{}", if qty == 1 { singular } else { plural })
    }

    pub fn maybe_pluralize_count(count: usize, (singular, plural) : (&str, &str)) -> String {
        format!("{} {}", count, Self::maybe_pluralize((singular, plural), count))
    }

    /// The first `limit` characters of `text`, cut on a char boundary.
    pub fn truncate_chars(text: &str, limit: usize) -> &str {
        match text.char_indices().nth(limit) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }

    /// Escape text for use inside HTML element content or attribute values.
    pub fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_count() {
        assert_eq!(StringUtils::maybe_pluralize_count(1, ("document", "documents")), "1 document");
        assert_eq!(StringUtils::maybe_pluralize_count(0, ("document", "documents")), "0 documents");
    }

    #[test]
    fn test_truncate_shorter_text_is_unchanged() {
        assert_eq!(StringUtils::truncate_chars("Hello World", 4000), "Hello World");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(StringUtils::truncate_chars(text, 5), "héllo");
        assert_eq!(StringUtils::truncate_chars(text, 0), "");
    }

    #[test]
    fn test_truncate_at_exact_length() {
        assert_eq!(StringUtils::truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            StringUtils::escape_html("<b>\"Q&A\"</b> it's"),
            "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt; it&#39;s"
        );
    }
}
