//! Whole-word keyword highlighting.

use regex::{Captures, Regex};
use splitshell_config::EditorConfig;

/// Wraps configured keywords in colored spans. Not a parser: matching is
/// purely lexical on word boundaries.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
    color: String,
}

impl Highlighter {
    pub fn new<S: AsRef<str>>(keywords: &[S], color: &str) -> Result<Self, regex::Error> {
        let words: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();
        let pattern = if words.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"\b(?:{})\b", words.join("|")))?)
        };
        Ok(Self {
            pattern,
            color: color.to_string(),
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, regex::Error> {
        Self::new(config.keywords.as_slice(), &config.highlight_color)
    }

    /// Escape `text` for HTML and wrap every keyword occurrence.
    pub fn highlight(&self, text: &str) -> String {
        let escaped = escape_html(text);
        let Some(pattern) = &self.pattern else {
            return escaped;
        };
        pattern
            .replace_all(&escaped, |caps: &Captures| {
                format!(
                    "<span style=\"color: {};\">{}</span>",
                    self.color, &caps[0]
                )
            })
            .into_owned()
    }
}

/// HTML-escape `text`, including quotes and `/`.
pub fn escape_html(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_highlighter() -> Highlighter {
        Highlighter::from_config(&EditorConfig::default()).unwrap()
    }

    #[test]
    fn wraps_keywords() {
        let html = default_highlighter().highlight("public class Foo");
        assert_eq!(
            html,
            "<span style=\"color: blue;\">public</span> \
             <span style=\"color: blue;\">class</span> Foo"
        );
    }

    #[test]
    fn matches_whole_words_only() {
        let html = default_highlighter().highlight("format forward returned");
        assert_eq!(html, "format forward returned");
    }

    #[test]
    fn escapes_before_wrapping() {
        let html = default_highlighter().highlight("if (a < b) return <int>;");
        assert_eq!(
            html,
            "<span style=\"color: blue;\">if</span> (a &lt; b) \
             <span style=\"color: blue;\">return</span> &lt;\
             <span style=\"color: blue;\">int</span>&gt;;"
        );
    }

    #[test]
    fn overlapping_keywords_are_wrapped_once() {
        let h = Highlighter::new(&["in", "int"], "red").unwrap();
        assert_eq!(
            h.highlight("int in"),
            "<span style=\"color: red;\">int</span> <span style=\"color: red;\">in</span>"
        );
    }

    #[test]
    fn no_keywords_only_escapes() {
        let h = Highlighter::new::<&str>(&[], "blue").unwrap();
        assert_eq!(h.highlight("a & b"), "a &amp; b");
    }

    #[test]
    fn escapes_quotes_and_slashes() {
        assert_eq!(
            escape_html(r#"<a href="x">it's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#x27;s&lt;&#x2f;a&gt;"
        );
    }

    #[test]
    fn keywords_inside_escaped_text_still_match() {
        let html = default_highlighter().highlight("// return 'x'");
        assert_eq!(
            html,
            "&#x2f;&#x2f; <span style=\"color: blue;\">return</span> &#x27;x&#x27;"
        );
    }

    #[test]
    fn keywords_are_literal() {
        let h = Highlighter::new(&["a.b"], "green").unwrap();
        assert_eq!(h.highlight("axb"), "axb");
    }
}
