//! HTML stripping char filter.
//!
//! Extracts the visible text from a fragment of HTML. The filter is a small
//! hand-written scanner, not a conforming parser: anything that looks like a
//! tag is dropped, `<script>` and `<style>` element content is dropped, a
//! handful of common entities are decoded, and everything else passes through
//! as plain text. Malformed markup never fails.
//!
//! # Examples
//!
//! ```
//! use verdict::analysis::char_filter::CharFilter;
//! use verdict::analysis::char_filter::html_strip::HtmlStripCharFilter;
//!
//! let filter = HtmlStripCharFilter::new();
//! assert_eq!(filter.filter("<p>Great <b>movie</b>!</p>"), "Great movie!");
//! assert_eq!(filter.filter("5 &lt; 10"), "5 < 10");
//! ```

use super::CharFilter;

/// A char filter that removes HTML markup and keeps only visible text.
#[derive(Clone, Debug, Default)]
pub struct HtmlStripCharFilter;

impl HtmlStripCharFilter {
    /// Create a new HTML strip char filter.
    pub fn new() -> Self {
        HtmlStripCharFilter
    }

    fn decode_entity(name: &str) -> Option<char> {
        match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" | "#39" => Some('\''),
            "nbsp" => Some(' '),
            _ => None,
        }
    }

    /// Leading element name of a tag body, lowercased (`"b"` for `b class=x`).
    fn element_name(tag: &str) -> String {
        tag.chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut output = String::with_capacity(input.len());
        let mut skip_element: Option<&'static str> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '<' {
                // Only a letter, '/', '!' or '?' after '<' starts a tag;
                // anything else (e.g. "a < b") is literal text.
                let starts_tag = matches!(
                    chars.get(i + 1),
                    Some(n) if n.is_ascii_alphabetic() || *n == '/' || *n == '!' || *n == '?'
                );
                if starts_tag {
                    let mut j = i + 1;
                    let mut tag = String::new();
                    while j < chars.len() && chars[j] != '>' {
                        tag.push(chars[j]);
                        j += 1;
                    }
                    // Unterminated tag at end of input: drop the remainder.
                    i = if j < chars.len() { j + 1 } else { chars.len() };

                    if let Some(name) = skip_element {
                        if let Some(rest) = tag.strip_prefix('/')
                            && Self::element_name(rest) == name
                        {
                            skip_element = None;
                        }
                    } else if !tag.starts_with('/') && !tag.trim_end().ends_with('/') {
                        match Self::element_name(&tag).as_str() {
                            "script" => skip_element = Some("script"),
                            "style" => skip_element = Some("style"),
                            _ => {}
                        }
                    }
                    continue;
                }

                if skip_element.is_none() {
                    output.push('<');
                }
                i += 1;
                continue;
            }

            if skip_element.is_some() {
                i += 1;
                continue;
            }

            if c == '&' {
                let mut j = i + 1;
                let mut name = String::new();
                let mut terminated = false;
                while j < chars.len() && j - i <= 8 {
                    let ch = chars[j];
                    if ch == ';' {
                        terminated = true;
                        break;
                    }
                    if ch.is_ascii_alphanumeric() || ch == '#' {
                        name.push(ch);
                        j += 1;
                    } else {
                        break;
                    }
                }
                if terminated && let Some(decoded) = Self::decode_entity(&name) {
                    output.push(decoded);
                    i = j + 1;
                    continue;
                }
                output.push('&');
                i += 1;
                continue;
            }

            output.push(c);
            i += 1;
        }

        output
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}
