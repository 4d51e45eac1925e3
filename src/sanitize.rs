//! Sanitization of ticket text before it reaches the terminal.
//!
//! Ticket subjects and bodies are customer-supplied email content. Rendered
//! unsanitized, they could:
//!
//! - Emit terminal escape sequences that move the cursor or rewrite the screen
//! - Show raw HTML markup (or script/style source) from HTML-only mail
//! - Break single-line layouts with embedded newlines
//! - Cause excessive rendering work with very large payloads

use std::sync::LazyLock;

use regex::Regex;

/// Maximum size for a rendered body (in bytes).
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Maximum length of single-line fields (in characters).
const MAX_INLINE_LENGTH: usize = 500;

/// Markup worth handing to the HTML renderer: a tag, comment or doctype
/// opener, or a character reference.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[a-zA-Z!/?]|&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("markup regex should be valid")
});

static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t]*\n([ \t]*\n)+").expect("blank lines regex should be valid")
});

/// Width the HTML renderer wraps at. The dashboard re-wraps to the pane, so
/// this only needs to be wider than any pane.
const RENDER_WIDTH: usize = 400;

/// Sanitize a ticket body for multi-line display.
///
/// - Truncates to `MAX_BODY_SIZE` bytes (on a UTF-8 char boundary)
/// - Bodies carrying markup are rendered to plain text with `html2text`;
///   plain-text bodies keep their line breaks
/// - Strips control characters except newlines and tabs (`\r\n` becomes `\n`)
/// - Collapses runs of blank lines and trims the result
pub fn sanitize_body(body: &str) -> String {
    let body = truncate_to_byte_limit(body, MAX_BODY_SIZE);

    let text = if MARKUP_RE.is_match(body) {
        render_html(body)
    } else {
        body.to_string()
    };

    let text = text.replace("\r\n", "\n");
    let text: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    let text = BLANK_LINES_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn render_html(body: &str) -> String {
    match html2text::from_read(body.as_bytes(), RENDER_WIDTH) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to render HTML body, showing it as text: {}", e);
            body.to_string()
        }
    }
}

/// Sanitize a single-line field (subject, sender, extracted values).
///
/// Control characters become spaces, whitespace runs collapse to one space,
/// and the result is truncated to `MAX_INLINE_LENGTH` characters.
pub fn sanitize_inline(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > MAX_INLINE_LENGTH {
        collapsed.chars().take(MAX_INLINE_LENGTH).collect()
    } else {
        collapsed
    }
}

/// Truncate a string to fit within a byte limit, respecting UTF-8 char boundaries.
fn truncate_to_byte_limit(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        let body = "Hello,\n\nMy order #123 never arrived.\n\tThanks";
        assert_eq!(sanitize_body(body), body);
    }

    #[test]
    fn test_strips_tags_and_keeps_text() {
        let text = sanitize_body("<p>Hello <b>team</b>,</p><p>Please help.</p>");
        assert!(text.contains("Hello"));
        assert!(text.contains("team"));
        assert!(text.contains("Please help."));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_drops_script_style_and_comments() {
        let text = sanitize_body(
            "<style>p { color: red }</style>Hi<script>alert('x')</script><!-- hidden -->!",
        );
        assert!(text.contains("Hi"));
        assert!(!text.contains("color"));
        assert!(!text.contains("alert"));
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn test_unclosed_script_content_is_dropped() {
        let text = sanitize_body("Hi<script>steal(document.cookie)");
        assert!(text.contains("Hi"));
        assert!(!text.contains("steal"));
        assert!(!text.contains("cookie"));
    }

    #[test]
    fn test_attribute_values_do_not_leak() {
        let text = sanitize_body(r#"<a title="a>b" href="http://x">click</a> here"#);
        assert!(text.contains("click"));
        assert!(text.contains("here"));
        assert!(!text.contains("title"));
        assert!(!text.contains("a>b"));
        assert!(!text.contains("href"));
    }

    #[test]
    fn test_br_becomes_newline() {
        let text = sanitize_body("one<br>two<BR/>three");
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_decodes_entities() {
        let text = sanitize_body("Tom &amp; Jerry &lt;3 &quot;quoted&quot; &#39;s &#x41;&#66;");
        assert!(text.contains("Tom & Jerry <3 \"quoted\" 's AB"));
    }

    #[test]
    fn test_decodes_named_typographic_entities() {
        let text = sanitize_body("Caf&eacute; &mdash; we&rsquo;re sorry&hellip;");
        assert!(text.contains("Café — we’re sorry…"));
        assert!(!text.contains('&'));
    }

    #[test]
    fn test_decoded_markup_is_not_reparsed() {
        let text = sanitize_body("&lt;script&gt;alert(1)&lt;/script&gt;");
        assert!(text.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_strips_escape_sequences() {
        let body = "safe\x1b[2J\x1b[Htext\x07";
        assert_eq!(sanitize_body(body), "safe[2J[Htext");
    }

    #[test]
    fn test_normalizes_crlf_and_blank_runs() {
        assert_eq!(sanitize_body("a\r\nb\r\n\r\n\r\n\r\nc"), "a\nb\n\nc");
    }

    #[test]
    fn test_lone_angle_brackets_survive() {
        assert_eq!(sanitize_body("if a < b and c > d"), "if a < b and c > d");
    }

    #[test]
    fn test_body_truncated_on_char_boundary() {
        let body = "é".repeat(MAX_BODY_SIZE);
        let sanitized = sanitize_body(&body);
        assert!(sanitized.len() <= MAX_BODY_SIZE);
        assert!(sanitized.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_inline_collapses_whitespace_and_controls() {
        assert_eq!(
            sanitize_inline("  Refund\nrequest\x1b[31m  now\t"),
            "Refund request [31m now"
        );
    }

    #[test]
    fn test_inline_truncates() {
        let long = "x".repeat(MAX_INLINE_LENGTH + 50);
        assert_eq!(sanitize_inline(&long).chars().count(), MAX_INLINE_LENGTH);
    }

    #[test]
    fn test_inline_empty() {
        assert_eq!(sanitize_inline(" \n\t "), "");
    }
}
