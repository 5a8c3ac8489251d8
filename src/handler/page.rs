//! Dashboard page
//!
//! The page is a single self-contained document. Its script loads the link
//! list from `/nav-data` and the weather panel from `/weather` independently.

const PAGE_TEMPLATE: &str = include_str!("page.html");

/// Render the dashboard document.
///
/// `lang` selects which localized description fields the script reads from
/// the weather payload (`lang_<lang>`).
pub fn render_page(title: &str, lang: &str) -> String {
    let lang: String = lang
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();

    PAGE_TEMPLATE
        .replace("{{title}}", &escape_html(title))
        .replace("{{lang}}", &lang)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_placeholders() {
        let html = render_page("My Links", "zh");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Links</title>"));
        assert!(html.contains("'lang_zh'"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_fetches_both_endpoints() {
        let html = render_page("t", "zh");
        assert!(html.contains("fetch('/nav-data')"));
        assert!(html.contains("fetch('/weather')"));
        assert!(html.contains("localStorage"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_page("<b>\"A&B\"</b>", "zh");
        assert!(html.contains("<title>&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_lang_is_sanitized() {
        let html = render_page("t", "zh';alert(1)//");
        assert!(html.contains("'lang_zhalert1'"));
    }
}
