//! Navigation link list
//!
//! Parses the configured link text: one `name,url` record per line.

use serde::Serialize;

/// A single navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

/// Parse newline-separated `name,url` records.
///
/// Only the first comma on a line separates the name from the url. Both parts
/// are trimmed; lines where either part ends up empty are dropped. Output
/// order follows input order.
pub fn parse_links(raw: &str) -> Vec<NavLink> {
    raw.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<NavLink> {
    let (name, url) = line.split_once(',')?;
    let (name, url) = (name.trim(), url.trim());
    if name.is_empty() || url.is_empty() {
        return None;
    }
    Some(NavLink {
        name: name.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, url: &str) -> NavLink {
        NavLink {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_links("").is_empty());
        assert!(parse_links("\n\n").is_empty());
    }

    #[test]
    fn test_drops_invalid_lines() {
        let links = parse_links("A, http://a\n,http://b\nC,");
        assert_eq!(links, vec![link("A", "http://a")]);
    }

    #[test]
    fn test_line_without_comma() {
        assert!(parse_links("just a name").is_empty());
        assert!(parse_links("   ,   ").is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let links = parse_links("Site A,https://a.example\nSite B,https://b.example");
        assert_eq!(
            links,
            vec![
                link("Site A", "https://a.example"),
                link("Site B", "https://b.example"),
            ]
        );
    }

    #[test]
    fn test_only_first_comma_splits() {
        let links = parse_links("Search, https://example.com/?q=a,b ");
        assert_eq!(links, vec![link("Search", "https://example.com/?q=a,b")]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let links = parse_links("A,http://a\r\n\r\n  B , http://b  \r\n");
        assert_eq!(links, vec![link("A", "http://a"), link("B", "http://b")]);
    }

    #[test]
    fn test_count_matches_valid_lines() {
        let raw = "a,1\nb,\n,c\nd,4\ne\nf , 6";
        let valid = raw
            .lines()
            .filter(|l| {
                l.split_once(',')
                    .is_some_and(|(n, u)| !n.trim().is_empty() && !u.trim().is_empty())
            })
            .count();
        assert_eq!(parse_links(raw).len(), valid);
        assert_eq!(valid, 3);
    }

    #[test]
    fn test_idempotent() {
        let raw = "A,http://a\nbad\nB,http://b";
        assert_eq!(parse_links(raw), parse_links(raw));
    }

    #[test]
    fn test_serializes_as_name_url() {
        let json = serde_json::to_string(&parse_links("Site A,https://a.example")).unwrap();
        assert_eq!(json, r#"[{"name":"Site A","url":"https://a.example"}]"#);
    }
}
