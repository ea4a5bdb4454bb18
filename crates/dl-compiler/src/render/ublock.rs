use dl_core::{Entry, MatchMethod};

use super::google::google_search_rules;
use super::{url_scheme, Render};
use crate::options::GoogleSearchMode;

/// uBlock Origin static filter syntax.
///
/// Domains become hostname-anchored network filters (`||host^`). Paths
/// without a scheme are anchored the same way; full URLs are plain address
/// patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UBlockOrigin {
    pub google_search: Option<GoogleSearchMode>,
}

impl Render for UBlockOrigin {
    fn comment_marker(&self) -> char {
        '!'
    }

    fn write_entry(&self, entry: &Entry, out: &mut String) {
        match entry.match_method() {
            MatchMethod::Literal => {
                let value = entry.value();
                if !entry.is_domain() && url_scheme(value).is_some() {
                    out.push_str(value);
                } else {
                    out.push_str("||");
                    out.push_str(value);
                    out.push('^');
                }
                out.push('\n');
            }
        }
    }

    fn write_trailer(&self, entries: &[&Entry], out: &mut String) {
        if let Some(mode) = self.google_search {
            for rule in google_search_rules(entries, mode) {
                out.push_str(&rule);
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;

    fn render(entries: &[Entry], headers: &[Header], google_search: Option<GoogleSearchMode>) -> String {
        let refs: Vec<&Entry> = entries.iter().collect();
        UBlockOrigin { google_search }.render(&refs, headers)
    }

    #[test]
    fn renders_reference_example() {
        let entries = [Entry::domain("bad.example"), Entry::path("https://x.example/bad")];
        let text = render(&entries, &[Header::text("test list")], None);
        assert_eq!(text, "! test list\n||bad.example^\nhttps://x.example/bad\n");
    }

    #[test]
    fn anchors_path_fragments() {
        let entries = [Entry::path("x.example/ads/"), Entry::path("http://y.example/")];
        assert_eq!(
            render(&entries, &[], None),
            "||x.example/ads/^\nhttp://y.example/\n"
        );
    }

    #[test]
    fn embedded_url_keeps_host_anchor() {
        let entries = [Entry::path("x.example/redirect?to=https://y.example/")];
        assert_eq!(
            render(&entries, &[], None),
            "||x.example/redirect?to=https://y.example/^\n"
        );
    }

    #[test]
    fn appends_google_rules_after_block_rules() {
        let entries = [Entry::domain("bad.example")];
        let text = render(&entries, &[], Some(GoogleSearchMode::Prefix));
        assert_eq!(
            text,
            concat!(
                "||bad.example^\n",
                "www.google.*##.g:has(a[href^=\"bad.example\"])\n",
                "www.google.*##a[href^=\"bad.example\"]:upward(1)\n",
            )
        );
    }
}
