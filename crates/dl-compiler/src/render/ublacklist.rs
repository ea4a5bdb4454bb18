use dl_core::{Entry, MatchMethod};

use super::{url_scheme, Render};

/// uBlacklist match-pattern syntax.
///
/// Patterns are `(*|http|https)://host/path` and the path is mandatory, so
/// bare hosts get a `/*` path. URLs with any other scheme are written as-is
/// and fail the read-back check in [`crate::compile_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UBlacklist;

impl Render for UBlacklist {
    fn comment_marker(&self) -> char {
        '#'
    }

    fn write_entry(&self, entry: &Entry, out: &mut String) {
        match entry.match_method() {
            MatchMethod::Literal => {
                let value = entry.value();
                match entry {
                    Entry::Domain { .. } => {
                        out.push_str("*://");
                        out.push_str(value);
                        out.push_str("/*");
                    }
                    Entry::Path { .. } => {
                        let host_and_path = match url_scheme(value) {
                            Some(scheme) => {
                                out.push_str(value);
                                &value[scheme.len() + 3..]
                            }
                            None => {
                                out.push_str("*://");
                                out.push_str(value);
                                value
                            }
                        };
                        if !host_and_path.contains('/') {
                            out.push_str("/*");
                        }
                    }
                }
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;

    fn render(entries: &[Entry], headers: &[Header]) -> String {
        let refs: Vec<&Entry> = entries.iter().collect();
        UBlacklist.render(&refs, headers)
    }

    #[test]
    fn renders_reference_example_without_headers() {
        let entries = [Entry::domain("bad.example"), Entry::path("https://x.example/bad")];
        assert_eq!(render(&entries, &[]), "*://bad.example/*\nhttps://x.example/bad\n");
    }

    #[test]
    fn path_fragments_get_any_scheme() {
        let entries = [Entry::path("x.example/ads/banner")];
        assert_eq!(render(&entries, &[]), "*://x.example/ads/banner\n");
    }

    #[test]
    fn embedded_url_keeps_scheme_wildcard() {
        let entries = [Entry::path("x.example/redirect?to=https://y.example/")];
        assert_eq!(
            render(&entries, &[]),
            "*://x.example/redirect?to=https://y.example/\n"
        );
    }

    #[test]
    fn bare_hosts_get_a_path() {
        let entries = [Entry::path("https://x.example"), Entry::path("x.example")];
        assert_eq!(render(&entries, &[]), "https://x.example/*\n*://x.example/*\n");
    }

    #[test]
    fn other_schemes_are_written_as_is() {
        let entries = [Entry::path("ftp://x.example/a")];
        assert_eq!(render(&entries, &[]), "ftp://x.example/a\n");
    }

    #[test]
    fn headers_use_hash_comments() {
        let headers = [Header::text("list"), "Name=Deny".parse::<Header>().expect("attribute should parse")];
        let text = render(&[Entry::domain("a.example")], &headers);
        assert_eq!(text, "# list\n# Name: Deny\n*://a.example/*\n");
    }
}
