use dl_core::{Entry, MatchMethod};

use crate::options::GoogleSearchMode;

/// uBO cosmetic filters hiding Google results that link to any entry.
///
/// Two rules per entry: one hides the whole result card, the other walks up
/// from the bare link for layouts without a `.g` container.
pub fn google_search_rules(entries: &[&Entry], mode: GoogleSearchMode) -> Vec<String> {
    let op = match mode {
        GoogleSearchMode::Prefix => "^=",
        GoogleSearchMode::Fuzzy => "*=",
    };

    let mut rules = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        let href = match entry.match_method() {
            MatchMethod::Literal => escape_css_string(entry.value()),
        };
        rules.push(format!(r#"www.google.*##.g:has(a[href{op}"{href}"])"#));
        rules.push(format!(r#"www.google.*##a[href{op}"{href}"]:upward(1)"#));
    }

    log::debug!("generated {} google search rules", rules.len());
    rules
}

fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_uses_contains_operator() {
        let entries = [Entry::path("x.example/bad")];
        let refs: Vec<&Entry> = entries.iter().collect();
        assert_eq!(
            google_search_rules(&refs, GoogleSearchMode::Fuzzy),
            vec![
                r#"www.google.*##.g:has(a[href*="x.example/bad"])"#.to_string(),
                r#"www.google.*##a[href*="x.example/bad"]:upward(1)"#.to_string(),
            ]
        );
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(escape_css_string(r#"a"b\c"#), r#"a\"b\\c"#);
    }
}
