//! Comment header lines placed above the rules.

use std::str::FromStr;

use crate::options::OptionsError;

/// One header supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Free text, emitted verbatim
    Text(String),
    /// Metadata such as `Title: My list`
    Attribute { key: String, value: String },
}

impl Header {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Write this header as comment lines. Multi-line text becomes one
    /// comment line per input line so nothing leaks into the rule block.
    pub fn write_to(&self, marker: char, out: &mut String) {
        for line in comment_lines(&self.comment_text()) {
            push_comment(marker, line, out);
        }
    }

    fn comment_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Attribute { key, value } => format!("{key}: {value}"),
        }
    }
}

impl FromStr for Header {
    type Err = OptionsError;

    /// Parse a `KEY=VALUE` attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| OptionsError::InvalidAttribute(s.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(OptionsError::InvalidAttribute(s.to_string()));
        }

        Ok(Self::Attribute {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// Split on `\n`, `\r\n` and lone `\r`. A single trailing break is dropped;
/// empty text still yields one (empty) line.
fn comment_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split("\r\n")
        .flat_map(|part| part.split(['\n', '\r']))
        .collect();
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn push_comment(marker: char, text: &str, out: &mut String) {
    out.push(marker);
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
}

/// Number of lines `headers` occupy once written.
pub fn header_line_count(headers: &[Header]) -> usize {
    headers
        .iter()
        .map(|header| comment_lines(&header.comment_text()).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(header: &Header, marker: char) -> String {
        let mut out = String::new();
        header.write_to(marker, &mut out);
        out
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(written(&Header::text("test list"), '!'), "! test list\n");
        assert_eq!(written(&Header::text("a=b"), '#'), "# a=b\n");
        assert_eq!(written(&Header::text(""), '!'), "!\n");
    }

    #[test]
    fn multi_line_text_stays_commented() {
        let header = Header::text("first\nsecond");
        assert_eq!(written(&header, '#'), "# first\n# second\n");
        assert_eq!(header_line_count(&[header, Header::text("")]), 3);
    }

    #[test]
    fn carriage_returns_split_lines() {
        let header = Header::text("one\rtwo\r\nthree\n");
        assert_eq!(written(&header, '!'), "! one\n! two\n! three\n");
        assert_eq!(header_line_count(&[header]), 3);

        let header: Header = "Title=a\r||evil.example^".parse().expect("attribute should parse");
        assert_eq!(written(&header, '!'), "! Title: a\n! ||evil.example^\n");
    }

    #[test]
    fn attribute_parsing() {
        let header: Header = "Title = My deny list".parse().expect("attribute should parse");
        assert_eq!(
            header,
            Header::Attribute {
                key: "Title".to_string(),
                value: "My deny list".to_string(),
            }
        );
        assert_eq!(written(&header, '!'), "! Title: My deny list\n");

        let header: Header = "Expires=4 days (update frequency)".parse().expect("attribute should parse");
        assert_eq!(written(&header, '!'), "! Expires: 4 days (update frequency)\n");
    }

    #[test]
    fn attribute_requires_key() {
        assert!("no separator".parse::<Header>().is_err());
        assert!("=value".parse::<Header>().is_err());
    }
}
