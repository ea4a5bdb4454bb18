//! Reads a rendered list back into entries.
//!
//! Only the shapes the renderers emit are recognized. Comments and cosmetic
//! filters are skipped, so the result holds one entry per network rule.
//! uBlacklist lines that are not valid match patterns are skipped too.
//!
//! A path entry without a `/` renders exactly like a domain in both
//! dialects and reads back as a domain.

use dl_core::{Entry, Target};

/// Parse list text produced for `target`.
pub fn read_list(target: Target, text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || is_comment_line(target, line) {
            continue;
        }

        let entry = match target {
            Target::UBlockOrigin => {
                if is_cosmetic_line(line) {
                    continue;
                }
                parse_ublock_line(line)
            }
            Target::UBlacklist => match parse_ublacklist_line(line) {
                Some(entry) => entry,
                None => {
                    log::warn!("not a uBlacklist match pattern: {line}");
                    continue;
                }
            },
        };
        entries.push(entry);
    }

    entries
}

fn is_comment_line(target: Target, line: &str) -> bool {
    match target {
        Target::UBlockOrigin => line.starts_with('!') || line.starts_with('['),
        Target::UBlacklist => line.starts_with('#'),
    }
}

fn is_cosmetic_line(line: &str) -> bool {
    line.contains("##") || line.contains("#@#") || line.contains("#?#")
}

fn parse_ublock_line(line: &str) -> Entry {
    let Some(rest) = line.strip_prefix("||") else {
        return Entry::path(line);
    };
    let rest = rest.strip_suffix('^').unwrap_or(rest);

    if rest.contains('/') {
        Entry::path(rest)
    } else {
        Entry::domain(rest)
    }
}

fn parse_ublacklist_line(line: &str) -> Option<Entry> {
    let (scheme, rest) = line.split_once("://")?;
    if !matches!(scheme, "*" | "http" | "https") {
        return None;
    }

    let (host, _) = rest.split_once('/')?;
    if host.is_empty() {
        return None;
    }

    if scheme != "*" {
        return Some(Entry::path(line));
    }
    match rest.strip_suffix("/*") {
        Some(h) if h == host => Some(Entry::domain(host)),
        _ => Some(Entry::path(rest)),
    }
}
