use std::collections::HashMap;
use std::io;
use std::io::ErrorKind;

use lazy_static::lazy_static;
use regex::Regex;

const DELIMITER: &str = "---";

/// Result of splitting one content file: the key/value metadata block
/// and the Markdown body that follows it.
pub struct FrontMatter {
    pub fields: HashMap<String, String>,
    pub body: String,
}

/// Example of a content file
/// ---
/// title: Building a Terminal Emulator
/// date: 2024-03-18
/// description: Notes from writing a VT100 parser
/// ---
///
/// # Building a Terminal Emulator
pub fn parse_front_matter(raw: &str) -> io::Result<FrontMatter> {
    let mut lines = raw.lines();

    let Some(first) = lines.next() else {
        return Ok(FrontMatter {
            fields: HashMap::new(),
            body: String::new(),
        });
    };

    if first.trim() != DELIMITER {
        // No metadata block: the whole file is body
        return Ok(FrontMatter {
            fields: HashMap::new(),
            body: raw.to_string(),
        });
    }

    let mut fields = HashMap::new();
    let mut closed = false;

    for line in lines.by_ref() {
        if line.trim() == DELIMITER {
            closed = true;
            break;
        }

        if let Some((key, value)) = extract_field(line) {
            fields.insert(key.to_string(), unquote(value).to_string());
        }
    }

    if !closed {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "Unterminated front matter block".to_string(),
        ));
    }

    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }

    Ok(FrontMatter { fields, body })
}

fn extract_field(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref FIELD_REGEX: Regex =
            Regex::new(r"^(?P<key>[A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(?P<value>.*)$").unwrap();
    }

    FIELD_REGEX.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str().trim());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None,
        }
    })
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        let (first, last) = (bytes[0], bytes[value.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use crate::test_data::POST_ALPHA;

    use super::*;

    #[test]
    fn test_extract_field() {
        let res = extract_field("title: Hello World");
        assert_eq!(res, Some(("title", "Hello World")));
        let res = extract_field("date:   2024-01-01");
        assert_eq!(res, Some(("date", "2024-01-01")));
        let res = extract_field("repo: github.com/someone/thing");
        assert_eq!(res, Some(("repo", "github.com/someone/thing")));

        let res = extract_field("not a field line");
        assert!(res.is_none());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""Quoted title""#), "Quoted title");
        assert_eq!(unquote("'Single'"), "Single");
        assert_eq!(unquote("Plain"), "Plain");
        assert_eq!(unquote(r#""Mismatched'"#), r#""Mismatched'"#);
        assert_eq!(unquote(r#"""#), r#"""#);
    }

    #[test]
    fn test_parse_full_file() {
        let parsed = parse_front_matter(POST_ALPHA).unwrap();
        assert_eq!(parsed.fields.get("title").unwrap(), "Alpha");
        assert_eq!(parsed.fields.get("date").unwrap(), "2024-01-01");
        assert_eq!(parsed.fields.get("description").unwrap(), "First post");
        assert!(parsed.body.contains("Alpha body text."));
    }

    #[test]
    fn test_no_front_matter_is_all_body() {
        let raw = "Just a body.\nNo metadata here.\n";
        let parsed = parse_front_matter(raw).unwrap();
        assert!(parsed.fields.is_empty());
        assert_eq!(parsed.body, raw);
    }

    #[test]
    fn test_unterminated_block_fails() {
        let raw = "---\ntitle: Broken\ndate: 2024-01-01\n\nNo closing delimiter";
        let res = parse_front_matter(raw);
        assert!(res.is_err());
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_front_matter("").unwrap();
        assert!(parsed.fields.is_empty());
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_kept_verbatim() {
        let raw = "---\ntitle: T\ndate: 2024-05-05\nweird-key: some value\n---\nBody\n";
        let parsed = parse_front_matter(raw).unwrap();
        assert_eq!(parsed.fields.get("weird-key").unwrap(), "some value");
    }
}
