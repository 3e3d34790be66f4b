//! # PARAMETER LIST SCANNER
//!
//! **PURPOSE**: Recover the ordered parameter names from a callable's declaration text.
//!
//! The scan begins just after the first `(` and stops at the matching `)`.
//! Comment bodies are only scanned for their own terminator. Any token that
//! would introduce a default value, rest capture or destructuring pattern
//! aborts the scan, since none of them maps to a single injectable name.

use crate::tokenizer::types::{Extraction, UNTERMINATED_PARAMETER_LIST};

const OPEN_PARENTHESIS: char = '(';
const CLOSE_PARENTHESIS: char = ')';
const SEPARATOR: char = ',';
const LINE_COMMENT_START: &str = "//";
const LINE_COMMENT_END: &str = "\n";
const BLOCK_COMMENT_START: &str = "/*";
const BLOCK_COMMENT_END: &str = "*/";

const UNSUPPORTED_PARAMETER_NAMES_SYNTAX: [&str; 6] = ["=", "...", "{", "}", "[", "]"];

pub fn extract_from_source(source: &str) -> Extraction {
    // No parenthesis at all: scan from the beginning, as for `a => a`.
    let start = source
        .find(OPEN_PARENTHESIS)
        .map_or(0, |index| index + OPEN_PARENTHESIS.len_utf8());

    Scanner::new(source, start).run()
}

struct Scanner<'a> {
    source: &'a str,
    position: usize,
    in_line_comment: bool,
    in_block_comment: bool,
    current: String,
    names: Vec<String>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, position: usize) -> Self {
        Self {
            source,
            position,
            in_line_comment: false,
            in_block_comment: false,
            current: String::new(),
            names: Vec::new(),
        }
    }

    fn run(mut self) -> Extraction {
        while let Some(ch) = self.rest().chars().next() {
            if !self.in_comment() {
                if let Some(token) = self.unsupported_token() {
                    return Extraction::failed(format!(
                        "Unsupported parameter names syntax {}",
                        token
                    ));
                }

                if self.consume(LINE_COMMENT_START) {
                    self.in_line_comment = true;
                    continue;
                }

                if self.consume(BLOCK_COMMENT_START) {
                    self.in_block_comment = true;
                    continue;
                }

                match ch {
                    SEPARATOR => self.flush(),
                    CLOSE_PARENTHESIS => {
                        self.flush();
                        return Extraction::succeeded(self.names);
                    }
                    _ => self.current.push(ch),
                }
            } else if self.in_line_comment {
                if self.consume(LINE_COMMENT_END) {
                    self.in_line_comment = false;
                    continue;
                }
            } else if self.consume(BLOCK_COMMENT_END) {
                self.in_block_comment = false;
                continue;
            }

            self.position += ch.len_utf8();
        }

        Extraction::failed(UNTERMINATED_PARAMETER_LIST)
    }

    fn rest(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.position..]
    }

    fn in_comment(&self) -> bool {
        self.in_line_comment || self.in_block_comment
    }

    fn unsupported_token(&self) -> Option<&'static str> {
        let rest = self.rest();
        UNSUPPORTED_PARAMETER_NAMES_SYNTAX
            .iter()
            .copied()
            .find(|token| rest.starts_with(token))
    }

    fn consume(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.position += token.len();
            true
        } else {
            false
        }
    }

    fn flush(&mut self) {
        let name = self.current.trim();
        if !name.is_empty() {
            self.names.push(name.to_string());
        }
        self.current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<String> {
        let result = extract_from_source(source);
        assert!(result.success, "unexpected failure: {:?}", result.message);
        result.names
    }

    fn failure(source: &str) -> String {
        let result = extract_from_source(source);
        assert!(!result.success);
        assert!(result.names.is_empty());
        result.message.unwrap()
    }

    // **PLAIN PARAMETER LISTS**
    #[test]
    fn test_extract_simple_parameters() {
        assert_eq!(names("function (a, b) {}"), vec!["a", "b"]);
        assert_eq!(names("function named(db,logger,cache) { return db; }"), vec!["db", "logger", "cache"]);
    }

    #[test]
    fn test_extract_empty_parameter_list() {
        let result = extract_from_source("function () {}");
        assert_eq!(result, Extraction::succeeded(vec![]));
    }

    #[test]
    fn test_extract_arrow_function() {
        assert_eq!(names("(request, response) => response"), vec!["request", "response"]);
    }

    #[test]
    fn test_extract_without_parenthesis_scans_from_start() {
        assert_eq!(failure("a => a"), "Unsupported parameter names syntax =");
    }

    #[test]
    fn test_extract_whitespace_and_newlines() {
        assert_eq!(names("function (\n    first,\n\tsecond\n) {}"), vec!["first", "second"]);
    }

    #[test]
    fn test_extract_trailing_separator() {
        assert_eq!(names("function (a, b,) {}"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_unicode_names() {
        assert_eq!(names("function (données, 名前) {}"), vec!["données", "名前"]);
    }

    // **COMMENTS**
    #[test]
    fn test_extract_skips_block_comments() {
        assert_eq!(names("function (a, /* b is unused */ b) {}"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_skips_line_comments() {
        let source = "function (db, // the database\n logger // sink\n) {}";
        assert_eq!(names(source), vec!["db", "logger"]);
    }

    #[test]
    fn test_extract_ignores_syntax_inside_comments() {
        let source = "function (a /* = 1, ...rest, {x} */, b // [c], d)\n) {}";
        assert_eq!(names(source), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_multiline_block_comment() {
        let source = "function (\n/*\n * a, b\n */\nc) {}";
        assert_eq!(names(source), vec!["c"]);
    }

    #[test]
    fn test_extract_comment_only_list() {
        assert_eq!(names("function (/* nothing */) {}"), Vec::<String>::new());
    }

    // **UNSUPPORTED SYNTAX**
    #[test]
    fn test_extract_rejects_default_values() {
        assert_eq!(failure("function (a = 1) {}"), "Unsupported parameter names syntax =");
    }

    #[test]
    fn test_extract_rejects_rest_parameters() {
        assert_eq!(failure("function (a, ...rest) {}"), "Unsupported parameter names syntax ...");
    }

    #[test]
    fn test_extract_rejects_destructuring() {
        assert_eq!(failure("function ({ a, b }) {}"), "Unsupported parameter names syntax {");
        assert_eq!(failure("function ([first]) {}"), "Unsupported parameter names syntax [");
    }

    #[test]
    fn test_extract_rejects_syntax_right_after_comment() {
        assert_eq!(failure("function (a /* x */= 1) {}"), "Unsupported parameter names syntax =");
    }

    // **MALFORMED INPUT**
    #[test]
    fn test_extract_unterminated_list() {
        assert_eq!(failure("function (a, b"), UNTERMINATED_PARAMETER_LIST);
        assert_eq!(failure("function (a /* never closed ) {}"), UNTERMINATED_PARAMETER_LIST);
        assert_eq!(failure(""), UNTERMINATED_PARAMETER_LIST);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let source = "function (a, // x\n b /* y */, c) {}";
        assert_eq!(extract_from_source(source), extract_from_source(source));
    }
}
