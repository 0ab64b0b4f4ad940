// src/parser/lines.rs

//! Line splitting for os-release content
//!
//! Accepts `\n`, `\r\n` and bare `\r` terminators so files copied from other
//! systems, or captured through a remote shell, split the same way.

/// Iterator over the physical lines of a string, terminators excluded
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split content into lines
///
/// Empty input yields no lines. A trailing terminator does not produce an
/// extra empty line, matching `str::lines`.
pub fn split_lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(pos) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..pos];
        let terminator_len = if self.rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[pos + terminator_len..];
        Some(line)
    }
}
