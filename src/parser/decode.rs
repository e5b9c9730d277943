//! Record decoding
//!
//! Turns the body of one extracted record into a [`ParsedNode`]. The grammar
//! is deliberately loose: items are separated by commas outside braces, each
//! item is `key: value` split at the first colon, and the `ws-opts` block is
//! flattened into dotted keys.

use log::debug;

use super::DecodeError;
use crate::models::{
    NodeValue, ParsedNode, IDENTITY_KEYS, INTEGER_KEYS, WS_OPTS_PREFIX, WS_PATH_KEY,
};
use crate::utils::{clean_value, strip_braces};

/// Decode one record (with or without its surrounding braces).
pub fn decode_record(raw: &str) -> Result<ParsedNode, DecodeError> {
    let body = strip_braces(raw);
    if body.is_empty() {
        return Err(DecodeError::EmptyRecord);
    }

    let mut node = ParsedNode::default();

    for item in split_top_level(body) {
        let Some((key, value)) = item.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = clean_value(value);

        if key == WS_OPTS_PREFIX {
            decode_ws_opts(value, &mut node);
            continue;
        }

        node.insert(key, NodeValue::from(value));
    }

    for key in INTEGER_KEYS {
        coerce_integer(&mut node, key)?;
    }

    for key in IDENTITY_KEYS {
        if !node.has_value(key) {
            return Err(DecodeError::MissingField(key));
        }
    }

    Ok(node)
}

fn coerce_integer(node: &mut ParsedNode, key: &'static str) -> Result<(), DecodeError> {
    let Some(raw) = node.text(key) else {
        return Ok(());
    };
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| DecodeError::InvalidInteger {
            key,
            value: raw.clone(),
        })?;
    node.insert(key, NodeValue::Integer(value));
    Ok(())
}

/// Split a record body on commas that sit outside any `{ ... }` span.
///
/// An unclosed `{` keeps everything after it in the same item.
pub fn split_top_level(body: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&body[start..]);

    items
}

/// Flatten a `ws-opts` value into `ws-opts.path` and `ws-opts.headers.*`.
fn decode_ws_opts(value: &str, node: &mut ParsedNode) {
    for (key, nested) in PairScanner::new(value) {
        match key {
            "path" => {
                let path = clean_value(nested.content());
                debug!("Extracted ws-opts path: {}", path);
                node.insert(WS_PATH_KEY, NodeValue::from(path));
            }
            "headers" => {
                for (header, header_value) in PairScanner::new(nested.content()) {
                    // Deeper blocks are not supported.
                    if let NestedValue::Scalar(v) = header_value {
                        node.insert(
                            format!("{}.headers.{}", WS_OPTS_PREFIX, header),
                            NodeValue::from(clean_value(v)),
                        );
                    }
                }
            }
            other => debug!("Ignoring ws-opts key: {}", other),
        }
    }
}

/// Value found by [`PairScanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedValue<'a> {
    /// Text up to the next `,`, `{` or `}`.
    Scalar(&'a str),
    /// Contents of a `{ ... }` block, up to the matching `}` or end of input.
    Block(&'a str),
}

impl<'a> NestedValue<'a> {
    pub fn content(&self) -> &'a str {
        match self {
            NestedValue::Scalar(s) | NestedValue::Block(s) => s,
        }
    }
}

/// Finds `word: value` pairs anywhere in a nested block.
///
/// Anything that is not a word followed by a colon is skipped, which makes
/// stray braces, quotes and separators harmless.
pub struct PairScanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> PairScanner<'a> {
    pub fn new(src: &'a str) -> Self {
        PairScanner { src, pos: 0 }
    }

    fn advance_while(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        self.src[from..]
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.src.len(), |(i, _)| from + i)
    }

    fn block_end(&self, open: usize) -> (usize, usize) {
        let mut depth = 0usize;
        for (i, c) in self.src[open..].char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return (open + i, open + i + 1);
                    }
                }
                _ => {}
            }
        }
        (self.src.len(), self.src.len())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

impl<'a> Iterator for PairScanner<'a> {
    type Item = (&'a str, NestedValue<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word_start = self.advance_while(self.pos, |c| !is_word_char(c));
            if word_start >= self.src.len() {
                self.pos = self.src.len();
                return None;
            }
            let word_end = self.advance_while(word_start, is_word_char);
            let colon = self.advance_while(word_end, char::is_whitespace);

            if !self.src[colon..].starts_with(':') {
                self.pos = word_end;
                continue;
            }

            let key = &self.src[word_start..word_end];
            let value_start = self.advance_while(colon + 1, char::is_whitespace);

            if self.src[value_start..].starts_with('{') {
                let (close, next) = self.block_end(value_start);
                self.pos = next;
                return Some((key, NestedValue::Block(&self.src[value_start + 1..close])));
            }

            let value_end = self.advance_while(value_start, |c| !matches!(c, ',' | '{' | '}'));
            self.pos = value_end;
            return Some((key, NestedValue::Scalar(&self.src[value_start..value_end])));
        }
    }
}
