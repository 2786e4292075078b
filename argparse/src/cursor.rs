//! One-token lookahead stream over command-line tokens.

use crate::{Error, Result};

/// Reads tokens in order, with room for a single pushed-back token.
///
/// A pushed-back token is always handed out before the read position moves
/// again. Pushing a second token replaces the first.
#[derive(Debug)]
pub struct Cursor<'a> {
    items: &'a [String],
    pos: usize,
    pushed: Option<String>,
}

impl<'a> Cursor<'a> {
    pub fn new(items: &'a [String]) -> Self {
        Cursor {
            items,
            pos: 0,
            pushed: None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pushed.is_none() && self.pos >= self.items.len()
    }

    /// Consume and return the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<String> {
        if let Some(s) = self.pushed.take() {
            return Ok(s);
        }
        let s = self.items.get(self.pos).ok_or(Error::ExhaustedInput)?;
        self.pos += 1;
        Ok(s.clone())
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<&str> {
        match self.pushed {
            Some(ref s) => Some(s.as_str()),
            None => self.items.get(self.pos).map(String::as_str),
        }
    }

    pub fn push(&mut self, token: String) {
        self.pushed = Some(token);
    }

    /// Remove the pushed-back token, if one is still waiting.
    pub fn take_pushed(&mut self) -> Option<String> {
        self.pushed.take()
    }

    /// Step the read position back over the last token taken from the input.
    pub(crate) fn back_up(&mut self) {
        debug_assert!(self.pos > 0, "back_up past the first token");
        self.pos = self.pos.saturating_sub(1);
    }

    /// Consume the next token unless `stop` rejects it, in which case the
    /// cursor is left as it was.
    pub fn next_unless<F: Fn(&str) -> bool>(&mut self, stop: F) -> Option<String> {
        if let Some(s) = self.pushed.take() {
            if stop(&s) {
                self.pushed = Some(s);
                return None;
            }
            return Some(s);
        }
        let s = self.next().ok()?;
        if stop(&s) {
            self.back_up();
            return None;
        }
        Some(s)
    }

    /// Everything not consumed yet, pushback first.
    pub fn into_remaining(self) -> Vec<String> {
        let start = self.pos.min(self.items.len());
        let mut rest: Vec<String> = self.pushed.into_iter().collect();
        rest.extend_from_slice(&self.items[start..]);
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn next_walks_in_order_then_fails() {
        let items = tokens(&["a", "b"]);
        let mut c = Cursor::new(&items);
        assert_eq!(c.next().unwrap(), "a");
        assert_eq!(c.next().unwrap(), "b");
        assert!(c.is_exhausted());
        assert!(matches!(c.next(), Err(Error::ExhaustedInput)));
    }

    #[test]
    fn peek_does_not_consume() {
        let items = tokens(&["a"]);
        let mut c = Cursor::new(&items);
        assert_eq!(c.peek(), Some("a"));
        assert_eq!(c.peek(), Some("a"));
        assert_eq!(c.next().unwrap(), "a");
        assert_eq!(c.peek(), None);
    }

    #[test]
    fn pushback_comes_first() {
        let items = tokens(&["a"]);
        let mut c = Cursor::new(&items);
        c.push("x".to_string());
        assert!(!c.is_exhausted());
        assert_eq!(c.peek(), Some("x"));
        assert_eq!(c.next().unwrap(), "x");
        assert_eq!(c.next().unwrap(), "a");
    }

    #[test]
    fn pushback_on_empty_input() {
        let items: Vec<String> = Vec::new();
        let mut c = Cursor::new(&items);
        assert!(c.is_exhausted());
        c.push(String::new());
        assert_eq!(c.peek(), Some(""));
        assert_eq!(c.next().unwrap(), "");
        assert!(c.is_exhausted());
    }

    #[test]
    fn second_push_overwrites() {
        let items: Vec<String> = Vec::new();
        let mut c = Cursor::new(&items);
        c.push("one".to_string());
        c.push("two".to_string());
        assert_eq!(c.next().unwrap(), "two");
        assert!(c.is_exhausted());
    }

    #[test]
    fn back_up_rereads() {
        let items = tokens(&["a", "b"]);
        let mut c = Cursor::new(&items);
        c.next().unwrap();
        c.back_up();
        assert_eq!(c.next().unwrap(), "a");
    }

    #[test]
    fn next_unless_leaves_rejected_tokens() {
        let items = tokens(&["a", "-b", "c"]);
        let mut c = Cursor::new(&items);
        let dash = |t: &str| t.starts_with('-');
        assert_eq!(c.next_unless(dash), Some("a".to_string()));
        assert_eq!(c.next_unless(dash), None);
        assert_eq!(c.peek(), Some("-b"));

        c.push("-z".to_string());
        assert_eq!(c.next_unless(dash), None);
        assert_eq!(c.take_pushed(), Some("-z".to_string()));
        assert_eq!(c.next().unwrap(), "-b");
        assert_eq!(c.next_unless(dash), Some("c".to_string()));
        assert_eq!(c.next_unless(dash), None);
        assert!(c.is_exhausted());
    }

    #[test]
    fn remaining_includes_pushback() {
        let items = tokens(&["a", "b", "c"]);
        let mut c = Cursor::new(&items);
        c.next().unwrap();
        c.push("z".to_string());
        assert_eq!(c.into_remaining(), tokens(&["z", "b", "c"]));
    }
}
