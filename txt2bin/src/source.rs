//! Whitespace-separated decimal numbers from a text source.

/// Iterates the numbers in `text`, skipping tokens that are not a `u32`.
///
/// A bad token does not end the input: reading carries on with the next
/// token, and the bad ones are only counted.
///
/// ```
/// use txt2bin::source::Numbers;
///
/// let mut numbers = Numbers::new(b"5 12\n x 64\t-3");
/// let parsed: Vec<u32> = numbers.by_ref().collect();
/// assert_eq!(parsed, vec![5, 12, 64]);
/// assert_eq!(numbers.malformed(), 2);
/// ```
pub struct Numbers<'a> {
    tokens: std::slice::Split<'a, u8, fn(&u8) -> bool>,
    tokens_seen: usize,
    malformed: usize,
}

impl<'a> Numbers<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        let is_space: fn(&u8) -> bool = u8::is_ascii_whitespace;
        Self {
            tokens: text.split(is_space),
            tokens_seen: 0,
            malformed: 0,
        }
    }

    /// Tokens read so far, well-formed or not.
    pub fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

impl Iterator for Numbers<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        for token in self.tokens.by_ref() {
            if token.is_empty() {
                continue;
            }
            self.tokens_seen += 1;
            match std::str::from_utf8(token).ok().and_then(|s| s.parse().ok()) {
                Some(n) => return Some(n),
                None => {
                    tracing::trace!(token = %String::from_utf8_lossy(token), "skipping malformed token");
                    self.malformed += 1;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens() {
        let mut n = Numbers::new(b"  1\r\n2 3.5 4294967296 4294967295 \n");
        let all: Vec<u32> = n.by_ref().collect();
        assert_eq!(all, vec![1, 2, u32::MAX]);
        assert_eq!(n.tokens_seen(), 5);
        assert_eq!(n.malformed(), 2);
    }

    #[test]
    fn keeps_reading_past_bad_token() {
        let mut n = Numbers::new(b"3 oops 4 5");
        assert_eq!(n.by_ref().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(n.tokens_seen(), 4);
        assert_eq!(n.malformed(), 1);
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(Numbers::new(b"").count(), 0);
        let mut n = Numbers::new(b" \n\t ");
        assert_eq!(n.next(), None);
        assert_eq!(n.tokens_seen(), 0);
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut n = Numbers::new(b"7 \xFF\xFE 8");
        assert_eq!(n.by_ref().collect::<Vec<_>>(), vec![7, 8]);
        assert_eq!(n.malformed(), 1);
    }
}
