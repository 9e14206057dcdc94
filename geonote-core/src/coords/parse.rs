//! Tokenizer and grammar for hand-entered DMS text.
//!
//! The grammar is `number number number hemisphere`, where any run of
//! separators may appear between the parts. It is searched for left to right
//! and the first match wins, so surrounding labels like `Lat:` are ignored.

use tracing::debug;

use super::{Dms, Hemisphere};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    /// A maximal run of ASCII digits.
    Number(&'a str),
    Hemisphere(Hemisphere),
    Separator,
    Other(char),
}

/// Whitespace plus the degree/minute/second marks people actually type,
/// including the typographic primes that phones substitute.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '°' | 'º' | '\'' | '"' | '′' | '″' | '’' | '”')
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = start + 1;
            while let Some(&(i, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = i + 1;
                chars.next();
            }
            tokens.push(Token::Number(&text[start..end]));
        } else if is_separator(c) {
            tokens.push(Token::Separator);
        } else if let Some(hemisphere) = Hemisphere::from_letter(c) {
            tokens.push(Token::Hemisphere(hemisphere));
        } else {
            tokens.push(Token::Other(c));
        }
    }

    tokens
}

/// Find the first `D M S H` sequence in `text`.
pub(super) fn parse_dms(text: &str) -> Option<Dms> {
    let significant: Vec<Token<'_>> = tokenize(text)
        .into_iter()
        .filter(|t| !matches!(t, Token::Separator))
        .collect();

    let found = significant.windows(4).find_map(|window| match window {
        [
            Token::Number(d),
            Token::Number(m),
            Token::Number(s),
            Token::Hemisphere(h),
        ] => Some(Dms {
            // Digit runs too long for u32 cannot be a coordinate; keep looking.
            degrees: d.parse().ok()?,
            minutes: m.parse().ok()?,
            seconds: s.parse().ok()?,
            hemisphere: *h,
        }),
        _ => None,
    });

    if found.is_none() {
        debug!(input = text, "no DMS pattern found");
    }

    found
}
