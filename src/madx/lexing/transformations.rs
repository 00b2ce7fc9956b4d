//! Token stream transformations
//!
//! Post-processing steps over a collected token list. None of them change the text a list
//! covers; they only regroup it.

use crate::madx::token::Token;

/// Merge runs of adjacent tokens that share a kind into single tokens.
///
/// A single scan step can emit several tokens of one kind in a row (a comment body scanned in
/// chunks, for instance). Formats that emit one element per token produce smaller output
/// after merging. `source` must be the text the tokens were produced from.
pub fn merge_adjacent<'a>(
    source: &'a str,
    tokens: impl IntoIterator<Item = Token<'a>>,
) -> Vec<Token<'a>> {
    let mut merged: Vec<Token<'a>> = Vec::new();
    for token in tokens {
        match merged.last_mut() {
            Some(last) if last.kind == token.kind && last.end() == token.start() => {
                *last = Token::new(last.kind, source, last.start()..token.end());
            }
            _ => merged.push(token),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::madx::lexing::tokenize;
    use crate::madx::token::TokenKind;

    #[test]
    fn test_merges_same_kind_runs() {
        let source = "/* a * b */";
        let raw: Vec<_> = tokenize(source).collect();
        assert!(raw.len() > 1);

        let merged = merge_adjacent(source, raw);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].kind, TokenKind::CommentMultiline);
        assert_eq!(merged[0].text, source);
        assert_eq!(merged[0].span, 0..source.len());
    }

    #[test]
    fn test_keeps_kind_boundaries() {
        let source = "x = 1;";
        let merged = merge_adjacent(source, tokenize(source));
        let kinds: Vec<_> = merged.iter().map(|t| t.kind).collect();
        assert!(kinds.windows(2).all(|pair| pair[0] != pair[1]));
        let text: String = merged.iter().map(|t| t.text).collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_does_not_bridge_gaps() {
        let source = "abc";
        let tokens = vec![
            Token::new(TokenKind::Text, source, 0..1),
            Token::new(TokenKind::Text, source, 2..3),
        ];
        assert_eq!(merge_adjacent(source, tokens).len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(merge_adjacent("", Vec::new()).is_empty());
    }
}
