//! Splits a raw command line into arguments using Windows-style quoting.
//!
//! Only a token that *starts* with `"` is quoted. Inside it `""` and `\"` both
//! produce a literal quote and a lone `\` is kept as is. Characters that follow
//! the closing quote up to the next space are dropped. Outside quotes every
//! character is literal and only spaces separate tokens.

const SPACE: char = ' ';
const QUOTATION_MARK: char = '"';
const BACKSLASH: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Between tokens, skipping spaces.
    Between,
    /// Inside a token that did not start with a quote.
    Unquoted,
    /// Inside an open quoted run.
    Quoted,
    /// After the closing quote of a quoted run.
    Closed,
}

/// Tokenize a raw command line. Empty or all-space input yields no tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut scan = Scan::Between;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match scan {
            Scan::Between => match c {
                SPACE => {}
                QUOTATION_MARK => scan = Scan::Quoted,
                _ => {
                    current.push(c);
                    scan = Scan::Unquoted;
                }
            },
            Scan::Quoted => match c {
                BACKSLASH => {
                    if chars.next_if_eq(&QUOTATION_MARK).is_some() {
                        current.push(QUOTATION_MARK);
                    } else {
                        current.push(BACKSLASH);
                    }
                }
                QUOTATION_MARK => {
                    if chars.next_if_eq(&QUOTATION_MARK).is_some() {
                        current.push(QUOTATION_MARK);
                    } else {
                        scan = Scan::Closed;
                    }
                }
                _ => current.push(c),
            },
            Scan::Unquoted | Scan::Closed => {
                if c == SPACE {
                    // A closed quoted run may legitimately produce an empty token.
                    tokens.push(std::mem::take(&mut current));
                    scan = Scan::Between;
                } else if scan == Scan::Unquoted {
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
