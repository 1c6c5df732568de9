//! Value parsing for BibTeX fields

use super::scanner::Scanner;
use crate::error::{snippet, Error, Result};
use crate::macros::MacroTable;

/// Parse a BibTeX value, resolving macros and `#` concatenation to text
pub fn parse_value(scanner: &mut Scanner<'_>, macros: &MacroTable) -> Result<String> {
    let mut value = parse_single_value(scanner, macros)?;
    while scanner.try_match("#") {
        scanner.expect("#")?;
        value.push_str(&parse_single_value(scanner, macros)?);
    }
    Ok(value)
}

/// Parse a single value component
fn parse_single_value(scanner: &mut Scanner<'_>, macros: &MacroTable) -> Result<String> {
    if scanner.try_match("{") {
        parse_braced_value(scanner)
    } else if scanner.try_match("\"") {
        parse_quoted_value(scanner)
    } else {
        parse_bare_value(scanner, macros)
    }
}

/// Parse a braced value, keeping inner braces
pub fn parse_braced_value(scanner: &mut Scanner<'_>) -> Result<String> {
    scanner.expect("{")?;
    let content = scanner.braced_content()?;
    scanner.expect("}")?;
    Ok(content.to_string())
}

/// Parse a quoted string value
pub fn parse_quoted_value(scanner: &mut Scanner<'_>) -> Result<String> {
    scanner.expect("\"")?;
    let content = scanner.quoted_content()?;
    scanner.expect("\"")?;
    Ok(content.to_string())
}

/// Parse a macro reference or a number
fn parse_bare_value(scanner: &mut Scanner<'_>, macros: &MacroTable) -> Result<String> {
    let start = scanner.pos();
    let token = scanner.key()?;

    // A macro expanding to nothing reads as undefined
    if let Some(expansion) = macros.get(token).filter(|v| !v.is_empty()) {
        Ok(expansion.to_string())
    } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        Ok(token.to_string())
    } else {
        Err(Error::ValueExpected {
            found: snippet(&scanner.input()[start..]),
            location: scanner.location_at(start),
        })
    }
}
