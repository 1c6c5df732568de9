//! Entry and directive body parsing for BibTeX

use super::scanner::Scanner;
use super::value;
use crate::error::{snippet, Error, Result};
use crate::macros::MacroTable;
use crate::model::Entry;

/// Parse a `key = value` pair, returning the uppercased key and resolved value
pub fn parse_key_equals_value(
    scanner: &mut Scanner<'_>,
    macros: &MacroTable,
) -> Result<(String, String)> {
    let key = scanner.key()?.to_uppercase();
    if scanner.try_match("=") {
        scanner.expect("=")?;
        let value = value::parse_value(scanner, macros)?;
        Ok((key, value))
    } else {
        Err(Error::MissingEquals {
            key,
            found: snippet(scanner.rest()),
            location: scanner.location(),
        })
    }
}

/// Parse comma-separated fields into `entry`
///
/// A comma directly before the closing delimiter is accepted.
fn parse_key_value_list(
    scanner: &mut Scanner<'_>,
    macros: &MacroTable,
    entry: &mut Entry,
) -> Result<()> {
    let (name, value) = parse_key_equals_value(scanner, macros)?;
    entry.set(&name, value);

    while scanner.try_match(",") {
        scanner.expect(",")?;
        if scanner.try_match("}") || scanner.try_match(")") {
            break;
        }
        let (name, value) = parse_key_equals_value(scanner, macros)?;
        entry.set(&name, value);
    }

    Ok(())
}

/// Parse the body of an entry (key and fields)
///
/// Returns the citation key as written together with the entry.
pub fn parse_entry_body(
    scanner: &mut Scanner<'_>,
    macros: &MacroTable,
    directive: &str,
) -> Result<(String, Entry)> {
    let key = scanner.key()?;
    let mut entry = Entry::new(key, directive);

    scanner.expect(",")?;
    parse_key_value_list(scanner, macros, &mut entry)?;

    Ok((key.to_string(), entry))
}

/// Parse the body of a `@string` definition and install the macro
///
/// Returns the name of the defined macro.
pub fn parse_string_body(scanner: &mut Scanner<'_>, macros: &mut MacroTable) -> Result<String> {
    let (name, value) = parse_key_equals_value(scanner, macros)?;
    macros.define(&name, value);
    Ok(name)
}

/// Parse the body of a `@preamble`, discarding its value
pub fn parse_preamble_body(scanner: &mut Scanner<'_>, macros: &MacroTable) -> Result<()> {
    value::parse_value(scanner, macros).map(drop)
}

/// Skip the body of a `@comment` up to the next `}`
///
/// The body is not interpreted, so braces inside it do not nest.
pub fn skip_comment_body(scanner: &mut Scanner<'_>) {
    scanner.skip_to(b'}');
}
