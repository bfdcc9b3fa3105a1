//! Inverse of the tokenizer: turn arguments back into a command line.
use std::borrow::Cow;

use crate::lib::errors::QuoteError;

use super::validator::LaunchConfig;

/// Quote one argument so that [`super::tokenize`] yields it back unchanged.
///
/// Arguments without spaces or quotes are returned as is. Others are wrapped in
/// quotes with every inner `"` written as `\"`; backslashes need no escaping
/// unless they end the argument, which the grammar cannot express.
pub fn quote_argument(argument: &str) -> Result<Cow<'_, str>, QuoteError> {
    if argument.is_empty() {
        return Ok(Cow::Borrowed("\"\""));
    }
    if !argument.contains(&[' ', '"'][..]) {
        return Ok(Cow::Borrowed(argument));
    }
    if argument.ends_with('\\') {
        return Err(QuoteError::TrailingBackslash {
            argument: argument.to_string(),
        });
    }

    let mut quoted = String::with_capacity(argument.len() + 2);
    quoted.push('"');
    for c in argument.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Ok(Cow::Owned(quoted))
}

/// Quote each argument and join them with single spaces.
pub fn join_arguments<S: AsRef<str>>(arguments: &[S]) -> Result<String, QuoteError> {
    if arguments.last().is_some_and(|last| last.as_ref().is_empty()) {
        return Err(QuoteError::TrailingEmpty);
    }
    let quoted = arguments
        .iter()
        .map(|argument| quote_argument(argument.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quoted.join(" "))
}

/// Render a configuration as a slash-switch command line.
pub fn render_command_line(config: &LaunchConfig) -> Result<String, QuoteError> {
    join_arguments(&config.to_arguments())
}
