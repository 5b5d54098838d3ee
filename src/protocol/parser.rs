//! Command line parser.
//!
//! Every command has the shape `COMMAND arg1 remainder of the line`. Parts
//! are separated by a single space; the remainder keeps any spaces it holds.
//! Consecutive spaces are not collapsed, so `"SET  k v"` has an empty `arg1`.

/// The parts of one command line. Missing parts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token
    pub command: Option<String>,
    /// Second token
    pub arg1: Option<String>,
    /// Everything after the second token
    pub remainder: Option<String>,
}

/// Parses a command line into `(command, arg1, remainder)`.
///
/// Surrounding whitespace, including the line terminator, is stripped
/// first. A blank line yields a command with every part absent.
pub fn parse_command(line: &str) -> ParsedCommand {
    let line = line.trim();
    if line.is_empty() {
        return ParsedCommand::default();
    }

    let mut parts = line.splitn(3, ' ').map(str::to_string);
    ParsedCommand {
        command: parts.next(),
        arg1: parts.next(),
        remainder: parts.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(command: Option<&str>, arg1: Option<&str>, remainder: Option<&str>) -> ParsedCommand {
        ParsedCommand {
            command: command.map(String::from),
            arg1: arg1.map(String::from),
            remainder: remainder.map(String::from),
        }
    }

    #[test]
    fn test_command_only() {
        assert_eq!(parse_command("SET"), parsed(Some("SET"), None, None));
    }

    #[test]
    fn test_command_and_arg() {
        assert_eq!(parse_command("SET foo"), parsed(Some("SET"), Some("foo"), None));
    }

    #[test]
    fn test_remainder_keeps_spaces() {
        assert_eq!(
            parse_command("SET foo bar baz"),
            parsed(Some("SET"), Some("foo"), Some("bar baz"))
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_command(""), ParsedCommand::default());
        assert_eq!(parse_command("   "), ParsedCommand::default());
        assert_eq!(parse_command("\r\n"), ParsedCommand::default());
    }

    #[test]
    fn test_line_terminator_stripped() {
        assert_eq!(
            parse_command("  GET foo 10\r\n"),
            parsed(Some("GET"), Some("foo"), Some("10"))
        );
    }

    #[test]
    fn test_consecutive_spaces_produce_empty_tokens() {
        assert_eq!(
            parse_command("SET  foo bar"),
            parsed(Some("SET"), Some(""), Some("foo bar"))
        );
        assert_eq!(
            parse_command("SET foo  bar   baz"),
            parsed(Some("SET"), Some("foo"), Some(" bar   baz"))
        );
    }

    #[test]
    fn test_tabs_are_not_separators() {
        assert_eq!(parse_command("GET\tfoo"), parsed(Some("GET\tfoo"), None, None));
    }
}
