use regex::Regex;

use super::{Row, TableConfig};

/// Split one input line into its fields.
///
/// The line terminator is dropped first, then the line is split on the
/// separator pattern and, when a string delimiter is configured, quoted
/// fields lose every occurrence of it.
pub fn parse_line(line: &str, config: &TableConfig) -> Row {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

    split_fields(line, &config.separator)
        .into_iter()
        .map(|field| match &config.delimiter {
            Some(delimiter) => strip_delimiter(field, delimiter),
            None => field.to_string(),
        })
        .collect()
}

/// Split `line` on every match of `separator`. Text captured by groups in
/// the separator becomes a field of its own, between the two fields the
/// match separates.
fn split_fields<'l>(line: &'l str, separator: &Regex) -> Vec<&'l str> {
    let mut fields = Vec::new();
    let mut last = 0;

    for caps in separator.captures_iter(line) {
        let whole = match caps.get(0) {
            Some(whole) => whole,
            None => continue,
        };
        fields.push(&line[last..whole.start()]);
        fields.extend(caps.iter().skip(1).flatten().map(|group| group.as_str()));
        last = whole.end();
    }
    fields.push(&line[last..]);

    fields
}

/// Remove `delimiter` from `field` if the field is wrapped in it.
///
/// A field that does not both start and end with the delimiter is returned
/// untouched, so `he"llo` survives as is while `"he"llo"` becomes `hello`.
pub fn strip_delimiter(field: &str, delimiter: &str) -> String {
    let wrapped = field.len() >= 2 * delimiter.len()
        && field.starts_with(delimiter)
        && field.ends_with(delimiter);

    if wrapped {
        field.replace(delimiter, "")
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OutputTarget;
    use pretty_assertions::assert_eq;

    fn config(separator: &str, delimiter: &str) -> TableConfig {
        TableConfig::new(separator, delimiter, OutputTarget::Stdout).unwrap()
    }

    #[test]
    fn default_separator() {
        let row = parse_line("a,b,c\n", &config(",", ""));
        assert_eq!(row, vec!["a", "b", "c"]);
    }

    #[test]
    fn semicolon_separator() {
        let row = parse_line("x;y", &config(";", ""));
        assert_eq!(row, vec!["x", "y"]);
    }

    #[test]
    fn crlf_does_not_leak_into_last_field() {
        let row = parse_line("1,2,3\r\n", &config(",", ""));
        assert_eq!(row, vec!["1", "2", "3"]);
    }

    #[test]
    fn separator_is_a_pattern() {
        let row = parse_line("a1b22c", &config("[0-9]+", ""));
        assert_eq!(row, vec!["a", "b", "c"]);

        let row = parse_line("a, b,c", &config(r",\s*", ""));
        assert_eq!(row, vec!["a", "b", "c"]);
    }

    #[test]
    fn dot_separator_matches_every_character() {
        let row = parse_line("a.b\n", &config(".", ""));
        assert_eq!(row, vec!["", "", "", ""]);
    }

    #[test]
    fn captured_separator_becomes_a_field() {
        let row = parse_line("a,b", &config("(,)", ""));
        assert_eq!(row, vec!["a", ",", "b"]);

        let row = parse_line("1-2+3", &config("([-+])", ""));
        assert_eq!(row, vec!["1", "-", "2", "+", "3"]);
    }

    #[test]
    fn unmatched_group_adds_no_field() {
        let row = parse_line("a,b;c", &config("(,)|;", ""));
        assert_eq!(row, vec!["a", ",", "b", "c"]);
    }

    #[test]
    fn escaped_bar_splits_on_a_literal_bar() {
        let row = parse_line("left|right", &config(r"\|", ""));
        assert_eq!(row, vec!["left", "right"]);
    }

    #[test]
    fn empty_fields_are_kept() {
        let row = parse_line("a,,c,", &config(",", ""));
        assert_eq!(row, vec!["a", "", "c", ""]);
    }

    #[test]
    fn quoted_fields_are_stripped() {
        let row = parse_line("\"hello\",he\"llo,\"a\"b\"", &config(",", "\""));
        assert_eq!(row, vec!["hello", "he\"llo", "ab"]);
    }

    #[test]
    fn quotes_are_left_alone_without_a_delimiter() {
        let row = parse_line("\"hello\",world", &config(",", ""));
        assert_eq!(row, vec!["\"hello\"", "world"]);
    }

    #[test]
    fn half_quoted_field_is_untouched() {
        assert_eq!(strip_delimiter("\"open", "\""), "\"open");
        assert_eq!(strip_delimiter("close\"", "\""), "close\"");
    }

    #[test]
    fn lone_delimiter_is_not_a_wrapped_field() {
        assert_eq!(strip_delimiter("\"", "\""), "\"");
        assert_eq!(strip_delimiter("\"\"", "\""), "");
    }

    #[test]
    fn multi_character_delimiter() {
        assert_eq!(strip_delimiter("''quoted''", "''"), "quoted");
        assert_eq!(strip_delimiter("''x'", "''"), "''x'");
    }

    #[test]
    fn delimiter_is_taken_literally() {
        assert_eq!(strip_delimiter("*bold*", "*"), "bold");
        assert_eq!(strip_delimiter("plain", "."), "plain");
    }
}
