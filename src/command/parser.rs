use std::collections::HashMap;

use crate::command::error::CommandError;

/// Static description of a command invocation: its keyword, the single-letter
/// argument keys it recognizes, and the usage placeholder per key.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentSpec {
    pub keyword: &'static str,
    pub keys: &'static [char],
    pub placeholders: &'static [&'static str],
}

impl ArgumentSpec {
    pub const fn new(
        keyword: &'static str,
        keys: &'static [char],
        placeholders: &'static [&'static str],
    ) -> Self {
        Self {
            keyword,
            keys,
            placeholders,
        }
    }

    pub fn usage(&self) -> String {
        let mut usage = format!("Usage: {}", self.keyword);
        for (key, placeholder) in self.keys.iter().zip(self.placeholders) {
            usage.push_str(&format!(" {}/<{}>", key, placeholder));
        }
        usage
    }
}

/// Parsed `key -> value` mapping from a raw argument tail.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: HashMap<char, String>,
}

impl Arguments {
    /// Splits `tail` on recognized `k/` markers. A marker counts only at the
    /// start of the tail or after whitespace, so values may contain slashes
    /// and unrecognized letters freely. Each value runs to the next marker or
    /// end of string, trimmed. A repeated key keeps its last value.
    pub fn parse(tail: &str, keys: &[char]) -> Self {
        let mut markers: Vec<(usize, char)> = Vec::new();
        let mut prev: Option<char> = None;
        let mut iter = tail.char_indices().peekable();
        while let Some((i, c)) = iter.next() {
            let at_boundary = prev.map_or(true, |p| p.is_whitespace());
            if at_boundary && keys.contains(&c) {
                if let Some(&(_, next)) = iter.peek() {
                    if next == '/' {
                        markers.push((i, c));
                    }
                }
            }
            prev = Some(c);
        }

        let mut values = HashMap::new();
        for (n, &(start, key)) in markers.iter().enumerate() {
            let value_start = start + key.len_utf8() + 1;
            let value_end = markers.get(n + 1).map_or(tail.len(), |&(next, _)| next);
            values.insert(key, tail[value_start..value_end].trim().to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: char) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }
}

/// Common front half of every command that takes arguments: empty tail is a
/// usage error; afterwards every declared key must be present and non-empty,
/// reported in declaration order.
pub fn parse_required(spec: &ArgumentSpec, tail: &str) -> Result<Arguments, CommandError> {
    if tail.is_empty() {
        return Err(CommandError::Usage(spec.usage()));
    }

    let args = Arguments::parse(tail, spec.keys);
    for &key in spec.keys {
        match args.get(key) {
            Some(value) if !value.is_empty() => {}
            _ => {
                return Err(CommandError::MissingArgument {
                    key,
                    usage: spec.usage(),
                })
            }
        }
    }
    Ok(args)
}

/// Commands without arguments still reject a non-empty tail so that typos
/// surface instead of being silently ignored.
pub fn reject_arguments(spec: &ArgumentSpec, tail: &str) -> Result<(), CommandError> {
    if tail.is_empty() {
        Ok(())
    } else {
        Err(CommandError::Usage(spec.usage()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: ArgumentSpec = ArgumentSpec::new(
        "average_marks",
        &['c', 'a'],
        &["MODULE_CODE", "ASSESSMENT_NAME"],
    );

    #[test]
    fn usage_lists_keys_in_order() {
        assert_eq!(
            SPEC.usage(),
            "Usage: average_marks c/<MODULE_CODE> a/<ASSESSMENT_NAME>"
        );
    }

    #[test]
    fn values_bounded_by_next_recognized_key() {
        let args = Arguments::parse("c/CS2113T a/Midterms", &['c', 'a']);
        assert_eq!(args.get('c'), Some("CS2113T"));
        assert_eq!(args.get('a'), Some("Midterms"));
    }

    #[test]
    fn value_may_contain_slashes_and_unrecognized_letters() {
        let args = Arguments::parse("c/CS2113T n/Ravi s/o Kumar", &['c', 'n']);
        assert_eq!(args.get('c'), Some("CS2113T"));
        assert_eq!(args.get('n'), Some("Ravi s/o Kumar"));
    }

    #[test]
    fn marker_not_recognized_mid_token() {
        // The a/ inside the value is not preceded by whitespace.
        let args = Arguments::parse("c/CSa/01 a/Quiz", &['c', 'a']);
        assert_eq!(args.get('c'), Some("CSa/01"));
        assert_eq!(args.get('a'), Some("Quiz"));
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let args = Arguments::parse("c/AA1000 c/BB2000", &['c']);
        assert_eq!(args.get('c'), Some("BB2000"));
    }

    #[test]
    fn empty_tail_is_usage_error() {
        match parse_required(&SPEC, "") {
            Err(CommandError::Usage(usage)) => assert!(usage.starts_with("Usage: average_marks")),
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn absent_and_empty_keys_are_missing_arguments() {
        match parse_required(&SPEC, "c/CS2113T") {
            Err(CommandError::MissingArgument { key, .. }) => assert_eq!(key, 'a'),
            other => panic!("expected missing argument, got {:?}", other),
        }
        match parse_required(&SPEC, "c/ a/Midterms") {
            Err(CommandError::MissingArgument { key, .. }) => assert_eq!(key, 'c'),
            other => panic!("expected missing argument, got {:?}", other),
        }
    }

    #[test]
    fn parse_is_pure() {
        let tail = "c/CS2113T a/Midterms";
        let first = Arguments::parse(tail, SPEC.keys);
        let second = Arguments::parse(tail, SPEC.keys);
        assert_eq!(first.get('c'), second.get('c'));
        assert_eq!(first.get('a'), second.get('a'));
    }
}
