// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule string parsing.
//!
//! A [`Codec`] turns a rule string like `"min-length:3|username"` into
//! [`RuleToken`]s. The codec is a swappable strategy: pass a custom one
//! through `ValidatorOptions` to change the rule string grammar.

use std::fmt;

/// A single parsed rule reference: a preset name plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleToken {
    /// The preset name.
    pub name: String,
    /// Arguments parsed from the rule string, kept as strings.
    pub args: Vec<String>,
}

impl RuleToken {
    /// Create a token with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a token with arguments.
    pub fn with_args<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.args.join(","))
        }
    }
}

/// Strategy for decoding a rule string into tokens.
///
/// Implementations must be pure: the same input always yields the same
/// tokens, with no side effects.
pub trait Codec: Send + Sync {
    /// Decode a rule string into an ordered list of tokens.
    fn decode(&self, spec: &str) -> Vec<RuleToken>;
}

impl<F> Codec for F
where
    F: Fn(&str) -> Vec<RuleToken> + Send + Sync,
{
    fn decode(&self, spec: &str) -> Vec<RuleToken> {
        self(spec)
    }
}

/// The default rule string grammar.
///
/// `|` separates rules, the first `:` in a segment starts the argument
/// list, and `,` separates arguments. Segments and arguments are trimmed;
/// empty segments are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodec;

impl Codec for DefaultCodec {
    fn decode(&self, spec: &str) -> Vec<RuleToken> {
        spec.split('|')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once(':') {
                Some((name, rest)) => RuleToken {
                    name: name.trim().to_string(),
                    args: rest.split(',').map(|arg| arg.trim().to_string()).collect(),
                },
                None => RuleToken::new(segment),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_round_trip() {
        let tokens = DefaultCodec.decode("a:1,2|b");
        assert_eq!(
            tokens,
            vec![
                RuleToken::with_args("a", ["1", "2"]),
                RuleToken::new("b"),
            ]
        );
    }

    #[test]
    fn test_decode_trims_and_drops_empty_segments() {
        let tokens = DefaultCodec.decode("  | min-length : 3 |  |username|");
        assert_eq!(
            tokens,
            vec![
                RuleToken::with_args("min-length", ["3"]),
                RuleToken::new("username"),
            ]
        );
    }

    #[test]
    fn test_decode_no_colon_means_no_args() {
        let tokens = DefaultCodec.decode("mobile");
        assert_eq!(tokens, vec![RuleToken::new("mobile")]);
    }

    #[test]
    fn test_decode_splits_on_first_colon_only() {
        let tokens = DefaultCodec.decode("matches:a:b");
        assert_eq!(tokens, vec![RuleToken::with_args("matches", ["a:b"])]);
    }

    #[test]
    fn test_decode_trailing_colon_yields_one_empty_arg() {
        let tokens = DefaultCodec.decode("max-length:");
        assert_eq!(tokens, vec![RuleToken::with_args("max-length", [""])]);
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(DefaultCodec.decode("").is_empty());
        assert!(DefaultCodec.decode("  |  ").is_empty());
    }

    #[test]
    fn test_closure_codec() {
        let codec = |spec: &str| {
            spec.split(';')
                .filter(|s| !s.is_empty())
                .map(RuleToken::new)
                .collect::<Vec<_>>()
        };
        let tokens = codec.decode("a;b");
        assert_eq!(tokens, vec![RuleToken::new("a"), RuleToken::new("b")]);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(RuleToken::new("mobile").to_string(), "mobile");
        assert_eq!(
            RuleToken::with_args("between", ["2", "6"]).to_string(),
            "between:2,6"
        );
    }
}
