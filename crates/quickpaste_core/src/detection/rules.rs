//! Ordered first-match-wins rule table for language classification.
//!
//! Order is part of the contract: several predicates overlap (a TypeScript
//! module also satisfies the JavaScript rule, which is checked first), and
//! existing pastes were tagged under exactly this precedence.

use regex::Regex;
use serde::de::IgnoredAny;
use std::sync::LazyLock;

/// Content window a rule is evaluated against.
pub struct Sample<'a> {
    /// Raw prefix, untrimmed.
    pub text: &'a str,
    /// Prefix with surrounding whitespace removed, used by the JSON probe.
    pub trimmed: &'a str,
}

impl<'a> Sample<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            trimmed: text.trim(),
        }
    }
}

/// A single classifier rule: a language tag and the predicate that selects it.
pub struct Rule {
    pub language: &'static str,
    pub matches: fn(&Sample<'_>) -> bool,
}

pub(super) fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static classifier pattern must compile")
}

// Word boundaries and word characters are ASCII-only, so a keyword glued to
// a non-ASCII letter (`élet`) still counts as a keyword.
macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| compiled($re));
    };
}

pattern!(HTML_ROOT, r"(?i)<\s*html[\s>]");
pattern!(HTML_BLOCK, r"(?i)<\s*(div|span|script|style|body|head)[\s>]");
pattern!(MARKDOWN, r"^#\s|\n#\s|```");
pattern!(PYTHON, r#"^def\s|\nclass\s|\nif __name__ == ['"]__main__['"]"#);
pattern!(SHEBANG, r"^#!");
pattern!(SHELL_KEYWORD, r"(?-u:\b)(then|elif|fi)(?-u:\b)");
pattern!(JS_KEYWORD, r"(?-u:\b)(function|const|let|export|import)(?-u:\b)");
pattern!(TS_KEYWORD, r"(?-u:\b)(interface|type|enum)(?-u:\b)");
pattern!(EXPORT, r"(?-u:\b)export(?-u:\b)");
pattern!(GO_PACKAGE, r"(?-u:\b)package\s+(?-u:\w)+");
pattern!(GO_FUNC, r"(?-u:\b)func\s+(?-u:\w)+\(");
pattern!(JAVA_DECL, r"(?-u:\b)public\s+(class|interface)(?-u:\b)");
pattern!(CS_NAMESPACE_CLASS, r"(?-u:\b)namespace(?-u:\b).*(?-u:\b)class(?-u:\b)");
pattern!(CS_USING, r"(?-u:\b)using\s+(?-u:\w)+");
pattern!(SYSTEM_INCLUDE, r"#include\s+<(?-u:\w)+>");
pattern!(PRINTF_CALL, r"printf\s*\(");
pattern!(RUBY_BLOCK, r"(?-u:\b)def(?-u:\b).*\n\s+end");
pattern!(RUBY_PUTS, r"(?-u:\b)puts(?-u:\b)");
pattern!(RUST_FN, r"(?-u:\b)fn\s+(?-u:\w)+\s*\(");
pattern!(RUST_LET_MUT, r"(?-u:\b)let\s+mut(?-u:\b)");
pattern!(SQL_SELECT, r"(?i)(?-u:\b)select(?-u:\b).+(?-u:\b)from(?-u:\b)");
pattern!(BRACKETED, r"[{\[(].+[)}\]]");
pattern!(LIST_MARKER, r"^\s*[-*]\s");

// Syntax check only: skipping into `IgnoredAny` has no nesting limit and does
// not validate `\u` escapes as scalar values.
fn looks_like_json(sample: &Sample<'_>) -> bool {
    let text = sample.trimmed;
    (text.starts_with('{') || text.starts_with('['))
        && serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Classifier rules in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        language: "json",
        matches: looks_like_json,
    },
    Rule {
        language: "html",
        matches: |s| HTML_ROOT.is_match(s.text) || HTML_BLOCK.is_match(s.text),
    },
    Rule {
        language: "markdown",
        matches: |s| MARKDOWN.is_match(s.text),
    },
    Rule {
        language: "python",
        matches: |s| PYTHON.is_match(s.text),
    },
    Rule {
        language: "bash",
        matches: |s| SHEBANG.is_match(s.text) || SHELL_KEYWORD.is_match(s.text),
    },
    Rule {
        language: "javascript",
        matches: |s| JS_KEYWORD.is_match(s.text),
    },
    Rule {
        language: "typescript",
        matches: |s| TS_KEYWORD.is_match(s.text) && EXPORT.is_match(s.text),
    },
    Rule {
        language: "go",
        matches: |s| GO_PACKAGE.is_match(s.text) && GO_FUNC.is_match(s.text),
    },
    Rule {
        language: "java",
        matches: |s| JAVA_DECL.is_match(s.text),
    },
    Rule {
        language: "csharp",
        matches: |s| CS_NAMESPACE_CLASS.is_match(s.text) && CS_USING.is_match(s.text),
    },
    Rule {
        language: "cpp",
        matches: |s| SYSTEM_INCLUDE.is_match(s.text) && s.text.contains("std::"),
    },
    Rule {
        language: "c",
        matches: |s| SYSTEM_INCLUDE.is_match(s.text) && PRINTF_CALL.is_match(s.text),
    },
    Rule {
        language: "ruby",
        matches: |s| RUBY_BLOCK.is_match(s.text) || RUBY_PUTS.is_match(s.text),
    },
    Rule {
        language: "rust",
        matches: |s| RUST_FN.is_match(s.text) && RUST_LET_MUT.is_match(s.text),
    },
    Rule {
        language: "sql",
        matches: |s| SQL_SELECT.is_match(s.text),
    },
];

/// Weak signals consulted only when no rule matched.
pub(super) fn fallback(sample: &Sample<'_>) -> Option<&'static str> {
    if BRACKETED.is_match(sample.text) && sample.text.contains(';') {
        return Some("javascript");
    }
    if LIST_MARKER.is_match(sample.text) {
        return Some("markdown");
    }
    None
}

/// Every tag [`super::classify`] can produce besides `"none"`.
pub const DETECTABLE_LANGUAGES: &[&str] = &[
    "json",
    "html",
    "markdown",
    "python",
    "bash",
    "javascript",
    "typescript",
    "go",
    "java",
    "csharp",
    "cpp",
    "c",
    "ruby",
    "rust",
    "sql",
];
