//! Light syntax highlighting for code previews.
//!
//! A single regex pass splits the snippet into comment, string, call-site,
//! and word tokens; words in [`KEYWORDS`] become keywords and everything
//! else stays plain. The result is rendered as spans, never as raw HTML.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use std::sync::LazyLock;

use regex::Regex;

const KEYWORDS: &[&str] = &[
    "import", "export", "const", "let", "function", "return", "interface", "type", "extends", "from", "as", "if",
    "else", "for", "while", "class", "new", "true", "false", "null", "undefined",
];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<comment>//[^\n]*)|(?P<string>'[^'\n]*'|"[^"\n]*"|`[^`]*`)|(?P<call>\b[A-Za-z_]\w*)\(|(?P<word>\b[A-Za-z_]\w*\b)"#,
    )
    .expect("token regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    Str,
    Comment,
    Call,
}

impl TokenKind {
    /// CSS class for the span, empty for plain text.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Keyword => "tok-keyword",
            Self::Str => "tok-string",
            Self::Comment => "tok-comment",
            Self::Call => "tok-call",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Split `code` into highlighted tokens. Concatenating the token texts
/// reproduces `code` exactly.
#[must_use]
pub fn highlight(code: &str) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::new();
    let mut cursor = 0;

    for caps in TOKEN_RE.captures_iter(code) {
        let Some(whole) = caps.get(0) else { continue };
        push(&mut out, TokenKind::Plain, &code[cursor..whole.start()]);

        if let Some(m) = caps.name("comment") {
            push(&mut out, TokenKind::Comment, m.as_str());
        } else if let Some(m) = caps.name("string") {
            push(&mut out, TokenKind::Str, m.as_str());
        } else if let Some(m) = caps.name("call") {
            push(&mut out, word_kind(m.as_str(), TokenKind::Call), m.as_str());
            push(&mut out, TokenKind::Plain, "(");
        } else if let Some(m) = caps.name("word") {
            push(&mut out, word_kind(m.as_str(), TokenKind::Plain), m.as_str());
        }
        cursor = whole.end();
    }
    push(&mut out, TokenKind::Plain, &code[cursor..]);
    out
}

fn word_kind(word: &str, otherwise: TokenKind) -> TokenKind {
    if KEYWORDS.contains(&word) { TokenKind::Keyword } else { otherwise }
}

/// Append, merging adjacent plain runs.
fn push(out: &mut Vec<Token>, kind: TokenKind, text: &str) {
    if text.is_empty() {
        return;
    }
    if kind == TokenKind::Plain {
        if let Some(last) = out.last_mut().filter(|t| t.kind == TokenKind::Plain) {
            last.text.push_str(text);
            return;
        }
    }
    out.push(Token { kind, text: text.to_owned() });
}
