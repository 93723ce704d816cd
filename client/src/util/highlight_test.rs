use super::*;

fn kinds(code: &str) -> Vec<(TokenKind, String)> {
    highlight(code).into_iter().map(|t| (t.kind, t.text)).collect()
}

#[test]
fn tokens_reassemble_the_source() {
    let code = timeline::content::BUTTON_PREVIEW;
    let joined: String = highlight(code).into_iter().map(|t| t.text).collect();
    assert_eq!(joined, code);
}

#[test]
fn keywords_strings_and_calls() {
    assert_eq!(
        kinds("const x = fetch('/api');"),
        vec![
            (TokenKind::Keyword, "const".to_owned()),
            (TokenKind::Plain, " x = ".to_owned()),
            (TokenKind::Call, "fetch".to_owned()),
            (TokenKind::Plain, "(".to_owned()),
            (TokenKind::Str, "'/api'".to_owned()),
            (TokenKind::Plain, ");".to_owned()),
        ]
    );
}

#[test]
fn comment_runs_to_end_of_line() {
    let tokens = kinds("a // const 'x'\nb");
    assert_eq!(tokens[1], (TokenKind::Comment, "// const 'x'".to_owned()));
    assert_eq!(tokens[2], (TokenKind::Plain, "\nb".to_owned()));
}

#[test]
fn keyword_before_paren_stays_keyword() {
    assert_eq!(kinds("if(")[0], (TokenKind::Keyword, "if".to_owned()));
}

#[test]
fn keyword_inside_identifier_is_plain() {
    assert_eq!(kinds("imported"), vec![(TokenKind::Plain, "imported".to_owned())]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(highlight("").is_empty());
}
