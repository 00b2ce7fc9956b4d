//! Tokenization of complete sample jobs from tests/fixtures

use madx_lexer::madx::formats::FormatRegistry;
use madx_lexer::madx::testing::{fixture, significant};
use madx_lexer::madx::token::TokenKind::*;
use madx_lexer::madx::tokenize;

#[test]
fn simple_format_snapshot() {
    let source = "qf: quadrupole, l=1;";
    let tokens: Vec<_> = tokenize(source).collect();
    let out = FormatRegistry::with_defaults()
        .format(&tokens, "simple")
        .unwrap();

    insta::assert_snapshot!(out, @r###"
    Name.Variable 0..2 "qf"
    Text 2..3 ":"
    Text 3..4 " "
    Name.Class 4..14 "quadrupole"
    Punctuation 14..15 ","
    Text 15..16 " "
    Name.Attribute 16..17 "l"
    Operator 17..18 "="
    Text 18..19 "1"
    Punctuation 19..20 ";"
    "###);
}

#[test]
fn fodo_definitions() {
    let source = fixture("fodo.madx");
    let tokens = significant(&source);

    assert_eq!(tokens[0], (Comment, "! Simple FODO lattice"));
    assert_eq!(&tokens[1..4], &[(NameClass, "title"), (Punctuation, ","), (String, "\"FODO cell\"")]);

    let classes: Vec<_> = tokens
        .iter()
        .filter(|(kind, _)| *kind == NameClass)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(
        classes,
        vec![
            "title",
            "option",
            "quadrupole",
            "quadrupole",
            "sbend",
            "monitor",
            "sequence",
            "beam",
            "use",
            "select",
            "twiss"
        ]
    );

    let variables: Vec<_> = tokens
        .iter()
        .filter(|(kind, _)| *kind == NameVariable)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(
        variables,
        vec!["lcell", "kqf", "brho", "qf", "qd", "mb", "bpm", "fodo"]
    );
}

#[test]
fn fodo_stops_at_stop() {
    let source = fixture("fodo.madx");
    let tokens: Vec<_> = tokenize(&source).collect();
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, Comment);
    assert!(last.text.contains("qf2: quadrupole"));
    assert!(last.text.ends_with("l=1;\n"));
}

#[test]
fn fodo_nested_comment() {
    let source = fixture("fodo.madx");
    let comment: std::string::String = tokenize(&source)
        .skip_while(|t| t.kind != CommentMultiline)
        .take_while(|t| t.kind == CommentMultiline)
        .map(|t| t.text)
        .collect();
    assert_eq!(
        comment,
        "/* Match the tunes\n   /* nested note */ before twiss */"
    );
}

#[test]
fn macros_sample() {
    let source = fixture("macros.madx");
    let tokens = significant(&source);

    let functions: Vec<_> = tokens
        .iter()
        .filter(|(kind, _)| *kind == NameFunction)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(functions, vec!["set_knobs", "set_knobs"]);

    let keywords: Vec<_> = tokens
        .iter()
        .filter(|(kind, _)| *kind == Keyword)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(
        keywords,
        vec!["macro", "if", "exec", "while", "seqedit", "endedit", "stop"]
    );

    let classes: Vec<_> = tokens
        .iter()
        .filter(|(kind, _)| *kind == NameClass)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(
        classes,
        vec!["print", "value", "flatten", "install", "cycle", "marker"]
    );

    // The contained stop does not swallow the final element
    assert_eq!(
        &tokens[tokens.len() - 4..],
        &[
            (NameVariable, "after"),
            (Text, ":"),
            (NameClass, "marker"),
            (Punctuation, ";")
        ]
    );
}
