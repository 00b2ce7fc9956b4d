//! Statement-level tokenization tests
//!
//! Each test feeds one MAD-X construct through the shared lexer and checks the significant
//! tokens (whitespace dropped) or the full kind sequence.

use madx_lexer::madx::testing::{assert_tokens, kinds, significant};
use madx_lexer::madx::token::TokenKind::{self, *};
use madx_lexer::madx::tokenize;
use rstest::rstest;

#[rstest]
#[case("TWISS, SEQUENCE=machine;")]
#[case("twiss, sequence=machine;")]
#[case("Twiss, Sequence=machine;")]
#[case("tWiSs, sEqUeNcE=machine;")]
fn command_names_ignore_case(#[case] source: &str) {
    assert_eq!(
        kinds(source),
        vec![
            NameClass,
            Punctuation,
            Text,
            NameAttribute,
            Operator,
            Text,
            Punctuation
        ]
    );
}

#[test]
fn element_statement() {
    let source = "qf: QUADRUPOLE, L=1.5, K1=0.3;";
    assert_tokens(
        source,
        &[
            (NameVariable, "qf"),
            (Text, ":"),
            (NameClass, "QUADRUPOLE"),
            (Punctuation, ","),
            (NameAttribute, "L"),
            (Operator, "="),
            (Text, "1.5"),
            (Punctuation, ","),
            (NameAttribute, "K1"),
            (Operator, "="),
            (Text, "0.3"),
            (Punctuation, ";"),
        ],
    );

    let mut tokens = tokenize(source);
    let last = tokens.by_ref().last().unwrap();
    assert_eq!(last.text, ";");
    assert_eq!(tokens.stack_depth(), 1);
}

#[rstest]
#[case("b1: sbend, k1s=0.01, l=2;", "sbend", "k1s")]
#[case("b2: rbend, fint=0.5, l=2;", "rbend", "fint")]
#[case("b3: rbend, fintx=0.5;", "rbend", "fintx")]
#[case("k: hkicker, kick=1e-3;", "hkicker", "kick")]
#[case("m: matrix, rm21=0.5;", "matrix", "rm21")]
#[case("c: rfcavity, volt=8, lag=0.5;", "rfcavity", "volt")]
fn element_type_attributes(#[case] source: &str, #[case] class: &str, #[case] attribute: &str) {
    let tokens: Vec<_> = tokenize(source).collect();
    let class_token = tokens.iter().find(|t| t.kind == NameClass).unwrap();
    assert_eq!(class_token.text, class);
    let first_attribute = tokens.iter().find(|t| t.kind == NameAttribute).unwrap();
    assert_eq!(first_attribute.text, attribute);
}

#[test]
fn partial_attribute_patterns_need_whole_words() {
    // `k[0-2]s?` must not highlight the head of a longer word
    assert_tokens(
        "b: sbend, k1sx=1;",
        &[
            (NameVariable, "b"),
            (Text, ":"),
            (NameClass, "sbend"),
            (Punctuation, ","),
            (Text, "k1sx"),
            (Operator, "="),
            (Text, "1"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn common_element_attributes() {
    assert_tokens(
        "m1: marker, at=12.5, from=ip1;",
        &[
            (NameVariable, "m1"),
            (Text, ":"),
            (NameClass, "marker"),
            (Punctuation, ","),
            (NameAttribute, "at"),
            (Operator, "="),
            (Text, "12.5"),
            (Punctuation, ","),
            (NameAttribute, "from"),
            (Operator, "="),
            (Text, "ip1"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn named_element_types_take_precedence() {
    // A user class gets the generic element state, a known type its own
    assert_tokens(
        "q1: qf, k1=0.2;",
        &[
            (NameVariable, "q1"),
            (Text, ":"),
            (NameClass, "qf"),
            (Punctuation, ","),
            (Text, "k1"),
            (Operator, "="),
            (Text, "0.2"),
            (Punctuation, ";"),
        ],
    );
    assert_tokens(
        "q1: quadrupole, k1=0.2;",
        &[
            (NameVariable, "q1"),
            (Text, ":"),
            (NameClass, "quadrupole"),
            (Punctuation, ","),
            (NameAttribute, "k1"),
            (Operator, "="),
            (Text, "0.2"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn deferred_assignment_with_expression() {
    assert_tokens(
        "kqf := 0.0125 * sqrt(2) / pi;",
        &[
            (NameVariable, "kqf"),
            (Operator, ":="),
            (Text, "0.0125"),
            (Operator, "*"),
            (Keyword, "sqrt"),
            (Punctuation, "("),
            (Text, "2"),
            (Punctuation, ")"),
            (Operator, "/"),
            (Keyword, "pi"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn declarations() {
    assert_tokens(
        "real const brho = 3.3356;",
        &[
            (Keyword, "real"),
            (Keyword, "const"),
            (NameVariable, "brho"),
            (Operator, "="),
            (Text, "3.3356"),
            (Punctuation, ";"),
        ],
    );
    // A variable that happens to be named like a declaration keyword
    assert_tokens(
        "real = 3;",
        &[
            (NameVariable, "real"),
            (Operator, "="),
            (Text, "3"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn comparisons_do_not_open_assignments() {
    assert_tokens(
        "if (n == 3) {",
        &[
            (Keyword, "if"),
            (Punctuation, "("),
            (Text, "n"),
            (Operator, "=="),
            (Text, "3) "),
            (Punctuation, "{"),
        ],
    );
}

#[rstest]
#[case("! a comment", Comment)]
#[case("// another one", Comment)]
#[case("\"double quoted\"", String)]
#[case("'single quoted'", String)]
fn single_token_constructs(#[case] source: &str, #[case] kind: TokenKind) {
    let tokens: Vec<_> = tokenize(source).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].text, source);
}

#[test]
fn unterminated_string_stops_at_line_end() {
    let tokens: Vec<_> = tokenize("\"open\ntwiss;").collect();
    assert_eq!(tokens[0].kind, String);
    assert_eq!(tokens[0].text, "\"open");
    assert_eq!(tokens[2].kind, NameClass);
}

#[test]
fn block_comments_nest() {
    let source = "/* a /* b */ c */";
    let mut tokens = tokenize(source);
    let all: Vec<_> = tokens.by_ref().collect();
    assert!(all.iter().all(|t| t.kind == CommentMultiline));
    assert_eq!(tokens.stack_depth(), 1);

    let source = "/* a /* b */ c */ twiss;";
    assert_eq!(tokenize(source).find(|t| t.kind == NameClass).unwrap().text, "twiss");
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let source = "/* a /* b */ twiss;";
    let mut tokens = tokenize(source);
    assert!(tokens.by_ref().all(|t| t.kind == CommentMultiline));
    assert_eq!(tokens.current_state(), "comment");
}

#[test]
fn stop_at_top_level_disables_the_rest() {
    let source = "stop; x: MARKER;\ntwiss;";
    let tokens: Vec<_> = tokenize(source).collect();
    assert_eq!(tokens[0].kind, Keyword);
    assert_eq!(tokens[1].kind, Punctuation);
    assert!(tokens[2..].iter().all(|t| t.kind == Comment));
    assert_eq!(tokens[2].text, " x: MARKER;\ntwiss;");
}

#[rstest]
#[case("exit;")]
#[case("QUIT ;")]
#[case("return;")]
fn every_stop_keyword_ends_the_script(#[case] stop: &str) {
    let source = format!("{stop} twiss;");
    let last = tokenize(&source).last().unwrap();
    assert_eq!(last.kind, Comment);
    assert_eq!(last.text, " twiss;");
}

#[test]
fn stop_inside_a_block_is_contained() {
    assert_tokens(
        "{ stop; } y: MARKER;",
        &[
            (Punctuation, "{"),
            (Keyword, "stop"),
            (Punctuation, ";"),
            (Comment, " "),
            (Punctuation, "}"),
            (NameVariable, "y"),
            (Text, ":"),
            (NameClass, "MARKER"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn macro_definition() {
    assert_tokens(
        "set_knobs(k, v): macro = { k = v; };",
        &[
            (NameFunction, "set_knobs"),
            (Text, "(k, v)"),
            (Text, ":"),
            (Keyword, "macro"),
            (Operator, "="),
            (Punctuation, "{"),
            (NameVariable, "k"),
            (Operator, "="),
            (Text, "v"),
            (Punctuation, ";"),
            (Punctuation, "}"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn macro_without_arguments_or_colon() {
    let tokens = significant("go macro = { twiss; }");
    assert_eq!(tokens[0], (NameFunction, "go"));
    assert_eq!(tokens[1], (Keyword, "macro"));
    assert_eq!(tokens[4], (NameClass, "twiss"));
}

#[test]
fn nested_braces_in_macro_body() {
    let source = "m: macro = { if (a > 1) { twiss; } };";
    let mut tokens = tokenize(source);
    let last = tokens.by_ref().last().unwrap();
    assert_eq!(last.text, ";");
    assert_eq!(last.kind, Punctuation);
    assert_eq!(tokens.stack_depth(), 1);
}

#[test]
fn exec_names_the_macro() {
    assert_tokens(
        "exec, set_knobs(kqf, 0.5);",
        &[
            (Keyword, "exec"),
            (Punctuation, ","),
            (NameFunction, "set_knobs"),
            (Punctuation, "("),
            (Text, "kqf, 0.5)"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn exec_call_form_names_the_macro() {
    assert_tokens(
        "exec(set_knobs, 1);",
        &[
            (Keyword, "exec"),
            (Punctuation, "("),
            (NameFunction, "set_knobs"),
            (Punctuation, ","),
            (Text, "1)"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn seqedit_block() {
    let source = "seqedit, sequence=fodo;\ninstall, element=mk1, at=1.25;\nflatten;\nendedit;";
    assert_tokens(
        source,
        &[
            (Keyword, "seqedit"),
            (Punctuation, ","),
            (NameAttribute, "sequence"),
            (Operator, "="),
            (Text, "fodo"),
            (Punctuation, ";"),
            (NameClass, "install"),
            (Punctuation, ","),
            (NameAttribute, "element"),
            (Operator, "="),
            (Text, "mk1"),
            (Punctuation, ","),
            (NameAttribute, "at"),
            (Operator, "="),
            (Text, "1.25"),
            (Punctuation, ";"),
            (NameClass, "flatten"),
            (Punctuation, ";"),
            (Keyword, "endedit"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn command_with_string_argument() {
    assert_tokens(
        "call, file=\"optics.madx\";",
        &[
            (NameClass, "call"),
            (Punctuation, ","),
            (NameAttribute, "file"),
            (Operator, "="),
            (String, "\"optics.madx\""),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn comments_inside_commands() {
    assert_tokens(
        "twiss, ! trailing\n  file=\"t.tfs\";",
        &[
            (NameClass, "twiss"),
            (Punctuation, ","),
            (Comment, "! trailing"),
            (NameAttribute, "file"),
            (Operator, "="),
            (String, "\"t.tfs\""),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn unknown_input_is_text() {
    let tokens: Vec<_> = tokenize("@#$").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, Text);
    assert_eq!(tokens[0].span, 0..3);
}

#[test]
fn comment_after_unknown_word() {
    assert_tokens(
        "ptc_end ! done\n",
        &[(Text, "ptc_end "), (Comment, "! done")],
    );
}

#[test]
fn block_comment_after_unknown_word() {
    assert_tokens(
        "foo /* a;\n twiss, b */ twiss;",
        &[
            (Text, "foo "),
            (CommentMultiline, "/*"),
            (CommentMultiline, " a;\n twiss, b "),
            (CommentMultiline, "*/"),
            (NameClass, "twiss"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn string_after_unknown_word() {
    assert_tokens(
        "foo 'a;b' c;",
        &[
            (Text, "foo "),
            (String, "'a;b'"),
            (Text, "c"),
            (Punctuation, ";"),
        ],
    );
}

#[test]
fn lone_slash_in_unknown_text() {
    assert_tokens(
        "a/b;",
        &[(Text, "a"), (Text, "/"), (Text, "b"), (Punctuation, ";")],
    );
}

#[rstest]
#[case("x := 2pi;", "pi")]
#[case("q: quadrupole, l=2at;", "at")]
fn words_are_not_matched_mid_word(#[case] source: &str, #[case] tail: &str) {
    let tokens = significant(source);
    assert!(tokens.contains(&(Text, tail)), "{tokens:?}");
    assert!(!tokens.iter().any(|(kind, text)| *text == tail && *kind != Text));
}

#[test]
fn empty_input() {
    assert_eq!(tokenize("").count(), 0);
}
