//! Integration tests for template and date pattern parsing.

use maketext::parser::{
    Argument, ParseError, PatternPart, Segment, Token, parse_date_pattern, parse_template,
    tokenize,
};

// =============================================================================
// Literals and escapes
// =============================================================================

#[test]
fn test_pure_literal() {
    let t = parse_template("Hello, world!").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("Hello, world!".into())]);
}

#[test]
fn test_empty_string() {
    let t = parse_template("").unwrap();
    assert_eq!(t.segments, vec![]);
}

#[test]
fn test_tilde_escapes_outside_groups() {
    let t = parse_template("~[x~] ~~ ~a").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("[x] ~ ~a".into())]);
}

#[test]
fn test_trailing_tilde_is_literal() {
    let t = parse_template("end~").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("end~".into())]);
}

#[test]
fn test_tokenizer_offsets() {
    assert_eq!(
        tokenize("a[b]~"),
        vec![
            (0, Token::Text("a")),
            (1, Token::Open),
            (2, Token::Text("b")),
            (3, Token::Close),
            (4, Token::Tilde),
        ]
    );
    assert_eq!(tokenize("~,x"), vec![(0, Token::Escape(',')), (2, Token::Text("x"))]);
}

// =============================================================================
// Bracket groups
// =============================================================================

#[test]
fn test_placeholder() {
    let t = parse_template("Hi [_1]!").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("Hi ".into()),
            Segment::Placeholder(1),
            Segment::Literal("!".into()),
        ]
    );
}

#[test]
fn test_function_call() {
    let t = parse_template("[quant,_1,file,files]").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Call {
            function: "quant".into(),
            args: vec![
                Argument::Positional(1),
                Argument::Literal("file".into()),
                Argument::Literal("files".into()),
            ],
            offset: 0,
        }]
    );
}

#[test]
fn test_shorthand_aliases_are_canonicalized() {
    let t = parse_template("[#,_1] [*,_2,a,b]").unwrap();
    let names: Vec<_> = t.function_names().collect();
    assert_eq!(names, vec![("numf", 0), ("quant", 7)]);
}

#[test]
fn test_escaped_comma_and_escapes_inside_group() {
    let t = parse_template("[join,~,,a~b,_1]").unwrap();
    match &t.segments[0] {
        Segment::Call { function, args, .. } => {
            assert_eq!(function, "join");
            assert_eq!(
                *args,
                vec![
                    Argument::Literal(",".into()),
                    Argument::Literal("ab".into()),
                    Argument::Positional(1),
                ]
            );
        }
        other => panic!("expected call, got {other:?}"),
    }
}

#[test]
fn test_spread_argument() {
    let t = parse_template("[list_and,_*]").unwrap();
    match &t.segments[0] {
        Segment::Call { args, .. } => assert_eq!(*args, vec![Argument::Spread]),
        other => panic!("expected call, got {other:?}"),
    }
}

#[test]
fn test_empty_literal_argument() {
    let t = parse_template("[list,,_1]").unwrap();
    match &t.segments[0] {
        Segment::Call { args, .. } => {
            assert_eq!(
                *args,
                vec![Argument::Literal(String::new()), Argument::Positional(1)]
            );
        }
        other => panic!("expected call, got {other:?}"),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_structural_errors_carry_offsets() {
    assert_eq!(
        parse_template("[[_1]]").unwrap_err(),
        ParseError::NestedGroup { offset: 1 }
    );
    assert_eq!(
        parse_template("a]").unwrap_err(),
        ParseError::UnmatchedClose { offset: 1 }
    );
    assert_eq!(
        parse_template("x[]").unwrap_err(),
        ParseError::EmptyGroup { offset: 1 }
    );
    assert_eq!(
        parse_template("ab[_1").unwrap_err(),
        ParseError::UnclosedGroup { offset: 2 }
    );
}

#[test]
fn test_invalid_fields() {
    assert_eq!(
        parse_template("[foo]").unwrap_err(),
        ParseError::InvalidPlaceholder {
            offset: 0,
            text: "foo".into()
        }
    );
    assert_eq!(
        parse_template("x [numf,_x]").unwrap_err(),
        ParseError::InvalidArgument {
            offset: 2,
            text: "_x".into()
        }
    );
}

#[test]
fn test_error_messages() {
    let err = parse_template("ab[_1").unwrap_err();
    assert_eq!(err.to_string(), "unclosed '[' at byte 2");
    assert_eq!(err.offset(), 2);
}

// =============================================================================
// Date patterns
// =============================================================================

#[test]
fn test_date_pattern_fields_and_quoted_literals() {
    assert_eq!(
        parse_date_pattern("d MMMM y 'г'."),
        vec![
            PatternPart::Field { symbol: 'd', width: 1 },
            PatternPart::Literal(" ".into()),
            PatternPart::Field { symbol: 'M', width: 4 },
            PatternPart::Literal(" ".into()),
            PatternPart::Field { symbol: 'y', width: 1 },
            PatternPart::Literal(" г.".into()),
        ]
    );
}

#[test]
fn test_date_pattern_doubled_quotes() {
    assert_eq!(
        parse_date_pattern("h 'o''clock' a"),
        vec![
            PatternPart::Field { symbol: 'h', width: 1 },
            PatternPart::Literal(" o'clock ".into()),
            PatternPart::Field { symbol: 'a', width: 1 },
        ]
    );
    assert_eq!(parse_date_pattern("''"), vec![PatternPart::Literal("'".into())]);
}

#[test]
fn test_date_pattern_adjacent_fields() {
    assert_eq!(
        parse_date_pattern("yyyyMMdd"),
        vec![
            PatternPart::Field { symbol: 'y', width: 4 },
            PatternPart::Field { symbol: 'M', width: 2 },
            PatternPart::Field { symbol: 'd', width: 2 },
        ]
    );
}
