use excheck::parser::{parse_declarations, parse_method, Location, ParseError};

#[test]
fn header_forms() {
    let m = parse_method("public abstract String read(java.io.File f, int[] buf) throws java.io.IOException;").unwrap();
    assert_eq!(m.name(), "read");
    assert_eq!(m.parameters(), ["java.io.File", "int[]"]);
    assert_eq!(m.throws(), ["java.io.IOException"]);

    let m = parse_method("default void close() {}").unwrap();
    assert_eq!(m.name(), "close");
    assert!(m.throws().is_empty());
}

#[test]
fn header_with_annotation_arguments() {
    let m = parse_method(r#"@SuppressWarnings(value = "x") void m() throws A"#);
    // string literals are not part of the language
    assert!(matches!(m, Err(ParseError::Lexical { .. })));

    let m = parse_method("@Deprecated(since) void m() throws A").unwrap();
    assert_eq!(m.throws(), ["A"]);
}

#[test]
fn missing_throws_list_reports_location() {
    let err = parse_method("void m() throws").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEndOfInput { expected: "type name".into(), location: Location::new(1, 16, 15) }
    );
}

#[test]
fn missing_parenthesis() {
    let err = parse_method("void m throws IOException").unwrap_err();
    match err {
        ParseError::UnexpectedToken { expected, found, location } => {
            assert_eq!(expected, "'('");
            assert_eq!(found, "throws");
            assert_eq!(location.column, 8);
        }
        other => panic!("unexpected: {other}"),
    }
}

#[test]
fn declarations_with_comments_and_modifiers() {
    let src = r#"
/* banking errors */
public final class InsufficientFundsException extends Exception {
    private final double shortfall;
}
// runtime failures
unchecked class LedgerCorrupted extends Exception;
"#;
    let decls = parse_declarations(src).unwrap();
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].name, "InsufficientFundsException");
    assert_eq!(decls[0].extends.as_deref(), Some("Exception"));
    assert!(decls[1].unchecked);
    assert_eq!(decls[1].location.line, 7);
}

#[test]
fn declaration_requires_class_keyword() {
    let err = parse_declarations("interface Foo {}").unwrap_err();
    assert!(err.to_string().contains("expected 'class'"), "{err}");
    assert_eq!(err.location(), Some(Location::new(1, 1, 0)));
}

#[test]
fn empty_declarations_source() {
    assert!(parse_declarations("  // nothing\n").unwrap().is_empty());
}
