use editor_lint::{
    DiagnosticRange, DiagnosticScanner, DiagnosticSeverity, LintConfig, scanner::LINE_TOO_LONG,
    scanner::MIXED_INDENTATION_FILE, scanner::TAB_CHARACTER, scanner::TODO_MARKER,
    scanner::TRAILING_WHITESPACE,
};
use editor_lint_rules::{
    CONSOLE_LOG, CSS_IMPORTANT, DEBUG_OUTPUT, DEBUG_PRINT, FMT_PRINT, JSON_TRAILING_COMMA,
    MISSING_SEMICOLON, MIXED_INDENTATION, PRINTLN, default_rule_set, default_scanner,
};
use pretty_assertions::assert_eq;

fn codes(text: &str, language: &str) -> Vec<String> {
    default_scanner()
        .unwrap()
        .scan(text, language)
        .into_iter()
        .map(|d| d.code)
        .collect()
}

#[test]
fn trailing_whitespace_on_last_char() {
    let diags = default_scanner().unwrap().scan("foo   \n", "javascript");
    // `foo` also trips the missing-semicolon heuristic.
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].code, TRAILING_WHITESPACE);
    assert_eq!(diags[0].range, DiagnosticRange::new(5, 6));
    assert_eq!(diags[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(diags[1].code, MISSING_SEMICOLON);
}

#[test]
fn long_line_threshold_differs_for_markdown() {
    let line = format!("{};", "a".repeat(129));
    let scanner = default_scanner().unwrap();

    let js = scanner.scan(&line, "javascript");
    assert_eq!(js.len(), 1);
    assert_eq!(js[0].code, LINE_TOO_LONG);
    assert_eq!(js[0].range, DiagnosticRange::new(120, 130));

    let md = scanner.scan(&line, "md");
    assert_eq!(md.len(), 1);
    assert_eq!(md[0].range, DiagnosticRange::new(100, 130));
}

#[test]
fn python_print_only_in_code() {
    assert_eq!(codes("print('x')", "python"), vec![DEBUG_PRINT]);
    assert!(codes("# print('x')", "python").is_empty());
    assert!(codes("msg = \"print(1)\"", "python").is_empty());
}

#[test]
fn python_mixed_indentation_line_and_file() {
    let text = "def f():\n \tx = 1\n\ty = 2\n";
    assert_eq!(
        codes(text, "py"),
        vec![
            TAB_CHARACTER,
            MIXED_INDENTATION,
            TAB_CHARACTER,
            MIXED_INDENTATION_FILE
        ]
    );
}

#[test]
fn json_trailing_comma_is_an_error() {
    let diags = default_scanner().unwrap().scan("{\"a\": 1,}", "json");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, JSON_TRAILING_COMMA);
    assert_eq!(diags[0].severity, DiagnosticSeverity::Error);
    assert_eq!(diags[0].range, DiagnosticRange::new(7, 8));
}

#[test]
fn c_family_tags_share_rules() {
    for tag in ["cpp", "c", "java", "php"] {
        assert_eq!(
            codes("int x = 1\nprintf(\"%d\", x);\n", tag),
            vec![MISSING_SEMICOLON, DEBUG_OUTPUT],
            "{tag}"
        );
    }
}

#[test]
fn language_tables() {
    assert_eq!(codes("console.log(1);", "js"), vec![CONSOLE_LOG]);
    assert_eq!(codes("fmt.Println(1)", "go"), vec![FMT_PRINT]);
    assert_eq!(codes("println!(\"x\");", "rust"), vec![PRINTLN]);
    assert_eq!(codes("a { color: red !important; }", "css"), vec![CSS_IMPORTANT]);
    assert!(codes("# Title\n\nsome *prose*.\n", "markdown").is_empty());
}

#[test]
fn unknown_language_gets_universal_rules_only() {
    let text = "print('x')  \n\tconsole.log(1)\n// TODO\n";
    assert_eq!(
        codes(text, "cobol"),
        vec![TRAILING_WHITESPACE, TAB_CHARACTER, TODO_MARKER]
    );
}

#[test]
fn language_diagnostics_follow_universal_ones_per_line() {
    let diags = default_scanner()
        .unwrap()
        .scan("x = 1\nprint(x) \n", "python");
    let lines: Vec<(&str, usize)> = diags
        .iter()
        .map(|d| (d.code.as_str(), d.range.start))
        .collect();
    assert_eq!(lines, vec![(TRAILING_WHITESPACE, 14), (DEBUG_PRINT, 6)]);
}

#[test]
fn config_strict_and_disabled_rules() {
    let config = LintConfig::new()
        .strict()
        .disable_rule(MISSING_SEMICOLON);
    let scanner = DiagnosticScanner::new(default_rule_set().unwrap())
        .unwrap()
        .with_config(config);

    let diags = scanner.scan("let a = 1 \n", "javascript");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, TRAILING_WHITESPACE);
    assert_eq!(diags[0].severity, DiagnosticSeverity::Error);
}

#[test]
fn scanner_is_shareable_across_threads() {
    let scanner = std::sync::Arc::new(default_scanner().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let scanner = std::sync::Arc::clone(&scanner);
            std::thread::spawn(move || scanner.scan(&format!("x = {i} \n"), "python").len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
