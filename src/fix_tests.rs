use super::*;

fn remove(start: usize, end: usize) -> Fix {
    Fix {
        range: (start, end),
        text: String::new(),
    }
}

#[test]
fn no_fixes_returns_source() {
    let result = apply_fixes("const x = 1;", &[]);
    assert_eq!(result.output, "const x = 1;");
    assert!(!result.changed());
}

#[test]
fn removes_comment_line_but_keeps_newline() {
    let source = "// plain comment\nconst x = 1;";
    let result = apply_fixes(source, &[remove(0, 16)]);
    assert_eq!(result.output, "\nconst x = 1;");
    assert_eq!(result.applied, 1);
}

#[test]
fn fixes_apply_in_range_order() {
    let source = "a /* x */ b /* y */ c";
    let fixes = [remove(12, 19), remove(2, 9)];
    let result = apply_fixes(source, &fixes);
    assert_eq!(result.output, "a  b  c");
    assert_eq!(result.applied, 2);
}

#[test]
fn overlapping_fix_is_skipped() {
    let source = "0123456789";
    let fixes = [
        remove(2, 6),
        Fix {
            range: (4, 8),
            text: "X".into(),
        },
    ];
    let result = apply_fixes(source, &fixes);
    assert_eq!(result.output, "016789");
    assert_eq!(result.applied, 1);
    assert_eq!(result.skipped, 1);
}

#[test]
fn replacement_text_is_inserted() {
    let result = apply_fixes(
        "let a = 1;",
        &[Fix {
            range: (0, 3),
            text: "const".into(),
        }],
    );
    assert_eq!(result.output, "const a = 1;");
}

#[test]
fn out_of_range_fix_is_skipped() {
    let result = apply_fixes("short", &[remove(3, 99)]);
    assert_eq!(result.output, "short");
    assert_eq!(result.skipped, 1);
}
