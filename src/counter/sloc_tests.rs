use super::*;
use crate::syntax::CommentKind;

fn comment(source: &str, text: &str) -> Comment {
    let start = source.find(text).unwrap();
    let kind = if text.starts_with("//") {
        CommentKind::Line
    } else {
        CommentKind::Block
    };
    Comment {
        kind,
        value: text[2..].trim_end_matches("*/").to_string(),
        span: Span::new(start, start + text.len()),
    }
}

#[test]
fn line_stats_default() {
    let stats = LineStats::default();
    assert_eq!(stats, LineStats::new());
    assert_eq!(stats.counted(true, true), 0);
}

#[test]
fn count_empty_source() {
    let counter = SlocCounter::new("", &[]);
    assert_eq!(counter.line_count(), 0);
    assert_eq!(counter.count().total, 0);
}

#[test]
fn count_code_only() {
    let source = "function main() {\n  run();\n}";
    let stats = SlocCounter::new(source, &[]).count();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 3);
    assert_eq!(stats.comment, 0);
    assert_eq!(stats.blank, 0);
}

#[test]
fn trailing_newline_is_not_a_line() {
    let counter = SlocCounter::new("a();\nb();\n", &[]);
    assert_eq!(counter.line_count(), 2);
}

#[test]
fn blank_lines_include_whitespace_only() {
    let source = "a();\n\n   \n\t\nb();";
    let stats = SlocCounter::new(source, &[]).count();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.blank, 3);
    assert_eq!(stats.counted(true, false), 2);
}

#[test]
fn line_comment_alone_is_comment_line() {
    let source = "// header\nconst x = 1;";
    let comments = [comment(source, "// header")];
    let counter = SlocCounter::new(source, &comments);

    assert_eq!(counter.line_kind(1), Some(LineKind::Comment));
    assert_eq!(counter.line_kind(2), Some(LineKind::Code));
}

#[test]
fn trailing_comment_keeps_code_line() {
    let source = "run(); // go\nnext();";
    let comments = [comment(source, "// go")];
    let counter = SlocCounter::new(source, &comments);

    assert_eq!(counter.line_kind(1), Some(LineKind::Code));
}

#[test]
fn code_after_block_comment_is_code() {
    let source = "/* a */ run();";
    let comments = [comment(source, "/* a */")];
    assert_eq!(SlocCounter::new(source, &comments).line_kind(1), Some(LineKind::Code));
}

#[test]
fn block_comment_spans_lines() {
    let source = "/*\n * one\n\n * two\n */\nrun();";
    let comments = [comment(source, "/*\n * one\n\n * two\n */")];
    let stats = SlocCounter::new(source, &comments).count();

    assert_eq!(stats.total, 6);
    assert_eq!(stats.comment, 5);
    assert_eq!(stats.code, 1);
    assert_eq!(stats.counted(false, true), 1);
}

#[test]
fn two_comments_on_one_line() {
    let source = "/* a */ /* b */\nx();";
    let comments = [comment(source, "/* a */"), comment(source, "/* b */")];
    assert_eq!(
        SlocCounter::new(source, &comments).line_kind(1),
        Some(LineKind::Comment)
    );
}

#[test]
fn count_lines_clamps_range() {
    let source = "a();\n\nb();";
    let counter = SlocCounter::new(source, &[]);

    assert_eq!(counter.count_lines(2, 3).total, 2);
    assert_eq!(counter.count_lines(0, 99).total, 3);
    assert_eq!(counter.count_lines(3, 2).total, 0);
}

#[test]
fn kept_lines_apply_filters() {
    let source = "// c\n\na();\nb();";
    let comments = [comment(source, "// c")];
    let counter = SlocCounter::new(source, &comments);

    assert_eq!(counter.kept_lines(false, false).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(counter.kept_lines(true, true).collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn span_from_line_reaches_end_of_file() {
    let source = "a();\nb();\nc();";
    let counter = SlocCounter::new(source, &[]);
    let span = counter.span_from_line(2).unwrap();

    assert_eq!(span.start, 5);
    assert_eq!(span.end, source.len());
    assert_eq!(span.start_pos, Position::new(2, 1));
    assert_eq!(span.end_pos, Position::new(3, 5));
    assert!(counter.span_from_line(4).is_none());
    assert!(counter.span_from_line(0).is_none());
}
