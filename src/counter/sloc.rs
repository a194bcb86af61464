use crate::syntax::{Comment, Position, Span};

/// How a source line counts toward a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    /// Non-code line covered by a comment, including blank lines inside a
    /// block comment.
    Comment,
    Blank,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }

    /// Lines left after the requested filters.
    #[must_use]
    pub const fn counted(&self, skip_blank: bool, skip_comments: bool) -> usize {
        let mut lines = self.total;
        if skip_blank {
            lines -= self.blank;
        }
        if skip_comments {
            lines -= self.comment;
        }
        lines
    }
}

/// Per-line classification of one file, computed once from its source and
/// comment spans.
#[derive(Debug, Clone)]
pub struct SlocCounter {
    kinds: Vec<LineKind>,
    starts: Vec<usize>,
    source_len: usize,
}

impl SlocCounter {
    /// `comments` must be sorted by start offset.
    #[must_use]
    pub fn new(source: &str, comments: &[Comment]) -> Self {
        let mut kinds = Vec::new();
        let mut starts = Vec::new();
        let mut next_comment = 0;
        let mut offset = 0;

        let mut lines: Vec<&str> = source.split('\n').collect();
        // A trailing newline does not open another line.
        if lines.len() > 1 && lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }
        if source.is_empty() {
            lines.clear();
        }

        for line in lines {
            let end = offset + line.len();
            while next_comment < comments.len() && comments[next_comment].span.end <= offset {
                next_comment += 1;
            }
            let overlapping = comments[next_comment..]
                .iter()
                .take_while(|comment| comment.span.start < end.max(offset + 1));
            kinds.push(classify_line(source, offset, end, overlapping));
            starts.push(offset);
            offset = end + 1;
        }

        Self {
            kinds,
            starts,
            source_len: source.len(),
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.kinds.len()
    }

    /// Kind of a 1-based line.
    #[must_use]
    pub fn line_kind(&self, line: usize) -> Option<LineKind> {
        line.checked_sub(1).and_then(|i| self.kinds.get(i).copied())
    }

    /// Whole-file statistics.
    #[must_use]
    pub fn count(&self) -> LineStats {
        self.count_lines(1, self.kinds.len())
    }

    /// Statistics for the inclusive 1-based range `first..=last`, clamped to
    /// the file.
    #[must_use]
    pub fn count_lines(&self, first: usize, last: usize) -> LineStats {
        let mut stats = LineStats::new();
        let first = first.max(1);
        let last = last.min(self.kinds.len());
        if first > last {
            return stats;
        }
        for &kind in &self.kinds[first - 1..last] {
            stats.record(kind);
        }
        stats
    }

    /// 1-based numbers of the lines that survive the filters.
    pub fn kept_lines(
        &self,
        skip_blank: bool,
        skip_comments: bool,
    ) -> impl Iterator<Item = usize> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(move |(_, kind)| match kind {
                LineKind::Blank => !skip_blank,
                LineKind::Comment => !skip_comments,
                LineKind::Code => true,
            })
            .map(|(i, _)| i + 1)
    }

    /// Span from the start of `line` to the end of the file.
    #[must_use]
    pub fn span_from_line(&self, line: usize) -> Option<Span> {
        let start = *self.starts.get(line.checked_sub(1)?)?;
        let last_line = self.kinds.len();
        let last_start = self.starts.last().copied().unwrap_or_default();
        Some(
            Span::new(start, self.source_len).with_positions(
                Position::new(line, 1),
                Position::new(last_line, self.source_len - last_start + 1),
            ),
        )
    }
}

fn classify_line<'c>(
    source: &str,
    start: usize,
    end: usize,
    comments: impl Iterator<Item = &'c Comment>,
) -> LineKind {
    let mut cursor = start;
    let mut covered = false;

    for comment in comments {
        let comment_start = comment.span.start.max(start);
        if comment_start > cursor && has_code(&source[cursor..comment_start.min(end)]) {
            return LineKind::Code;
        }
        covered = true;
        cursor = cursor.max(comment.span.end.min(end));
    }

    if has_code(&source[cursor..end]) {
        LineKind::Code
    } else if covered {
        LineKind::Comment
    } else {
        LineKind::Blank
    }
}

fn has_code(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
