//! Applying rule fixes to source text.

use crate::rules::Fix;

/// Outcome of one fix pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutput {
    pub output: String,
    pub applied: usize,
    /// Fixes dropped because they overlapped an earlier one.
    pub skipped: usize,
}

impl FixOutput {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply non-overlapping fixes in source order.
///
/// Fixes are sorted by range; a fix that starts before the previous accepted
/// fix ends is skipped and left for a later pass. Out-of-range fixes are
/// skipped too.
#[must_use]
pub fn apply_fixes<'a>(source: &str, fixes: impl IntoIterator<Item = &'a Fix>) -> FixOutput {
    let mut fixes: Vec<&Fix> = fixes.into_iter().collect();
    fixes.sort_by_key(|fix| fix.range);

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut applied = 0;
    let mut skipped = 0;

    for fix in fixes {
        let (start, end) = fix.range;
        let in_bounds = start <= end
            && end <= source.len()
            && source.is_char_boundary(start)
            && source.is_char_boundary(end);
        if start < cursor || !in_bounds {
            skipped += 1;
            continue;
        }
        output.push_str(&source[cursor..start]);
        output.push_str(&fix.text);
        cursor = end;
        applied += 1;
    }
    output.push_str(&source[cursor..]);

    FixOutput {
        output,
        applied,
        skipped,
    }
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
