//! Text renderings of a computed diff: the downloadable report, a
//! line-numbered view and git-style unified output.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{DiffOp, DiffResult};

/// File name offered when the report is downloaded.
pub const REPORT_FILE_NAME: &str = "text_diff_result.txt";

/// A diff line with its position in each text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine<'a> {
    /// Line number in the original text (1-indexed), None for additions
    pub old_line: Option<usize>,
    /// Line number in the new text (1-indexed), None for removals
    pub new_line: Option<usize>,
    pub op: DiffOp<'a>,
}

// Written out as a plain struct so JS receives an object, not a `Map`.
impl Serialize for NumberedLine<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NumberedLine", 4)?;
        state.serialize_field("oldLine", &self.old_line)?;
        state.serialize_field("newLine", &self.new_line)?;
        state.serialize_field("type", self.op.kind())?;
        state.serialize_field("content", self.op.content())?;
        state.end()
    }
}

pub fn numbered_lines<'a>(result: &DiffResult<'a>) -> Vec<NumberedLine<'a>> {
    let mut old_line = 0;
    let mut new_line = 0;
    result
        .ops
        .iter()
        .map(|op| {
            let (old, new) = match op {
                DiffOp::Common(_) => {
                    old_line += 1;
                    new_line += 1;
                    (Some(old_line), Some(new_line))
                }
                DiffOp::Removed(_) => {
                    old_line += 1;
                    (Some(old_line), None)
                }
                DiffOp::Added(_) => {
                    new_line += 1;
                    (None, Some(new_line))
                }
            };
            NumberedLine {
                old_line: old,
                new_line: new,
                op: *op,
            }
        })
        .collect()
}

/// Plain-text report with both inputs, the statistics and every classified line.
pub fn render_report(old_text: &str, new_text: &str, result: &DiffResult<'_>) -> String {
    let details: Vec<String> = result.ops.iter().map(ToString::to_string).collect();
    format!(
        "Text diff result:

Original text:
{old_text}

New text:
{new_text}

Statistics:
Added lines: {added}
Removed lines: {removed}
Unchanged lines: {unchanged}

Details:
{details}
",
        added = result.stats.added,
        removed = result.stats.removed,
        unchanged = result.stats.unchanged,
        details = details.join("\n"),
    )
}

/// Generate unified diff format string (similar to git diff)
///
/// Changes closer than `2 * context_lines` unchanged lines share a hunk.
/// Returns an empty string when the texts are identical.
///
/// Lines are the `\n`-separated segments the diff was computed on, so a
/// trailing newline shows up as a final empty line and no
/// `\ No newline at end of file` marker is written.
pub fn render_unified(
    result: &DiffResult<'_>,
    old_name: &str,
    new_name: &str,
    context_lines: usize,
) -> String {
    if result.is_identical() {
        return String::new();
    }

    let lines = numbered_lines(result);
    let changed: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.op.is_change())
        .map(|(idx, _)| idx)
        .collect();

    // Group change positions into (start, end) hunk ranges over `lines`.
    let mut hunks: Vec<(usize, usize)> = Vec::new();
    for &idx in &changed {
        let start = idx.saturating_sub(context_lines);
        let end = idx
            .saturating_add(1)
            .saturating_add(context_lines)
            .min(lines.len());
        match hunks.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => hunks.push((start, end)),
        }
    }

    let mut output = String::new();
    output.push_str(&format!("--- {}\n", old_name));
    output.push_str(&format!("+++ {}\n", new_name));

    for (start, end) in hunks {
        let hunk_lines = &lines[start..end];
        let old_before = lines[..start].iter().filter(|l| l.old_line.is_some()).count();
        let new_before = lines[..start].iter().filter(|l| l.new_line.is_some()).count();
        let old_count = hunk_lines.iter().filter(|l| l.old_line.is_some()).count();
        let new_count = hunk_lines.iter().filter(|l| l.new_line.is_some()).count();
        // An empty side points at the line before the hunk, as git does.
        let old_start = if old_count == 0 { old_before } else { old_before + 1 };
        let new_start = if new_count == 0 { new_before } else { new_before + 1 };

        output.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            old_start, old_count, new_start, new_count
        ));

        for line in hunk_lines {
            let prefix = match line.op {
                DiffOp::Common(_) => ' ',
                DiffOp::Added(_) => '+',
                DiffOp::Removed(_) => '-',
            };
            output.push(prefix);
            output.push_str(line.op.content());
            output.push('\n');
        }
    }

    output
}
