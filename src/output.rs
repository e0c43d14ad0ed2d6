//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>` or
//! `String`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! cover 200x100 on 800x533
//!     resample: 800x533 → 200x134
//!     crop: (0, 17, 200, 117)
//!     output: 200x100
//! ```
//!
//! ## Resize
//!
//! ```text
//! photo.jpg 800x533 → out/photo.jpg 200x100
//! failed: tiny.png: image is too small: size 90x60, required 200x100
//!
//! Resized 1 image, 1 failed
//! ```
//!
//! ## Check
//!
//! ```text
//! ok: photo.jpg 800x533
//! rejected: tiny.png 90x60: image is too small: size 90x60, required 200x100
//!
//! Checked 1 image, 1 failed
//! ```

use crate::imaging::Plan;
use crate::types::Size;
use std::path::{Path, PathBuf};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Describe a plan step by step.
pub fn format_plan(heading: &str, source: Size, plan: &Plan) -> Vec<String> {
    let mut lines = vec![format!("{heading} on {source}")];
    let step = |label: &str, detail: String| format!("{}{label}: {detail}", indent(1));
    let resample_line = |to: Size| {
        if to == source {
            step("resample", "skipped (already at size)".to_string())
        } else {
            step("resample", format!("{source} → {to}"))
        }
    };

    match plan {
        Plan::Crop(rect) => lines.push(step("crop", rect.to_string())),
        Plan::ScaleThenCrop { scaled, crop } => {
            lines.push(resample_line(*scaled));
            lines.push(step("crop", crop.to_string()));
        }
        Plan::ScaleThenPad {
            scaled,
            canvas,
            offset,
            background,
        } => {
            lines.push(resample_line(*scaled));
            lines.push(step("canvas", format!("{canvas} filled {background}")));
            lines.push(step("paste", format!("{scaled} at {offset}")));
        }
        Plan::Scale(size) => lines.push(resample_line(*size)),
    }
    lines.push(step("output", plan.output_size().to_string()));
    lines
}

pub fn print_plan(heading: &str, source: Size, plan: &Plan) {
    for line in format_plan(heading, source, plan) {
        println!("{}", line);
    }
}

/// One processed file.
pub fn format_resized(input: &Path, source: Size, output: &Path, produced: Size) -> String {
    format!(
        "{} {} → {} {}",
        input.display(),
        source,
        output.display(),
        produced
    )
}

/// One validation result.
pub fn format_check(input: &Path, source: Size, problem: Option<&str>) -> String {
    match problem {
        None => format!("ok: {} {}", input.display(), source),
        Some(reason) => format!("rejected: {} {}: {}", input.display(), source, reason),
    }
}

pub fn format_failure(input: &Path, error: &str) -> String {
    format!("failed: {}: {}", input.display(), error)
}

/// Closing line for batch commands.
pub fn format_summary(verb: &str, succeeded: usize, failed: usize) -> String {
    let done = format!("{verb} {}", plural(succeeded, "image"));
    if failed == 0 {
        done
    } else {
        format!("{done}, {failed} failed")
    }
}

/// What happened to one input of a batch command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Processed; the line to print.
    Done(String),
    /// Read fine, but too small for the policy; the line to print.
    Rejected(String),
    /// Could not be processed at all.
    Failed { input: PathBuf, error: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }
}

/// Lines for a batch in input order, and how many inputs did not succeed.
///
/// Rejected inputs count as failures.
pub fn format_outcomes(outcomes: &[Outcome]) -> (Vec<String>, usize) {
    let lines = outcomes
        .iter()
        .map(|outcome| match outcome {
            Outcome::Done(line) | Outcome::Rejected(line) => line.clone(),
            Outcome::Failed { input, error } => format_failure(input, error),
        })
        .collect();
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    (lines, failed)
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{ResizePolicy, plan};
    use crate::types::{Color, Offset, Rect};

    const SOURCE: Size = Size::new(800, 533);

    #[test]
    fn plan_crop_lines() {
        let plan = Plan::Crop(Rect {
            left: 300,
            top: 167,
            right: 500,
            bottom: 367,
        });
        assert_eq!(
            format_plan("crop 200x200", SOURCE, &plan),
            vec![
                "crop 200x200 on 800x533",
                "    crop: (300, 167, 500, 367)",
                "    output: 200x200",
            ]
        );
    }

    #[test]
    fn plan_cover_lines() {
        let policy = ResizePolicy::Cover {
            size: Size::new(200, 100),
        };
        let lines = format_plan(
            &policy.to_string(),
            SOURCE,
            &plan(&policy, SOURCE, Color::default()),
        );
        assert_eq!(
            lines,
            vec![
                "cover 200x100 on 800x533",
                "    resample: 800x533 → 200x134",
                "    crop: (0, 17, 200, 117)",
                "    output: 200x100",
            ]
        );
    }

    #[test]
    fn plan_contain_lines() {
        let plan = Plan::ScaleThenPad {
            scaled: Size::new(151, 100),
            canvas: Size::new(200, 100),
            offset: Offset { x: 25, y: 0 },
            background: Color::default(),
        };
        let lines = format_plan("contain 200x100", SOURCE, &plan);
        assert_eq!(lines[2], "    canvas: 200x100 filled #ffffff00");
        assert_eq!(lines[3], "    paste: 151x100 at +25+0");
    }

    #[test]
    fn plan_identity_scale_says_skipped() {
        let lines = format_plan("width 800", SOURCE, &Plan::Scale(SOURCE));
        assert_eq!(lines[1], "    resample: skipped (already at size)");
    }

    #[test]
    fn resized_line() {
        let line = format_resized(
            Path::new("photo.jpg"),
            SOURCE,
            Path::new("out/photo.jpg"),
            Size::new(200, 100),
        );
        assert_eq!(line, "photo.jpg 800x533 → out/photo.jpg 200x100");
    }

    #[test]
    fn check_lines() {
        assert_eq!(
            format_check(Path::new("a.png"), SOURCE, None),
            "ok: a.png 800x533"
        );
        assert_eq!(
            format_check(Path::new("a.png"), SOURCE, Some("too small")),
            "rejected: a.png 800x533: too small"
        );
    }

    #[test]
    fn rejected_check_counts_as_failure() {
        let source = Size::new(50, 40);
        let outcomes = vec![
            Outcome::Done(format_check(Path::new("big.png"), SOURCE, None)),
            Outcome::Rejected(format_check(
                Path::new("small.png"),
                source,
                Some("image is too small"),
            )),
            Outcome::Failed {
                input: PathBuf::from("gone.png"),
                error: "IO error: not found".to_string(),
            },
        ];

        let (lines, failed) = format_outcomes(&outcomes);
        assert_eq!(failed, 2);
        assert_eq!(
            lines,
            vec![
                "ok: big.png 800x533",
                "rejected: small.png 50x40: image is too small",
                "failed: gone.png: IO error: not found",
            ]
        );
        assert_eq!(
            format_summary("Checked", outcomes.len() - failed, failed),
            "Checked 1 image, 2 failed"
        );
    }

    #[test]
    fn all_done_has_no_failures() {
        let outcomes = vec![Outcome::Done("a".into()), Outcome::Done("b".into())];
        let (lines, failed) = format_outcomes(&outcomes);
        assert_eq!(lines.len(), 2);
        assert_eq!(failed, 0);
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(format_summary("Resized", 1, 0), "Resized 1 image");
        assert_eq!(format_summary("Resized", 3, 2), "Resized 3 images, 2 failed");
        assert_eq!(format_summary("Checked", 0, 1), "Checked 0 images, 1 failed");
    }
}
