//! The usage layout engine: assembles the final text block from the
//! config, the flag set, and the terminal width.

use crate::config::{DescriptionKind, UsageConfig};
use crate::flag::FlagInfo;
use crate::wrap::wrap;

/// Per-invocation rendering inputs: which program is being described and
/// how wide the terminal is. Constructed fresh for every render call and
/// discarded afterwards; a width of `0` means "unknown" and disables
/// column wrapping.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Name of the invoked command, shown on the `Usage of` line.
    pub program: String,
    /// Terminal width in columns; `0` disables wrapping.
    pub width: usize,
}

impl RenderContext {
    pub fn new(program: impl Into<String>, width: usize) -> Self {
        Self {
            program: program.into(),
            width,
        }
    }
}

/// Renders the complete usage block.
///
/// Sections appear in fixed order: the `Usage of` line, the author line,
/// the description block (omitted when there are no elements), the flag
/// synopsis, and the examples block (a single blank line when there are
/// no examples). The whole block is materialized and returned; writing it
/// anywhere is the caller's business.
///
/// # Example
///
/// ```rust
/// use usagen::{render_usage, FlagInfo, RenderContext, UsageConfig};
///
/// let flags = vec![FlagInfo::new("force").help("overwrite existing files")];
/// let text = render_usage(
///     &UsageConfig::default(),
///     &flags,
///     &RenderContext::new("my-app", 80),
/// );
/// assert!(text.contains("Flag Synopsis:"));
/// assert!(text.contains("--force"));
/// ```
pub fn render_usage(config: &UsageConfig, flags: &[FlagInfo], ctx: &RenderContext) -> String {
    let width = ctx.width;
    let mut out = String::new();

    out.push_str(&format!("Usage of {}\n", ctx.program));
    out.push_str(&format!("Author: {}\n", config.author));

    render_description(&mut out, config, width);
    render_flag_synopsis(&mut out, flags, width);
    render_examples(&mut out, config, width);

    out
}

fn render_description(out: &mut String, config: &UsageConfig, width: usize) {
    let elements = &config.description_elements;
    if elements.is_empty() {
        return;
    }

    out.push_str("Description:\n");
    for (idx, element) in elements.iter().enumerate() {
        match element.kind {
            DescriptionKind::Paragraph => {
                out.push_str(&format!("{}\n\n", wrap(2, width, &element.content)));
            }
            DescriptionKind::BulletPoint => {
                let next_is_bullet = elements
                    .get(idx + 1)
                    .is_some_and(|next| next.kind == DescriptionKind::BulletPoint);
                let content = wrap(4, width, &element.content);
                if next_is_bullet {
                    out.push_str(&format!("  • {}\n", content));
                } else {
                    out.push_str(&format!("  • {}\n\n", content));
                }
            }
        }
    }
}

fn render_flag_synopsis(out: &mut String, flags: &[FlagInfo], width: usize) {
    out.push_str("Flag Synopsis:\n");

    // First pass measures every left column so the help text can be
    // aligned; only then are the rows emitted.
    let mut rows = Vec::new();
    let mut max_left = 0;
    for flag in flags.iter().filter(|f| !f.hidden) {
        let mut left = if !flag.shorthand.is_empty() && flag.shorthand_deprecated.is_empty() {
            format!("  -{}, --{}", flag.shorthand, flag.name)
        } else {
            format!("      --{}", flag.name)
        };
        if !flag.value_hint.is_empty() {
            left.push(' ');
            left.push_str(&flag.value_hint);
        }
        // +1 keeps a gap column even for the widest row.
        max_left = max_left.max(left.len() + 1);

        let mut right = flag.help.clone();
        right.push_str(&format!(" (Default: '{}')", flag.default_value));
        if !flag.deprecated.is_empty() {
            right.push_str(&format!(" (DEPRECATED: {})", flag.deprecated));
        }
        rows.push((left, right));
    }

    let pad_to = max_left + 2;
    for (left, right) in &rows {
        out.push_str(&format!(
            "{left:<pad_to$}{}\n",
            wrap(pad_to, width, right)
        ));
    }
}

fn render_examples(out: &mut String, config: &UsageConfig, width: usize) {
    if config.examples.is_empty() {
        out.push('\n');
        return;
    }

    out.push_str("\n\nExamples:\n");
    for example in &config.examples {
        out.push_str(&format!("  {}\n", wrap(2, width, &example.example)));
        out.push_str(&format!("      {}\n", wrap(6, width, &example.description)));
        out.push('\n');
    }
}
