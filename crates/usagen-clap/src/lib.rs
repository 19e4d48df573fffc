//! # Usagen Clap - Clap Integration
//!
//! Connects `usagen`'s usage rendering to a `clap`-based CLI: enumerates
//! the registered arguments of a [`clap::Command`] into the flag view the
//! layout engine consumes, probes the terminal width, and exposes a
//! one-call entry point.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clap::Command;
//! use usagen::UsageConfig;
//! use usagen_clap::CustomUsage;
//!
//! let config = UsageConfig::from_yaml_file("config.yaml").unwrap_or_default();
//! let usage = CustomUsage::new(config);
//!
//! let cmd = Command::new("my-app");
//! println!("{}", usage.render(&cmd));
//! ```
//!
//! For non-clap applications, use `usagen` directly and build the
//! [`FlagInfo`] list from your own parser.
//!
//! clap carries no deprecation metadata, so flags extracted here never
//! render a deprecation notice; construct [`FlagInfo`] by hand where that
//! matters.

use clap::Command;
use usagen::{render_usage, FlagInfo, RenderContext, UsageConfig};

/// Gets the current terminal width in columns, or `0` if not available.
///
/// `0` is the renderer's "unknown width" signal and disables column
/// wrapping; a failed probe is never an error.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(0)
}

/// Enumerates the visible arguments of a command as flag views, in
/// display order.
///
/// Long name, shorthand, help, default values, and value names map
/// straight across; hidden arguments are skipped. Arguments without a
/// long form fall back to their id.
pub fn flags_from_command(cmd: &Command) -> Vec<FlagInfo> {
    // Building materializes implicit arguments and action defaults
    // (e.g. `false` for SetTrue flags) before they are read back.
    let mut cmd = cmd.clone();
    cmd.build();

    let mut args: Vec<_> = cmd.get_arguments().filter(|a| !a.is_hide_set()).collect();
    args.sort_by_key(|a| a.get_display_order());

    args.into_iter()
        .map(|arg| {
            let name = arg
                .get_long()
                .map(|l| l.to_string())
                .unwrap_or_else(|| arg.get_id().to_string());
            let shorthand = arg.get_short().map(String::from).unwrap_or_default();
            let default_value = arg
                .get_default_values()
                .iter()
                .map(|v| v.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            let value_hint = arg
                .get_value_names()
                .map(|names| {
                    names
                        .iter()
                        .map(|n| format!("<{}>", n.as_str()))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();

            FlagInfo::new(name)
                .shorthand(shorthand)
                .default_value(default_value)
                .value_hint(value_hint)
                .help(help)
        })
        .collect()
}

/// Renders custom usage text for a command from a fixed config.
///
/// Holds the static content explicitly instead of reading any
/// process-wide state, so independent instances can coexist and calls
/// are safe from multiple threads.
///
/// # Example
///
/// ```rust
/// use clap::{Arg, ArgAction, Command};
/// use usagen::UsageConfig;
/// use usagen_clap::CustomUsage;
///
/// let usage = CustomUsage::new(UsageConfig {
///     author: "Jane Doe".into(),
///     ..Default::default()
/// });
///
/// let cmd = Command::new("my-app").arg(
///     Arg::new("verbose")
///         .short('v')
///         .long("verbose")
///         .action(ArgAction::SetTrue)
///         .help("enable verbose output"),
/// );
///
/// let text = usage.render_at(&cmd, 80);
/// assert!(text.contains("  -v, --verbose"));
/// ```
pub struct CustomUsage {
    config: UsageConfig,
}

impl CustomUsage {
    /// Creates a usage renderer over the given config.
    pub fn new(config: UsageConfig) -> Self {
        Self { config }
    }

    /// Returns the config this renderer was built with.
    pub fn config(&self) -> &UsageConfig {
        &self.config
    }

    /// Renders the usage text for `cmd` at the current terminal width.
    pub fn render(&self, cmd: &Command) -> String {
        self.render_at(cmd, terminal_width())
    }

    /// Renders the usage text for `cmd` at an explicit width. A width of
    /// `0` disables wrapping.
    pub fn render_at(&self, cmd: &Command, width: usize) -> String {
        let flags = flags_from_command(cmd);
        let ctx = RenderContext::new(cmd.get_name(), width);
        render_usage(&self.config, &flags, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction};

    fn demo_command() -> Command {
        Command::new("demo")
            .disable_help_flag(true)
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("enable verbose output"),
            )
            .arg(
                Arg::new("input")
                    .short('i')
                    .long("input")
                    .value_name("FILE")
                    .help("read from FILE"),
            )
            .arg(
                Arg::new("internal")
                    .long("internal")
                    .hide(true)
                    .help("not for users"),
            )
    }

    #[test]
    fn test_extracts_visible_flags_in_order() {
        let flags = flags_from_command(&demo_command());
        let names: Vec<&str> = flags.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["verbose", "input"]);
    }

    #[test]
    fn test_hidden_arguments_are_skipped() {
        let flags = flags_from_command(&demo_command());
        assert!(flags.iter().all(|f| f.name != "internal"));
    }

    #[test]
    fn test_set_true_flag_reports_false_default() {
        let flags = flags_from_command(&demo_command());
        let verbose = flags.iter().find(|f| f.name == "verbose").unwrap();
        assert_eq!(verbose.shorthand, "v");
        assert_eq!(verbose.default_value, "false");
        assert!(verbose.value_hint.is_empty());
    }

    #[test]
    fn test_value_name_becomes_hint() {
        let flags = flags_from_command(&demo_command());
        let input = flags.iter().find(|f| f.name == "input").unwrap();
        assert_eq!(input.value_hint, "<FILE>");
    }

    #[test]
    fn test_extracted_flags_never_carry_deprecation() {
        let flags = flags_from_command(&demo_command());
        assert!(flags
            .iter()
            .all(|f| f.deprecated.is_empty() && f.shorthand_deprecated.is_empty()));
    }
}
