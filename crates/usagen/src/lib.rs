//! # Usagen - Custom Usage Text for CLI Programs
//!
//! Usagen renders the "usage" help block of a command-line program: an
//! author line, free-form description content (paragraphs and bullet
//! points), a column-aligned flag synopsis, and example invocations, all
//! wrapped to the terminal width.
//!
//! The crate is split along one seam: a [`UsageConfig`] describes the
//! static content (typically loaded from an editable `config.yaml`), while
//! the live flag set is handed in as a slice of [`FlagInfo`] values built
//! by whatever argument parser the application uses. The `usagen-clap`
//! crate provides that glue for `clap`; other parsers can construct
//! [`FlagInfo`] directly.
//!
//! ## Quick Start
//!
//! ```rust
//! use usagen::{render_usage, FlagInfo, RenderContext, UsageConfig};
//!
//! let config = UsageConfig {
//!     author: "Jane Doe".into(),
//!     ..Default::default()
//! };
//! let flags = vec![
//!     FlagInfo::new("verbose")
//!         .shorthand("v")
//!         .default_value("false")
//!         .help("enable verbose output"),
//! ];
//!
//! let ctx = RenderContext::new("my-app", 80);
//! let text = render_usage(&config, &flags, &ctx);
//!
//! assert!(text.starts_with("Usage of my-app"));
//! assert!(text.contains("  -v, --verbose"));
//! ```
//!
//! ## Width Handling
//!
//! Rendering takes the terminal width as plain data (see
//! [`RenderContext`]); a width of `0` means "unknown" and disables column
//! wrapping while preserving explicit line breaks. When the width is too
//! cramped to wrap sensibly at the requested indent, the text falls back
//! to a block at a fixed indent, and below that threshold wrapping is
//! skipped entirely. See [`wrap`] for the exact rules.
//!
//! Rendering is a pure transformation: one call takes immutable snapshots
//! and returns a `String`, so concurrent calls from multiple threads are
//! safe. Only the config I/O in [`config`] can fail.

pub mod config;
pub mod error;
pub mod flag;
pub mod render;
pub mod wrap;

pub use config::{
    write_example_config, DescriptionElement, DescriptionKind, Example, UsageConfig,
};
pub use error::UsageError;
pub use flag::FlagInfo;
pub use render::{render_usage, RenderContext};
pub use wrap::wrap;
