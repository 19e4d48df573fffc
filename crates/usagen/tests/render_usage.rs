use usagen::{
    render_usage, write_example_config, DescriptionElement, DescriptionKind, Example, FlagInfo,
    RenderContext, UsageConfig,
};

fn verbose_flag() -> FlagInfo {
    FlagInfo::new("verbose")
        .shorthand("v")
        .default_value("false")
        .help("enable verbose output")
}

#[test]
fn test_full_usage_block_at_eighty_columns() {
    let config = UsageConfig {
        author: "A".into(),
        ..Default::default()
    };
    let text = render_usage(&config, &[verbose_flag()], &RenderContext::new("prog", 80));

    assert!(text.contains("Usage of prog\n"), "text:\n{text}");
    assert!(text.contains("Author: A\n"), "text:\n{text}");
    assert!(text.contains("Flag Synopsis:\n"), "text:\n{text}");
    assert!(!text.contains("Description:"), "text:\n{text}");

    let row = text
        .lines()
        .find(|l| l.starts_with("  -v, --verbose"))
        .expect("synopsis row");
    assert!(
        row.ends_with("enable verbose output (Default: 'false')"),
        "row: {row:?}"
    );

    // Empty examples leave the structural placeholder line at the end.
    assert!(text.ends_with("\n\n"), "text:\n{text:?}");
}

#[test]
fn test_deprecated_shorthand_renders_long_form_only() {
    let flag = verbose_flag().shorthand_deprecated("use --verbose");
    let text = render_usage(
        &UsageConfig::default(),
        &[flag],
        &RenderContext::new("prog", 80),
    );

    assert!(text.contains("      --verbose"), "text:\n{text}");
    assert!(!text.contains("-v, --verbose"), "text:\n{text}");
}

#[test]
fn test_description_examples_and_flags_together() {
    let config = UsageConfig {
        author: "Jane Doe".into(),
        description_elements: vec![
            DescriptionElement {
                kind: DescriptionKind::Paragraph,
                content: "A tool for doing things.".into(),
            },
            DescriptionElement {
                kind: DescriptionKind::BulletPoint,
                content: "fast".into(),
            },
            DescriptionElement {
                kind: DescriptionKind::BulletPoint,
                content: "small".into(),
            },
        ],
        examples: vec![
            Example {
                example: "prog --verbose".into(),
                description: "run loudly".into(),
            },
            Example {
                example: "prog".into(),
                description: "run quietly".into(),
            },
        ],
    };
    let text = render_usage(&config, &[verbose_flag()], &RenderContext::new("prog", 80));

    // Section order is fixed.
    let usage_at = text.find("Usage of prog").unwrap();
    let author_at = text.find("Author: Jane Doe").unwrap();
    let description_at = text.find("Description:").unwrap();
    let synopsis_at = text.find("Flag Synopsis:").unwrap();
    let examples_at = text.find("Examples:").unwrap();
    assert!(usage_at < author_at, "text:\n{text}");
    assert!(author_at < description_at, "text:\n{text}");
    assert!(description_at < synopsis_at, "text:\n{text}");
    assert!(synopsis_at < examples_at, "text:\n{text}");

    // Bullets stay contiguous, the run ends with one blank line.
    assert!(text.contains("  • fast\n  • small\n\n"), "text:\n{text}");

    // Each example renders invocation, description, blank line.
    assert!(
        text.contains("  prog --verbose\n      run loudly\n\n"),
        "text:\n{text}"
    );
    assert!(text.contains("  prog\n      run quietly\n\n"), "text:\n{text}");
}

#[test]
fn test_unknown_width_keeps_long_lines_intact() {
    let long_help = "a help string that would certainly be wrapped if a terminal width were known to the renderer";
    let flag = FlagInfo::new("thing").default_value("x").help(long_help);
    let text = render_usage(
        &UsageConfig::default(),
        &[flag],
        &RenderContext::new("prog", 0),
    );

    let row = text
        .lines()
        .find(|l| l.contains("--thing"))
        .expect("synopsis row");
    assert!(row.contains(long_help), "row: {row:?}");
}

#[test]
fn test_example_config_renders_every_section() {
    let mut buf = Vec::new();
    write_example_config(&mut buf).unwrap();
    let config = UsageConfig::from_yaml_str(&String::from_utf8(buf).unwrap()).unwrap();

    let text = render_usage(&config, &[verbose_flag()], &RenderContext::new("prog", 100));
    assert!(text.contains("Author: Your Name"), "text:\n{text}");
    assert!(text.contains("Description:"), "text:\n{text}");
    assert!(text.contains("  • "), "text:\n{text}");
    assert!(text.contains("Examples:"), "text:\n{text}");
    assert!(text.contains("  command -x -y -n -p\n"), "text:\n{text}");
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut file = std::fs::File::create(&path).unwrap();
    write_example_config(&mut file).unwrap();

    let loaded = UsageConfig::from_yaml_file(&path).unwrap();
    assert_eq!(loaded.author, "Your Name");
    assert_eq!(loaded.description_elements.len(), 2);
    assert_eq!(loaded.examples.len(), 2);
}

#[test]
fn test_missing_config_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    let err = UsageConfig::from_yaml_file(&missing).unwrap_err();
    assert!(err.to_string().contains("I/O error"), "err: {err}");
}
