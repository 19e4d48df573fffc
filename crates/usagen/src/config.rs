//! The usage config document: author, description content, and examples.
//!
//! The document is a user-editable YAML file with a fixed shape:
//!
//! ```yaml
//! Author: Jane Doe
//! DescriptionElements:
//!   - Kind: Paragraph
//!     Content: What the program is for.
//!   - Kind: BulletPoint
//!     Content: A notable behavior.
//! Examples:
//!   - Example: my-app --input data.csv
//!     Description: Process a single file.
//! ```
//!
//! Every field is independently optional; empty fields simply produce no
//! corresponding output section. The companion `usagen-init` binary writes
//! a populated example of this document for the user to edit.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;

/// Static content of the usage text, distinct from the live flag set.
///
/// A default-constructed config renders as a usage block with an empty
/// author line and no description or examples sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Shown on the `Author:` line.
    #[serde(rename = "Author", default)]
    pub author: String,

    /// Description content, rendered in order under a `Description:`
    /// header. Adjacent bullet points are grouped without blank lines.
    #[serde(rename = "DescriptionElements", default)]
    pub description_elements: Vec<DescriptionElement>,

    /// Example invocations, rendered in order under an `Examples:` header.
    #[serde(rename = "Examples", default)]
    pub examples: Vec<Example>,
}

/// One piece of description content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionElement {
    #[serde(rename = "Kind")]
    pub kind: DescriptionKind,
    #[serde(rename = "Content")]
    pub content: String,
}

/// How a description element is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionKind {
    /// Free-flowing text wrapped at a shallow indent, followed by a blank
    /// line.
    Paragraph,
    /// A `•`-prefixed item; runs of bullets render contiguously.
    BulletPoint,
}

/// One example invocation with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "Example")]
    pub example: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl UsageConfig {
    /// Parses a config document from YAML text.
    pub fn from_yaml_str(s: &str) -> Result<Self, UsageError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a config document from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, UsageError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

/// Returns a populated config demonstrating every document field.
pub fn example_config() -> UsageConfig {
    UsageConfig {
        author: "Your Name".to_string(),
        description_elements: vec![
            DescriptionElement {
                kind: DescriptionKind::Paragraph,
                content: "Paragraph content flows as a single block and is \
                          wrapped to the terminal width. It can be as short \
                          or as long as you need."
                    .to_string(),
            },
            DescriptionElement {
                kind: DescriptionKind::BulletPoint,
                content: "Bullet points are grouped together when adjacent. \
                          No manual newlines are needed, though embedded \
                          ones are preserved."
                    .to_string(),
            },
        ],
        examples: vec![
            Example {
                example: "command -x -y -n -p".to_string(),
                description: "This does x y n p".to_string(),
            },
            Example {
                example: "command -a -b -c -d".to_string(),
                description: "This does a b c d".to_string(),
            },
        ],
    }
}

/// Writes the example config document as YAML to the provided writer.
///
/// The output is meant to be saved as `config.yaml` and edited by hand;
/// the `usagen-init` binary does exactly that.
pub fn write_example_config(out: &mut impl Write) -> Result<(), UsageError> {
    let doc = serde_yaml::to_string(&example_config())?;
    out.write_all(doc.as_bytes())?;
    Ok(())
}
