//! Configuration for the documentation generator.
//!
//! Every option can be given on the command line or through the environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `EXTDOC_INPUT` | stdin | JSON descriptor to read |
//! | `EXTDOC_OUTPUT` | stdout | XML document to write |
//! | `EXTDOC_INDENT` | none | Spaces per nesting level |
//! | `EXTDOC_XML_DECLARATION` | false | Write an XML declaration |
//! | `EXTDOC_LOG_LEVEL` | warn | Log level |
//!
//! # Example
//!
//! ```rust
//! use extdoc::DocConfig;
//! use std::path::PathBuf;
//!
//! let config = DocConfig {
//!     input: Some(PathBuf::from("descriptor.json")),
//!     indent: Some(2),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use extdoc_xml::WriterOptions;
use std::path::PathBuf;

/// Largest accepted indent width.
pub const MAX_INDENT: usize = 16;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Documentation generator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "extdoc")]
#[command(about = "Render an extension descriptor as XML documentation")]
pub struct DocConfig {
    /// JSON descriptor to read. Reads stdin when omitted.
    #[arg(short, long, env = "EXTDOC_INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the XML document to. Writes stdout when omitted.
    #[arg(short, long, env = "EXTDOC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Indent nested elements by this many spaces.
    #[arg(long, env = "EXTDOC_INDENT")]
    pub indent: Option<usize>,

    /// Start the document with an XML declaration.
    #[arg(long, env = "EXTDOC_XML_DECLARATION", default_value = "false")]
    pub xml_declaration: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "EXTDOC_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            indent: None,
            xml_declaration: false,
            log_level: "warn".to_string(),
        }
    }
}

impl DocConfig {
    /// Creates a configuration from environment variables alone.
    pub fn from_env() -> Self {
        Self::try_parse_from(["extdoc"]).unwrap_or_default()
    }

    /// Writer options derived from this configuration.
    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            indent: self.indent,
            xml_declaration: self.xml_declaration,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(indent) = self.indent {
            if indent > MAX_INDENT {
                errors.push(format!("Indent cannot exceed {}", MAX_INDENT));
            }
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!("Unknown log level '{}'", self.log_level));
        }

        if let (Some(input), Some(output)) = (&self.input, &self.output) {
            if input == output {
                errors.push("Input and output cannot be the same file".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
