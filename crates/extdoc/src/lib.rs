//! Extension documentation generator.
//!
//! Reads an extension descriptor as JSON and writes its XML documentation.
//! The XML document is only written once it has been rendered completely; a
//! failed run leaves no output file behind.

pub mod config;

pub use config::DocConfig;

use anyhow::Context;
use extdoc_descriptor::ExtensionDescriptor;
use extdoc_xml::{DocumentationWriter, XmlDocumentationWriter, json};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "extdoc={level},extdoc_xml={level},extdoc_descriptor={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Reads the configured descriptor.
pub fn read_descriptor(config: &DocConfig) -> anyhow::Result<ExtensionDescriptor> {
    let descriptor = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open descriptor {}", path.display()))?;
            json::descriptor_from_json_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read descriptor {}", path.display()))?
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read descriptor from stdin")?;
            json::descriptor_from_json_str(&input)
                .context("Failed to read descriptor from stdin")?
        }
    };

    info!(
        extension = %descriptor.qualified_name(),
        extension_type = %descriptor.extension_type(),
        "Loaded extension descriptor"
    );
    Ok(descriptor)
}

/// Renders `descriptor` into the configured output.
pub fn write_documentation(
    config: &DocConfig,
    descriptor: &ExtensionDescriptor,
) -> anyhow::Result<()> {
    match &config.output {
        Some(path) => write_to_file(config, descriptor, path),
        None => {
            let stdout = io::stdout();
            let mut writer =
                XmlDocumentationWriter::with_options(stdout.lock(), config.writer_options());
            writer
                .write(descriptor)
                .context("Failed to write documentation to stdout")
        }
    }
}

fn write_to_file(
    config: &DocConfig,
    descriptor: &ExtensionDescriptor,
    path: &Path,
) -> anyhow::Result<()> {
    // Render before creating the file so a failure leaves nothing behind.
    let mut document = Vec::new();
    XmlDocumentationWriter::with_options(&mut document, config.writer_options())
        .write(descriptor)
        .with_context(|| {
            format!(
                "Failed to render documentation for {}",
                descriptor.qualified_name()
            )
        })?;

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(&document)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        extension = %descriptor.qualified_name(),
        output = %path.display(),
        bytes = document.len(),
        "Wrote extension documentation"
    );
    Ok(())
}

/// Reads the descriptor and writes its documentation.
pub fn run(config: &DocConfig) -> anyhow::Result<()> {
    let descriptor = read_descriptor(config)?;
    write_documentation(config, &descriptor)
}
