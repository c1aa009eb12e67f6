//! Extension documentation generator (extdoc)
//!
//! Renders a JSON extension descriptor as XML documentation.

use clap::Parser;
use extdoc::{DocConfig, init_logging, run};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = DocConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    debug!(
        input = ?config.input,
        output = ?config.output,
        indent = ?config.indent,
        xml_declaration = config.xml_declaration,
        "Starting extension documentation generator"
    );

    run(&config)
}
