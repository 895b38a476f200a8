//
//  bitbucket-kit
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `bbkit` CLI:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable output for scripting (`--json`)
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for types that can be rendered for humans

mod table;

pub use table::*;

use serde::Serialize;

/// Output format for command results.
///
/// Selected with the global `--json` flag; table output is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable fields and tables.
    #[default]
    Table,
    /// Pretty-printed JSON, suitable for piping into `jq`.
    Json,
}

/// Writes command results in the selected [`OutputFormat`].
///
/// Results go to stdout. Errors always go to stderr so they never corrupt
/// JSON output.
///
/// # Color Support
///
/// Colors are detected once at construction via [`console::colors_enabled`],
/// so they are disabled when output is piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a new output writer with the specified format.
    ///
    /// # Parameters
    ///
    /// * `format` - The [`OutputFormat`] to use for rendering output
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_kit::output::{OutputFormat, OutputWriter};
    ///
    /// let writer = OutputWriter::new(OutputFormat::Json);
    /// assert_eq!(writer.format(), OutputFormat::Json);
    /// ```
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Creates a writer for JSON output (`--json`).
    ///
    /// Equivalent to `OutputWriter::new(OutputFormat::Json)`.
    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    /// Creates a writer for table output.
    ///
    /// Equivalent to `OutputWriter::new(OutputFormat::Table)`. The binary also
    /// uses it to report errors before a format has been chosen.
    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Returns the format this writer renders.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a single value in the configured format.
    ///
    /// # Parameters
    ///
    /// * `value` - Anything implementing both [`Serialize`] (for JSON) and
    ///   [`TableOutput`] (for tables), such as a `User` or a slice of `Email`s
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitbucket_kit::api::User;
    /// use bitbucket_kit::output::OutputWriter;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let user = User { id: "{u1}".into(), login: Some("bob".into()), name: None };
    /// OutputWriter::table().write(&user)?;
    /// // ID: {u1}
    /// // Login: bob
    /// // Name: -
    /// # Ok(())
    /// # }
    /// ```
    pub fn write<T: Serialize + TableOutput + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", render_json(value)?);
            }
            OutputFormat::Table => {
                value.print_table(self.color);
            }
        }
        Ok(())
    }

    /// Writes an error message to stderr.
    ///
    /// The message is prefixed with "error:" and styled in red when color output
    /// is enabled.
    ///
    /// # Parameters
    ///
    /// * `msg` - The error message to display
    ///
    /// # Notes
    ///
    /// Error messages are always written to stderr, regardless of output format.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a plain informational line to stdout.
    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Writes a success message to stdout, prefixed with a green checkmark when
    /// color output is enabled.
    ///
    /// # Parameters
    ///
    /// * `msg` - The success message to display
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Types that know how to print themselves for a human reader.
///
/// Single records print as `key: value` lines via [`print_field`]; lists print
/// as a table built with [`create_table`].
pub trait TableOutput {
    /// Prints `self` to stdout.
    ///
    /// # Parameters
    ///
    /// * `color` - Whether to apply terminal styling
    fn print_table(&self, color: bool);
}

/// Pretty-printed JSON for `--json` output.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints a `key: value` line.
///
/// The key is dimmed when color is enabled to separate it from the value.
///
/// # Parameters
///
/// * `key` - The field label
/// * `value` - The field value
/// * `color` - Whether to apply color styling
///
/// # Example
///
/// ```rust
/// use bitbucket_kit::output::print_field;
///
/// print_field("Login", "bob", false);
/// // Output: Login: bob
/// ```
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
