//
//  bitbucket-kit
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Human-readable rendering of users and email lists, using `comfy_table` for
//! tabular data.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use super::{print_field, TableOutput};
use crate::api::{Email, User};

/// Creates a new styled table with default settings.
///
/// The table is configured with:
/// - UTF-8 full border preset
/// - Dynamic content arrangement to fit terminal width
///
/// # Example
///
/// ```rust
/// use bitbucket_kit::output::create_table;
///
/// let mut table = create_table();
/// table.set_header(vec!["Email", "Primary"]);
/// table.add_row(vec!["bob@example.com", "Yes"]);
/// println!("{}", table);
/// ```
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Formats a boolean as `"Yes"` or `"No"` for table cells.
///
/// # Example
///
/// ```rust
/// use bitbucket_kit::output::format_bool;
///
/// assert_eq!(format_bool(true), "Yes");
/// assert_eq!(format_bool(false), "No");
/// ```
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Builds the email table without printing it.
///
/// One row per address, in response order. Missing addresses and types render
/// as `-`.
///
/// # Parameters
///
/// * `emails` - The addresses to list
/// * `color` - Whether to color the header row
pub fn email_table(emails: &[Email], color: bool) -> Table {
    let mut table = create_table();
    let headers = ["Email", "Primary", "Confirmed", "Type"];
    if color {
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(headers);
    }

    for email in emails {
        table.add_row(vec![
            email.email.clone().unwrap_or_else(|| "-".to_string()),
            format_bool(email.is_primary).to_string(),
            format_bool(email.is_confirmed).to_string(),
            email.kind.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}

/// Prints the user as `ID`, `Login` and `Name` fields.
impl TableOutput for User {
    fn print_table(&self, color: bool) {
        print_field("ID", &self.id, color);
        print_field("Login", self.login.as_deref().unwrap_or("-"), color);
        print_field("Name", self.name.as_deref().unwrap_or("-"), color);
    }
}

/// Prints the email table, or a notice when the account has no addresses.
impl TableOutput for [Email] {
    fn print_table(&self, color: bool) {
        if self.is_empty() {
            println!("No email addresses found");
            return;
        }
        println!("{}", email_table(self, color));
    }
}
