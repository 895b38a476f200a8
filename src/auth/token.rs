//
//  bitbucket-kit
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Token input and validation.

use std::io::BufRead;

use anyhow::{Context, Result};

/// Reads a token from the first line of standard input, trimmed.
///
/// Works with piped input: `echo "$TOKEN" | bbkit auth login --with-token`.
pub fn read_token_from_stdin() -> Result<String> {
    read_token_from(std::io::stdin().lock())
}

/// Reads a token from the first line of `reader`, trimmed.
pub fn read_token_from<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read token")?;
    Ok(line.trim().to_string())
}

/// Checks the format of a token string.
///
/// A token must be non-empty and contain no whitespace. This does not check the
/// token with Bitbucket.
///
/// ```rust
/// use bitbucket_kit::auth::validate_token;
///
/// assert!(validate_token("ATCTT3xFfGN0abc"));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_token_trims_and_stops_at_newline() {
        let input = b"  abc123  \nsecond line\n";
        assert_eq!(read_token_from(&input[..]).unwrap(), "abc123");
    }

    #[test]
    fn test_read_token_from_empty_input() {
        assert_eq!(read_token_from(&b""[..]).unwrap(), "");
    }

    #[test]
    fn test_validate_token() {
        assert!(validate_token("abc123"));
        assert!(!validate_token(""));
        assert!(!validate_token("has\ttab"));
        assert!(!validate_token("has\nnewline"));
    }
}
