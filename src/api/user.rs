//
//  bitbucket-kit
//  api/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authenticated user and email types.
//!
//! Each resource comes in two shapes:
//!
//! - a **wire payload** ([`UserPayload`], [`EmailPayload`]) mirroring the JSON the
//!   API returns, with every field optional;
//! - a **domain model** ([`User`], [`Email`]) handed to callers.
//!
//! Mapping from payload to model never fails. Missing or mistyped fields fall back
//! to defaults, and a user without a `uuid` gets the id [`UNKNOWN_USER_ID`].
//!
//! # Endpoints
//!
//! | Variant | Method | Path |
//! |---------|--------|------|
//! | [`UserRouter::ReadAuthenticatedUser`] | GET | `user` |
//! | [`UserRouter::ReadEmails`] | GET | `user/emails` |
//!
//! # Example
//!
//! ```rust
//! use bitbucket_kit::api::{User, UserPayload};
//!
//! let payload: UserPayload = serde_json::from_str(
//!     r#"{"uuid": "{1234}", "username": "bob", "display_name": "Bob B"}"#,
//! ).unwrap();
//!
//! let user = User::from_wire(payload);
//! assert_eq!(user.id, "{1234}");
//! assert_eq!(user.login.as_deref(), Some("bob"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::common::lenient;
use crate::config::Configuration;
use crate::http::Method;
use crate::router::{HttpEncoding, Params, Router};

/// Id given to a [`User`] whose payload carried no `uuid`.
pub const UNKNOWN_USER_ID: &str = "-1";

/// `GET user` response body.
///
/// Decodes from a JSON object only; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    /// Account UUID, with curly braces (e.g. `{c0ffee...}`).
    pub uuid: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

impl<'de> Deserialize<'de> for UserPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = lenient::object(deserializer)?;
        Ok(Self {
            uuid: fields.string("uuid"),
            username: fields.string("username"),
            display_name: fields.string("display_name"),
        })
    }
}

/// One record of the `GET user/emails` response.
///
/// Decodes from a JSON object only; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailPayload {
    pub email: Option<String>,
    pub is_primary: Option<bool>,
    pub is_confirmed: Option<bool>,
    /// Record type (`type` on the wire), usually `"email"`.
    pub kind: Option<String>,
}

impl<'de> Deserialize<'de> for EmailPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = lenient::object(deserializer)?;
        Ok(Self {
            email: fields.string("email"),
            is_primary: fields.boolean("is_primary"),
            is_confirmed: fields.boolean("is_confirmed"),
            kind: fields.string("type"),
        })
    }
}

/// `GET user/emails` response body.
///
/// Bitbucket wraps listings in a page object (`{"values": [...], "page": 1, ...}`);
/// a bare array is accepted too. An object without a `values` array, such as a
/// single record, does not decode. Only the records of the current page are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EmailListPayload {
    /// A bare JSON array of records.
    List(Vec<EmailPayload>),
    /// A paginated envelope.
    Page { values: Vec<EmailPayload> },
}

impl EmailListPayload {
    /// The records, in response order.
    pub fn into_payloads(self) -> Vec<EmailPayload> {
        match self {
            Self::List(values) | Self::Page { values } => values,
        }
    }

    /// Maps every record to an [`Email`].
    pub fn into_emails(self) -> Vec<Email> {
        self.into_payloads()
            .into_iter()
            .map(Email::from_wire)
            .collect()
    }
}

/// The authenticated Bitbucket user.
///
/// # Fields
///
/// * `id` - Account UUID, or [`UNKNOWN_USER_ID`] when the API omitted it
/// * `login` - Username
/// * `name` - Display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub login: Option<String>,
    pub name: Option<String>,
}

impl User {
    /// Builds a user from its wire payload. Never fails.
    ///
    /// A payload without a `uuid` is treated as unidentified: the id becomes
    /// [`UNKNOWN_USER_ID`] and login and name are left empty.
    pub fn from_wire(payload: UserPayload) -> Self {
        match payload.uuid {
            Some(id) => Self {
                id,
                login: payload.username,
                name: payload.display_name,
            },
            None => {
                tracing::warn!("User payload has no uuid; using placeholder id");
                Self {
                    id: UNKNOWN_USER_ID.to_string(),
                    login: None,
                    name: None,
                }
            }
        }
    }

    /// Returns `false` for the placeholder produced from a payload without `uuid`.
    pub fn is_identified(&self) -> bool {
        self.id != UNKNOWN_USER_ID
    }
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self::from_wire(payload)
    }
}

/// An email address registered on the authenticated account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Email {
    pub is_primary: bool,
    pub is_confirmed: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub email: Option<String>,
}

impl Email {
    /// Builds an email from its wire payload. Never fails.
    ///
    /// A record without an address yields [`Email::default`]; otherwise missing
    /// flags default to `false`.
    pub fn from_wire(payload: EmailPayload) -> Self {
        match payload.email {
            Some(address) => Self {
                is_primary: payload.is_primary.unwrap_or(false),
                is_confirmed: payload.is_confirmed.unwrap_or(false),
                kind: payload.kind,
                email: Some(address),
            },
            None => Self::default(),
        }
    }
}

impl From<EmailPayload> for Email {
    fn from(payload: EmailPayload) -> Self {
        Self::from_wire(payload)
    }
}

/// Endpoints under `user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRouter {
    /// `GET user`
    ReadAuthenticatedUser(Configuration),
    /// `GET user/emails`
    ReadEmails(Configuration),
}

impl Router for UserRouter {
    fn configuration(&self) -> &Configuration {
        match self {
            Self::ReadAuthenticatedUser(config) | Self::ReadEmails(config) => config,
        }
    }

    fn method(&self) -> Method {
        match self {
            Self::ReadAuthenticatedUser(_) | Self::ReadEmails(_) => Method::Get,
        }
    }

    fn encoding(&self) -> HttpEncoding {
        match self {
            Self::ReadAuthenticatedUser(_) | Self::ReadEmails(_) => HttpEncoding::Url,
        }
    }

    fn path(&self) -> &str {
        match self {
            Self::ReadAuthenticatedUser(_) => "user",
            Self::ReadEmails(_) => "user/emails",
        }
    }

    fn params(&self) -> Params {
        Params::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_complete_payload() {
        let payload: UserPayload = serde_json::from_str(
            r#"{"uuid": "u1", "username": "bob", "display_name": "Bob B", "links": {}}"#,
        )
        .unwrap();

        assert_eq!(
            User::from_wire(payload),
            User {
                id: "u1".to_string(),
                login: Some("bob".to_string()),
                name: Some("Bob B".to_string()),
            }
        );
    }

    #[test]
    fn test_user_without_uuid_gets_placeholder() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"username": "bob", "display_name": "Bob B"}"#).unwrap();
        let user = User::from(payload);

        assert_eq!(user.id, UNKNOWN_USER_ID);
        assert_eq!(user.login, None);
        assert_eq!(user.name, None);
        assert!(!user.is_identified());
    }

    #[test]
    fn test_user_with_mistyped_uuid_gets_placeholder() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"uuid": 42, "username": "bob"}"#).unwrap();
        assert_eq!(User::from_wire(payload).id, "-1");
    }

    #[test]
    fn test_email_from_complete_payload() {
        let payload: EmailPayload = serde_json::from_str(
            r#"{"email": "bob@example.com", "is_primary": true, "is_confirmed": true, "type": "email"}"#,
        )
        .unwrap();

        assert_eq!(
            Email::from_wire(payload),
            Email {
                is_primary: true,
                is_confirmed: true,
                kind: Some("email".to_string()),
                email: Some("bob@example.com".to_string()),
            }
        );
    }

    #[test]
    fn test_email_flags_default_to_false() {
        let payload: EmailPayload =
            serde_json::from_str(r#"{"email": "bob@example.com", "is_primary": "yes"}"#).unwrap();
        let email = Email::from_wire(payload);

        assert!(!email.is_primary);
        assert!(!email.is_confirmed);
        assert_eq!(email.kind, None);
        assert_eq!(email.email.as_deref(), Some("bob@example.com"));
    }

    #[test]
    fn test_email_without_address_is_default() {
        let payload: EmailPayload =
            serde_json::from_str(r#"{"is_primary": true, "type": "email"}"#).unwrap();
        assert_eq!(Email::from(payload), Email::default());
    }

    #[test]
    fn test_email_list_accepts_array_and_page() {
        let array: EmailListPayload =
            serde_json::from_str(r#"[{"email": "a@x.io"}, {"email": "b@x.io"}]"#).unwrap();
        assert_eq!(array.into_emails().len(), 2);

        let page: EmailListPayload = serde_json::from_str(
            r#"{"pagelen": 10, "page": 1, "size": 1, "values": [{"email": "a@x.io", "is_primary": true}]}"#,
        )
        .unwrap();
        let emails = page.into_emails();
        assert_eq!(emails.len(), 1);
        assert!(emails[0].is_primary);
    }

    #[test]
    fn test_email_list_rejects_scalars() {
        assert!(serde_json::from_str::<EmailListPayload>("\"nope\"").is_err());
    }

    #[test]
    fn test_email_list_requires_values_array() {
        for body in [
            r#"{"email": "a@x.io"}"#,
            r#"{"type": "error", "error": {"message": "Something went wrong"}}"#,
            r#"{"values": "a@x.io"}"#,
            "{}",
        ] {
            assert!(
                serde_json::from_str::<EmailListPayload>(body).is_err(),
                "decoded {body}"
            );
        }
    }

    #[test]
    fn test_payloads_only_decode_from_objects() {
        assert!(serde_json::from_str::<UserPayload>(r#"["u1", "bob", "Bob B"]"#).is_err());
        assert!(serde_json::from_str::<UserPayload>("[]").is_err());
        assert!(serde_json::from_str::<EmailPayload>(r#"["a@x.io", true, true, "email"]"#).is_err());
        assert!(serde_json::from_str::<EmailListPayload>(r#"[["a@x.io", true]]"#).is_err());
    }

    #[test]
    fn test_domain_models_serialize_with_wire_names() {
        let email = Email {
            is_primary: true,
            is_confirmed: false,
            kind: Some("email".to_string()),
            email: Some("a@x.io".to_string()),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["is_primary"], true);
    }

    #[test]
    fn test_router_mapping() {
        let config = Configuration::new("t");

        let user = UserRouter::ReadAuthenticatedUser(config.clone());
        assert_eq!(user.method(), Method::Get);
        assert_eq!(user.encoding(), HttpEncoding::Url);
        assert_eq!(user.path(), "user");
        assert!(user.params().is_empty());
        assert_eq!(user.base_url(), crate::BITBUCKET_BASE_URL);

        let emails = UserRouter::ReadEmails(config);
        assert_eq!(emails.method(), Method::Get);
        assert_eq!(emails.path(), "user/emails");
        assert_eq!(
            emails.request().unwrap().url.as_str(),
            "https://bitbucket.org/api/2.0/user/emails"
        );
    }

    #[test]
    fn test_router_mapping_is_deterministic() {
        let router = UserRouter::ReadEmails(Configuration::new("t"));
        let first = router.request().unwrap();
        let second = router.clone().request().unwrap();
        assert_eq!(first, second);
    }
}
