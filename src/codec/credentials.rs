//! Credentials resource family.
//!
//! The wire discriminator is `credentialType`; once chosen it is
//! immutable and determines which attributes are legal. Each variant
//! carries a disjoint attribute set, and encoding a variant never emits
//! an attribute belonging to another variant's schema.

use serde_json::{Map, Value};

use super::{as_object, lookup, require_str, DecodeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CredentialKind {
    Anonymous,
    Basic,
    Key,
    ServicePrincipal,
    OAuth2,
    Windows,
    WindowsWithoutImpersonation,
    WorkspaceIdentity,
}

/// Discriminator lookup table, kept separate from the per-variant field
/// schemas so the variant set can evolve independently.
const DISCRIMINATORS: &[(&str, CredentialKind)] = &[
    ("Anonymous", CredentialKind::Anonymous),
    ("Basic", CredentialKind::Basic),
    ("Key", CredentialKind::Key),
    ("ServicePrincipal", CredentialKind::ServicePrincipal),
    ("OAuth2", CredentialKind::OAuth2),
    ("Windows", CredentialKind::Windows),
    (
        "WindowsWithoutImpersonation",
        CredentialKind::WindowsWithoutImpersonation,
    ),
    ("WorkspaceIdentity", CredentialKind::WorkspaceIdentity),
];

/// A credential descriptor attached to a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No credentials; the data source is publicly reachable.
    Anonymous,
    /// Username and password.
    Basic {
        /// Account name.
        username: String,
        /// Account secret.
        password: String,
    },
    /// Opaque API key.
    Key {
        /// The key material.
        key: String,
    },
    /// Entra service principal.
    ServicePrincipal {
        /// Directory (tenant) identifier.
        tenant_id: String,
        /// Application (client) identifier.
        client_id: String,
        /// Client secret.
        client_secret: String,
    },
    /// Delegated OAuth2 access token.
    OAuth2 {
        /// Bearer token.
        access_token: String,
    },
    /// Windows account with impersonation.
    Windows {
        /// Domain-qualified account name.
        username: String,
        /// Account secret.
        password: String,
    },
    /// Windows authentication without impersonation.
    WindowsWithoutImpersonation,
    /// The workspace's own managed identity.
    WorkspaceIdentity,
}

impl Credentials {
    /// The immutable wire discriminator for this variant.
    #[must_use]
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Anonymous => "Anonymous",
            Self::Basic { .. } => "Basic",
            Self::Key { .. } => "Key",
            Self::ServicePrincipal { .. } => "ServicePrincipal",
            Self::OAuth2 { .. } => "OAuth2",
            Self::Windows { .. } => "Windows",
            Self::WindowsWithoutImpersonation => "WindowsWithoutImpersonation",
            Self::WorkspaceIdentity => "WorkspaceIdentity",
        }
    }

    /// Decode a wire payload into the correctly-typed variant.
    ///
    /// # Errors
    ///
    /// Returns a [`super::DecodeError`] when the `credentialType`
    /// discriminator is unrecognized, a required field for the resolved
    /// variant is missing, or a field holds the wrong JSON kind.
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "credentialDetails")?;
        let tag = require_str(map, "Credentials", "credentialType")?;

        match lookup(DISCRIMINATORS, &tag)? {
            CredentialKind::Anonymous => Ok(Self::Anonymous),
            CredentialKind::Basic => Ok(Self::Basic {
                username: require_str(map, "Basic", "username")?,
                password: require_str(map, "Basic", "password")?,
            }),
            CredentialKind::Key => Ok(Self::Key {
                key: require_str(map, "Key", "key")?,
            }),
            CredentialKind::ServicePrincipal => Ok(Self::ServicePrincipal {
                tenant_id: require_str(map, "ServicePrincipal", "tenantId")?,
                client_id: require_str(map, "ServicePrincipal", "servicePrincipalClientId")?,
                client_secret: require_str(map, "ServicePrincipal", "servicePrincipalSecret")?,
            }),
            CredentialKind::OAuth2 => Ok(Self::OAuth2 {
                access_token: require_str(map, "OAuth2", "accessToken")?,
            }),
            CredentialKind::Windows => Ok(Self::Windows {
                username: require_str(map, "Windows", "username")?,
                password: require_str(map, "Windows", "password")?,
            }),
            CredentialKind::WindowsWithoutImpersonation => Ok(Self::WindowsWithoutImpersonation),
            CredentialKind::WorkspaceIdentity => Ok(Self::WorkspaceIdentity),
        }
    }

    /// Encode this variant to its wire payload: the discriminator first,
    /// then exactly this variant's attributes.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "credentialType".to_owned(),
            Value::String(self.discriminator().to_owned()),
        );

        match self {
            Self::Anonymous | Self::WindowsWithoutImpersonation | Self::WorkspaceIdentity => {}
            Self::Basic { username, password } | Self::Windows { username, password } => {
                map.insert("username".to_owned(), Value::String(username.clone()));
                map.insert("password".to_owned(), Value::String(password.clone()));
            }
            Self::Key { key } => {
                map.insert("key".to_owned(), Value::String(key.clone()));
            }
            Self::ServicePrincipal {
                tenant_id,
                client_id,
                client_secret,
            } => {
                map.insert("tenantId".to_owned(), Value::String(tenant_id.clone()));
                map.insert(
                    "servicePrincipalClientId".to_owned(),
                    Value::String(client_id.clone()),
                );
                map.insert(
                    "servicePrincipalSecret".to_owned(),
                    Value::String(client_secret.clone()),
                );
            }
            Self::OAuth2 { access_token } => {
                map.insert("accessToken".to_owned(), Value::String(access_token.clone()));
            }
        }

        Value::Object(map)
    }
}
