//! Connection resource family.
//!
//! A connection's `connectionDetails.type` discriminator selects the
//! connection-details shape; the embedded `parameters` list is itself
//! polymorphic over the `dataType` discriminator; the embedded
//! `credentialDetails` is a [`Credentials`] variant.

use serde_json::{Map, Value};

use super::credentials::Credentials;
use super::{
    as_object, lookup, optional_str, require_str, required, DecodeError, DecodeResult,
};

/// Maximum accepted length of a connection description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 256;

/// How a connection reaches its data source.
///
/// Serialized as the variant's string name, never a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityType {
    /// Cloud connection shareable across the workspace.
    ShareableCloud,
    /// Cloud connection private to its creator.
    PersonalCloud,
    /// Routed through an on-premises gateway cluster.
    OnPremisesGateway,
    /// Routed through a personal on-premises gateway.
    OnPremisesGatewayPersonal,
    /// Routed through a virtual-network gateway.
    VirtualNetworkGateway,
}

impl ConnectivityType {
    /// The wire name of this value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShareableCloud => "ShareableCloud",
            Self::PersonalCloud => "PersonalCloud",
            Self::OnPremisesGateway => "OnPremisesGateway",
            Self::OnPremisesGatewayPersonal => "OnPremisesGatewayPersonal",
            Self::VirtualNetworkGateway => "VirtualNetworkGateway",
        }
    }

    fn parse(value: &str) -> DecodeResult<Self> {
        match value {
            "ShareableCloud" => Ok(Self::ShareableCloud),
            "PersonalCloud" => Ok(Self::PersonalCloud),
            "OnPremisesGateway" => Ok(Self::OnPremisesGateway),
            "OnPremisesGatewayPersonal" => Ok(Self::OnPremisesGatewayPersonal),
            "VirtualNetworkGateway" => Ok(Self::VirtualNetworkGateway),
            _ => Err(DecodeError::TypeMismatch {
                field: "connectivityType",
                expected: "a connectivity type name",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParameterKind {
    Text,
    Secret,
    Structured,
}

/// Parameter discriminator lookup table (`dataType`).
const PARAMETER_DISCRIMINATORS: &[(&str, ParameterKind)] = &[
    ("Text", ParameterKind::Text),
    ("Secret", ParameterKind::Secret),
    ("Structured", ParameterKind::Structured),
];

/// A polymorphic connection-details parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionParameter {
    /// Plain string parameter.
    Text {
        /// Parameter name.
        name: String,
        /// Parameter value.
        value: String,
    },
    /// Write-only secret parameter.
    Secret {
        /// Parameter name.
        name: String,
        /// Secret value.
        value: String,
    },
    /// Structured parameter carrying nested JSON.
    Structured {
        /// Parameter name.
        name: String,
        /// Nested value.
        value: Value,
    },
}

impl ConnectionParameter {
    /// The immutable wire discriminator for this variant.
    #[must_use]
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Text { .. } => "Text",
            Self::Secret { .. } => "Secret",
            Self::Structured { .. } => "Structured",
        }
    }

    /// Decode a wire payload into the correctly-typed variant.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the `dataType` discriminator is
    /// unrecognized or a field is missing or wrongly typed.
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "parameters")?;
        let tag = require_str(map, "ConnectionParameter", "dataType")?;

        match lookup(PARAMETER_DISCRIMINATORS, &tag)? {
            ParameterKind::Text => Ok(Self::Text {
                name: require_str(map, "Text", "name")?,
                value: require_str(map, "Text", "value")?,
            }),
            ParameterKind::Secret => Ok(Self::Secret {
                name: require_str(map, "Secret", "name")?,
                value: require_str(map, "Secret", "value")?,
            }),
            ParameterKind::Structured => Ok(Self::Structured {
                name: require_str(map, "Structured", "name")?,
                value: required(map, "Structured", "value")?.clone(),
            }),
        }
    }

    /// Encode this variant to its wire payload.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "dataType".to_owned(),
            Value::String(self.discriminator().to_owned()),
        );

        match self {
            Self::Text { name, value } | Self::Secret { name, value } => {
                map.insert("name".to_owned(), Value::String(name.clone()));
                map.insert("value".to_owned(), Value::String(value.clone()));
            }
            Self::Structured { name, value } => {
                map.insert("name".to_owned(), Value::String(name.clone()));
                map.insert("value".to_owned(), value.clone());
            }
        }

        Value::Object(map)
    }
}

/// The connection-details shape selected by the `type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    /// SQL database endpoint.
    Sql,
    /// Generic web endpoint.
    Web,
    /// Azure Blob storage.
    AzureBlobs,
    /// Azure Data Lake Storage Gen2.
    AzureDataLakeStorage,
    /// SharePoint Online list.
    SharePointOnlineList,
}

/// Connection-details discriminator lookup table (`type`).
const DETAIL_DISCRIMINATORS: &[(&str, ConnectionType)] = &[
    ("SQL", ConnectionType::Sql),
    ("Web", ConnectionType::Web),
    ("AzureBlobs", ConnectionType::AzureBlobs),
    ("AzureDataLakeStorage", ConnectionType::AzureDataLakeStorage),
    ("SharePointOnlineList", ConnectionType::SharePointOnlineList),
];

impl ConnectionType {
    /// The wire name of this shape.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sql => "SQL",
            Self::Web => "Web",
            Self::AzureBlobs => "AzureBlobs",
            Self::AzureDataLakeStorage => "AzureDataLakeStorage",
            Self::SharePointOnlineList => "SharePointOnlineList",
        }
    }
}

/// Details describing how to reach the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDetails {
    /// Shape discriminator.
    pub connection_type: ConnectionType,
    /// Resolved endpoint path, when the service has computed one.
    pub path: Option<String>,
    /// Polymorphic creation parameters. Empty lists are omitted on the
    /// wire.
    pub parameters: Vec<ConnectionParameter>,
}

impl ConnectionDetails {
    /// Decode the nested `connectionDetails` object.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the `type` discriminator is
    /// unrecognized or a nested parameter fails to decode.
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "connectionDetails")?;
        let tag = require_str(map, "ConnectionDetails", "type")?;
        let connection_type = lookup(DETAIL_DISCRIMINATORS, &tag)?;

        let parameters = match map.get("parameters") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(ConnectionParameter::decode)
                .collect::<DecodeResult<Vec<_>>>()?,
            Some(_) => {
                return Err(DecodeError::TypeMismatch {
                    field: "parameters",
                    expected: "an array",
                })
            }
        };

        Ok(Self {
            connection_type,
            path: optional_str(map, "path")?,
            parameters,
        })
    }

    /// Encode to the nested wire object.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "type".to_owned(),
            Value::String(self.connection_type.as_str().to_owned()),
        );
        if let Some(path) = &self.path {
            map.insert("path".to_owned(), Value::String(path.clone()));
        }
        if !self.parameters.is_empty() {
            map.insert(
                "parameters".to_owned(),
                Value::Array(self.parameters.iter().map(ConnectionParameter::encode).collect()),
            );
        }
        Value::Object(map)
    }
}

/// A connection descriptor as exchanged with the external API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Connection identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Free-form description, at most [`MAX_DESCRIPTION_CHARS`] characters.
    pub description: Option<String>,
    /// How the connection reaches its data source.
    pub connectivity_type: ConnectivityType,
    /// Owning workspace, when workspace-scoped.
    pub workspace_id: Option<String>,
    /// Gateway the connection is bound to, when gateway-routed.
    pub gateway_id: Option<String>,
    /// Endpoint details.
    pub details: ConnectionDetails,
    /// Embedded credential descriptor.
    pub credential_details: Credentials,
}

impl Connection {
    /// Decode a wire payload into a typed connection.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when any embedded discriminator is
    /// unrecognized, a required field is missing, a field holds the
    /// wrong JSON kind, or the description exceeds
    /// [`MAX_DESCRIPTION_CHARS`].
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "connection")?;

        let description = optional_str(map, "description")?;
        if let Some(text) = &description {
            if text.chars().count() > MAX_DESCRIPTION_CHARS {
                return Err(DecodeError::TypeMismatch {
                    field: "description",
                    expected: "a string of at most 256 characters",
                });
            }
        }

        Ok(Self {
            id: require_str(map, "Connection", "id")?,
            display_name: require_str(map, "Connection", "displayName")?,
            description,
            connectivity_type: ConnectivityType::parse(&require_str(
                map,
                "Connection",
                "connectivityType",
            )?)?,
            workspace_id: optional_str(map, "workspaceId")?,
            gateway_id: optional_str(map, "gatewayId")?,
            details: ConnectionDetails::decode(required(
                map,
                "Connection",
                "connectionDetails",
            )?)?,
            credential_details: Credentials::decode(required(
                map,
                "Connection",
                "credentialDetails",
            )?)?,
        })
    }

    /// Encode this connection to its wire payload, omitting unset
    /// optionals.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_owned(), Value::String(self.id.clone()));
        map.insert(
            "displayName".to_owned(),
            Value::String(self.display_name.clone()),
        );
        if let Some(description) = &self.description {
            map.insert("description".to_owned(), Value::String(description.clone()));
        }
        map.insert(
            "connectivityType".to_owned(),
            Value::String(self.connectivity_type.as_str().to_owned()),
        );
        if let Some(workspace_id) = &self.workspace_id {
            map.insert("workspaceId".to_owned(), Value::String(workspace_id.clone()));
        }
        if let Some(gateway_id) = &self.gateway_id {
            map.insert("gatewayId".to_owned(), Value::String(gateway_id.clone()));
        }
        map.insert("connectionDetails".to_owned(), self.details.encode());
        map.insert(
            "credentialDetails".to_owned(),
            self.credential_details.encode(),
        );
        Value::Object(map)
    }
}
