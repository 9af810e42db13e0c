//! Gateway resource family.
//!
//! The wire discriminator is `type`. The three variants carry disjoint
//! subsets of network and identity metadata.

use serde_json::{Map, Value};

use super::{
    as_object, lookup, optional_bool, optional_str, optional_u64, require_str, require_u64,
    required, DecodeResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatewayKind {
    OnPremises,
    OnPremisesPersonal,
    VirtualNetwork,
}

/// Discriminator lookup table, kept separate from the per-variant field
/// schemas.
const DISCRIMINATORS: &[(&str, GatewayKind)] = &[
    ("OnPremises", GatewayKind::OnPremises),
    ("OnPremisesPersonal", GatewayKind::OnPremisesPersonal),
    ("VirtualNetwork", GatewayKind::VirtualNetwork),
];

/// RSA public key advertised by an on-premises gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    /// Key exponent, base64-encoded.
    pub exponent: String,
    /// Key modulus, base64-encoded.
    pub modulus: String,
}

impl PublicKey {
    /// Decode the nested `publicKey` object.
    ///
    /// # Errors
    ///
    /// Returns a [`super::DecodeError`] when either component is missing or
    /// wrongly typed.
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "publicKey")?;
        Ok(Self {
            exponent: require_str(map, "PublicKey", "exponent")?,
            modulus: require_str(map, "PublicKey", "modulus")?,
        })
    }

    /// Encode to the nested wire object.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert("exponent".to_owned(), Value::String(self.exponent.clone()));
        map.insert("modulus".to_owned(), Value::String(self.modulus.clone()));
        Value::Object(map)
    }
}

/// Azure resource coordinates of a virtual-network gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureResource {
    /// Subscription identifier.
    pub subscription_id: String,
    /// Resource group name.
    pub resource_group_name: String,
    /// Virtual network name.
    pub virtual_network_name: String,
    /// Subnet name.
    pub subnet_name: String,
}

impl AzureResource {
    /// Decode the nested `virtualNetworkAzureResource` object.
    ///
    /// # Errors
    ///
    /// Returns a [`super::DecodeError`] when any coordinate is missing or
    /// wrongly typed.
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "virtualNetworkAzureResource")?;
        Ok(Self {
            subscription_id: require_str(map, "AzureResource", "subscriptionId")?,
            resource_group_name: require_str(map, "AzureResource", "resourceGroupName")?,
            virtual_network_name: require_str(map, "AzureResource", "virtualNetworkName")?,
            subnet_name: require_str(map, "AzureResource", "subnetName")?,
        })
    }

    /// Encode to the nested wire object.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "subscriptionId".to_owned(),
            Value::String(self.subscription_id.clone()),
        );
        map.insert(
            "resourceGroupName".to_owned(),
            Value::String(self.resource_group_name.clone()),
        );
        map.insert(
            "virtualNetworkName".to_owned(),
            Value::String(self.virtual_network_name.clone()),
        );
        map.insert(
            "subnetName".to_owned(),
            Value::String(self.subnet_name.clone()),
        );
        Value::Object(map)
    }
}

/// A standard on-premises data gateway cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnPremisesGateway {
    /// Gateway identifier.
    pub id: String,
    /// Display name of the cluster.
    pub display_name: String,
    /// Public key used to encrypt credentials for this gateway.
    pub public_key: PublicKey,
    /// Installed gateway version.
    pub version: String,
    /// Number of members in the cluster.
    pub number_of_gateway_members: u64,
    /// Load-balancing mode, when configured.
    pub load_balancing_setting: Option<String>,
    /// Whether cloud connections may refresh through this gateway.
    pub allow_cloud_connection_refresh: Option<bool>,
    /// Whether custom connectors are allowed.
    pub allow_custom_connectors: Option<bool>,
}

/// A personal-mode on-premises gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnPremisesPersonalGateway {
    /// Gateway identifier.
    pub id: String,
    /// Public key used to encrypt credentials for this gateway.
    pub public_key: PublicKey,
    /// Installed gateway version.
    pub version: String,
}

/// A managed virtual-network gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualNetworkGateway {
    /// Gateway identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Capacity the gateway runs on.
    pub capacity_id: String,
    /// Azure coordinates of the virtual network.
    pub virtual_network_azure_resource: AzureResource,
    /// Idle minutes before the gateway sleeps, when configured.
    pub inactivity_minutes_before_sleep: Option<u64>,
    /// Number of member gateways.
    pub number_of_member_gateways: u64,
}

/// A gateway descriptor, polymorphic over the closed variant set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gateway {
    /// Standard on-premises cluster.
    OnPremises(OnPremisesGateway),
    /// Personal-mode on-premises gateway.
    OnPremisesPersonal(OnPremisesPersonalGateway),
    /// Managed virtual-network gateway.
    VirtualNetwork(VirtualNetworkGateway),
}

impl Gateway {
    /// The immutable wire discriminator for this variant.
    #[must_use]
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::OnPremises(_) => "OnPremises",
            Self::OnPremisesPersonal(_) => "OnPremisesPersonal",
            Self::VirtualNetwork(_) => "VirtualNetwork",
        }
    }

    /// Gateway identifier, independent of variant.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::OnPremises(g) => &g.id,
            Self::OnPremisesPersonal(g) => &g.id,
            Self::VirtualNetwork(g) => &g.id,
        }
    }

    /// Decode a wire payload into the correctly-typed variant.
    ///
    /// # Errors
    ///
    /// Returns a [`super::DecodeError`] when the `type` discriminator is
    /// unrecognized, a required field for the resolved variant is
    /// missing, or a field holds the wrong JSON kind.
    pub fn decode(payload: &Value) -> DecodeResult<Self> {
        let map = as_object(payload, "gateway")?;
        let tag = require_str(map, "Gateway", "type")?;

        match lookup(DISCRIMINATORS, &tag)? {
            GatewayKind::OnPremises => Ok(Self::OnPremises(OnPremisesGateway {
                id: require_str(map, "OnPremises", "id")?,
                display_name: require_str(map, "OnPremises", "displayName")?,
                public_key: PublicKey::decode(required(map, "OnPremises", "publicKey")?)?,
                version: require_str(map, "OnPremises", "version")?,
                number_of_gateway_members: require_u64(
                    map,
                    "OnPremises",
                    "numberOfGatewayMembers",
                )?,
                load_balancing_setting: optional_str(map, "loadBalancingSetting")?,
                allow_cloud_connection_refresh: optional_bool(map, "allowCloudConnectionRefresh")?,
                allow_custom_connectors: optional_bool(map, "allowCustomConnectors")?,
            })),
            GatewayKind::OnPremisesPersonal => {
                Ok(Self::OnPremisesPersonal(OnPremisesPersonalGateway {
                    id: require_str(map, "OnPremisesPersonal", "id")?,
                    public_key: PublicKey::decode(required(
                        map,
                        "OnPremisesPersonal",
                        "publicKey",
                    )?)?,
                    version: require_str(map, "OnPremisesPersonal", "version")?,
                }))
            }
            GatewayKind::VirtualNetwork => Ok(Self::VirtualNetwork(VirtualNetworkGateway {
                id: require_str(map, "VirtualNetwork", "id")?,
                display_name: require_str(map, "VirtualNetwork", "displayName")?,
                capacity_id: require_str(map, "VirtualNetwork", "capacityId")?,
                virtual_network_azure_resource: AzureResource::decode(required(
                    map,
                    "VirtualNetwork",
                    "virtualNetworkAzureResource",
                )?)?,
                inactivity_minutes_before_sleep: optional_u64(
                    map,
                    "inactivityMinutesBeforeSleep",
                )?,
                number_of_member_gateways: require_u64(
                    map,
                    "VirtualNetwork",
                    "numberOfMemberGateways",
                )?,
            })),
        }
    }

    /// Encode this variant to its wire payload: the discriminator first,
    /// then exactly this variant's attributes, with unset optionals
    /// omitted.
    #[must_use]
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "type".to_owned(),
            Value::String(self.discriminator().to_owned()),
        );

        match self {
            Self::OnPremises(g) => {
                map.insert("id".to_owned(), Value::String(g.id.clone()));
                map.insert(
                    "displayName".to_owned(),
                    Value::String(g.display_name.clone()),
                );
                map.insert("publicKey".to_owned(), g.public_key.encode());
                map.insert("version".to_owned(), Value::String(g.version.clone()));
                map.insert(
                    "numberOfGatewayMembers".to_owned(),
                    Value::from(g.number_of_gateway_members),
                );
                if let Some(setting) = &g.load_balancing_setting {
                    map.insert(
                        "loadBalancingSetting".to_owned(),
                        Value::String(setting.clone()),
                    );
                }
                if let Some(allow) = g.allow_cloud_connection_refresh {
                    map.insert("allowCloudConnectionRefresh".to_owned(), Value::Bool(allow));
                }
                if let Some(allow) = g.allow_custom_connectors {
                    map.insert("allowCustomConnectors".to_owned(), Value::Bool(allow));
                }
            }
            Self::OnPremisesPersonal(g) => {
                map.insert("id".to_owned(), Value::String(g.id.clone()));
                map.insert("publicKey".to_owned(), g.public_key.encode());
                map.insert("version".to_owned(), Value::String(g.version.clone()));
            }
            Self::VirtualNetwork(g) => {
                map.insert("id".to_owned(), Value::String(g.id.clone()));
                map.insert(
                    "displayName".to_owned(),
                    Value::String(g.display_name.clone()),
                );
                map.insert("capacityId".to_owned(), Value::String(g.capacity_id.clone()));
                map.insert(
                    "virtualNetworkAzureResource".to_owned(),
                    g.virtual_network_azure_resource.encode(),
                );
                if let Some(minutes) = g.inactivity_minutes_before_sleep {
                    map.insert(
                        "inactivityMinutesBeforeSleep".to_owned(),
                        Value::from(minutes),
                    );
                }
                map.insert(
                    "numberOfMemberGateways".to_owned(),
                    Value::from(g.number_of_member_gateways),
                );
            }
        }

        Value::Object(map)
    }
}
