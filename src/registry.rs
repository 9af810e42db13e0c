//! Tool registry composition.
//!
//! The registry is composed exactly once at startup, before the server
//! accepts any request, and is read-only for the process lifetime.
//! [`compose`] is a pure function of its four inputs — base
//! descriptors, optional descriptors, resolved flags, and the active
//! transport — so the whole conditional wiring is testable without a
//! transport or service running. [`Composer`] adds the one-shot
//! lifecycle gate on top.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flags::FeatureFlags;

/// The channel over which MCP messages are exchanged.
///
/// Passed as `--transport` on the command line and used as the
/// transport-restriction value on optional tool descriptors.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// Standard input/output stream. Default.
    #[default]
    Stdio,
    /// HTTP with Server-Sent Events streaming.
    Http,
}

impl Display for Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// An advertised remote-invokable operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Globally unique operation name.
    pub name: String,
    /// Human-readable description advertised to clients.
    pub description: String,
    /// JSON schema of the tool's input object.
    pub input_schema: Value,
    /// Governing feature flag; `None` means always on.
    pub flag: Option<String>,
    /// Transport restriction; `None` means any transport.
    pub transport: Option<Transport>,
}

impl ToolDescriptor {
    /// Create an unrestricted descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            flag: None,
            transport: None,
        }
    }

    /// Gate this descriptor behind a feature flag.
    #[must_use]
    pub fn gated_by(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_owned());
        self
    }

    /// Restrict this descriptor to a single transport.
    #[must_use]
    pub fn restricted_to(mut self, transport: Transport) -> Self {
        self.transport = Some(transport);
        self
    }
}

/// Startup-fatal registry composition failure.
///
/// The process must refuse to start rather than advertise an
/// inconsistent or ambiguous tool catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// Two descriptors declare the same operation name.
    DuplicateTool {
        /// The colliding operation name.
        name: String,
    },
    /// The registry has already been composed for this process.
    AlreadyComposed,
}

impl Display for CompositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTool { name } => write!(f, "duplicate tool name '{name}'"),
            Self::AlreadyComposed => write!(f, "tool registry already composed"),
        }
    }
}

impl std::error::Error for CompositionError {}

/// The ordered, immutable list of advertised tools.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Descriptors in advertisement order.
    #[must_use]
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Operation names in advertisement order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    /// Whether the named operation is advertised.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name == name)
    }

    /// Number of advertised tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Compose the final ordered tool list.
///
/// The base list is taken as-is and defines the head of the
/// advertisement order. Each optional descriptor is appended, in
/// declaration order, iff its governing flag is active and its
/// transport restriction (if any) matches the active transport.
///
/// Duplicate operation names anywhere in the declared set — including
/// descriptors that gating would have excluded — are a configuration
/// error, since silently picking one would hide a misconfiguration.
///
/// # Errors
///
/// Returns [`CompositionError::DuplicateTool`] naming the colliding
/// operation; no registry is produced.
pub fn compose(
    base: &[ToolDescriptor],
    optional: &[ToolDescriptor],
    flags: &FeatureFlags,
    transport: Transport,
) -> Result<ToolRegistry, CompositionError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for descriptor in base.iter().chain(optional) {
        if !seen.insert(descriptor.name.as_str()) {
            return Err(CompositionError::DuplicateTool {
                name: descriptor.name.clone(),
            });
        }
    }

    let mut tools: Vec<ToolDescriptor> = base.to_vec();
    for descriptor in optional {
        let flag_ok = descriptor
            .flag
            .as_deref()
            .is_none_or(|flag| flags.is_active(flag));
        let transport_ok = descriptor
            .transport
            .is_none_or(|restriction| restriction == transport);
        if flag_ok && transport_ok {
            tools.push(descriptor.clone());
        }
    }

    Ok(ToolRegistry { tools })
}

/// One-shot lifecycle gate around [`compose`].
///
/// Downstream consumers may hold a reference to the advertised list for
/// the whole process lifetime, so recomposition is disallowed.
#[derive(Debug)]
pub struct Composer {
    base: Vec<ToolDescriptor>,
    optional: Vec<ToolDescriptor>,
    composed: bool,
}

impl Composer {
    /// Create a composer holding the declared descriptor sets.
    #[must_use]
    pub fn new(base: Vec<ToolDescriptor>, optional: Vec<ToolDescriptor>) -> Self {
        Self {
            base,
            optional,
            composed: false,
        }
    }

    /// Compose the registry, transitioning to the composed state.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::AlreadyComposed`] on a second call,
    /// or [`CompositionError::DuplicateTool`] for colliding names.
    pub fn compose_once(
        &mut self,
        flags: &FeatureFlags,
        transport: Transport,
    ) -> Result<ToolRegistry, CompositionError> {
        if self.composed {
            return Err(CompositionError::AlreadyComposed);
        }
        let registry = compose(&self.base, &self.optional, flags, transport)?;
        self.composed = true;
        Ok(registry)
    }
}
