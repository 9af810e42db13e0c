//! Device-code sign-in read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An initiated device-code sign-in flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCodeLogin {
    /// Code the user enters at the verification URI.
    pub user_code: String,
    /// Where the user completes the sign-in.
    pub verification_uri: String,
    /// Moment the code expires.
    pub expires_at: DateTime<Utc>,
    /// Suggested polling interval in seconds.
    pub interval_seconds: u64,
}
