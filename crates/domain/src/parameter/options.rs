//! Caller-supplied resolve options

use serde::{Deserialize, Serialize};

/// Options governing which parameters a resolution may return.
///
/// The default refuses secure parameters; resolving them is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Whether secure parameters may be resolved at all.
    #[serde(default, alias = "ResolveSecureParameters")]
    pub resolve_secure_parameters: bool,
}

impl ResolveOptions {
    /// Options that refuse secure parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolve_secure_parameters: false,
        }
    }

    /// Options that allow secure parameters.
    #[must_use]
    pub const fn allow_secure() -> Self {
        Self {
            resolve_secure_parameters: true,
        }
    }
}
