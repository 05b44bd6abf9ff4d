//! Opaque kubeconfig credential material.

use serde::Deserialize;
use std::fmt;

/// Opaque kubeconfig blob for reaching a cluster's API server.
///
/// The content is credential material: `Debug` output is redacted, the
/// type has no `Display` or `Serialize` implementation, and reads go
/// through the explicit [`Kubeconfig::expose`] accessor. Confidentiality
/// beyond this access boundary — encryption at rest, rotation — is the
/// caller's responsibility.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Kubeconfig(String);

impl Kubeconfig {
    /// Wraps raw kubeconfig content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Returns the raw credential content.
    ///
    /// Call sites name the exposure deliberately; avoid routing the
    /// returned value through logging or `Debug` formatting.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Kubeconfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kubeconfig([redacted])")
    }
}
