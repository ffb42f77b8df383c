//! Config-lane service shared by the entity services.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use kafmin_model::{ConfigEntry, Either, Fault};
use tracing::debug;

use crate::Result;
use crate::admin::{AdminClient, ConfigKey};

/// Thin wrapper over the config operations of the admin capability. The
/// topic service composes this as its configuration lane; callers can also
/// use it directly for the single-resource delegations.
pub struct ConfigService {
    admin: Arc<dyn AdminClient>,
}

impl ConfigService {
    pub fn new(admin: Arc<dyn AdminClient>) -> Self {
        Self { admin }
    }

    /// Batched lookup; per-resource failures stay embedded as alternates.
    pub async fn describe_configs(
        &self,
        keys: &[ConfigKey],
    ) -> Result<HashMap<ConfigKey, Either<BTreeMap<String, ConfigEntry>, Fault>>> {
        debug!(resources = keys.len(), "describing configs");
        self.admin.describe_configs(keys).await
    }

    /// Single-topic lookup, unwrapping the one requested resource.
    pub async fn describe_topic_configs(
        &self,
        name: &str,
    ) -> Result<BTreeMap<String, ConfigEntry>> {
        let key = ConfigKey::topic(name);
        let mut configs = self.admin.describe_configs(std::slice::from_ref(&key)).await?;

        match configs.remove(&key) {
            Some(Either::Primary(entries)) => Ok(entries),
            Some(Either::Alternate(fault)) => Err(fault),
            None => Err(Fault::NotFound(name.to_owned())),
        }
    }

    /// Replace a topic's dynamic configuration.
    pub async fn alter_topic_configs(
        &self,
        name: &str,
        configs: &BTreeMap<String, ConfigEntry>,
    ) -> Result<BTreeMap<String, ConfigEntry>> {
        debug!(topic = name, entries = configs.len(), "altering configs");
        self.admin.alter_configs(&ConfigKey::topic(name), configs).await
    }
}

impl std::fmt::Debug for ConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigService").finish_non_exhaustive()
    }
}
