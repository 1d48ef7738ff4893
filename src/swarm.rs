//! Swarm settings shared by every machine driver.

use serde::Serialize;

use crate::options::DriverOptions;

pub(crate) const SWARM_MASTER: &str = "swarm-master";
pub(crate) const SWARM_HOST: &str = "swarm-host";
pub(crate) const SWARM_DISCOVERY: &str = "swarm-discovery";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SwarmConfig {
    pub swarm_master: bool,
    pub swarm_host: String,
    pub swarm_discovery: String,
}

impl SwarmConfig {
    pub(crate) fn from_options(options: &impl DriverOptions) -> Self {
        Self {
            swarm_master: options.bool(SWARM_MASTER).unwrap_or_default(),
            swarm_host: options.string(SWARM_HOST).unwrap_or_default(),
            swarm_discovery: options.string(SWARM_DISCOVERY).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MapOptions;

    #[test]
    fn reads_framework_flags() {
        let options = MapOptions::new()
            .with_bool(SWARM_MASTER, true)
            .with_string(SWARM_HOST, "tcp://0.0.0.0:3376")
            .with_string(SWARM_DISCOVERY, "token://abc");

        let swarm = SwarmConfig::from_options(&options);

        assert!(swarm.swarm_master);
        assert_eq!(swarm.swarm_host, "tcp://0.0.0.0:3376");
        assert_eq!(swarm.swarm_discovery, "token://abc");
    }

    #[test]
    fn absent_flags_leave_swarm_disabled() {
        assert_eq!(SwarmConfig::from_options(&MapOptions::new()), SwarmConfig::default());
    }
}
