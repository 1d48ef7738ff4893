use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::swarm::SwarmConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NetworkType {
    Pod,
    Dhcp,
}

impl NetworkType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Pod => "pod",
            Self::Dhcp => "dhcp",
        }
    }
}

impl FromStr for NetworkType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pod" => Ok(Self::Pod),
            "dhcp" => Ok(Self::Dhcp),
            _ => Err(()),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved parameters for one Harvester VM.
///
/// Field names serialize the way the framework stores driver state.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct HarvesterConfig {
    pub kube_config_content: String,

    #[serde(rename = "VMNamespace")]
    pub vm_namespace: String,
    #[serde(rename = "VMAffinity")]
    pub vm_affinity: String,
    pub cluster_type: String,
    #[serde(rename = "ClusterID")]
    pub cluster_id: String,

    #[serde(rename = "CPU")]
    pub cpu: i64,
    pub memory_size: String,
    pub disk_size: String,
    pub disk_bus: String,

    pub image_name: String,

    #[serde(rename = "SSHUser")]
    pub ssh_user: String,
    #[serde(rename = "SSHPort")]
    pub ssh_port: i64,

    pub key_pair_name: String,
    #[serde(rename = "SSHPrivateKeyPath")]
    pub ssh_private_key_path: String,
    #[serde(rename = "SSHPassword")]
    pub ssh_password: String,

    pub network_type: String,
    pub network_name: String,
    pub network_model: String,

    pub cloud_config: String,
    pub user_data: String,
    pub network_data: String,

    #[serde(flatten)]
    pub swarm: SwarmConfig,
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for HarvesterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarvesterConfig")
            .field("kube_config_content", &redacted(&self.kube_config_content))
            .field("vm_namespace", &self.vm_namespace)
            .field("vm_affinity", &self.vm_affinity)
            .field("cluster_type", &self.cluster_type)
            .field("cluster_id", &self.cluster_id)
            .field("cpu", &self.cpu)
            .field("memory_size", &self.memory_size)
            .field("disk_size", &self.disk_size)
            .field("disk_bus", &self.disk_bus)
            .field("image_name", &self.image_name)
            .field("ssh_user", &self.ssh_user)
            .field("ssh_port", &self.ssh_port)
            .field("key_pair_name", &self.key_pair_name)
            .field("ssh_private_key_path", &self.ssh_private_key_path)
            .field("ssh_password", &redacted(&self.ssh_password))
            .field("network_type", &self.network_type)
            .field("network_name", &self.network_name)
            .field("network_model", &self.network_model)
            .field("cloud_config", &self.cloud_config)
            .field("user_data", &self.user_data)
            .field("network_data", &self.network_data)
            .field("swarm", &self.swarm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_type_parsing_is_exact() {
        assert_eq!("pod".parse::<NetworkType>(), Ok(NetworkType::Pod));
        assert_eq!("dhcp".parse::<NetworkType>(), Ok(NetworkType::Dhcp));
        assert_eq!("DHCP".parse::<NetworkType>(), Err(()));
        assert_eq!(" pod".parse::<NetworkType>(), Err(()));
        assert_eq!(NetworkType::Dhcp.to_string(), "dhcp");
    }

    #[test]
    fn serializes_with_driver_field_names() -> anyhow::Result<()> {
        let config = HarvesterConfig {
            vm_namespace: "default".to_string(),
            cpu: 2,
            ssh_private_key_path: "/root/.ssh/id_rsa".to_string(),
            ..HarvesterConfig::default()
        };

        let json = serde_json::to_value(&config)?;

        assert_eq!(json["VMNamespace"], "default");
        assert_eq!(json["CPU"], 2);
        assert_eq!(json["SSHPrivateKeyPath"], "/root/.ssh/id_rsa");
        assert_eq!(json["KubeConfigContent"], "");
        assert_eq!(json["SwarmMaster"], false);

        Ok(())
    }

    #[test]
    fn debug_hides_secrets() {
        let config = HarvesterConfig {
            kube_config_content: "apiVersion: v1\nclusters: []\n".to_string(),
            ssh_password: "hunter2".to_string(),
            ..HarvesterConfig::default()
        };

        let debug = format!("{config:?}");

        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("apiVersion"));
        assert!(debug.contains("<redacted>"));
    }
}
