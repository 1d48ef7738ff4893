//! Catalog of the options accepted by the Harvester driver.
//!
//! Names and environment aliases are read by the provisioning framework and
//! must not change.

use serde::Serialize;

pub(crate) const KUBECONFIG_CONTENT: &str = "harvester-kubeconfig-content";
pub(crate) const CLUSTER_TYPE: &str = "harvester-cluster-type";
pub(crate) const CLUSTER_ID: &str = "harvester-cluster-id";
pub(crate) const VM_NAMESPACE: &str = "harvester-vm-namespace";
pub(crate) const CPU_COUNT: &str = "harvester-cpu-count";
pub(crate) const MEMORY_SIZE: &str = "harvester-memory-size";
pub(crate) const DISK_SIZE: &str = "harvester-disk-size";
pub(crate) const DISK_BUS: &str = "harvester-disk-bus";
pub(crate) const IMAGE_NAME: &str = "harvester-image-name";
pub(crate) const SSH_USER: &str = "harvester-ssh-user";
pub(crate) const SSH_PORT: &str = "harvester-ssh-port";
pub(crate) const SSH_PASSWORD: &str = "harvester-ssh-password";
pub(crate) const KEY_PAIR_NAME: &str = "harvester-key-pair-name";
pub(crate) const SSH_PRIVATE_KEY_PATH: &str = "harvester-ssh-private-key-path";
pub(crate) const NETWORK_TYPE: &str = "harvester-network-type";
pub(crate) const NETWORK_NAME: &str = "harvester-network-name";
pub(crate) const NETWORK_MODEL: &str = "harvester-network-model";
pub(crate) const CLOUD_CONFIG: &str = "harvester-cloud-config";
pub(crate) const USER_DATA: &str = "harvester-user-data";
pub(crate) const NETWORK_DATA: &str = "harvester-network-data";
pub(crate) const VM_AFFINITY: &str = "harvester-vm-affinity";

/// Default values applied when an option is not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Defaults {
    pub namespace: String,
    pub cpu: i64,
    pub memory_size: i64,
    pub disk_size: i64,
    pub disk_bus: String,
    pub network_type: String,
    pub network_model: String,
    pub ssh_user: String,
    pub ssh_port: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            cpu: 2,
            memory_size: 4,
            disk_size: 40,
            disk_bus: "virtio".to_string(),
            network_type: "dhcp".to_string(),
            network_model: "virtio".to_string(),
            // Framework defaults for machine SSH access.
            ssh_user: "root".to_string(),
            ssh_port: 22,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FlagKind {
    String,
    Int,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum FlagValue {
    String(String),
    Int(i64),
}

impl FlagValue {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::Int(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Flag {
    pub name: &'static str,
    pub env_var: &'static str,
    pub usage: &'static str,
    pub kind: FlagKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FlagValue>,
}

impl Flag {
    fn string(name: &'static str, env_var: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            env_var,
            usage,
            kind: FlagKind::String,
            default: None,
        }
    }

    fn int(name: &'static str, env_var: &'static str, usage: &'static str, default: i64) -> Self {
        Self {
            name,
            env_var,
            usage,
            kind: FlagKind::Int,
            default: Some(FlagValue::Int(default)),
        }
    }

    fn with_default(mut self, default: &str) -> Self {
        self.default = Some(FlagValue::String(default.to_string()));
        self
    }
}

/// Immutable option table built from a set of [`Defaults`].
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub(crate) struct Schema {
    flags: Vec<Flag>,
}

impl Schema {
    pub(crate) fn new(defaults: &Defaults) -> Self {
        let flags = vec![
            Flag::string(
                KUBECONFIG_CONTENT,
                "HARVESTER_KUBECONFIG_CONTENT",
                "contents of kubeconfig file for harvester cluster, base64 is supported",
            ),
            Flag::string(CLUSTER_TYPE, "HARVESTER_CLUSTER_TYPE", "harvester cluster type"),
            Flag::string(CLUSTER_ID, "HARVESTER_CLUSTER_ID", "harvester cluster id"),
            Flag::string(VM_NAMESPACE, "HARVESTER_VM_NAMESPACE", "harvester vm namespace")
                .with_default(&defaults.namespace),
            Flag::int(
                CPU_COUNT,
                "HARVESTER_CPU_COUNT",
                "number of CPUs for machine",
                defaults.cpu,
            ),
            Flag::int(
                MEMORY_SIZE,
                "HARVESTER_MEMORY_SIZE",
                "size of memory for machine (in GiB)",
                defaults.memory_size,
            ),
            Flag::int(
                DISK_SIZE,
                "HARVESTER_DISK_SIZE",
                "size of disk for machine (in GiB)",
                defaults.disk_size,
            ),
            Flag::string(DISK_BUS, "HARVESTER_DISK_BUS", "bus of disk for machine")
                .with_default(&defaults.disk_bus),
            Flag::string(IMAGE_NAME, "HARVESTER_IMAGE_NAME", "harvester image name"),
            Flag::string(SSH_USER, "HARVESTER_SSH_USER", "SSH username")
                .with_default(&defaults.ssh_user),
            Flag::int(SSH_PORT, "HARVESTER_SSH_PORT", "SSH port", defaults.ssh_port),
            Flag::string(SSH_PASSWORD, "HARVESTER_SSH_PASSWORD", "SSH password"),
            Flag::string(KEY_PAIR_NAME, "HARVESTER_KEY_PAIR_NAME", "harvester key pair name"),
            Flag::string(
                SSH_PRIVATE_KEY_PATH,
                "HARVESTER_SSH_PRIVATE_KEY_PATH",
                "SSH private key path ",
            ),
            Flag::string(NETWORK_TYPE, "HARVESTER_NETWORK_TYPE", "harvester network type")
                .with_default(&defaults.network_type),
            Flag::string(NETWORK_NAME, "HARVESTER_NETWORK_NAME", "harvester network name"),
            Flag::string(NETWORK_MODEL, "HARVESTER_NETWORK_MODEL", "harvester network model")
                .with_default(&defaults.network_model),
            Flag::string(
                CLOUD_CONFIG,
                "HARVESTER_CLOUD_CONFIG",
                "just keep it empty, this value will be filled by rancher-machine",
            ),
            Flag::string(
                USER_DATA,
                "HARVESTER_USER_DATA",
                "userData content of cloud-init for machine, base64 is supported",
            ),
            Flag::string(
                NETWORK_DATA,
                "HARVESTER_NETWORK_DATA",
                "networkData content of cloud-init for machine, base64 is supported",
            ),
            Flag::string(
                VM_AFFINITY,
                "HARVESTER_VM_AFFINITY",
                "harvester vm affinity, base64 is supported",
            ),
        ];

        Self { flags }
    }

    pub(crate) fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub(crate) fn flag(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    pub(crate) fn default_string(&self, name: &str) -> Option<String> {
        match self.flag(name)?.default.as_ref()? {
            FlagValue::String(value) => Some(value.clone()),
            FlagValue::Int(_) => None,
        }
    }

    pub(crate) fn default_int(&self, name: &str) -> Option<i64> {
        match self.flag(name)?.default.as_ref()? {
            FlagValue::Int(value) => Some(*value),
            FlagValue::String(_) => None,
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(&Defaults::default())
    }
}
