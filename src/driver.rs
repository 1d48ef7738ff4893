//! Populates and validates the Harvester machine configuration.

use tracing::{debug, instrument};

use crate::{
    encoding::string_support_base64,
    error::{ConfigError, ConfigResult},
    flags::{self, Schema},
    models::{HarvesterConfig, NetworkType},
    options::DriverOptions,
    swarm::SwarmConfig,
};

/// Option values with catalog defaults filled in.
struct Resolved<'a, O> {
    schema: &'a Schema,
    options: &'a O,
}

impl<O: DriverOptions> Resolved<'_, O> {
    fn string(&self, name: &str) -> String {
        self.options
            .string(name)
            .or_else(|| self.schema.default_string(name))
            .unwrap_or_default()
    }

    fn int(&self, name: &str) -> i64 {
        self.options
            .int(name)
            .or_else(|| self.schema.default_int(name))
            .unwrap_or_default()
    }

    fn base64(&self, name: &str) -> String {
        string_support_base64(&self.string(name))
    }

    fn gibibytes(&self, name: &str) -> String {
        format!("{}Gi", self.int(name))
    }
}

impl HarvesterConfig {
    /// Copies every option into a new record. Never fails; see [`Self::validate`].
    pub(crate) fn from_options(schema: &Schema, options: &impl DriverOptions) -> Self {
        let values = Resolved { schema, options };

        Self {
            kube_config_content: values.base64(flags::KUBECONFIG_CONTENT),

            vm_namespace: values.string(flags::VM_NAMESPACE),
            vm_affinity: values.base64(flags::VM_AFFINITY),
            cluster_type: values.string(flags::CLUSTER_TYPE),
            cluster_id: values.string(flags::CLUSTER_ID),

            cpu: values.int(flags::CPU_COUNT),
            memory_size: values.gibibytes(flags::MEMORY_SIZE),
            disk_size: values.gibibytes(flags::DISK_SIZE),
            disk_bus: values.string(flags::DISK_BUS),

            image_name: values.string(flags::IMAGE_NAME),

            ssh_user: values.string(flags::SSH_USER),
            ssh_port: values.int(flags::SSH_PORT),

            key_pair_name: values.string(flags::KEY_PAIR_NAME),
            ssh_private_key_path: values.string(flags::SSH_PRIVATE_KEY_PATH),
            ssh_password: values.string(flags::SSH_PASSWORD),

            network_type: values.string(flags::NETWORK_TYPE),
            network_name: values.string(flags::NETWORK_NAME),
            network_model: values.string(flags::NETWORK_MODEL),

            cloud_config: values.string(flags::CLOUD_CONFIG),
            user_data: values.base64(flags::USER_DATA),
            network_data: values.base64(flags::NETWORK_DATA),

            swarm: SwarmConfig::default(),
        }
    }

    /// Checks the record and reports the first problem found.
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.image_name.is_empty() {
            return Err(ConfigError::MissingImageName);
        }

        if !self.key_pair_name.is_empty() && self.ssh_private_key_path.is_empty() {
            return Err(ConfigError::MissingPrivateKeyPath {
                key_pair_name: self.key_pair_name.clone(),
            });
        }

        let network_type = self.network_type.parse::<NetworkType>().map_err(|()| {
            ConfigError::UnknownNetworkType {
                network_type: self.network_type.clone(),
            }
        })?;

        if network_type == NetworkType::Dhcp && self.network_name.is_empty() {
            return Err(ConfigError::MissingNetworkName);
        }

        debug!(
            image = %self.image_name,
            network_type = %network_type,
            "configuration is valid"
        );

        Ok(())
    }
}

/// Holds the configuration for one machine while the framework sets it up.
#[derive(Debug)]
pub(crate) struct Driver<'a> {
    schema: &'a Schema,
    config: HarvesterConfig,
}

impl<'a> Driver<'a> {
    pub(crate) fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            config: HarvesterConfig::default(),
        }
    }

    /// Populates the driver and its swarm settings, then validates the result.
    #[instrument(skip_all)]
    pub(crate) fn set_config_from_flags(&mut self, options: &impl DriverOptions) -> ConfigResult<()> {
        self.config = HarvesterConfig::from_options(self.schema, options);
        self.config.swarm = SwarmConfig::from_options(options);

        debug!(
            namespace = %self.config.vm_namespace,
            cpu = self.config.cpu,
            memory = %self.config.memory_size,
            disk = %self.config.disk_size,
            "populated harvester configuration"
        );

        self.config.validate()
    }

    pub(crate) fn config(&self) -> &HarvesterConfig {
        &self.config
    }

    pub(crate) fn into_config(self) -> HarvesterConfig {
        self.config
    }
}
