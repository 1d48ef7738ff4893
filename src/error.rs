//! Validation errors for the Harvester machine configuration.

use thiserror::Error;

use crate::flags;

pub(crate) type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ConfigError {
    #[error("must specify harvester image name")]
    MissingImageName,

    #[error("must specify the ssh private key path of the harvester key pair")]
    MissingPrivateKeyPath { key_pair_name: String },

    #[error("unknown network type {network_type}")]
    UnknownNetworkType { network_type: String },

    #[error("must specify harvester network name")]
    MissingNetworkName,
}

impl ConfigError {
    /// Name of the option that has to change for validation to pass.
    pub(crate) fn option(&self) -> &'static str {
        match self {
            Self::MissingImageName => flags::IMAGE_NAME,
            Self::MissingPrivateKeyPath { .. } => flags::SSH_PRIVATE_KEY_PATH,
            Self::UnknownNetworkType { .. } => flags::NETWORK_TYPE,
            Self::MissingNetworkName => flags::NETWORK_NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_driver_wording() {
        assert_eq!(
            ConfigError::UnknownNetworkType {
                network_type: "bogus".to_string()
            }
            .to_string(),
            "unknown network type bogus"
        );
        assert_eq!(
            ConfigError::MissingNetworkName.to_string(),
            "must specify harvester network name"
        );
    }

    #[test]
    fn option_points_at_offending_flag() {
        assert_eq!(ConfigError::MissingImageName.option(), "harvester-image-name");
        assert_eq!(
            ConfigError::MissingPrivateKeyPath {
                key_pair_name: "mykey".to_string()
            }
            .option(),
            "harvester-ssh-private-key-path"
        );
        assert_eq!(ConfigError::MissingNetworkName.option(), "harvester-network-name");
    }
}
