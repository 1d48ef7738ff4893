use clap::ArgMatches;

/// Source of named option values, already merged from flags and environment.
///
/// `None` means the source has no value for `name`; the populator then falls
/// back to the schema default.
pub(crate) trait DriverOptions {
    fn string(&self, name: &str) -> Option<String>;
    fn int(&self, name: &str) -> Option<i64>;
    fn bool(&self, name: &str) -> Option<bool>;
}

impl DriverOptions for ArgMatches {
    fn string(&self, name: &str) -> Option<String> {
        self.try_get_one::<String>(name).ok().flatten().cloned()
    }

    fn int(&self, name: &str) -> Option<i64> {
        self.try_get_one::<i64>(name).ok().flatten().copied()
    }

    fn bool(&self, name: &str) -> Option<bool> {
        self.try_get_one::<bool>(name).ok().flatten().copied()
    }
}

#[cfg(test)]
use std::collections::HashMap;

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
enum OptionValue {
    String(String),
    Int(i64),
    Bool(bool),
}

/// In-memory option source.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct MapOptions {
    values: HashMap<String, OptionValue>,
}

#[cfg(test)]
impl MapOptions {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_string(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(name.to_string(), OptionValue::String(value.into()));
        self
    }

    pub(crate) fn with_int(mut self, name: &str, value: i64) -> Self {
        self.values.insert(name.to_string(), OptionValue::Int(value));
        self
    }

    pub(crate) fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.values.insert(name.to_string(), OptionValue::Bool(value));
        self
    }
}

#[cfg(test)]
impl DriverOptions for MapOptions {
    fn string(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            OptionValue::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name)? {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    fn bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name)? {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_options_are_typed() {
        let options = MapOptions::new()
            .with_string("harvester-image-name", "ubuntu")
            .with_int("harvester-cpu-count", 8)
            .with_bool("swarm-master", true);

        assert_eq!(options.string("harvester-image-name").as_deref(), Some("ubuntu"));
        assert_eq!(options.int("harvester-cpu-count"), Some(8));
        assert_eq!(options.bool("swarm-master"), Some(true));

        // Wrong kind or unknown name reads as absent.
        assert_eq!(options.int("harvester-image-name"), None);
        assert_eq!(options.string("harvester-network-name"), None);
    }

    #[test]
    fn arg_matches_tolerate_unknown_names() {
        let matches = clap::Command::new("test")
            .arg(clap::Arg::new("harvester-image-name").long("harvester-image-name"))
            .get_matches_from(["test", "--harvester-image-name", "ubuntu"]);

        assert_eq!(matches.string("harvester-image-name").as_deref(), Some("ubuntu"));
        assert_eq!(matches.string("harvester-network-name"), None);
        assert_eq!(matches.int("harvester-image-name"), None, "type mismatch reads as absent");
    }
}
