// Copyright 2026 The copasi-graph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

/// What to do when two entities share a canonical name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The later entity silently replaces the earlier one in the registry.
    #[default]
    Overwrite,
    /// Replace as with `Overwrite`, and also record a warning.
    Warn,
}

/// Conversion configuration.
#[derive(Clone, Debug)]
pub struct ConversionConfig {
    pub collision_policy: CollisionPolicy,
    /// Marker placed before the network's own name, as in `"ALL: model"`.
    pub network_prefix: String,
    /// Value of the `copasiNetwork` network attribute.
    pub network_marker: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            collision_policy: CollisionPolicy::Overwrite,
            network_prefix: "ALL".to_owned(),
            network_marker: "copasi".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConversionConfig::default();
        assert_eq!(CollisionPolicy::Overwrite, config.collision_policy);
        assert_eq!("ALL", config.network_prefix);
        assert_eq!("copasi", config.network_marker);
    }
}
