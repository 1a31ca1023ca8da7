use serde::Deserialize;

pub const DEFAULT_DEPTH: u8 = 4;
pub const DEFAULT_MAX_DEPTH: u8 = 10;

/// Engine knobs. Every field is optional when deserialized; missing fields
/// keep their defaults.
///
/// - `default_depth`: search depth used when a computer move request omits one.
/// - `max_depth`: upper bound applied to every requested depth.
/// - `parallel_root`: score root moves on the rayon pool (needs the `parallel` feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_depth: u8,
    pub max_depth: u8,
    pub parallel_root: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            parallel_root: false,
        }
    }
}

impl EngineConfig {
    /// Clamps a requested depth into `1..=max_depth`. Non-positive requests become 1.
    pub fn clamp_depth(&self, requested: i32) -> u8 {
        let max_depth = self.max_depth.max(1);
        requested.clamp(1, i32::from(max_depth)) as u8
    }

    pub fn resolve_depth(&self, requested: Option<i32>) -> u8 {
        self.clamp_depth(requested.unwrap_or(i32::from(self.default_depth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_search_four_plies() {
        let config = EngineConfig::default();

        assert_eq!(config.resolve_depth(None), 4);
        assert!(!config.parallel_root);
    }

    #[test]
    fn non_positive_depth_is_clamped_to_one() {
        let config = EngineConfig::default();

        assert_eq!(config.clamp_depth(0), 1);
        assert_eq!(config.clamp_depth(-7), 1);
    }

    #[test]
    fn depth_is_capped_at_max_depth() {
        let config = EngineConfig {
            max_depth: 6,
            ..EngineConfig::default()
        };

        assert_eq!(config.clamp_depth(6), 6);
        assert_eq!(config.clamp_depth(1000), 6);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"default_depth": 2}"#).unwrap();

        assert_eq!(config.default_depth, 2);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.resolve_depth(None), 2);
    }
}
