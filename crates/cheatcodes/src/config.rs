//! Cheatcode-specific configuration.

use feltforge_config::Config;

/// The slice of [`Config`] the cheatcode layer needs.
///
/// Extracted once per test run and shared behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct CheatsConfig {
    /// Block number every run starts with, unless rolled later.
    pub block_number: Option<u64>,
    /// Block timestamp every run starts with, unless warped later.
    pub block_timestamp: Option<u64>,
}

impl CheatsConfig {
    /// Extracts the cheat-relevant settings from a resolved config.
    pub fn new(config: &Config) -> Self {
        trace!(
            target: "cheatcodes",
            block_number = ?config.block_number,
            block_timestamp = ?config.block_timestamp,
            "using configured block context"
        );
        Self { block_number: config.block_number, block_timestamp: config.block_timestamp }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_block_context() {
        let config = Config { block_number: Some(7), block_timestamp: Some(70), ..Config::default() };
        let cheats_config = CheatsConfig::new(&config);
        assert_eq!(cheats_config.block_number, Some(7));
        assert_eq!(cheats_config.block_timestamp, Some(70));
    }
}
