/// Name used in log events when a chain is created without one
pub const DEFAULT_CHAIN_NAME: &str = "chain";
/// Log filter directives used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
