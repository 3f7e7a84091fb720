// Build metadata: served at /version and sent upstream as the client user agent

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `User-Agent` for requests to the cluster API, e.g. `citadel-dash/0.3.0`.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
