pub const ADDRESS_ENV: &str = "ADDRESS";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_PORT: &str = "8080";

pub const DEFAULT_LOG_FILTER: &str = "info";
