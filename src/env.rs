use std::{
    env::var,
    error, fmt,
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::LazyLock,
};

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::constants::*;

fn create_error_msg(key: &str, value: &str) -> String {
    format!(
        "Failed to parse environment variable `{}` with value `{}`.",
        key, value
    )
}

fn get_parsed_env<T>(key: &str, default_value: Option<&str>) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: fmt::Display + fmt::Debug + error::Error + Send + Sync + 'static,
{
    match var(key) {
        Ok(value) => {
            debug!(
                "Environment variable `{}` found with value `{}`.",
                key, value
            );
            value.parse::<T>().context(create_error_msg(key, &value))
        }

        Err(_) => {
            if let Some(default_value) = default_value {
                debug!(
                    "Environment variable `{}` not found. Using default value `{}`.",
                    key, default_value
                );
                default_value
                    .parse::<T>()
                    .context(create_error_msg(key, default_value))
            } else {
                Err(anyhow!("Environment variable `{}` not found.", key))
            }
        }
    }
}

static ADDRESS: LazyLock<Result<IpAddr>> =
    LazyLock::new(|| get_parsed_env(ADDRESS_ENV, Some(DEFAULT_ADDRESS)));
static PORT: LazyLock<Result<u16>> = LazyLock::new(|| get_parsed_env(PORT_ENV, Some(DEFAULT_PORT)));

pub struct Env {}

impl Env {
    fn get_address() -> Result<IpAddr> {
        match &*ADDRESS {
            Ok(address) => Ok(*address),
            Err(err) => Err(anyhow!("{}", err)),
        }
    }

    fn get_port() -> Result<u16> {
        match &*PORT {
            Ok(port) => Ok(*port),
            Err(err) => Err(anyhow!("{}", err)),
        }
    }

    pub fn validate() -> Result<()> {
        Self::get_address()?;
        Self::get_port()?;

        Ok(())
    }

    /// Socket address the API server binds to.
    pub fn listen() -> Result<SocketAddr> {
        Ok(SocketAddr::new(Self::get_address()?, Self::get_port()?))
    }
}
