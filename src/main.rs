use std::sync::Arc;

use anyhow::{Context, Result};
use device_registry::{
    api::start_api_server, constants::DEFAULT_LOG_FILTER, env::Env, DeviceStore,
};
use log::{error, info};
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};

#[tokio::main]
async fn main() -> Result<()> {
    let log_env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(log_env).init();

    Env::validate()?;
    let addr = Env::listen()?;

    let store = Arc::new(DeviceStore::new());
    let server = start_api_server(addr, store.clone())?;
    let handle = server.handle();
    let server_task = tokio::spawn(server);

    info!("Listening on: {}", addr);

    let mut term_signal =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler.")?;
    tokio::select! {
        _ = term_signal.recv() => {
            info!("SIGTERM received, shutting down...");
        },
        _ = ctrl_c() => {
            info!("Interrupt received, shutting down...");
        },
        result = server_task => {
            match result {
                Ok(Ok(())) => info!("Server finished."),
                Ok(Err(err)) => error!("Server encountered error.\nError: {}", err),
                Err(err) => error!("Server task failed.\nError: {}", err),
            }
            return Ok(());
        },
    }

    handle.stop(true).await;
    info!("Stopped with {} devices registered.", store.len());

    Ok(())
}
