use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

use actix_web::{
    delete,
    dev::Server,
    get,
    http::StatusCode,
    middleware::Logger,
    post, put,
    web::{Bytes, Data, Query, ServiceConfig},
    App, Error, HttpResponse, HttpServer, Responder,
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::from_slice;

use crate::{device::Device, store::DeviceStore, validation::validate_device};

const INVALID_SERIAL_NUMBER: &str = "invalid serial number";
const UNREADABLE_BODY: &str = "error during reading body";
const INVALID_BODY: &str = "error during unmarshaling body";

pub struct State {
    pub store: Arc<DeviceStore>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct SerialNumQuery {
    #[serde(default)]
    serial_num: String,
}

fn error_response(status: StatusCode, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorMessage {
        message: message.to_string(),
    })
}

fn serial_num_from(query: Query<SerialNumQuery>) -> Result<String, HttpResponse> {
    let serial_num = query.into_inner().serial_num;
    if serial_num.is_empty() {
        warn!("Rejected request without serial number.");
        Err(error_response(StatusCode::BAD_REQUEST, INVALID_SERIAL_NUMBER))
    } else {
        Ok(serial_num)
    }
}

/// Reads, decodes and validates a device body, mapping each failure to its
/// response.
fn device_from(body: Result<Bytes, Error>) -> Result<Device, HttpResponse> {
    let body = body.map_err(|err| {
        warn!("Failed to read device body.\nError: {}", err);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, UNREADABLE_BODY)
    })?;

    let device = from_slice::<Device>(&body).map_err(|err| {
        warn!("Failed to decode device body.\nError: {}", err);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, INVALID_BODY)
    })?;

    validate_device(&device).map_err(|err| {
        warn!("Rejected device `{}`: {}.", device.serial_num, err);
        error_response(StatusCode::BAD_REQUEST, err)
    })?;

    Ok(device)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[get("/get")]
async fn get_device(query: Query<SerialNumQuery>, data: Data<State>) -> HttpResponse {
    let serial_num = match serial_num_from(query) {
        Ok(serial_num) => serial_num,
        Err(response) => return response,
    };

    match data.store.get(&serial_num) {
        Ok(device) => {
            debug!("Found device `{}`.", serial_num);
            HttpResponse::Ok().json(device)
        }
        Err(err) => {
            warn!("Failed to get device: {}.", err);
            error_response(StatusCode::BAD_REQUEST, err)
        }
    }
}

#[post("/create")]
async fn create_device(body: Result<Bytes, Error>, data: Data<State>) -> HttpResponse {
    let device = match device_from(body) {
        Ok(device) => device,
        Err(response) => return response,
    };
    let serial_num = device.serial_num.clone();

    match data.store.create(device) {
        Ok(()) => {
            info!("Created device `{}`.", serial_num);
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            warn!("Failed to create device: {}.", err);
            error_response(StatusCode::BAD_REQUEST, err)
        }
    }
}

#[put("/update")]
async fn update_device(body: Result<Bytes, Error>, data: Data<State>) -> HttpResponse {
    let device = match device_from(body) {
        Ok(device) => device,
        Err(response) => return response,
    };
    let serial_num = device.serial_num.clone();

    match data.store.update(device) {
        Ok(()) => {
            info!("Updated device `{}`.", serial_num);
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            warn!("Failed to update device: {}.", err);
            error_response(StatusCode::BAD_REQUEST, err)
        }
    }
}

#[delete("/delete")]
async fn delete_device(query: Query<SerialNumQuery>, data: Data<State>) -> HttpResponse {
    let serial_num = match serial_num_from(query) {
        Ok(serial_num) => serial_num,
        Err(response) => return response,
    };

    match data.store.delete(&serial_num) {
        Ok(()) => {
            info!("Deleted device `{}`.", serial_num);
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            warn!("Failed to delete device: {}.", err);
            error_response(StatusCode::BAD_REQUEST, err)
        }
    }
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health)
        .service(get_device)
        .service(create_device)
        .service(update_device)
        .service(delete_device);
}

pub fn start_api_server(addr: SocketAddr, store: Arc<DeviceStore>) -> Result<Server> {
    let listener =
        TcpListener::bind(addr).context(format!("Failed to bind API server to `{}`.", addr))?;

    serve(listener, store)
}

/// Runs the API on an already bound listener.
pub fn serve(listener: TcpListener, store: Arc<DeviceStore>) -> Result<Server> {
    let addr = listener
        .local_addr()
        .context("Failed to read API server listen address.")?;
    let data = Data::new(State { store });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
    .listen(listener)
    .context(format!("Failed to listen on `{}`.", addr))?
    .run();

    Ok(server)
}
