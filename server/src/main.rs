use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::{error, info};
use taskdesk_server::config::Settings;
use taskdesk_server::{build_app, TaskService, TaskStore};
use taskdesk_shared::logging::init_logging;

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging();

    let settings = Settings::new().map_err(|err| {
        error!("event=config_load status=error error={err}");
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let service = web::Data::new(TaskService::new(Arc::new(TaskStore::new())));
    let api_key = settings.auth.api_key.clone();
    let (host, port) = settings.server.bind_address();

    info!("event=server_start service=tasks host={host} port={port}");

    // actix installs SIGINT/SIGTERM handlers and drains workers for `shutdown_timeout`.
    HttpServer::new(move || build_app(service.clone(), &api_key))
        .client_request_timeout(settings.server.request_timeout())
        .shutdown_timeout(settings.server.shutdown_timeout_secs)
        .bind((host, port))?
        .run()
        .await?;

    info!("event=server_stop service=tasks status=ok");
    Ok(())
}
