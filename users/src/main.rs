use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::{error, info};
use taskdesk_shared::logging::init_logging;
use taskdesk_users::config::Settings;
use taskdesk_users::{build_app, db, PgUserRepository, UserService};

fn startup_error(stage: &str, err: impl std::fmt::Display) -> io::Error {
    error!("event={stage} status=error error={err}");
    io::Error::other(err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging();

    let settings = Settings::new().map_err(|err| startup_error("config_load", err))?;

    let pool = db::connect(&settings.database)
        .await
        .map_err(|err| startup_error("db_connect", err))?;
    db::migrate(&pool)
        .await
        .map_err(|err| startup_error("db_migrate", err))?;

    let repo = PgUserRepository::new(pool.clone(), settings.database.exec_timeout());
    let service = web::Data::new(UserService::new(Arc::new(repo)));
    let api_key = settings.auth.api_key.clone();
    let (host, port) = settings.server.bind_address();

    info!("event=server_start service=users host={host} port={port}");

    HttpServer::new(move || build_app(service.clone(), &api_key))
        .client_request_timeout(settings.server.request_timeout())
        .shutdown_timeout(settings.server.shutdown_timeout_secs)
        .bind((host, port))?
        .run()
        .await?;

    pool.close().await;
    info!("event=server_stop service=users status=ok");
    Ok(())
}
