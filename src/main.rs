//! petition server binary.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use petition::handlers::{self, PublicDir};
use petition::middleware::RequestLogging;
use petition::{Config, Gateway, SignatureRepository};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let gateway = Gateway::connect(&config.database)
        .await
        .context("connecting to the database")?;
    gateway
        .ensure_schema()
        .await
        .context("creating the signatures table")?;

    let store = web::Data::new(SignatureRepository::new(gateway.clone()));
    let public = web::Data::new(PublicDir(config.public_dir.clone()));

    let (host, port) = config.bind_addr();
    info!(%host, port, environment = ?config.environment, "Server running at http://{host}:{port}/");

    let result = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(public.clone())
            .wrap(RequestLogging)
            .configure(handlers::configure::<SignatureRepository>)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("binding {host}:{port}"))?
    .run()
    .await;

    gateway.close().await;
    result.context("server error")
}
