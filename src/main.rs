//! RouteCanal demo server.
//!
//! Serves three pages through the regex router:
//! - `/` index, listing the items
//! - `/about`
//! - `/items/<name>/`

use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use axum::response::{Html, IntoResponse};
use clap::Parser;
use tokio::net::TcpListener;

use routecanal::config::{load_config, CanalConfig};
use routecanal::observability::{logging, metrics};
use routecanal::routing::{HandlerResult, Params, Route, Router, RouterOptions};
use routecanal::{HttpServer, Shutdown};

const ITEMS: [&str; 4] = ["guitar", "bike", "rover", "jet"];

#[derive(Parser)]
#[command(name = "routecanal")]
#[command(about = "Regex request router demo server", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CanalConfig::default(),
    };

    logging::init_logging(&config.observability)?;
    tracing::info!(config = ?cli.config, "routecanal v0.1.0 starting");

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let router = build_router(RouterOptions::from(&config.routing))?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    HttpServer::new(config, router)
        .run(listener, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(options: RouterOptions) -> Result<Router, routecanal::RouteError> {
    let mut builder = Router::builder().options(options);

    builder
        .add_route(Route::new("/", index)?)
        .add_route(Route::new(r"/items/([a-z-0-9]*)/", items)?)
        .add_route(Route::new("/about", about)?);

    builder.build()
}

fn page(title: &str, content: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><title>{}</title></head><body><h1>{}</h1>{}</body></html>",
        title, title, content
    ))
}

async fn index(_req: Request<Body>, _params: Params) -> HandlerResult {
    let links = ITEMS
        .iter()
        .map(|item| format!("<li><a href=\"/items/{0}/\">{0}</a></li>", item))
        .collect::<Vec<_>>()
        .join("");

    Ok(page("RouteCanal", &format!("<ul>{}</ul><p><a href=\"/about\">About</a></p>", links)).into_response())
}

async fn about(_req: Request<Body>, _params: Params) -> HandlerResult {
    Ok(page("RouteCanal", "<p>A regular-expression request router.</p>").into_response())
}

async fn items(_req: Request<Body>, params: Params) -> HandlerResult {
    tracing::debug!(params = ?params.to_map(), "Items handler");

    match params.get(1) {
        Some(name) if ITEMS.contains(&name) => {
            Ok(page("RouteCanal", &format!("<p>Item: {}</p>", name)).into_response())
        }
        Some(name) => Err(format!("unknown item `{}`", name).into()),
        None => Err("missing item name".into()),
    }
}
