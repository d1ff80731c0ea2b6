//! Static HTTP server for the generated feed artifact.
//!
//! Serves the feed file on a configurable port so RSS readers can subscribe
//! directly. Root-path requests resolve to the artifact; responses carry
//! permissive CORS headers and no-cache headers so readers always see the
//! latest run. The request loop runs on a blocking task and is unblocked on
//! Ctrl-C.

use crate::config::FeedConfig;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::{debug, info, instrument, warn};

const FEED_MIME: &str = "application/rss+xml";

/// Serve the feed artifact until Ctrl-C.
#[instrument(level = "info", skip_all, fields(port = config.port))]
pub async fn serve(config: FeedConfig) -> Result<(), Box<dyn Error>> {
    let addr = format!("0.0.0.0:{}", config.port);
    let server = Arc::new(Server::http(&addr).map_err(|e| -> Box<dyn Error> { e })?);
    info!(%addr, feed = %config.feed_file.display(), "Serving NPO RSS feed");

    let loop_handle = {
        let server = Arc::clone(&server);
        let config = config.clone();
        tokio::task::spawn_blocking(move || run_request_loop(&server, &config))
    };

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, stopping feed server");
    server.unblock();
    loop_handle.await?;
    Ok(())
}

fn run_request_loop(server: &Server, config: &FeedConfig) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config) {
            warn!(error = %e, "Request handling failed");
        }
    }
}

fn handle_request(request: Request, config: &FeedConfig) -> Result<(), Box<dyn Error>> {
    debug!(url = request.url(), method = %request.method(), "Incoming request");

    match resolve_request_path(request.url(), &config.feed_file) {
        Some(path) => match std::fs::read(&path) {
            Ok(body) => {
                let response = with_common_headers(Response::from_data(body))
                    .with_header(make_header("Content-Type", FEED_MIME));
                request.respond(response)?;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Feed artifact not readable");
                respond_not_found(request)?;
            }
        },
        None => respond_not_found(request)?,
    }
    Ok(())
}

/// Map a request URL to the feed artifact.
///
/// The root path and the artifact's own file name both resolve to the feed;
/// everything else is unknown.
fn resolve_request_path(url: &str, feed_file: &Path) -> Option<PathBuf> {
    let path = url.split('?').next().unwrap_or(url);
    if path == "/" {
        return Some(feed_file.to_path_buf());
    }

    let feed_name = feed_file.file_name()?;
    if Path::new(path).strip_prefix("/").ok()? == Path::new(feed_name) {
        return Some(feed_file.to_path_buf());
    }
    None
}

fn respond_not_found(request: Request) -> Result<(), Box<dyn Error>> {
    let response = with_common_headers(Response::from_data(b"404 Not Found".to_vec()))
        .with_status_code(StatusCode(404))
        .with_header(make_header("Content-Type", "text/plain"));
    request.respond(response)?;
    Ok(())
}

/// CORS and cache-control headers attached to every response.
fn with_common_headers<R>(response: Response<R>) -> Response<R>
where
    R: std::io::Read,
{
    response
        .with_header(make_header("Access-Control-Allow-Origin", "*"))
        .with_header(make_header("Access-Control-Allow-Methods", "GET"))
        .with_header(make_header(
            "Cache-Control",
            "no-store, no-cache, must-revalidate",
        ))
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
