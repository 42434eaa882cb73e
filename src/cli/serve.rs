//! Serve command: local preview server.
//!
//! Binds first so the port is claimed immediately, runs the initial
//! build on a background thread, and answers with a refresh stub until
//! the build lands. Static files come straight off the output
//! directory; the one dynamic route is the subscribe endpoint.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::config::{SiteConfig, cfg};
use crate::core::{is_serving, is_shutdown, register_server, set_serving};
use crate::subscribe::{self, RateLimiter};
use crate::utils::mime;
use crate::log;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Served while the initial build is still running.
const BUILDING_HTML: &str = "<!doctype html>\n<html><head><meta charset=\"utf-8\">\
<meta http-equiv=\"refresh\" content=\"1\"><title>building…</title></head>\
<body><p>building…</p></body></html>\n";

pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, _shutdown_rx) = crossbeam::channel::unbounded::<()>();
    register_server(Arc::clone(&server), shutdown_tx);
    log!("serve"; "http://{}", addr);

    // Initial build in the background; requests get the refresh stub
    // until it completes
    let build_handle = thread::spawn(|| {
        let config = cfg();
        let built = super::build::build_site(&config, false).and_then(|store| {
            // No-ops unless enabled via --rss / --sitemap
            crate::seo::feed::build_feeds(&config, &store)?;
            crate::seo::sitemap::build_sitemap(&config, &store)?;
            Ok(())
        });
        match built {
            Ok(()) => set_serving(),
            Err(e) => log!("error"; "initial build failed: {e:#}"),
        }
    });

    run_request_loop(&server);

    let _ = build_handle.join();
    Ok(())
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(interface: std::net::IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

fn run_request_loop(server: &Server) {
    let limiter = Arc::new(subscribe::make_limiter(&cfg()));

    // Small pool so a slow client can't block the rest
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let config = cfg();
        let limiter = Arc::clone(&limiter);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config, &limiter) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

fn handle_request(request: Request, config: &SiteConfig, limiter: &RateLimiter) -> Result<()> {
    if is_shutdown() {
        return respond(request, 503, mime::types::PLAIN, b"503 Service Unavailable".to_vec());
    }

    if request.method() == &Method::Post && request.url() == "/api/subscribe" {
        if !config.serve.subscribe.enable {
            return respond(request, 404, mime::types::JSON, br#"{"error":"Not found"}"#.to_vec());
        }
        return subscribe::handle(request, config, limiter);
    }

    if !is_serving() {
        return respond(
            request,
            503,
            mime::types::HTML,
            BUILDING_HTML.as_bytes().to_vec(),
        );
    }

    if let Some(path) = resolve_path(request.url(), &config.build.output) {
        return respond_file(request, &path);
    }
    respond_not_found(request, config)
}

/// Resolve URL to filesystem path, handling index.html for directories.
fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    if clean.contains("..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to verify the path stays under the output directory,
    // symlinks included
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }
    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }
    None
}

/// Normalize URL: decode, strip query string, trim slashes.
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}

fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if request.method() == &Method::Head {
        let response =
            Response::empty(StatusCode(200)).with_header(header("Content-Type", content_type));
        return request.respond(response).map_err(Into::into);
    }

    let body = fs::read(path)?;
    respond(request, 200, content_type, body)
}

/// 404 with the site's own 404.html when the build has produced one.
fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    let custom = config.build.output.join("404.html");
    if let Ok(body) = fs::read(&custom) {
        return respond(request, 404, mime::types::HTML, body);
    }
    respond(request, 404, mime::types::PLAIN, b"404 Not Found".to_vec())
}

fn respond(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
