//! Local preview server.
//!
//! Pre-renders the whole site once at startup and serves it from memory.
//! Each route answers at its path and at its directory form (`/about/`),
//! mirroring what a static file server does with the build output; every
//! other path gets the not-found page with status 404.

use crate::config::SiteConfig;
use crate::generate::render_site;
use crate::route::Location;
use axum::Router;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use thiserror::Error;
use tower_http::trace::TraceLayer;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the router for the rendered site.
pub fn router(config: &SiteConfig) -> Router {
    let mut router = Router::new();
    let mut not_found = Bytes::new();

    for page in render_site(config) {
        let body = Bytes::from(page.html);
        match page.location {
            Location::Route(route) => {
                let handler = move || {
                    let body = body.clone();
                    async move { Html(body) }
                };
                router = router.route(route.path(), get(handler.clone()));
                if route.path() != "/" {
                    router = router.route(&format!("{}/", route.path()), get(handler));
                }
            }
            Location::Unknown(_) => not_found = body,
        }
    }

    router
        .fallback(move || {
            let body = not_found.clone();
            async move { (StatusCode::NOT_FOUND, Html(body)) }
        })
        .layer(TraceLayer::new_for_http())
}

/// Serve the site on `host:port` until Ctrl-C.
pub async fn serve(config: &SiteConfig, host: &str, port: u16) -> Result<(), ServeError> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "preview server listening");
    println!("Serving on http://{addr} (Ctrl-C to stop)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!(%err, "could not install Ctrl-C handler");
                std::future::pending::<()>().await;
            }
        })
        .await?;
    tracing::info!("preview server stopped");
    Ok(())
}
