//! Preview server over a real socket.

use pixelco::config::SiteConfig;
use pixelco::serve::router;
use std::net::SocketAddr;

async fn spawn_server() -> SocketAddr {
    let app = router(&SiteConfig::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String, String) {
    let resp = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = resp.text().await.unwrap();
    (status, content_type, body)
}

#[tokio::test]
async fn known_routes_return_their_pages() {
    let addr = spawn_server().await;
    for (path, page) in [
        ("/", "home"),
        ("/about", "about"),
        ("/services", "services"),
        ("/contact", "contact"),
    ] {
        let (status, content_type, body) = get(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert!(content_type.starts_with("text/html"), "{path}: {content_type}");
        assert!(body.contains(&format!(r#"<main data-page="{page}">"#)), "{path}");
    }
}

#[tokio::test]
async fn directory_form_is_an_alias() {
    let addr = spawn_server().await;
    let (status, _, body) = get(addr, "/services/").await;
    assert_eq!(status, 200);
    assert!(body.contains(r#"<main data-page="services">"#));
}

#[tokio::test]
async fn unknown_path_is_404_with_not_found_page() {
    let addr = spawn_server().await;
    for path in ["/pricing", "/about/team", "/About"] {
        let (status, _, body) = get(addr, path).await;
        assert_eq!(status, 404, "{path}");
        assert!(body.contains(r#"<main data-page="not-found">"#), "{path}");
        assert!(body.contains(r#"<nav class="site-nav""#));
        assert!(body.contains(r#"<footer class="site-footer">"#));
    }
}
