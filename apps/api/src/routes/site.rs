//! Crawler files whose URLs depend on the requesting host.

use axum::{
    http::{header, HeaderMap},
    response::IntoResponse,
};

/// `<scheme>://<host>` for the current request. Honors `X-Forwarded-Proto` behind a proxy.
fn request_origin(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}

/// GET /robots.txt
pub async fn robots_handler(headers: HeaderMap) -> impl IntoResponse {
    let origin = request_origin(&headers);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("User-agent: *\nAllow: /\nSitemap: {origin}/sitemap.xml\n"),
    )
}

/// GET /sitemap.xml
pub async fn sitemap_handler(headers: HeaderMap) -> impl IntoResponse {
    let origin = request_origin(&headers);
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{origin}/</loc>
    <changefreq>weekly</changefreq>
    <priority>0.8</priority>
  </url>
</urlset>"#
    );
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
