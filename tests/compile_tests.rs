//! Integration tests for compilation
//!
//! These tests use wiremock to serve a small documentation site and run
//! the full compile cycle end-to-end.

use std::time::{Duration, Instant};
use sumi_scroll::api;
use sumi_scroll::config::Config;
use sumi_scroll::crawler::{compile, Coordinator};
use sumi_scroll::ScrollError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sitemap(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .map(|u| format!("<url><loc>{}</loc></url>", u))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset>{}</urlset>"#,
        entries
    )
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_compile_main_page_503() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(Config::default()).unwrap();
    let response = api::compile(&coordinator, Some(&server.uri()), None).await;

    assert!(!response.success);
    assert!(response.content.is_none());
    assert!(response.metadata.is_none());
    assert_eq!(
        response.error.as_deref(),
        Some("HTTP 503: Service Unavailable")
    );
}

#[tokio::test]
async fn test_compile_main_page_failure_skips_pending_discovery() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<urlset></urlset>")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let err = compile(Config::default(), &server.uri(), &[])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_compile_document_layout() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Overview</title></head><body>
            <nav><a href="/docs/hidden">Hidden docs</a></nav>
            <h1>Overview</h1>
            <p>Widgets are <strong>small</strong> reusable parts.</p>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/sitemap.xml",
        &sitemap(&[format!("{}/api/widgets", base)]),
    )
    .await;
    mount_page(
        &server,
        "/api/widgets",
        r#"<html><head><title>Overview — Widgets API</title></head><body>
            <h2>Creating widgets</h2>
            <p>Call the constructor.</p>
            <h3>Options</h3>
            <pre>let widget = Widget::new();</pre>
        </body></html>"#,
    )
    .await;

    // Compile uses the sitemap only
    Mock::given(method("GET"))
        .and(path("/docs/hidden"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let document = compile(Config::default(), &base, &[]).await.unwrap();
    let content = &document.content;

    assert_eq!(document.title, "Overview");
    assert_eq!(document.total_pages, 2);
    assert_eq!(document.source_url, format!("{}/", base));

    assert!(content.starts_with("# Overview\n"));
    assert!(content.contains("> **Format**: Documentation compiled for AI consumption"));
    assert!(content.contains("> **Pages**: 2"));
    assert!(content.contains(&format!("> **Compiled**: {}", document.compiled_at)));

    assert!(content.contains("1. [Overview](#overview)"));
    assert!(content.contains("2. [Overview — Widgets API](#overview-widgets-api)"));
    assert!(content.contains("  - Creating widgets\n    - Options\n"));

    let overview = content.find("## Overview").unwrap();
    let widgets = content.find("## Widgets API").unwrap();
    assert!(overview < widgets);
    assert!(content.contains("Widgets are **small** reusable parts."));
    assert!(content.contains(&format!("*Source: {}/api/widgets*", base)));
    assert!(content.contains("### Code Examples\n\n```\nlet widget = Widget::new();\n```"));
}

#[tokio::test]
async fn test_compile_selected_pages_replace_sitemap() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        "<html><head><title>Docs</title></head><body><p>Home.</p></body></html>",
    )
    .await;
    mount_page(
        &server,
        "/guides/setup",
        "<html><head><title>Setup</title></head><body><p>Install it.</p></body></html>",
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(Config::default()).unwrap();
    let selected = vec!["/guides/setup".to_string()];
    let response = api::compile(&coordinator, Some(&base), Some(&selected)).await;

    assert!(response.success);
    let content = response.content.unwrap();
    assert!(content.contains("## Setup"));
    assert!(content.contains(&format!("*Source: {}/guides/setup*", base)));
    assert_eq!(response.metadata.unwrap().total_pages, 2);
}

#[tokio::test]
async fn test_compile_drops_failed_pages() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        "<html><head><title>Docs</title></head><body><p>Home.</p></body></html>",
    )
    .await;
    mount_page(
        &server,
        "/sitemap.xml",
        &sitemap(&[
            format!("{}/docs/missing", base),
            format!("{}/docs/present", base),
        ]),
    )
    .await;
    mount_page(
        &server,
        "/docs/present",
        "<html><head><title>Present</title></head><body><p>Here.</p></body></html>",
    )
    .await;

    let document = compile(Config::default(), &base, &[]).await.unwrap();

    assert_eq!(document.total_pages, 2);
    assert!(document.content.contains("## Present"));
    assert!(!document.content.contains("/docs/missing"));
}

#[tokio::test]
async fn test_compile_empty_site() {
    let server = MockServer::start().await;

    mount_page(&server, "/", "<html><body><script>app()</script></body></html>").await;

    let err = compile(Config::default(), &server.uri(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ScrollError::EmptyDocument { .. }));
}
