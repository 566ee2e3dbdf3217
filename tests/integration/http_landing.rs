use std::{fs, net::TcpListener as StdTcpListener, process::Stdio, time::Duration};

use anyhow::{Context, Result};
use endpoint_mcp::tools::EndpointResponse;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, HOST},
    Client, StatusCode,
};
use serde_json::json;
use tempfile::{tempdir, TempDir};
use tokio::{
    process::{Child, Command},
    time::sleep,
};

use crate::common::BINARY_PATH;

fn free_port() -> Result<u16> {
    let listener = StdTcpListener::bind("127.0.0.1:0").context("failed to reserve a port")?;
    Ok(listener.local_addr()?.port())
}

fn client() -> Result<Client> {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .context("failed to build http client")
}

struct HttpServer {
    child: Child,
    base_url: String,
    _config_dir: TempDir,
}

async fn spawn_http_server(client: &Client) -> Result<HttpServer> {
    let port = free_port()?;
    let config_dir = tempdir()?;
    let config_path = config_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("[server]\nhost = \"127.0.0.1\"\nport = {port}\n\n[web]\ntrust_forwarded_headers = true\n"),
    )?;

    let child = Command::new(BINARY_PATH)
        .args(["--transport", "http", "--config"])
        .arg(&config_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .context("failed to spawn http server")?;

    let base_url = format!("http://127.0.0.1:{port}");
    for _ in 0..50 {
        if client.get(format!("{base_url}/api/endpoint")).send().await.is_ok() {
            return Ok(HttpServer {
                child,
                base_url,
                _config_dir: config_dir,
            });
        }
        sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("server did not start listening on port {port}")
}

#[tokio::test]
async fn landing_page_and_api_follow_request_host() -> Result<()> {
    let client = client()?;
    let mut server = spawn_http_server(&client).await?;

    let page = client
        .get(format!("{}/", server.base_url))
        .header(HOST, "LocalHost:3000")
        .send()
        .await?;
    assert_eq!(page.status(), StatusCode::OK);
    let body = page.text().await?;
    assert!(body.contains("<code>http://localhost:3000/mcp</code>"), "{body}");
    assert!(body.contains("MCP Endpoint URL"), "{body}");

    let api: EndpointResponse = client
        .get(format!("{}/api/endpoint", server.base_url))
        .header(HOST, "api.example.com:8443")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(api.url, "https://api.example.com:8443/mcp");
    assert!(api.available);

    let proxied: EndpointResponse = client
        .get(format!("{}/api/endpoint", server.base_url))
        .header("x-forwarded-host", "mcp.example.com:443")
        .header("x-forwarded-proto", "https")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(proxied.url, "https://mcp.example.com/mcp");

    server.child.kill().await?;
    Ok(())
}

#[tokio::test]
async fn advertised_mcp_path_accepts_initialize() -> Result<()> {
    let client = client()?;
    let mut server = spawn_http_server(&client).await?;

    let initialize = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "endpoint-mcp-tests", "version": "0.0.0" }
        }
    });
    let response = client
        .post(format!("{}/mcp", server.base_url))
        .header(ACCEPT, "application/json, text/event-stream")
        .header(CONTENT_TYPE, "application/json")
        .json(&initialize)
        .send()
        .await?;

    assert!(
        response.status().is_success(),
        "POST /mcp initialize should succeed, got {}",
        response.status()
    );
    assert!(
        response.headers().contains_key("mcp-session-id"),
        "stateful MCP service should assign a session: {:?}",
        response.headers()
    );
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("text/event-stream"),
        "unexpected content type {content_type}"
    );
    drop(response);

    let missing_accept = client
        .post(format!("{}/mcp", server.base_url))
        .header(CONTENT_TYPE, "application/json")
        .json(&initialize)
        .send()
        .await?;
    assert!(
        missing_accept.status().is_client_error(),
        "POST /mcp without an event-stream Accept should be rejected, got {}",
        missing_accept.status()
    );

    server.child.kill().await?;
    Ok(())
}
