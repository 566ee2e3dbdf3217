use std::time::Duration;

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
};
use serde_json::json;
use tokio::time::timeout;

use crate::common::spawn_server_process;

#[tokio::test]
async fn inspector_style_spawn_lists_tools() -> Result<()> {
    let (mut child, transport, stderr_task) = spawn_server_process().await?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let list = client.list_tools(None).await?;
    assert!(
        list.tools
            .iter()
            .any(|tool| tool.name.as_ref() == "derive_mcp_endpoint"),
        "list_tools should include derive_mcp_endpoint: {:?}",
        list.tools
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[tokio::test]
async fn derive_tool_returns_structured_endpoint() -> Result<()> {
    let (mut child, transport, stderr_task) = spawn_server_process().await?;
    let client = serve_client(ClientInfo::default(), transport).await?;

    let result = client
        .call_tool(CallToolRequestParam {
            name: "derive_mcp_endpoint".into(),
            arguments: json!({ "hostname": "localhost", "port": "3000" })
                .as_object()
                .cloned(),
        })
        .await?;
    let structured = result
        .structured_content
        .expect("tool should return structured content");
    assert_eq!(structured["url"], "http://localhost:3000/mcp");
    assert_eq!(structured["available"], true);

    let result = client
        .call_tool(CallToolRequestParam {
            name: "derive_mcp_endpoint".into(),
            arguments: json!({ "hostname": "", "port": "3000" }).as_object().cloned(),
        })
        .await?;
    let structured = result
        .structured_content
        .expect("tool should return structured content");
    assert_eq!(structured["url"], "");
    assert_eq!(structured["available"], false);

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(status.success(), "expected clean server shutdown");
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}
