use std::process::Command;

use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_cli_prints_usage() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-console");

    let output = Command::new(binary_path)
        .arg("--help")
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with("Usage: transaction-console"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_filters_before_fetching() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-console");

    for arg in ["page=0", "limit=30", "colour=red", "type", "dateFrom=31/01/2024"] {
        let output = Command::new(binary_path)
            .arg(arg)
            .output()?;

        assert_eq!(output.status.code(), Some(1), "argument [{arg}] was accepted");
        assert!(output.stdout.is_empty());
    }

    Ok(())
}

//NOTE: the binary blocks this thread, so the mock server needs a second worker
#[tokio::test(flavor = "multi_thread")]
async fn test_cli_writes_header_for_empty_page() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "total": 0, "data": [] })))
        .mount(&server)
        .await;

    let binary_path = env!("CARGO_BIN_EXE_transaction-console");

    let output = Command::new(binary_path)
        .env("TRANSACTIONS_API_URL", server.uri())
        .arg("type=bonus")
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "id,user_id,user_name,phone,type,amount,status,date,reference,message,investment_id\n");

    Ok(())
}
