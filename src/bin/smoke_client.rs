//! Sequential smoke test against a running clothing-inventory server.
//!
//! Start the server, then: `cargo run --bin smoke-client`. Each step prints
//! the status code and response body so the whole contract can be eyeballed.

use anyhow::Result;
use reqwest::{Client, Method, StatusCode};
use serde_json::json;

async fn call(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<serde_json::Value>,
) -> Result<(StatusCode, serde_json::Value)> {
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let response = request.send().await?;
    let status = response.status();
    let body = response.json().await?;
    Ok((status, body))
}

fn print_step(operation: &str, status: StatusCode, body: &serde_json::Value) {
    println!("\n[{}]", operation.to_uppercase());
    println!("Status Code: {}", status.as_u16());
    println!("Response Body:");
    println!("{}", serde_json::to_string_pretty(body).unwrap_or_default());
    println!("{}", "-".repeat(80));
}

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::var("CLOTHING_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let client = Client::new();

    println!("{}", "=".repeat(50));
    println!("Clothing Inventory Test Client");
    println!("{}", "=".repeat(50));

    let test_clothing = json!({
        "barcode": "CLTH-2023-001",
        "category": "T-Shirt",
        "size": "M",
        "color": "Blue",
    });

    let (status, body) = call(&client, Method::GET, &format!("{base_url}/"), None).await?;
    print_step("API Info", status, &body);

    let (status, body) =
        call(&client, Method::GET, &format!("{base_url}/clothing"), None).await?;
    print_step("GET Clothing List (Empty)", status, &body);

    let (status, body) = call(
        &client,
        Method::POST,
        &format!("{base_url}/clothing"),
        Some(test_clothing),
    )
    .await?;
    print_step("ADD Clothing", status, &body);

    let (status, body) = call(
        &client,
        Method::GET,
        &format!("{base_url}/clothing/CLTH-2023-001"),
        None,
    )
    .await?;
    print_step("GET Existing Clothing", status, &body);

    let (status, body) = call(
        &client,
        Method::GET,
        &format!("{base_url}/clothing/INVALID-BARCODE-123"),
        None,
    )
    .await?;
    print_step("GET Non-existent Clothing", status, &body);

    let (status, body) = call(
        &client,
        Method::DELETE,
        &format!("{base_url}/clothing/CLTH-2023-001"),
        None,
    )
    .await?;
    print_step("DELETE Clothing", status, &body);

    let (status, body) = call(
        &client,
        Method::GET,
        &format!("{base_url}/clothing/CLTH-2023-001"),
        None,
    )
    .await?;
    print_step("GET Deleted Clothing", status, &body);

    Ok(())
}
