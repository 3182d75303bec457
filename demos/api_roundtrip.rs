//! Server/client round trip through the `ApiResponse` wire format.
//!
//! Run with: `cargo run --example api_roundtrip --features serde`

use std::collections::BTreeMap;

use guarded_returns::{ApiError, ApiResponse, Payload, consume_api_response};

type Data = BTreeMap<String, String>;

/// Server side: package a handler result for the client
fn route_handler(success: bool) -> Result<String, serde_json::Error> {
    let response: ApiResponse<Data> = if success {
        let mut data = Data::new();
        data.insert("some".to_string(), "data".to_string());
        ApiResponse::success(Some(data))
    } else {
        ApiResponse::failure(ApiError::new("Something went wrong"))
    };
    serde_json::to_string(&response)
}

/// Client side: decode the body and consume it into an outcome
fn fetch_data(body: &str) -> Result<(), serde_json::Error> {
    let response: ApiResponse<Data> = serde_json::from_str(body)?;
    let outcome = consume_api_response(response);

    match outcome.unwrap() {
        Payload::Value(data) => println!("  data  -> {:?}", data.coalesce_ref(None)),
        Payload::Error(error) => println!("  error -> {} ({})", error.message(), error.name()),
    }
    Ok(())
}

fn main() -> Result<(), serde_json::Error> {
    for success in [true, false] {
        let body = route_handler(success)?;
        println!("wire: {body}");
        fetch_data(&body)?;
    }

    // A body with neither a success flag nor an error degrades instead of failing
    println!("wire: {{\"success\": false}}");
    fetch_data(r#"{"success": false}"#)?;

    Ok(())
}
