use crate::context::TestServer;
use futures::{stream, StreamExt};
use http::{Method, StatusCode};
use mockito::Matcher;
use relay_domain::Unit;
use serde_json::{json, Value};

const PARALLEL_REQUESTS: usize = 5;

fn run_payload() -> Value {
    json!({
        "event": "Team offsite in Lisbon",
        "main_point": "Three days of workshops"
    })
}

fn workflow_payload() -> Value {
    json!({
        "inputs": {
            "event": "Team offsite in Lisbon",
            "main_point": "Three days of workshops"
        },
        "response_mode": "blocking",
        "user": "web-user"
    })
}

#[tokio::test]
async fn test_run_returns_article() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .match_header("authorization", "Bearer app-test-key")
        .match_body(Matcher::Json(workflow_payload()))
        .with_status(200)
        .with_body(json!({ "data": { "outputs": "generated text" } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
        .await?;

    assert_eq!(res.code, StatusCode::OK);
    assert_eq!(res.data, json!({ "article": "generated text" }));
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_prefers_result_key() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .with_status(200)
        .with_body(
            json!({
                "data": {
                    "outputs": { "result": "R", "output": "O", "text": "T" }
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
        .await?;

    assert_eq!(res.code, StatusCode::OK);
    assert_eq!(res.data, json!({ "article": "R" }));
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_returns_raw_for_inconclusive_payload() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let upstream_body = json!({ "data": { "outputs": {} } });
    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .with_status(200)
        .with_body(upstream_body.to_string())
        .expect(1)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
        .await?;

    assert_eq!(res.code, StatusCode::OK);
    assert_eq!(res.data, json!({ "raw": upstream_body }));
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_accepts_plain_text_upstream() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .with_status(200)
        .with_body("plain text answer")
        .expect(1)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
        .await?;

    assert_eq!(res.code, StatusCode::OK);
    assert_eq!(res.data, json!({ "article": "plain text answer" }));
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_requires_event() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .expect(0)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>(
            "api/run",
            Method::POST,
            Some(&json!({ "main_point": "Three days of workshops" })),
        )
        .await?;

    assert_eq!(res.code, StatusCode::BAD_REQUEST);
    assert_eq!(res.data, json!({ "error": "Missing required field: event" }));
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_requires_main_point() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .expect(0)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>(
            "api/run",
            Method::POST,
            Some(&json!({ "event": "Team offsite in Lisbon" })),
        )
        .await?;

    assert_eq!(res.code, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.data,
        json!({ "error": "Missing required field: main_point" })
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_echoes_upstream_error() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .with_status(429)
        .with_body(json!({ "msg": "rate limited" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let res = server
        .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
        .await?;

    assert_eq!(res.code, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        res.data,
        json!({
            "error": "Failed to run workflow",
            "details": { "msg": "rate limited" },
        })
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_run_reports_unreachable_upstream() -> Result<Unit, anyhow::Error> {
    let server = TestServer::with_unreachable_upstream().await?;

    let res = server
        .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
        .await?;

    assert_eq!(res.code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.data["error"], json!("Failed to run workflow"));
    assert!(res.data["details"]["message"]
        .as_str()
        .is_some_and(|m| m.starts_with("Failed to send request")));

    Ok(())
}

#[tokio::test]
async fn test_each_request_hits_upstream() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .with_status(200)
        .with_body(json!({ "data": { "outputs": "again" } }).to_string())
        .expect(2)
        .create_async()
        .await;

    for _ in 0..2 {
        let res = server
            .send_request::<Value, Value>("api/run", Method::POST, Some(&run_payload()))
            .await?;

        assert_eq!(res.code, StatusCode::OK);
        assert_eq!(res.data, json!({ "article": "again" }));
    }

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_concurrent_requests() -> Result<Unit, anyhow::Error> {
    let mut server = TestServer::new().await?;

    let mock = server
        .mock_server
        .mock("POST", "/v1/workflows/run")
        .with_status(200)
        .with_body(json!({ "data": { "outputs": "generated text" } }).to_string())
        .expect(PARALLEL_REQUESTS)
        .create_async()
        .await;

    let payload = run_payload();
    let reqs = vec!["api/run"; PARALLEL_REQUESTS];

    let results = stream::iter(reqs)
        .map(|path| server.send_request::<Value, Value>(path, Method::POST, Some(&payload)))
        .buffer_unordered(PARALLEL_REQUESTS)
        .collect::<Vec<_>>()
        .await;

    assert_eq!(results.len(), PARALLEL_REQUESTS);
    for result in results {
        let res = result.expect("Failed to send request");

        assert_eq!(res.code, StatusCode::OK);
        assert_eq!(res.data, json!({ "article": "generated text" }));
    }

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<Unit, anyhow::Error> {
    let server = TestServer::new().await?;

    let res = server
        .send_request::<Value, Value>("health", Method::GET, None)
        .await?;

    assert_eq!(res.code, StatusCode::OK);
    assert_eq!(res.data, json!({ "ok": true }));

    Ok(())
}
