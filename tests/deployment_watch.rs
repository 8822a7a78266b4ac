//! Integration tests for the deployment watcher
//!
//! The mock serves a job whose deployment starts unhealthy and turns
//! healthy after a few probes, plus jobs whose rollouts fail outright or
//! never produce a deployment.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use nomad_client::{ClientConfig, NomadClient};

#[derive(Clone, Default)]
struct MockState {
    probes: Arc<AtomicU32>,
}

/// Probes before the "recovering" job's deployment reports healthy
const PROBES_UNTIL_HEALTHY: u32 = 3;

async fn read_job(Path(id): Path<String>) -> impl IntoResponse {
    Json(json!({
        "ID": id,
        "Name": id,
        "Datacenters": ["dc1"],
        "TaskGroups": [],
        "Status": "running",
        "JobModifyIndex": 7
    }))
}

fn deployment_body(status: &str, healthy: u64, unhealthy: u64) -> serde_json::Value {
    json!({
        "ID": "dep-1",
        "JobID": "job",
        "JobSpecModifyIndex": 7,
        "Status": status,
        "TaskGroups": {
            "group": {
                "DesiredTotal": healthy + unhealthy,
                "PlacedAllocs": healthy + unhealthy,
                "HealthyAllocs": healthy,
                "UnhealthyAllocs": unhealthy
            }
        }
    })
}

async fn job_deployment(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match id.as_str() {
        "recovering" => {
            let probe = state.probes.fetch_add(1, Ordering::SeqCst) + 1;
            if probe < PROBES_UNTIL_HEALTHY {
                Json(deployment_body("running", 1, 1))
            } else {
                Json(deployment_body("successful", 2, 0))
            }
        }
        "broken" => Json(deployment_body("failed", 0, 2)),
        "stale" => {
            // Deployment from an older submission; spec index doesn't match
            let mut body = deployment_body("successful", 2, 0);
            body["JobSpecModifyIndex"] = json!(3);
            Json(body)
        }
        _ => Json(json!(null)),
    }
}

async fn start_mock() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/v1/job/{id}", get(read_job))
        .route("/v1/job/{id}/deployment", get(job_deployment))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

fn fast_client(base_url: &str) -> NomadClient {
    let config = ClientConfig::new(base_url).with_poll_interval(Duration::from_millis(20));
    NomadClient::new(config).unwrap()
}

#[tokio::test]
async fn test_watcher_waits_for_health() {
    let (base_url, state) = start_mock().await;
    let client = fast_client(&base_url);

    let deployment = client
        .jobs()
        .await_healthy_deployment("recovering", Duration::from_secs(5))
        .await
        .unwrap()
        .expect("deployment should become healthy");

    assert_eq!(deployment.status.as_deref(), Some("successful"));
    assert!(deployment.is_healthy());
    assert_eq!(state.probes.load(Ordering::SeqCst), PROBES_UNTIL_HEALTHY);
}

#[tokio::test]
async fn test_watcher_stops_on_terminal_failure() {
    let (base_url, _state) = start_mock().await;
    let client = fast_client(&base_url);

    let started = Instant::now();
    let deployment = client
        .jobs()
        .await_healthy_deployment("broken", Duration::from_secs(30))
        .await
        .unwrap();

    assert!(deployment.is_none());
    // A failed rollout ends the watch without burning the wait budget
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_watcher_times_out_without_deployment() {
    let (base_url, _state) = start_mock().await;
    let client = fast_client(&base_url);

    let deployment = client
        .jobs()
        .await_healthy_deployment("absent", Duration::from_millis(100))
        .await
        .unwrap();
    assert!(deployment.is_none());
}

#[tokio::test]
async fn test_watcher_ignores_stale_deployment() {
    let (base_url, _state) = start_mock().await;
    let client = fast_client(&base_url);

    // Healthy deployment, but for an older job spec: never a match
    let deployment = client
        .jobs()
        .await_healthy_deployment("stale", Duration::from_millis(100))
        .await
        .unwrap();
    assert!(deployment.is_none());
}

#[tokio::test]
async fn test_watcher_zero_wait_probes_once() {
    let (base_url, state) = start_mock().await;
    let client = fast_client(&base_url);

    let deployment = client
        .jobs()
        .await_healthy_deployment("recovering", Duration::ZERO)
        .await
        .unwrap();

    // First probe sees the unhealthy rollout and the zero budget ends it
    assert!(deployment.is_none());
    assert_eq!(state.probes.load(Ordering::SeqCst), 1);
}
