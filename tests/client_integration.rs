//! Integration tests driving the client against a mock control plane
//!
//! The mock is an axum server bound to an ephemeral port, speaking the
//! same wire format the client expects.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use nomad_client::builder::RawExecConfig;
use nomad_client::models::{Job, Task, TaskGroup};
use nomad_client::{ClientConfig, Error, NomadClient};

#[derive(Clone, Default)]
struct MockState {
    jobs: Arc<Mutex<HashMap<String, Job>>>,
    /// Token and region seen on the last /v1/nodes request
    seen_token: Arc<Mutex<Option<String>>>,
    seen_region: Arc<Mutex<Option<String>>>,
    error_hits: Arc<AtomicU32>,
}

async fn register_job(
    State(state): State<MockState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let mut job: Job = serde_json::from_value(body["Job"].clone()).unwrap();
    job.job_modify_index = Some(1);
    job.status = Some("pending".to_string());
    state
        .jobs
        .lock()
        .unwrap()
        .insert(job.id.clone(), job.clone());

    Json(json!({
        "EvalID": "eval-1",
        "EvalCreateIndex": 10,
        "Index": 10,
        "JobModifyIndex": 1,
        "Warnings": ""
    }))
}

async fn list_jobs(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let prefix = params.get("prefix").cloned().unwrap_or_default();
    let jobs: Vec<Job> = state
        .jobs
        .lock()
        .unwrap()
        .values()
        .filter(|j| j.id.starts_with(&prefix))
        .cloned()
        .collect();
    Json(jobs)
}

async fn read_job(State(state): State<MockState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.jobs.lock().unwrap().get(&id) {
        Some(job) => Json(job.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "job not found").into_response(),
    }
}

async fn stop_job(State(state): State<MockState>, Path(id): Path<String>) -> impl IntoResponse {
    state.jobs.lock().unwrap().remove(&id);
    Json(json!({"EvalID": "eval-2", "Index": 11}))
}

async fn list_nodes(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    *state.seen_token.lock().unwrap() = headers
        .get("X-Nomad-Token")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *state.seen_region.lock().unwrap() = params.get("region").cloned();
    Json(Vec::<nomad_client::models::Node>::new())
}

async fn read_deployment() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "deployment not found")
}

async fn bad_summary() -> impl IntoResponse {
    "this is not json"
}

async fn flaky_500(State(state): State<MockState>) -> impl IntoResponse {
    state.error_hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn start_mock() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/v1/jobs", get(list_jobs).post(register_job))
        .route("/v1/job/{id}", get(read_job).delete(stop_job))
        .route("/v1/job/{id}/summary", get(bad_summary))
        .route("/v1/nodes", get(list_nodes))
        .route("/v1/deployment/{id}", get(read_deployment))
        .route("/v1/allocations", get(flaky_500))
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

fn example_job(id: &str) -> Job {
    Job::builder(id, id)
        .job_type("service")
        .group(
            TaskGroup::builder("group")
                .count(1)
                .task(
                    Task::builder("serve")
                        .raw_exec(RawExecConfig::new("/usr/local/bin/serve"))
                        .build()
                        .unwrap(),
                )
                .build(),
        )
        .build()
}

#[tokio::test]
async fn test_job_crud_round_trip() {
    let (base_url, _state) = start_mock().await;
    let client = NomadClient::new(ClientConfig::new(base_url.as_str())).unwrap();

    let response = client.jobs().create(&example_job("web")).await.unwrap();
    assert_eq!(response.eval_id, "eval-1");
    assert_eq!(response.job_modify_index, Some(1));

    let jobs = client.jobs().list(None).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "web");

    let job = client.jobs().read("web").await.unwrap();
    assert_eq!(job.status.as_deref(), Some("pending"));
    assert_eq!(job.task_groups[0].tasks[0].driver, "raw_exec");

    client.jobs().stop("web", Some(true)).await.unwrap();
    let jobs = client.jobs().list(None).await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_list_with_prefix_filter() {
    let (base_url, _state) = start_mock().await;
    let client = NomadClient::new(ClientConfig::new(base_url.as_str())).unwrap();

    client.jobs().create(&example_job("web-a")).await.unwrap();
    client.jobs().create(&example_job("batch-b")).await.unwrap();

    let jobs = client.jobs().list(Some("web")).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "web-a");
}

#[tokio::test]
async fn test_token_header_and_region_param_forwarded() {
    let (base_url, state) = start_mock().await;
    let config = ClientConfig::new(base_url.as_str())
        .with_token("secret-token")
        .with_region("global");
    let client = NomadClient::new(config).unwrap();

    client.nodes().list(None).await.unwrap();

    assert_eq!(
        state.seen_token.lock().unwrap().as_deref(),
        Some("secret-token")
    );
    assert_eq!(state.seen_region.lock().unwrap().as_deref(), Some("global"));
}

#[tokio::test]
async fn test_missing_deployment_maps_to_none() {
    let (base_url, _state) = start_mock().await;
    let client = NomadClient::new(ClientConfig::new(base_url.as_str())).unwrap();

    let deployment = client
        .deployments()
        .read("no-such-id", None, None)
        .await
        .unwrap();
    assert!(deployment.is_none());
}

#[tokio::test]
async fn test_missing_job_is_an_error() {
    let (base_url, _state) = start_mock().await;
    let client = NomadClient::new(ClientConfig::new(base_url.as_str())).unwrap();

    let err = client.jobs().read("missing").await.unwrap_err();
    match err {
        Error::UnexpectedStatus { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "job not found");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_propagates_as_decode_error() {
    let (base_url, _state) = start_mock().await;
    let client = NomadClient::new(ClientConfig::new(base_url.as_str())).unwrap();

    let err = client.jobs().summary("anything").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let (base_url, state) = start_mock().await;
    // Three attempts allowed, but a received 500 is not a transport failure
    let config = ClientConfig::new(base_url.as_str())
        .with_retry(nomad_client::RetryPolicy::times(3))
        .with_timeout(std::time::Duration::from_secs(5));
    let client = NomadClient::new(config).unwrap();

    let err = client.allocations().list(None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedStatus { status: 500, .. }
    ));
    assert_eq!(state.error_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_requests_share_one_client() {
    let (base_url, _state) = start_mock().await;
    let client = NomadClient::new(ClientConfig::new(base_url.as_str())).unwrap();
    client.jobs().create(&example_job("web")).await.unwrap();

    let jobs_api = client.jobs();
    let nodes_api = client.nodes();
    let (jobs, nodes) =
        futures::join!(jobs_api.list(None), nodes_api.list(None));
    assert_eq!(jobs.unwrap().len(), 1);
    assert!(nodes.unwrap().is_empty());
}
