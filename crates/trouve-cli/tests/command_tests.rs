// Rust guideline compliant 2026-02-06

//! End-to-end tests running the `ttp` binary against a local directory service.

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

fn worker_json(id: u64, first: &str, last: &str, category: &str, city: &str) -> Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "category": category,
        "city": city,
        "rating": "4.50",
        "phone": "0612345678",
        "whatsapp_number": if id == 1 { "212612345678" } else { "" },
        "is_active": true,
    })
}

async fn listing(State(hits): State<Arc<AtomicUsize>>, RawQuery(query): RawQuery) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    let query = query.unwrap_or_default();
    let all = vec![
        worker_json(1, "Youssef", "Idrissi", "Plombier", "Casablanca"),
        worker_json(2, "Fatima", "Alaoui", "Electricien", "Rabat"),
        worker_json(3, "Karim", "Bennani", "Plombier", "Marrakech"),
    ];
    let filtered: Vec<Value> = all
        .into_iter()
        .filter(|w| {
            !query.contains("category=Plombier") || w["category"] == "Plombier"
        })
        .collect();
    Json(Value::Array(filtered))
}

async fn detail(Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    match id {
        1 => Ok(Json(worker_json(1, "Youssef", "Idrissi", "Plombier", "Casablanca"))),
        2 => Ok(Json(worker_json(2, "Fatima", "Alaoui", "Electricien", "Rabat"))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

/// Starts the stand-in directory; the counter tracks listing requests.
async fn spawn_directory() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/workers/", get(listing))
        .route("/api/workers/:id/", get(detail))
        .with_state(Arc::clone(&hits));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), hits)
}

fn ttp(base_url: &str, args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("temp dir");
    Command::new(env!("CARGO_BIN_EXE_ttp"))
        .current_dir(temp_dir.path())
        .env_remove("TROUVE_BASE_URL")
        .env_remove("TROUVE_LISTING_TIMEOUT_MS")
        .env_remove("TROUVE_OUTPUT_FORMAT")
        .env("NO_COLOR", "1")
        .arg("--base-url")
        .arg(base_url)
        .args(args)
        .output()
        .expect("run ttp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ttp_list_json_outputs_envelope() {
    let (base, _) = spawn_directory().await;
    let output = ttp(&base, &["list", "--json"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["total"], 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ttp_list_filters_sorts_and_searches() {
    let (base, hits) = spawn_directory().await;
    let output = ttp(
        &base,
        &["list", "--category", "Plombier", "--sort", "name", "--format", "plain"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "3\tKarim Bennani\tPlombier\tMarrakech\n1\tYoussef Idrissi\tPlombier\tCasablanca\n\n"
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let output = ttp(&base, &["list", "--search", "RABAT", "--format", "plain"]);
    assert_eq!(stdout(&output), "2\tFatima Alaoui\tElectricien\tRabat\n\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ttp_distance_sort_requires_location() {
    let (base, hits) = spawn_directory().await;
    let output = ttp(&base, &["list", "--sort", "distance"]);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Nearest sort needs the current location (Location permission denied.)"),
        "stderr: {stderr}"
    );

    let output = ttp(
        &base,
        &["list", "--sort", "distance", "--lat", "33.57", "--lng", "-7.59", "--json"],
    );
    assert!(output.status.success());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ttp_categories_lists_all_first() {
    let (base, _) = spawn_directory().await;
    let output = ttp(&base, &["categories", "--format", "plain"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "all\nPlombier\nElectricien\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ttp_show_and_contact() {
    let (base, _) = spawn_directory().await;

    let output = ttp(&base, &["show", "1"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Youssef Idrissi"));
    assert!(text.contains("call, whatsapp"));

    let output = ttp(&base, &["whatsapp", "1", "--format", "plain"]);
    assert_eq!(stdout(&output), "whatsapp://send?phone=212612345678\n");

    let output = ttp(&base, &["call", "2", "--format", "plain"]);
    assert_eq!(stdout(&output), "tel:0612345678\n");

    let output = ttp(&base, &["whatsapp", "2", "--json"]);
    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_str(&stdout(&output)).expect("JSON error");
    assert_eq!(value["code"], "action_unavailable");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ttp_show_missing_worker_reports_detail_error() {
    let (base, _) = spawn_directory().await;
    let output = ttp(&base, &["show", "99", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_str(&stdout(&output)).expect("JSON error");
    assert_eq!(value["code"], "detail_unavailable");
    assert_eq!(value["retryable"], false);
    assert_eq!(
        value["message"],
        format!("Unable to load details. Check the connection to {base}.")
    );
}

#[test]
fn ttp_unreachable_service_exits_with_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let output = ttp(&base, &["list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unable to load workers"));
}

#[test]
fn ttp_rejects_invalid_base_url() {
    let output = ttp("ftp://example.org", &["list"]);
    assert!(!output.status.success());
}
