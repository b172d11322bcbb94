//! Performance benchmarks for the experience mod audit engine.
//!
//! This benchmark suite tracks audit throughput as loss runs grow:
//! - Single-claim audit
//! - 50-claim loss run
//! - Batch of 100 policies
//! - Claim-count scaling
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use emod_engine::api::{AppState, AuditRequest, create_router};
use emod_engine::config::StateRegistry;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with the shipped rating files.
fn create_test_state() -> AppState {
    let registry = StateRegistry::load("./config/states").expect("Failed to load state registry");
    AppState::new(registry)
}

/// Creates an audit request with a specified number of claims.
///
/// Claims cycle through a handful of accident dates so the frequency gate
/// sees realistic same-date groups.
fn create_request_with_claims(claim_count: usize) -> AuditRequest {
    let accident_dates = [
        "2025-04-10",
        "2025-05-22",
        "2025-06-15",
        "2025-08-03",
        "2025-09-27",
        "2025-11-14",
        "2026-01-08",
    ];

    let claims: Vec<serde_json::Value> = accident_dates
        .iter()
        .cycle()
        .take(claim_count)
        .enumerate()
        .map(|(i, date)| {
            serde_json::json!({
                "claim_number": format!("CLM-{:04}", i + 1),
                "accident_date": date,
                "claimant_name": format!("Claimant {:04}", i + 1),
                "injury_code": if i % 3 == 0 { "6" } else { "4" },
                "incurred_indemnity": if i % 3 == 0 { "0" } else { "15000" },
                "incurred_medical": "5000",
                "paid_indemnity": "0",
                "paid_medical": "5000",
                "reserves_indemnity": "0",
                "reserves_medical": "0",
                "status": "Closed"
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "policy": {
            "policy_number": "WC-BENCH-001",
            "state": "GA",
            "policy_effective_date": "2026-03-01",
            "policy_expiration_date": "2027-03-01",
            "anniversary_rating_date": "2026-03-01",
            "total_manual_premium": "250000",
            "total_standard_premium": "287500",
            "current_mod": "1.15"
        },
        "exposures": [
            {
                "class_code": "5403",
                "description": "Carpentry",
                "payroll": "1000000",
                "elr": "2.157",
                "d_ratio": "0.32",
                "overtime_earnings": "9000",
                "overtime_rate": "1.5"
            },
            {
                "class_code": "8810",
                "description": "Clerical Office Employees",
                "payroll": "300000",
                "elr": "0.05",
                "d_ratio": "0.40"
            }
        ],
        "claims": claims,
        "valuation_date": "2026-06-01"
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Benchmark: audit with a single claim.
fn bench_single_claim(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let request = create_request_with_claims(1);
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("single_claim_audit", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/audit")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: audit with a 50-claim loss run.
fn bench_loss_run_50_claims(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let request = create_request_with_claims(50);
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("loss_run_50_claims", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/audit")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 policies.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 policies with varying loss runs.
    let requests: Vec<String> = (0..100)
        .map(|i| {
            let mut request = create_request_with_claims(i % 10 + 1);
            request.policy.policy_number = format!("WC-BATCH-{:03}", i);
            serde_json::to_string(&request).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/audit")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: various claim counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for claim_count in [1, 10, 25, 50, 100].iter() {
        let router = create_router(state.clone());
        let request = create_request_with_claims(*claim_count);
        let body = serde_json::to_string(&request).unwrap();

        group.throughput(Throughput::Elements(*claim_count as u64));
        group.bench_with_input(
            BenchmarkId::new("claims", claim_count),
            claim_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/audit")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_claim,
    bench_loss_run_50_claims,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
