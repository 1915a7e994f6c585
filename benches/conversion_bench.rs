//! Schema conversion performance benchmarks

use casedev::models::agents::*;
use casedev::models::compute::{DeploymentTarget, VariableSetParams};
use casedev::models::vault::UploadParams;
use casedev::schema::{hydrate, hydrate_value, normalize_item, Item};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

/// Agent creation with every optional field set
fn create_full_agent_params() -> AgentCreateParams {
    AgentCreateParams::new("Review the attached lease for renewal terms", "Lease Reviewer")
        .with_description("Flags auto-renewal and termination clauses")
        .with_model("anthropic/claude-sonnet-4")
        .with_vault_ids(["v_leases", "v_templates"])
        .with_enabled_tools(["vault_search", "web_search"])
        .with_sandbox(AgentSandbox::new().with_cpu(2).with_memory_mib(4096))
        .with_metadata(json!({"team": "real-estate", "priority": 2}))
}

/// Run details payload with `steps` recorded steps
fn create_run_details(steps: usize) -> Value {
    let steps: Vec<Value> = (0..steps)
        .map(|i| {
            json!({
                "type": if i % 2 == 0 { "tool_call" } else { "text" },
                "content": format!("step {}", i),
                "toolName": "vault_search",
                "toolInput": {"query": "renewal", "topK": 5},
                "timestamp": "2024-05-01T12:00:00Z",
            })
        })
        .collect();

    json!({
        "id": "run_1",
        "agentId": "ag_1",
        "status": "completed",
        "prompt": "Summarize the renewal terms",
        "output": "The lease renews annually unless terminated 60 days prior.",
        "steps": steps,
        "usage": {"inputTokens": 12000, "outputTokens": 800, "toolCalls": 3},
        "startedAt": "2024-05-01T12:00:00Z",
        "completedAt": "2024-05-01T12:01:30Z",
    })
}

fn bench_normalize_typed(c: &mut Criterion) {
    let params = Item::from(create_full_agent_params());

    c.bench_function("normalize_typed_agent", |b| {
        b.iter(|| normalize_item(black_box(&params)).unwrap())
    });
}

fn bench_normalize_raw(c: &mut Criterion) {
    let params = Item::<AgentCreateParams>::raw(json!({
        "instructions": "Review the attached lease for renewal terms",
        "name": "Lease Reviewer",
        "vaultIDs": ["v_leases", "v_templates"],
        "sandbox": {"cpu": 2, "memoryMiB": 4096},
        "metadata": {"team": "real-estate"},
    }));

    c.bench_function("normalize_raw_agent", |b| {
        b.iter(|| normalize_item(black_box(&params)).unwrap())
    });
}

fn bench_mixed_list(c: &mut Criterion) {
    let params = Item::from(VariableSetParams::new("DATABASE_URL", "postgres://db").with_target([
        Item::from(DeploymentTarget::PRODUCTION),
        Item::raw(json!({"value": "preview"})),
        Item::from(DeploymentTarget::DEVELOPMENT),
    ]));

    c.bench_function("normalize_mixed_target_list", |b| {
        b.iter(|| normalize_item(black_box(&params)).unwrap())
    });
}

fn bench_tag_slots(c: &mut Criterion) {
    let mut upload = UploadParams::new("exhibit.pdf", "application/pdf");
    for slot in 1..=12 {
        upload = upload.with_tag(slot, format!("tag-{}", slot)).unwrap();
    }
    let params = Item::from(upload);

    c.bench_function("normalize_upload_all_tags", |b| {
        b.iter(|| normalize_item(black_box(&params)).unwrap())
    });
}

fn bench_hydrate_status(c: &mut Criterion) {
    let body = br#"{"id":"r1","status":"running","durationMs":120,"startedAt":"2024-05-01T12:00:00Z"}"#;

    c.bench_function("hydrate_run_status", |b| {
        b.iter(|| hydrate::<RunGetStatusResponse>(black_box(body)).unwrap())
    });
}

fn bench_step_counts(c: &mut Criterion) {
    let step_counts = vec![1, 10, 100, 1000];

    let mut group = c.benchmark_group("hydrate_run_details");

    for count in step_counts.iter() {
        let payload = create_run_details(*count);

        group.bench_with_input(BenchmarkId::new("steps", count), count, |b, _| {
            b.iter(|| hydrate_value::<RunGetDetailsResponse>(black_box(payload.clone())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_typed,
    bench_normalize_raw,
    bench_mixed_list,
    bench_tag_slots,
    bench_hydrate_status,
    bench_step_counts
);

criterion_main!(benches);
