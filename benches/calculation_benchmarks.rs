//! Performance benchmarks for the staff cost engine.
//!
//! Covers the calculation core directly (single employee, scenario
//! evaluation at several staff sizes, comparison) and the HTTP path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use staff_cost_engine::api::{AppState, create_router};
use staff_cost_engine::config::PolicyRates;
use staff_cost_engine::models::{Employee, Role};
use staff_cost_engine::scenario::Scenario;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const CATEGORIES: [&str; 4] = ["Clerk", "Cook", "Cleaner", "Manager"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds `count` employees, each with a closed role and an open-ended one.
fn create_staff(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let hours = Decimal::from(10 + (i % 30) as i64);
            let rate = Decimal::new(900 + (i % 500) as i64, 2);

            Employee::new(format!("employee_{:05}", i), i % 5 != 0)
                .with_role(
                    Role::new(date(2019, 1, 1), Some(date(2020, 2, 1)), hours, rate, category)
                        .unwrap(),
                )
                .with_role(
                    Role::new(
                        date(2020, 3, 1),
                        None,
                        Decimal::from(8),
                        rate + Decimal::ONE,
                        CATEGORIES[(i + 1) % CATEGORIES.len()],
                    )
                    .unwrap(),
                )
        })
        .collect()
}

fn bench_single_employee(c: &mut Criterion) {
    let policy = PolicyRates::default();
    let staff = create_staff(1);
    let on = date(2020, 1, 17);

    c.bench_function("compute_pay_single_employee", |b| {
        b.iter(|| black_box(staff[0].compute_pay(black_box(on), &policy)))
    });
}

fn bench_scenario_evaluation(c: &mut Criterion) {
    let policy = PolicyRates::default();
    let mut group = c.benchmark_group("scenario_evaluation");

    for size in [10usize, 100, 1000] {
        let staff = create_staff(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &staff, |b, staff| {
            b.iter(|| {
                let mut scenario = Scenario::new("bench", staff, date(2020, 1, 17));
                scenario.evaluate(&policy).unwrap();
                black_box(scenario.total_cost())
            })
        });
    }

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let policy = PolicyRates::default();
    let staff = create_staff(1000);

    let mut base = Scenario::new("January", &staff, date(2020, 1, 17));
    let mut april = Scenario::new("April", &staff, date(2020, 4, 2));
    base.evaluate(&policy).unwrap();
    april.evaluate(&policy).unwrap();

    let mut group = c.benchmark_group("comparison");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("compare_1000", |b| {
        b.iter(|| black_box(april.compare_with(&base).unwrap()))
    });
    group.finish();
}

fn bench_api_compare(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(PolicyRates::default());

    let body = serde_json::json!({
        "staff": create_staff(100),
        "base": { "name": "January", "date": "2020-01-17" },
        "scenario": { "name": "April", "date": "2020-04-02" }
    })
    .to_string();

    let mut group = c.benchmark_group("api");
    group.sample_size(20);
    group.bench_function("compare_100_staff", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/compare")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_employee,
    bench_scenario_evaluation,
    bench_comparison,
    bench_api_compare,
);
criterion_main!(benches);
