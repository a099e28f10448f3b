//! Performance benchmarks for the attendance ledger.
//!
//! This benchmark suite covers the hot paths of recording and reporting:
//! - Per-diem calculation
//! - Entry validation including midnight rollover
//! - Summaries over growing record sets
//! - Month filtering
//! - A statistics request served from a CSV file
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tempfile::TempDir;

use attendance_ledger::api::{AppState, create_router};
use attendance_ledger::calculation::{calculate_diet, summarize, summarize_month, validate_entry};
use attendance_ledger::config::{ConfigLoader, DietRates, LedgerConfig};
use attendance_ledger::models::{AttendanceRecord, MonthKey, NewEntry, TransportMode};
use attendance_ledger::store::RecordStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates `count` records spread over twelve months of 2025.
fn create_records(count: usize) -> Vec<AttendanceRecord> {
    let modes = TransportMode::ALL;
    (0..count)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            AttendanceRecord {
                id: format!("{}.{:06}", 1_735_689_600 + i, i % 1_000_000),
                date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                worked_hours: Decimal::new(75, 1),
                transport_mode: modes[i % modes.len()],
                diet_amount: Decimal::from(166),
            }
        })
        .collect()
}

fn overnight_entry() -> NewEntry {
    NewEntry {
        date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
        start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
        worked_hours: Decimal::new(115, 1),
        transport_mode: TransportMode::Van,
        diet_eligible: true,
    }
}

/// Benchmark: Per-diem lookup across all tiers.
fn bench_calculate_diet(c: &mut Criterion) {
    let rates = DietRates::default();
    let durations: Vec<Decimal> = [3, 5, 8, 12, 15, 18, 22]
        .into_iter()
        .map(Decimal::from)
        .collect();

    c.bench_function("calculate_diet", |b| {
        b.iter(|| {
            for duration in &durations {
                black_box(calculate_diet(black_box(*duration), true, &rates));
            }
        })
    });
}

/// Benchmark: Validating an overnight entry into a record.
fn bench_validate_entry(c: &mut Criterion) {
    let rates = DietRates::default();
    let entry = overnight_entry();
    let created_at = Utc.timestamp_opt(1_760_781_600, 0).unwrap();

    c.bench_function("validate_entry_overnight", |b| {
        b.iter(|| black_box(validate_entry(black_box(&entry), &rates, created_at)))
    });
}

/// Benchmark: Summaries and month filtering over growing record sets.
fn bench_summaries(c: &mut Criterion) {
    let hours_per_day = Decimal::from(8);
    let october = MonthKey::new(2025, 10).unwrap();

    let mut group = c.benchmark_group("summaries");
    for count in [100usize, 1_000, 10_000] {
        let records = create_records(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("summarize", count), &records, |b, records| {
            b.iter(|| black_box(summarize(records, hours_per_day)))
        });
        group.bench_with_input(
            BenchmarkId::new("summarize_month", count),
            &records,
            |b, records| b.iter(|| black_box(summarize_month(records, october, hours_per_day))),
        );
    }
    group.finish();
}

/// Benchmark: GET /statistics over a 1000-record CSV file.
fn bench_statistics_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("records.csv"));
    store.save(&create_records(1_000)).unwrap();

    let state = AppState::with_store(ConfigLoader::from_config(LedgerConfig::default()), store);
    let router = create_router(state);

    c.bench_function("statistics_1000_records", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/statistics")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_diet,
    bench_validate_entry,
    bench_summaries,
    bench_statistics_endpoint,
);
criterion_main!(benches);
