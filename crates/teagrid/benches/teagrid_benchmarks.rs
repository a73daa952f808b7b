#![forbid(unsafe_code)]

//! Benchmarks for the grid pipeline and view.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use teagrid::prelude::*;

#[derive(Debug, Clone)]
struct Order {
    id: i64,
    customer: String,
    city: &'static str,
    total: f64,
}

fn build_orders(count: usize) -> Vec<Order> {
    let cities = ["Lisbon", "Oslo", "Quito", "Nairobi", "Osaka"];
    (0..count)
        .map(|i| Order {
            id: i as i64,
            customer: format!("Customer {:05}", (i * 7919) % 100_000),
            city: cities[i % cities.len()],
            total: ((i * 37) % 1000) as f64 / 4.0,
        })
        .collect()
}

fn build_columns() -> ColumnRegistry<Order> {
    ColumnRegistry::new(vec![
        Column::int("id", |o: &Order| o.id),
        Column::text("customer", |o: &Order| o.customer.clone()),
        Column::text("city", |o: &Order| o.city.to_string()),
        Column::float("total", |o: &Order| o.total),
    ])
    .expect("bench columns are distinct")
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("teagrid/filter");
    let columns = build_columns();

    for count in [100_usize, 1000, 10_000] {
        let orders = build_orders(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("all_columns", count), &orders, |b, orders| {
            b.iter(|| black_box(filter(orders, &columns, Some("osl"), None)));
        });
        group.bench_with_input(BenchmarkId::new("one_column", count), &orders, |b, orders| {
            b.iter(|| black_box(filter(orders, &columns, Some("osl"), Some("city"))));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("teagrid/sort");
    let columns = build_columns();

    for count in [100_usize, 1000, 10_000] {
        let orders = build_orders(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("text_desc", count), &orders, |b, orders| {
            let directive = SortDirective::Descending("customer".into());
            b.iter(|| black_box(sort(orders.iter().collect(), &columns, &directive)));
        });
        group.bench_with_input(BenchmarkId::new("float_asc", count), &orders, |b, orders| {
            let directive = SortDirective::Ascending("total".into());
            b.iter(|| black_box(sort(orders.iter().collect(), &columns, &directive)));
        });
    }

    group.finish();
}

fn bench_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("teagrid/page");
    let orders = build_orders(10_000);

    let mut grid = DataGrid::with_config(build_columns(), GridConfig::new().page_size(50));
    grid.update(Msg::sort_by("customer"));
    grid.update(Msg::filter_text("o"));
    grid.update(Msg::JumpToPage(20));

    group.bench_function("pipeline_10000", |b| b.iter(|| black_box(grid.page(&orders))));
    group.bench_function("view_10000", |b| b.iter(|| black_box(grid.view(&orders))));

    group.bench_function("update_sequence", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| {
                for msg in [
                    Msg::sort_by("city"),
                    Msg::ChangePage(1),
                    Msg::SetPageSize(25),
                    Msg::filter_text("lis"),
                ] {
                    black_box(grid.update(msg));
                }
                black_box(grid.navigation(&orders));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_sort, bench_page);
criterion_main!(benches);
