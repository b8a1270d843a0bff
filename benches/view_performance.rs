use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use veluxe::events::{ScriptedEventsBackend, network_runtime};
use veluxe::{AppShell, Event, EventFeedController, EventId, GaugeGeometry, Tab, ViewRegistry};

fn create_sample_event(n: usize) -> Event {
    Event {
        id: EventId::Number(n as i64),
        title: format!("Owner Meetup #{n}"),
        description: "Monthly owners meetup and factory tour".to_string(),
        event_type: if n % 2 == 0 { "exclusive" } else { "track-day" }.to_string(),
        date: "2024-08-05".to_string(),
        location: "Fremont, CA".to_string(),
        max_attendees: 100,
        current_attendees: (n % 100) as u32,
        brands_filter: vec!["Tesla".to_string(), "Porsche".to_string()],
    }
}

fn bench_gauge_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauge_geometry");

    group.bench_function("single_gauge", |b| {
        b.iter(|| black_box(GaugeGeometry::with_default_size(black_box(72.))));
    });

    group.bench_function("full_percentage_sweep", |b| {
        b.iter(|| {
            for pct in 0..=100 {
                black_box(GaugeGeometry::new(pct as f64, 80.).sweep_angle());
            }
        });
    });

    group.finish();
}

fn bench_view_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_registry");

    let rt = network_runtime().unwrap();
    let backend =
        ScriptedEventsBackend::new().reply_events((0..200).map(create_sample_event).collect());
    let mut shell = AppShell::new(EventFeedController::new(
        backend,
        rt.handle().clone(),
        "demo-user",
    ));
    shell.start();
    shell
        .state_mut()
        .feed
        .wait_until_idle(Duration::from_secs(5));
    let state = shell.state();

    group.bench_function("render_every_tab", |b| {
        b.iter(|| {
            let data = state.view_data();
            for descriptor in ViewRegistry::tabs() {
                black_box(ViewRegistry::render(descriptor.id, &data));
            }
        });
    });

    group.bench_function("render_unknown_id", |b| {
        b.iter(|| {
            let data = state.view_data();
            black_box(ViewRegistry::render(black_box("garage"), &data))
        });
    });

    group.bench_function("tab_lookup", |b| {
        b.iter(|| black_box(Tab::from_id(black_box("experiences"))));
    });

    group.finish();
}

fn bench_event_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_decoding");

    let events: Vec<Event> = (0..200).map(create_sample_event).collect();
    let json = serde_json::to_string(&events).unwrap();
    group.bench_function("decode_200_events", |b| {
        b.iter(|| black_box(serde_json::from_str::<Vec<Event>>(&json).unwrap()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = bench_gauge_geometry, bench_view_registry, bench_event_decoding
}
criterion_main!(benches);
