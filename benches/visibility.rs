use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flow_card_editor::schema::{individual_schema, visible_field_paths};
use flow_card_editor::{is_visible, Predicate, Translations, ValueMap};
use serde_json::json;

fn config() -> ValueMap {
    json!({
        "entity": "sensor.heat_pump_power",
        "conditional_entity": "binary_sensor.heat_pump_running",
        "secondary_info": {"entity": "sensor.heat_pump_cop", "decimals": 1}
    })
    .as_object()
    .cloned()
    .unwrap_or_default()
}

fn bench_predicate(c: &mut Criterion) {
    let predicate = Predicate::not_equal("conditional_entity", "");
    let values = config();
    let empty = ValueMap::new();

    c.bench_function("is_visible present key", |b| {
        b.iter(|| is_visible(black_box(Some(&predicate)), black_box(&values)))
    });
    c.bench_function("is_visible absent key", |b| {
        b.iter(|| is_visible(black_box(Some(&predicate)), black_box(&empty)))
    });
}

fn bench_render_pass(c: &mut Criterion) {
    let schema = individual_schema(&Translations::new("en"));
    let values = config();

    c.bench_function("individual schema render pass", |b| {
        b.iter(|| visible_field_paths(black_box(&schema), black_box(&values)))
    });
}

criterion_group!(benches, bench_predicate, bench_render_pass);
criterion_main!(benches);
