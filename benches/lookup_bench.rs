use codesign_core::registry::{self, entitlements, features};
use codesign_core::types::{Entitlement, Feature};
use criterion::{criterion_group, criterion_main, Criterion};

fn lookup_benchmarks(c: &mut Criterion) {
    let unknown_feature = Feature::new("com.example.unknown-feature");
    let unknown_entitlement = Entitlement::new("com.example.unknown-entitlement");

    c.bench_function("entitlement_for_feature_hit", |b| {
        b.iter(|| registry::entitlement_for_feature(&features::GAME_CENTER))
    });

    c.bench_function("entitlement_for_feature_miss", |b| {
        b.iter(|| registry::entitlement_for_feature(&unknown_feature))
    });

    c.bench_function("feature_for_entitlement_hit", |b| {
        b.iter(|| registry::feature_for_entitlement(&entitlements::APP_GROUPS))
    });

    c.bench_function("free_developer_check", |b| {
        b.iter(|| registry::free_developer_can_use_entitlement(&unknown_entitlement))
    });
}

criterion_group!(benches, lookup_benchmarks);
criterion_main!(benches);
