// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trouve_core::{shape, CategoryFilter, FilterState, Shaper, SortCriterion, Worker};

const CATEGORIES: &[&str] = &["Plombier", "Electricien", "Menuisier", "Peintre"];
const CITIES: &[&str] = &["Rabat", "Casablanca", "Marrakech", "Fes", "Tanger"];

fn build_listing(count: usize) -> Vec<Worker> {
    (0..count)
        .map(|i| Worker {
            id: i.to_string(),
            first_name: format!("Prenom{}", i % 97),
            last_name: format!("Nom{}", (i * 31) % 1013),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            sous_category: None,
            city: CITIES[i % CITIES.len()].to_string(),
            rating: (i % 50) as f64 / 10.0,
            phone: "0600000000".to_string(),
            whatsapp_number: None,
            email: None,
            bio: String::new(),
            image: None,
            latitude: None,
            longitude: None,
            is_active: true,
            distance: None,
        })
        .collect()
}

fn bench_shape_search(c: &mut Criterion) {
    let listing = build_listing(5_000);
    let state = FilterState {
        search: "nom1".to_string(),
        ..FilterState::default()
    };
    c.bench_function("shape_search_5000", |b| {
        b.iter(|| black_box(shape(&listing, &state)))
    });
}

fn bench_shape_category_name_sort(c: &mut Criterion) {
    let listing = build_listing(5_000);
    let state = FilterState {
        search: String::new(),
        category: CategoryFilter::from_label("Plombier"),
        sort: SortCriterion::Name,
    };
    c.bench_function("shape_category_sort_5000", |b| {
        b.iter(|| black_box(shape(&listing, &state)))
    });
}

fn bench_shaper_cache_hit(c: &mut Criterion) {
    let listing = build_listing(5_000);
    let state = FilterState {
        sort: SortCriterion::City,
        ..FilterState::default()
    };
    let mut shaper = Shaper::new();
    shaper.shape(1, &listing, &state);
    c.bench_function("shaper_cache_hit_5000", |b| {
        b.iter(|| black_box(shaper.shape(1, &listing, &state).len()))
    });
}

criterion_group!(
    benches,
    bench_shape_search,
    bench_shape_category_name_sort,
    bench_shaper_cache_hit
);
criterion_main!(benches);
