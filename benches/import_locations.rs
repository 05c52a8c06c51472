use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};

use tafel_locaties::{
    hero::HeroFix,
    import::{self, ImportOptions},
    page::LocationPage,
};

const LOCATIONS: &str = include_str!("../tests/locations.tsv");
const GENT: &str = include_str!("../tests/pages/gent.html");

fn import_locations(c: &mut Criterion) {
    c.bench_function("import_locations", |b| {
        b.iter(|| import::import(black_box(LOCATIONS), ImportOptions::default()));
    });
}

fn fix_hero(c: &mut Criterion) {
    let fix = HeroFix::new(None).unwrap();
    let page = LocationPage {
        slug: "gent".to_string(),
        path: "gent.html".into(),
    };

    c.bench_function("fix_hero", |b| {
        b.iter(|| fix.edit(&page, black_box(GENT)));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = import_locations, fix_hero
}

criterion_main!(benches);
