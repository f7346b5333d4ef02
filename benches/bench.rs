use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taxomap::lexicon::{CachedLexicon, InMemoryLexicon};
use taxomap::mapper::{CategoryMapper, MapperConfig};
use taxomap::util::levenshtein::{CachedEditDistance, ClassicEditDistance, levenshtein_distance};
use taxomap::util::similarity::lcs_ratio;

const GLOSS: &str = "an electronic device that receives television signals and displays them on a screen";

fn generate_targets(count: usize) -> Vec<String> {
    let roots = ["Electronics", "Home & Garden", "Furniture", "Apparel & Accessories", "Toys"];
    let leaves = ["TV & Video", "Televisions", "Chairs", "Radio", "Lighting", "Shoes"];
    (0..count)
        .map(|i| {
            format!(
                "{}/{}/Group {}",
                roots[i % roots.len()],
                leaves[(i / roots.len()) % leaves.len()],
                i
            )
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    group.bench_function("lcs_ratio_gloss", |b| {
        b.iter(|| lcs_ratio(black_box(GLOSS), black_box("electronics")))
    });
    group.bench_function("levenshtein_distance", |b| {
        b.iter(|| levenshtein_distance(black_box("television receiver"), black_box("televisions")))
    });

    group.finish();
}

fn bench_mapper(c: &mut Criterion) {
    let lexicon = InMemoryLexicon::load_from_file("resources/lexicon/retail.json").unwrap();
    let targets = generate_targets(500);

    let plain = CategoryMapper::new(&lexicon, MapperConfig::default()).unwrap();
    let cached = CategoryMapper::with_edit_distance(
        CachedLexicon::new(&lexicon),
        CachedEditDistance::new(ClassicEditDistance),
        MapperConfig::default(),
    )
    .unwrap();

    let mut group = c.benchmark_group("mapper");
    group.bench_function("map_plain", |b| {
        b.iter(|| plain.map(black_box("Electronics/Audio & Video"), &targets))
    });
    group.bench_function("map_cached", |b| {
        b.iter(|| cached.map(black_box("Electronics/Audio & Video"), &targets))
    });
    group.finish();
}

criterion_group!(benches, bench_similarity, bench_mapper);
criterion_main!(benches);
