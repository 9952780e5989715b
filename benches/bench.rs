//! Criterion benchmarks for the search transformer.
//!
//! Covers highlight extraction on long fragments and full transformation of
//! multi-search payloads of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use search_transformer::highlight::MatchExtractor;
use search_transformer::transform::Transformer;
use serde_json::json;
use std::hint::black_box;

/// Generate a highlighted fragment with `matches` marked words.
fn generate_fragment(matches: usize) -> String {
    let words = ["consumer", "price", "inflation", "index", "retail", "sales"];

    let mut parts = Vec::with_capacity(matches * 2);
    for i in 0..matches {
        parts.push(format!("<strong>{}</strong>", words[i % words.len()]));
        parts.push(words[(i * 7) % words.len()].to_string());
    }
    parts.join(" ")
}

/// Generate a multi-search payload with `sub_responses` queries of `hits` hits each.
fn generate_payload(sub_responses: usize, hits: usize) -> Vec<u8> {
    let responses: Vec<_> = (0..sub_responses)
        .map(|r| {
            let hits: Vec<_> = (0..hits)
                .map(|h| {
                    json!({
                        "_source": {
                            "type": "bulletin",
                            "uri": format!("/economy/{r}/{h}"),
                            "description": {
                                "title": "Consumer price inflation",
                                "summary": "Price indices, percentage changes and weights",
                                "keywords": ["cpi", "inflation"],
                                "releaseDate": "2024-05-15"
                            }
                        },
                        "highlight": {
                            "description.title": [generate_fragment(2)],
                            "description.summary": [generate_fragment(5)],
                            "description.keywords": ["<strong>cpi</strong>"]
                        }
                    })
                })
                .collect();
            let total = hits.len();
            json!({
                "took": 4,
                "hits": {"total": total, "hits": hits},
                "aggregations": {"docCounts": {"buckets": [
                    {"key": "bulletin", "doc_count": total}
                ]}},
                "suggest": {"search_suggest": [{"options": [{"text": "cpih"}]}]}
            })
        })
        .collect();

    json!({ "responses": responses }).to_string().into_bytes()
}

/// Benchmark highlight extraction.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let extractor = MatchExtractor::default();

    for matches in [1, 10, 1000] {
        let fragment = generate_fragment(matches);
        group.throughput(Throughput::Bytes(fragment.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(matches), &fragment, |b, f| {
            b.iter(|| extractor.extract(black_box(f)))
        });
    }

    group.finish();
}

/// Benchmark full payload transformation.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let transformer = Transformer::new();

    for (sub_responses, hits) in [(1, 10), (2, 100), (4, 500)] {
        let payload = generate_payload(sub_responses, hits);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("payload", format!("{sub_responses}x{hits}")),
            &payload,
            |b, p| b.iter(|| transformer.transform(black_box(p), "cpi")),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_transform);

criterion_main!(benches);
