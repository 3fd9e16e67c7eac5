//! Performance benchmarks for rs-scholarly.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A synthetic PMC page routed to the publisher extractor
//! - The same body on an unknown host, going through candidate scoring
//! - Textual sectionization of a flattened body

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_scholarly::sections::textual;
use rs_scholarly::{extract, extract_with_options, HeadMeta, Options};

const SECTIONS: &[(&str, &str)] = &[
    ("Abstract", "Estuarine turbidity maxima trap fine sediment near the salt limit."),
    ("1. Introduction", "Sediment trapping controls channel siltation and habitat quality."),
    ("2. Materials and methods", "Moorings recorded velocity, salinity and turbidity for a year."),
    ("2.1 Study site", "The estuary is macrotidal with a strong spring-neap cycle."),
    ("3. Results and discussion", "Trapping efficiency peaked during neap tides in the dry season."),
    ("4. Conclusions", "Tidal asymmetry dominates the seasonal sediment budget."),
];

fn body_html() -> String {
    let mut html = String::new();
    for (heading, text) in SECTIONS {
        let tag = if heading.starts_with("2.1") { "h3" } else { "h2" };
        html.push_str(&format!("<section><{tag}>{heading}</{tag}>"));
        for _ in 0..6 {
            html.push_str(&format!("<p>{text} {}</p>", "Observations continued. ".repeat(8)));
        }
        html.push_str("</section>");
    }
    html
}

fn references_html(count: usize) -> String {
    let mut html = String::from("<ul>");
    for i in 1..=count {
        html.push_str(&format!(
            "<li><cite>Author {i}. Study of tides {i}. J Mar Res. 20{:02};{i}:1-10. doi:10.1000/bench.{i}</cite>\
             <a href=\"https://pubmed.ncbi.nlm.nih.gov/{}/\">PubMed</a></li>",
            i % 25,
            10_000_000 + i
        ));
    }
    html.push_str("</ul>");
    html
}

fn pmc_page(reference_count: usize) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
        <meta name="citation_title" content="Sediment trapping in a macrotidal estuary">
        <meta name="citation_doi" content="10.1000/bench">
        </head><body>
        <nav class="pmc-sidenav"><a href="/">Home</a></nav>
        <section aria-label="Article content">
          <section class="body main-article-body">{}</section>
          <section class="ref-list"><h2>References</h2>{}</section>
        </section>
        <footer>Copyright</footer>
        </body></html>"#,
        body_html(),
        references_html(reference_count)
    )
}

fn bench_pmc(c: &mut Criterion) {
    let html = pmc_page(40);
    let head = HeadMeta::new();
    c.bench_function("extract_pmc", |b| {
        b.iter(|| {
            extract(
                black_box("https://pmc.ncbi.nlm.nih.gov/articles/PMC1000000/"),
                black_box(&html),
                &head,
            )
        });
    });
}

fn bench_generic(c: &mut Criterion) {
    let html = format!(
        "<html><body><header>Site</header><main><article>{}</article></main><aside class=\"related\">More</aside></body></html>",
        body_html()
    );
    let head = HeadMeta::new();
    let options = Options {
        extract_references: false,
        ..Options::default()
    };
    c.bench_function("extract_generic", |b| {
        b.iter(|| extract_with_options(black_box("https://example.org/paper"), black_box(&html), &head, &options));
    });
}

fn bench_reference_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmc_references");
    let head = HeadMeta::new();

    for count in [10, 100, 400] {
        let html = pmc_page(count);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", count), &html, |b, html| {
            b.iter(|| extract(black_box("https://pmc.ncbi.nlm.nih.gov/articles/PMC1/"), black_box(html), &head));
        });
    }

    group.finish();
}

fn bench_textual(c: &mut Criterion) {
    let text: String = SECTIONS
        .iter()
        .map(|(heading, text)| format!("{heading}\n{text}\n{text}\n"))
        .collect::<Vec<_>>()
        .join("\n")
        .repeat(4);
    let options = Options::default();
    c.bench_function("textual_sectionize", |b| {
        b.iter(|| textual::sectionize(black_box(&text), &options));
    });
}

criterion_group!(benches, bench_pmc, bench_generic, bench_reference_counts, bench_textual);
criterion_main!(benches);
