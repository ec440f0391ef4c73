// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fondos_scrape::specs::{detail, listing, DetailSelectors, ListingSelectors};

const BASE: &str = "https://fondos.gob.cl";

fn sample_listing(n: usize) -> String {
    let mut doc = String::from(r#"<html><body><div class="row">"#);
    for i in 0..n {
        doc.push_str(&format!(
            r#"<div class="col-md-6 col-lg-3">
                 <a href="/concurso/{i}">
                   <span class="badge">Abierto</span>
                   <span class="text-white">&#xf3c5; Nacional</span>
                   <small class="text-uppercase">Ministerio {i}</small>
                   <h6>Fondo número {i}</h6>
                   <div class="card-body">
                     <p>Personas jurídicas</p>
                     <p>Inicio: 2024-01-0{d} | Fin: 2024-06-30</p>
                     <p>$ {i}.000.000</p>
                   </div>
                 </a>
               </div>"#,
            d = i % 9 + 1
        ));
    }
    doc.push_str("</div></body></html>");
    doc
}

const DETAIL: &str = r#"<html><body>
    <div class="mb-4 d-block"><p>Descripción del fondo.</p></div>
    <div class="me-3"><small>Tipo:</small><span class="bg-rosa">Concurso</span></div>
    <div class="me-3"><small>Categoría:</small><span class="bg-rosa">Cultura</span></div>
    <div id="pills-04"><a href="https://fondos.gob.cl/bases.pdf">Bases</a></div>
</body></html>"#;

fn bench_extract(c: &mut Criterion) {
    let doc = sample_listing(48);
    let lsel = ListingSelectors::new().expect("listing selectors");
    let dsel = DetailSelectors::new().expect("detail selectors");
    let cards = listing::split_cards(&doc, &lsel);

    c.bench_function("listing_split", |b| {
        b.iter(|| listing::split_cards(black_box(&doc), &lsel).len())
    });

    c.bench_function("card_extract", |b| {
        b.iter(|| {
            cards
                .iter()
                .filter_map(|f| listing::extract(black_box(f), &lsel, BASE))
                .count()
        })
    });

    c.bench_function("detail_parse", |b| {
        b.iter(|| detail::parse(black_box(DETAIL), &dsel))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
