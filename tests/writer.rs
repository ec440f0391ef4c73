// tests/writer.rs
//
// Incremental CSV writer without any network.
//
mod common;

use fondos_scrape::file::append_record;
use fondos_scrape::{DetailFields, Fondo, Layout, ListingFields};

use common::read_rows;

fn fondo(title: &str, amount: &str) -> Fondo {
    Fondo::partial(ListingFields {
        url: format!("https://fondos.gob.cl/concurso/{title}"),
        title: title.into(),
        amount: amount.into(),
        extracted_at: "2024-03-01 10:00:00".into(),
        ..Default::default()
    })
    .enrich(DetailFields {
        description: "Apoyo, con \"comillas\" y\nsalto".into(),
        category: "Emprendimiento".into(),
        bases_link: String::new(),
    })
}

#[test]
fn first_append_writes_header_then_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fondos.csv");

    append_record(&path, &fondo("a", "$1"), 1, false, Layout::Enriched).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        [
            "ID", "URL", "ESTADO", "ALCANCE", "INSTITUCIÓN", "NOMBRE", "BENEFICIARIO",
            "INICIO", "FIN", "MONTO", "FECHA_EXTRACCION", "DESCRIPCION", "CATEGORIA", "WEB",
        ]
    );
    assert_eq!(rows[1][0], "1");
    assert_eq!(rows[1][5], "a");
}

#[test]
fn second_append_adds_one_row_and_no_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fondos.csv");

    append_record(&path, &fondo("a", "$1"), 1, false, Layout::Enriched).unwrap();
    append_record(&path, &fondo("b", "$2"), 2, true, Layout::Enriched).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|r| r[0] == "ID").count(), 1);
    assert_eq!(rows[2][0], "2");
    assert_eq!(rows[2][9], "$2");
}

#[test]
fn ids_follow_write_order_regardless_of_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fondos.csv");

    for (i, title) in ["zeta", "alfa", "zeta"].iter().enumerate() {
        append_record(&path, &fondo(title, ""), i + 1, i > 0, Layout::Enriched).unwrap();
    }

    let ids: Vec<String> = read_rows(&path).into_iter().skip(1).map(|r| r[0].clone()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn quoting_survives_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fondos.csv");

    append_record(&path, &fondo("a", "$1.000,50"), 1, false, Layout::Enriched).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows[1][9], "$1.000,50");
    assert_eq!(rows[1][11], "Apoyo, con \"comillas\" y\nsalto");
    assert_eq!(rows[1][13], "");
}

#[test]
fn listing_only_layout_has_eleven_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fondos.csv");

    append_record(&path, &fondo("a", "$1"), 1, false, Layout::ListingOnly).unwrap();

    let rows = read_rows(&path);
    assert!(rows.iter().all(|r| r.len() == 11));
    assert_eq!(rows[0].last().map(String::as_str), Some("FECHA_EXTRACCION"));
}
