// src/record.rs

/// Fields read from one listing card. Absent markup is an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFields {
    pub url: String,
    pub status: String,
    pub scope: String,
    pub institution: String,
    pub title: String,
    pub beneficiary: String,
    pub start_date: String,
    pub end_date: String,
    pub amount: String,
    /// Local time the card was parsed, `%Y-%m-%d %H:%M:%S`.
    pub extracted_at: String,
}

/// Fields read from a fund's own page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub description: String,
    pub category: String,
    pub bases_link: String,
}

/// One output row before its id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fondo {
    pub listing: ListingFields,
    pub detail: DetailFields,
}

impl Fondo {
    pub fn partial(listing: ListingFields) -> Self {
        Self { listing, detail: DetailFields::default() }
    }

    pub fn enrich(mut self, detail: DetailFields) -> Self {
        self.detail = detail;
        self
    }

    pub fn url(&self) -> &str { &self.listing.url }
    pub fn title(&self) -> &str { &self.listing.title }

    /// Row cells in `layout` column order, id first.
    pub fn to_row(&self, id: usize, layout: Layout) -> Vec<String> {
        let l = &self.listing;
        let mut row = vec![
            id.to_string(),
            l.url.clone(),
            l.status.clone(),
            l.scope.clone(),
            l.institution.clone(),
            l.title.clone(),
            l.beneficiary.clone(),
            l.start_date.clone(),
            l.end_date.clone(),
            l.amount.clone(),
            l.extracted_at.clone(),
        ];
        if layout == Layout::Enriched {
            let d = &self.detail;
            row.extend([d.description.clone(), d.category.clone(), d.bases_link.clone()]);
        }
        row
    }
}

/// Column set of the output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Enriched,
    ListingOnly,
}

const LISTING_HEADERS: [&str; 11] = [
    "ID", "URL", "ESTADO", "ALCANCE", "INSTITUCIÓN", "NOMBRE",
    "BENEFICIARIO", "INICIO", "FIN", "MONTO", "FECHA_EXTRACCION",
];
const DETAIL_HEADERS: [&str; 3] = ["DESCRIPCION", "CATEGORIA", "WEB"];

impl Layout {
    pub fn headers(self) -> Vec<&'static str> {
        let mut h = LISTING_HEADERS.to_vec();
        if self == Layout::Enriched {
            h.extend(DETAIL_HEADERS);
        }
        h
    }
}
