#![allow(dead_code)]

use atlasly::{Catalog, LinkReport, load_catalog};
use serde_json::{Value, json};
use std::sync::Arc;

pub struct Fixture {
    pub shape_name: &'static str,
    pub common: Option<&'static str>,
    pub official: Option<&'static str>,
    pub alt: &'static [&'static str],
    pub code: &'static str,
    pub capital: Option<&'static str>,
    pub borders: &'static [&'static str],
    /// south-west corner and edge length of a square boundary, in degrees
    pub lon: f64,
    pub lat: f64,
    pub size: f64,
}

const fn country(
    shape_name: &'static str,
    common: &'static str,
    code: &'static str,
    capital: &'static str,
    borders: &'static [&'static str],
    (lon, lat, size): (f64, f64, f64),
) -> Fixture {
    Fixture {
        shape_name,
        common: Some(common),
        official: None,
        alt: &[],
        code,
        capital: Some(capital),
        borders,
        lon,
        lat,
        size,
    }
}

/// Shape dataset order. Facts are emitted in the same order, minus Atlantis.
pub const COUNTRIES: &[Fixture] = &[
    Fixture {
        official: Some("United States of America"),
        ..country("United States of America", "United States", "USA", "Washington, D.C.", &["CAN", "MEX"], (-110.0, 30.0, 20.0))
    },
    country("United Arab Emirates", "United Arab Emirates", "ARE", "Abu Dhabi", &[], (52.0, 23.0, 3.0)),
    country("Canada", "Canada", "CAN", "Ottawa", &["USA"], (-110.0, 50.0, 24.0)),
    Fixture {
        official: Some("United Mexican States"),
        ..country("Mexico", "Mexico", "MEX", "Mexico City", &["USA"], (-106.0, 17.0, 10.0))
    },
    country("France", "France", "FRA", "Paris", &["ESP", "BEL", "DEU"], (-1.0, 43.0, 7.0)),
    country("Spain", "Spain", "ESP", "Madrid", &["FRA", "PRT"], (-7.0, 37.0, 6.0)),
    country("Portugal", "Portugal", "PRT", "Lisbon", &["ESP"], (-9.0, 38.0, 2.0)),
    country("Belgium", "Belgium", "BEL", "Brussels", &["FRA", "DEU"], (3.5, 50.0, 1.5)),
    country("Germany", "Germany", "DEU", "Berlin", &["FRA", "BEL", "CZE"], (7.0, 48.0, 6.0)),
    Fixture {
        alt: &["Czech Republic"],
        ..country("Czechia", "Czechia", "CZE", "Prague", &["DEU", "AUT"], (13.0, 48.7, 2.5))
    },
    Fixture {
        alt: &["Côte d'Ivoire"],
        ..country("Côte d'Ivoire", "Ivory Coast", "CIV", "Yamoussoukro", &[], (-7.5, 5.5, 4.0))
    },
    Fixture {
        official: Some("Republic of Cape Verde"),
        ..country("Cabo Verde", "Cape Verde", "CPV", "Praia", &[], (-24.5, 15.0, 1.0))
    },
    country("Bosnia and Herz.", "Bosnia and Herzegovina", "BIH", "Sarajevo", &[], (16.0, 43.0, 2.5)),
    Fixture {
        common: None,
        capital: None,
        ..country("Atlantis", "", "ATL", "", &[], (-32.0, 28.0, 3.0))
    },
];

fn square(f: &Fixture) -> Value {
    let (x0, y0, s) = (f.lon, f.lat, f.size);
    json!([[[x0, y0], [x0, y0 + s], [x0 + s, y0 + s], [x0 + s, y0], [x0, y0]]])
}

pub fn shapes_json() -> String {
    let features: Vec<Value> = COUNTRIES
        .iter()
        .map(|f| {
            json!({
                "type": "Feature",
                "properties": {"name": f.shape_name},
                "geometry": {"type": "Polygon", "coordinates": square(f)}
            })
        })
        .collect();
    json!({"type": "FeatureCollection", "features": features}).to_string()
}

pub fn facts_json() -> String {
    let records: Vec<Value> = COUNTRIES
        .iter()
        .filter(|f| f.common.is_some())
        .map(|f| {
            json!({
                "name": {"common": f.common, "official": f.official},
                "cca3": f.code,
                "capital": f.capital.into_iter().collect::<Vec<_>>(),
                "altSpellings": f.alt,
                "population": 1_000_000,
                "flag": "🏳",
                "borders": f.borders,
            })
        })
        .collect();
    Value::Array(records).to_string()
}

pub fn build() -> (Catalog, LinkReport) {
    load_catalog(&shapes_json(), &facts_json()).unwrap()
}

pub fn catalog() -> Arc<Catalog> {
    Arc::new(build().0)
}
