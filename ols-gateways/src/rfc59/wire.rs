//! JSON representation of the answer of the RFC59 normalization service.

use ols_entities::{geo::Coordinates, normalization as e};
use serde::{Deserialize, Deserializer};

/// The service reports coordinates either as numbers or as decimal strings.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RispostaNormalizzata {
    pub tipo_risposta_norm: String,
    pub indirizzo_riconosciuto: Option<IndirizzoRiconosciuto>,
    pub indirizzo_ambiguo: Option<IndirizzoAmbiguo>,
    pub localita_normalizzata: Option<LocalitaNormalizzata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndirizzoRiconosciuto {
    pub dati_georeferenziazione_ind: DatiGeoreferenziazioneInd,
    pub dati_normalizzazione_ind: DatiNormalizzazioneInd,
}

#[derive(Debug, Deserialize)]
pub struct DatiGeoreferenziazioneInd {
    #[serde(deserialize_with = "coordinate")]
    pub longitudine: f64,
    #[serde(deserialize_with = "coordinate")]
    pub latitudine: f64,
}

#[rustfmt::skip]
#[derive(Debug, Deserialize)]
pub struct DatiNormalizzazioneInd {
    pub localita  : Option<String>,
    pub provincia : Option<String>,
    pub cap       : Option<String>,
    pub civico    : Option<String>,
    pub dug       : Option<String>,
    pub toponimo  : Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndirizzoAmbiguo {
    pub ambiguita_ind: AmbiguitaInd,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbiguitaInd {
    #[serde(default)]
    pub ambiguita_ind_item: Vec<AmbiguitaIndItem>,
    pub ambiguita_ind_item_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AmbiguitaIndItem {
    #[serde(deserialize_with = "coordinate")]
    pub x: f64,
    #[serde(deserialize_with = "coordinate")]
    pub y: f64,
    pub indirizzo: String,
    pub civico: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalitaNormalizzata {
    pub dati_normalizzazione_loc: DatiNormalizzazioneLoc,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatiNormalizzazioneLoc {
    #[serde(deserialize_with = "coordinate")]
    pub x_sezione_istat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub y_sezione_istat: f64,
    pub frazione: Option<String>,
    pub localita: Option<String>,
    pub provincia: Option<String>,
    pub cap: Option<String>,
}

impl From<RispostaNormalizzata> for e::RawAnswer {
    fn from(from: RispostaNormalizzata) -> Self {
        let RispostaNormalizzata {
            tipo_risposta_norm,
            indirizzo_riconosciuto,
            indirizzo_ambiguo,
            localita_normalizzata,
        } = from;
        Self {
            response_code: tipo_risposta_norm,
            recognized_address: indirizzo_riconosciuto.map(Into::into),
            ambiguous_address: indirizzo_ambiguo.map(Into::into),
            normalized_locality: localita_normalizzata.map(Into::into),
        }
    }
}

impl From<IndirizzoRiconosciuto> for e::RecognizedAddress {
    fn from(from: IndirizzoRiconosciuto) -> Self {
        let IndirizzoRiconosciuto {
            dati_georeferenziazione_ind: geo,
            dati_normalizzazione_ind: norm,
        } = from;
        let DatiNormalizzazioneInd {
            localita,
            provincia,
            cap,
            civico,
            dug,
            toponimo,
        } = norm;
        Self {
            pos: Coordinates::from_lng_lat(geo.longitudine, geo.latitudine),
            normalized: e::NormalizedStreetData {
                locality: localita.unwrap_or_default(),
                province: provincia.unwrap_or_default(),
                postal_code: cap,
                house_number: civico,
                street_type: dug.unwrap_or_default(),
                street_name: toponimo.unwrap_or_default(),
            },
        }
    }
}

impl From<IndirizzoAmbiguo> for e::AmbiguousAddress {
    fn from(from: IndirizzoAmbiguo) -> Self {
        let AmbiguitaInd {
            ambiguita_ind_item,
            ambiguita_ind_item_count,
        } = from.ambiguita_ind;
        let reported_count = ambiguita_ind_item_count.unwrap_or(ambiguita_ind_item.len());
        let items = ambiguita_ind_item
            .into_iter()
            .map(|item| e::AmbiguousAddressItem {
                pos: Coordinates::from_lng_lat(item.x, item.y),
                address: item.indirizzo,
                house_number: item.civico,
            })
            .collect();
        Self {
            reported_count,
            items,
        }
    }
}

impl From<LocalitaNormalizzata> for e::NormalizedLocality {
    fn from(from: LocalitaNormalizzata) -> Self {
        let DatiNormalizzazioneLoc {
            x_sezione_istat,
            y_sezione_istat,
            frazione,
            localita,
            provincia,
            cap,
        } = from.dati_normalizzazione_loc;
        Self {
            pos: Coordinates::from_lng_lat(x_sezione_istat, y_sezione_istat),
            hamlet: frazione.unwrap_or_default(),
            locality: localita.unwrap_or_default(),
            province: provincia.unwrap_or_default(),
            postal_code: cap,
        }
    }
}
