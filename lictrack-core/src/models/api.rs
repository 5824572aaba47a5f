//! Wire shapes of the remote collection API and their conversion into
//! typed records.
//!
//! Conversion is total: a record with a bad date or duration is still
//! produced, with the offending field set to `None`. A row whose fields have
//! the wrong JSON type is skipped. Either way one bad row never prevents the
//! rest of a listing from being shown or reported.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::license_record::LicenseRecord;
use super::license_term::LicenseTerm;
use super::local_license::LocalLicense;
use crate::dates::parse_api_date;
use crate::errors::{LictrackResult, RecordError};

/// The two remote license collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Web,
    Local,
}

impl Collection {
    /// Path prefix of the collection on the API.
    pub fn base_path(&self) -> &'static str {
        match self {
            Self::Web => "licencia-web",
            Self::Local => "licencia",
        }
    }

    pub fn list_path(&self) -> String {
        format!("{}/list", self.base_path())
    }
}

/// `{ "data": [...] }` envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json)
    }
}

/// Identifiers arrive as numbers or strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Duration in months, as text or as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTerm {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawTerm {
    /// Normalize into a typed term. `999` in any form is unlimited.
    pub fn normalize(&self) -> Result<LicenseTerm, RecordError> {
        match self {
            Self::Integer(n) => LicenseTerm::from_count(*n),
            Self::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX) => {
                Ok(LicenseTerm::from_months(*f as u32))
            }
            Self::Float(f) => Err(RecordError::InvalidTerm {
                value: f.to_string(),
            }),
            Self::Text(s) => s.parse(),
        }
    }
}

impl fmt::Display for RawTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawTerm {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for RawTerm {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// A web license as listed by `licencia-web/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWebLicense {
    pub id: Option<RawId>,
    pub client_id: Option<String>,
    pub fecha_instalacion: Option<String>,
    pub fecha_pago: Option<String>,
    pub meses: Option<RawTerm>,
}

impl RawWebLicense {
    /// Lenient conversion. Never fails; unusable fields become `None`.
    pub fn into_record(self) -> LicenseRecord {
        let client_id = self.client_id.unwrap_or_default();
        let installation_date = self.fecha_instalacion.as_deref().and_then(parse_api_date);
        let payment_date = self.fecha_pago.as_deref().and_then(parse_api_date);
        if payment_date.is_none() {
            debug!(client_id = %client_id, raw = ?self.fecha_pago, "unusable payment date");
        }

        let raw_term = self.meses.as_ref().map(ToString::to_string).unwrap_or_default();
        let term = match self.meses.as_ref().map(RawTerm::normalize) {
            Some(Ok(term)) => Some(term),
            Some(Err(e)) => {
                debug!(client_id = %client_id, error = %e, "unusable license term");
                None
            }
            None => None,
        };

        LicenseRecord {
            id: self.id.map(|id| id.to_string()),
            client_id,
            installation_date,
            payment_date,
            term,
            raw_term,
        }
    }

    /// Strict conversion for input that must be complete, such as a record
    /// about to be saved.
    pub fn try_into_record(self) -> Result<LicenseRecord, RecordError> {
        let client_id = self
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RecordError::EmptyClientId)?;

        let raw_payment = self
            .fecha_pago
            .as_deref()
            .ok_or(RecordError::MissingField("fecha_pago"))?;
        let payment_date = parse_api_date(raw_payment).ok_or_else(|| RecordError::InvalidDate {
            field: "fecha_pago",
            value: raw_payment.to_string(),
        })?;

        let installation_date = match self.fecha_instalacion.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                Some(parse_api_date(raw).ok_or_else(|| RecordError::InvalidDate {
                    field: "fecha_instalacion",
                    value: raw.to_string(),
                })?)
            }
            _ => None,
        };

        let raw_term = self.meses.as_ref().ok_or(RecordError::MissingField("meses"))?;
        let term = raw_term.normalize()?;

        Ok(LicenseRecord {
            id: self.id.as_ref().map(ToString::to_string),
            client_id: client_id.to_string(),
            installation_date,
            payment_date: Some(payment_date),
            term: Some(term),
            raw_term: raw_term.to_string(),
        })
    }
}

/// A desktop license as listed by `licencia/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLocalLicense {
    pub id: Option<RawId>,
    pub clave: Option<String>,
    pub client_id: Option<String>,
    pub client_password: Option<String>,
    pub descripcion: Option<String>,
    pub referencia: Option<String>,
    pub ruc: Option<String>,
    pub ruta: Option<String>,
}

impl RawLocalLicense {
    pub fn into_license(self) -> LocalLicense {
        LocalLicense {
            id: self.id.map(|id| id.to_string()),
            client_id: self.client_id.unwrap_or_default(),
            client_password: self.client_password.unwrap_or_default(),
            description: self.descripcion.unwrap_or_default(),
            key: self.clave.unwrap_or_default(),
            reference: self.referencia.unwrap_or_default(),
            tax_id: self.ruc.unwrap_or_default(),
            path: self.ruta.unwrap_or_default(),
        }
    }
}

/// Parse a `licencia-web/list` body into typed records.
///
/// Fails only when the body itself is not a list envelope.
pub fn parse_web_listing(json: &str) -> LictrackResult<Vec<LicenseRecord>> {
    parse_listing(json, Collection::Web, RawWebLicense::into_record)
}

/// Parse a `licencia/list` body into typed records.
pub fn parse_local_listing(json: &str) -> LictrackResult<Vec<LocalLicense>> {
    parse_listing(json, Collection::Local, RawLocalLicense::into_license)
}

fn parse_listing<R, T>(
    json: &str,
    collection: Collection,
    convert: impl Fn(R) -> T,
) -> LictrackResult<Vec<T>>
where
    R: DeserializeOwned,
{
    let response = ListResponse::<serde_json::Value>::from_json(json)?;
    let total = response.data.len();
    let mut items = Vec::with_capacity(total);
    for (index, row) in response.data.into_iter().enumerate() {
        match serde_json::from_value::<R>(row) {
            Ok(raw) => items.push(convert(raw)),
            Err(e) => {
                debug!(
                    collection = collection.base_path(),
                    index,
                    error = %e,
                    "skipping mistyped row"
                );
            }
        }
    }
    if items.len() < total {
        debug!(
            collection = collection.base_path(),
            total,
            kept = items.len(),
            "listing had mistyped rows"
        );
    }
    Ok(items)
}
