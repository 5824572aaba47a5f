//! Create/update payloads for the edit screens.

use serde::{Deserialize, Serialize};

use super::api::Collection;
use super::license_record::LicenseRecord;
use super::license_term::LicenseTerm;
use super::local_license::LocalLicense;
use crate::dates::{format_api_date, parse_api_date};
use crate::errors::RecordError;

/// Where a form submission goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEndpoint {
    Create,
    Update { id: String },
}

impl FormEndpoint {
    /// Update when the record already has a remote id, create otherwise.
    pub fn for_id(id: Option<&str>) -> Self {
        match id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => Self::Update { id: id.to_string() },
            None => Self::Create,
        }
    }

    pub fn path(&self, collection: Collection) -> String {
        match self {
            Self::Create => format!("{}/add", collection.base_path()),
            Self::Update { id } => format!("{}/update/{}", collection.base_path(), id),
        }
    }
}

/// Web license edit form. Field names match the API's add/update body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebLicenseForm {
    pub client_id: String,
    pub fechainstalacion: String,
    pub fechapago: String,
    pub meses: String,
}

impl WebLicenseForm {
    /// Prefill from an existing record. Dates are shown as `YYYY-MM-DD`.
    pub fn from_record(record: &LicenseRecord) -> Self {
        Self {
            client_id: record.client_id.clone(),
            fechainstalacion: record.installation_date.map(format_api_date).unwrap_or_default(),
            fechapago: record.payment_date.map(format_api_date).unwrap_or_default(),
            meses: record.raw_term.clone(),
        }
    }

    /// Every problem with the form, in field order. Dates may be left blank.
    pub fn validate(&self) -> Result<(), Vec<RecordError>> {
        let mut errors = Vec::new();
        if self.client_id.trim().is_empty() {
            errors.push(RecordError::EmptyClientId);
        }
        if let Err(e) = self.meses.parse::<LicenseTerm>() {
            errors.push(e);
        }
        for (field, value) in [
            ("fechainstalacion", &self.fechainstalacion),
            ("fechapago", &self.fechapago),
        ] {
            if !value.trim().is_empty() && parse_api_date(value).is_none() {
                errors.push(RecordError::InvalidDate {
                    field,
                    value: value.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Create for unsaved records, update when `id` is known.
    pub fn endpoint(&self, id: Option<&str>) -> FormEndpoint {
        FormEndpoint::for_id(id)
    }

    /// The typed record this form describes, once it validates.
    pub fn to_record(&self, id: Option<&str>) -> Result<LicenseRecord, Vec<RecordError>> {
        self.validate()?;
        let mut record = LicenseRecord::new(
            self.client_id.trim(),
            parse_api_date(&self.fechainstalacion),
            parse_api_date(&self.fechapago),
            self.meses.parse().ok(),
        );
        record.raw_term = self.meses.trim().to_string();
        record.id = id.map(str::to_string);
        Ok(record)
    }
}

/// Desktop license edit form. Field names match the API's add/update body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalLicenseForm {
    pub clave: String,
    pub client_id: String,
    pub client_password: String,
    pub descripcion: String,
    pub id: String,
    pub referencia: String,
    pub ruc: String,
    pub ruta: String,
}

impl LocalLicenseForm {
    pub fn from_license(license: &LocalLicense) -> Self {
        Self {
            clave: license.key.clone(),
            client_id: license.client_id.clone(),
            client_password: license.client_password.clone(),
            descripcion: license.description.clone(),
            id: license.id.clone().unwrap_or_default(),
            referencia: license.reference.clone(),
            ruc: license.tax_id.clone(),
            ruta: license.path.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), Vec<RecordError>> {
        let mut errors = Vec::new();
        if self.descripcion.trim().is_empty() {
            errors.push(RecordError::MissingField("descripcion"));
        }
        if self.clave.trim().is_empty() {
            errors.push(RecordError::MissingField("clave"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn endpoint(&self) -> FormEndpoint {
        FormEndpoint::for_id(Some(self.id.as_str()))
    }
}
