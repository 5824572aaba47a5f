pub mod api;
pub mod expiration;
pub mod form;
pub mod license_record;
pub mod license_term;
pub mod local_license;

pub use api::{
    parse_local_listing, parse_web_listing, Collection, ListResponse, RawId, RawLocalLicense,
    RawTerm, RawWebLicense,
};
pub use expiration::{AnnotatedLicense, ExpirationResult, RemainingDays};
pub use form::{FormEndpoint, LocalLicenseForm, WebLicenseForm};
pub use license_record::LicenseRecord;
pub use license_term::LicenseTerm;
pub use local_license::LocalLicense;
