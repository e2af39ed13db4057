use serde::{Deserialize, Serialize};

use parcelflow_core::ValueObject;

/// A physical point of contact (sender or recipient).
///
/// Immutable once built: the delivery replaces it wholesale when preparation
/// details are edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactPoint {
    zip_code: String,
    street: String,
    number: String,
    complement: String,
    name: String,
    phone: String,
}

impl ContactPoint {
    pub fn new(
        zip_code: impl Into<String>,
        street: impl Into<String>,
        number: impl Into<String>,
        complement: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            street: street.into(),
            number: number.into(),
            complement: complement.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn complement(&self) -> &str {
        &self.complement
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl ValueObject for ContactPoint {}
