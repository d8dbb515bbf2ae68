use serde::{Deserialize, Serialize};

/// One row of the hospital catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    pub name: String,
    pub location: String,
    pub specialty: String,
    pub address: String,
    pub phone: String,
}

/// The part of a [`Hospital`] shown to the user in a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalSummary {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl From<&Hospital> for HospitalSummary {
    fn from(h: &Hospital) -> Self {
        Self {
            name: h.name.clone(),
            address: h.address.clone(),
            phone: h.phone.clone(),
        }
    }
}
