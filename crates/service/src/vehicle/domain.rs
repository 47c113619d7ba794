use serde::{Deserialize, Serialize};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterVehicle {
    pub plate_number: String,
    pub balance: f64,
}

/// Domain vehicle (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate_number: String,
    pub balance: f64,
}
