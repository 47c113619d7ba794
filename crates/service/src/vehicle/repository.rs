use async_trait::async_trait;

use super::domain::Vehicle;
use crate::errors::ServiceError;

/// Repository abstraction for vehicle persistence.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// `Ok(None)` when no vehicle has this plate.
    async fn find_by_plate(&self, plate_number: &str) -> Result<Option<Vehicle>, ServiceError>;
    /// Persist a new vehicle; `ServiceError::AlreadyExists` if the plate is taken.
    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError>;
    /// Persist the balance of a vehicle previously read from this repository.
    async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError>;
    /// Atomically add `amount` to the balance; `Ok(None)` when the plate is unknown,
    /// `ServiceError::Validation` when the result would not be finite.
    async fn add_balance(&self, plate_number: &str, amount: f64) -> Result<Option<Vehicle>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Debug, Default)]
    pub struct MockVehicleRepository {
        vehicles: Mutex<HashMap<String, Vehicle>>, // key: plate_number
    }

    impl MockVehicleRepository {
        fn vehicles(&self) -> Result<MutexGuard<'_, HashMap<String, Vehicle>>, ServiceError> {
            self.vehicles.lock().map_err(|e| ServiceError::Db(e.to_string()))
        }

        pub fn len(&self) -> Result<usize, ServiceError> {
            Ok(self.vehicles()?.len())
        }
    }

    #[async_trait]
    impl VehicleRepository for MockVehicleRepository {
        async fn find_by_plate(&self, plate_number: &str) -> Result<Option<Vehicle>, ServiceError> {
            Ok(self.vehicles()?.get(plate_number).cloned())
        }

        async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError> {
            let mut vehicles = self.vehicles()?;
            if vehicles.contains_key(&vehicle.plate_number) {
                return Err(ServiceError::AlreadyExists);
            }
            vehicles.insert(vehicle.plate_number.clone(), vehicle.clone());
            Ok(vehicle.clone())
        }

        async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError> {
            let mut vehicles = self.vehicles()?;
            let stored = vehicles.get_mut(&vehicle.plate_number).ok_or(ServiceError::NotFound)?;
            stored.balance = vehicle.balance;
            Ok(stored.clone())
        }

        async fn add_balance(&self, plate_number: &str, amount: f64) -> Result<Option<Vehicle>, ServiceError> {
            let mut vehicles = self.vehicles()?;
            let Some(v) = vehicles.get_mut(plate_number) else {
                return Ok(None);
            };
            let balance = v.balance + amount;
            if !balance.is_finite() {
                return Err(ServiceError::Validation(format!(
                    "top-up of {amount} would overflow the balance"
                )));
            }
            v.balance = balance;
            Ok(Some(v.clone()))
        }
    }
}
