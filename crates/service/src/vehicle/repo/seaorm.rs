use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::vehicle::domain::Vehicle;
use crate::vehicle::repository::VehicleRepository;

/// SeaORM-backed repository implementation.
#[derive(Debug, Clone)]
pub struct SeaOrmVehicleRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl From<models::vehicle::Model> for Vehicle {
    fn from(m: models::vehicle::Model) -> Self {
        Vehicle { plate_number: m.plate_number, balance: m.balance }
    }
}

impl From<&Vehicle> for models::vehicle::Model {
    fn from(v: &Vehicle) -> Self {
        models::vehicle::Model { plate_number: v.plate_number.clone(), balance: v.balance }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn find_by_plate(&self, plate_number: &str) -> Result<Option<Vehicle>, ServiceError> {
        let found = models::vehicle::find(&self.db, plate_number).await?;
        Ok(found.map(Vehicle::from))
    }

    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError> {
        let created = models::vehicle::create(&self.db, &vehicle.plate_number, vehicle.balance).await?;
        Ok(created.into())
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError> {
        let updated = models::vehicle::update(&self.db, vehicle.into()).await?;
        Ok(updated.into())
    }

    async fn add_balance(&self, plate_number: &str, amount: f64) -> Result<Option<Vehicle>, ServiceError> {
        let updated = models::vehicle::add_balance(&self.db, plate_number, amount).await?;
        Ok(updated.map(Vehicle::from))
    }
}
