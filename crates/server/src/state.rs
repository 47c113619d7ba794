use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::vehicle::{repo::seaorm::SeaOrmVehicleRepository, VehicleService};

/// Shared handler state. The connection pool is the only shared mutable resource.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub vehicles: Arc<VehicleService<SeaOrmVehicleRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmVehicleRepository::new(db.clone()));
        Self { db, vehicles: Arc::new(VehicleService::new(repo)) }
    }
}
