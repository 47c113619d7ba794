use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{RegisterVehicle, Vehicle};
use super::repository::VehicleRepository;
use crate::errors::ServiceError;

/// Vehicle business service independent of web framework
pub struct VehicleService<R: VehicleRepository> {
    repo: Arc<R>,
}

impl<R: VehicleRepository> VehicleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new vehicle with its opening balance.
    ///
    /// # Examples
    /// ```
    /// use service::vehicle::{VehicleService, repository::mock::MockVehicleRepository};
    /// use service::vehicle::domain::RegisterVehicle;
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = VehicleService::new(Arc::new(MockVehicleRepository::default()));
    /// let input = RegisterVehicle { plate_number: "GJ01AB1234".into(), balance: 100.0 };
    /// let vehicle = tokio_test::block_on(svc.register(input.clone())).unwrap();
    /// assert_eq!(vehicle.balance, 100.0);
    /// let again = tokio_test::block_on(svc.register(input));
    /// assert!(matches!(again, Err(ServiceError::AlreadyExists)));
    /// ```
    #[instrument(skip(self, input), fields(plate_number = %input.plate_number))]
    pub async fn register(&self, input: RegisterVehicle) -> Result<Vehicle, ServiceError> {
        models::vehicle::validate_plate_number(&input.plate_number)?;
        if let Some(existing) = self.repo.find_by_plate(&input.plate_number).await? {
            debug!(balance = existing.balance, "vehicle already registered");
            return Err(ServiceError::AlreadyExists);
        }

        // the store's primary key rejects a racing registration that got past the check above
        let vehicle = Vehicle { plate_number: input.plate_number, balance: input.balance };
        let created = self.repo.create(&vehicle).await?;
        info!(balance = created.balance, "vehicle_registered");
        Ok(created)
    }

    /// Add a signed amount to the balance of a registered vehicle.
    ///
    /// Negative amounts are accepted and lower the balance.
    ///
    /// # Examples
    /// ```
    /// use service::vehicle::{VehicleService, repository::mock::MockVehicleRepository};
    /// use service::vehicle::domain::RegisterVehicle;
    /// use std::sync::Arc;
    /// let svc = VehicleService::new(Arc::new(MockVehicleRepository::default()));
    /// let _ = tokio_test::block_on(svc.register(RegisterVehicle { plate_number: "GJ01XY7890".into(), balance: 50.0 }));
    /// let vehicle = tokio_test::block_on(svc.top_up("GJ01XY7890", 70.0)).unwrap();
    /// assert_eq!(vehicle.balance, 120.0);
    /// ```
    #[instrument(skip(self))]
    pub async fn top_up(&self, plate_number: &str, amount: f64) -> Result<Vehicle, ServiceError> {
        let updated = self
            .repo
            .add_balance(plate_number, amount)
            .await?
            .ok_or(ServiceError::NotFound)?;
        info!(balance = updated.balance, "vehicle_topped_up");
        Ok(updated)
    }

    /// Current record for a plate.
    #[instrument(skip(self))]
    pub async fn balance(&self, plate_number: &str) -> Result<Vehicle, ServiceError> {
        self.repo
            .find_by_plate(plate_number)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::repository::mock::MockVehicleRepository;

    fn svc() -> (Arc<MockVehicleRepository>, VehicleService<MockVehicleRepository>) {
        let repo = Arc::new(MockVehicleRepository::default());
        (repo.clone(), VehicleService::new(repo))
    }

    fn input(plate: &str, balance: f64) -> RegisterVehicle {
        RegisterVehicle { plate_number: plate.into(), balance }
    }

    #[tokio::test]
    async fn register_then_balance_returns_same_balance() -> Result<(), ServiceError> {
        let (_, svc) = svc();
        let created = svc.register(input("GJ01AB1234", 100.0)).await?;
        assert_eq!(created, Vehicle { plate_number: "GJ01AB1234".into(), balance: 100.0 });
        assert_eq!(svc.balance("GJ01AB1234").await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn second_registration_fails_and_keeps_first() -> Result<(), ServiceError> {
        let (repo, svc) = svc();
        svc.register(input("GJ01AB1234", 100.0)).await?;
        let err = svc.register(input("GJ01AB1234", 200.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists));
        assert_eq!(svc.balance("GJ01AB1234").await?.balance, 100.0);
        assert_eq!(repo.len()?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn top_up_adds_exactly() -> Result<(), ServiceError> {
        let (_, svc) = svc();
        for (b, a) in [(50.0, 70.0), (0.1, 0.2), (1e9, 0.5), (10.0, -25.0)] {
            let plate = format!("P{b}{a}");
            svc.register(input(&plate, b)).await?;
            assert_eq!(svc.top_up(&plate, a).await?.balance, b + a);
            assert_eq!(svc.balance(&plate).await?.balance, b + a);
        }
        Ok(())
    }

    #[tokio::test]
    async fn unknown_plate_is_not_found() {
        let (_, svc) = svc();
        assert!(matches!(svc.top_up("GJ99ZZ9999", 50.0).await, Err(ServiceError::NotFound)));
        assert!(matches!(svc.balance("GJ09NO0000").await, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn balance_is_idempotent() -> Result<(), ServiceError> {
        let (_, svc) = svc();
        svc.register(input("GJ02CD5678", 300.0)).await?;
        let first = svc.balance("GJ02CD5678").await?;
        let second = svc.balance("GJ02CD5678").await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn overflowing_top_up_keeps_previous_balance() -> Result<(), ServiceError> {
        let (_, svc) = svc();
        svc.register(input("GJ05OV0001", f64::MAX)).await?;
        let err = svc.top_up("GJ05OV0001", f64::MAX).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "{err:?}");
        assert_eq!(svc.balance("GJ05OV0001").await?.balance, f64::MAX);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_plates_are_rejected_before_storage() -> Result<(), ServiceError> {
        let (repo, svc) = svc();
        let too_long = "A".repeat(33);
        for plate in ["", "  ", too_long.as_str()] {
            let err = svc.register(input(plate, 1.0)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "plate {plate:?}: {err:?}");
        }
        assert_eq!(repo.len()?, 0);
        Ok(())
    }
}
