use super::setup_test_db;
use crate::db::{connect_with_config, DatabaseConfig};
use crate::errors::ModelError;
use crate::vehicle;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use anyhow::Result;
use std::sync::Arc;

#[tokio::test]
async fn test_add_balance_applies_delta() -> Result<()> {
    let db = setup_test_db().await?;
    vehicle::create(&db, "GJ01XY7890", 50.0).await?;

    let updated = vehicle::add_balance(&db, "GJ01XY7890", 70.0).await?.expect("vehicle exists");
    assert_eq!(updated.balance, 120.0);

    let updated = vehicle::add_balance(&db, "GJ01XY7890", -150.0).await?.expect("vehicle exists");
    assert_eq!(updated.balance, -30.0);
    Ok(())
}

#[tokio::test]
async fn test_add_balance_unknown_plate() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(vehicle::add_balance(&db, "GJ99ZZ9999", 50.0).await?.is_none());
    assert!(vehicle::find(&db, "GJ99ZZ9999").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_add_balance_zero_still_found() -> Result<()> {
    let db = setup_test_db().await?;
    vehicle::create(&db, "GJ03EF0001", 10.0).await?;
    let same = vehicle::add_balance(&db, "GJ03EF0001", 0.0).await?.expect("vehicle exists");
    assert_eq!(same.balance, 10.0);
    Ok(())
}

/// Interleaved top-ups on the shared in-memory connection must not lose updates
#[tokio::test]
async fn test_interleaved_add_balance_on_one_connection() -> Result<()> {
    let db = Arc::new(setup_test_db().await?);
    vehicle::create(&db, "GJ04GH0002", 0.0).await?;

    let num_tasks = 20;
    let mut handles = Vec::with_capacity(num_tasks);
    for _ in 0..num_tasks {
        let db = Arc::clone(&db);
        handles.push(tokio::spawn(async move {
            vehicle::add_balance(&db, "GJ04GH0002", 5.0).await
        }));
    }
    for h in handles {
        h.await??.expect("vehicle exists");
    }

    let found = vehicle::find(&db, "GJ04GH0002").await?.expect("vehicle exists");
    assert_eq!(found.balance, 5.0 * num_tasks as f64);
    Ok(())
}

/// Top-ups issued through several pooled connections to one database file
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_add_balance_across_pooled_connections() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("ledger.db").display()),
        max_connections: 4,
        min_connections: 4,
        ..DatabaseConfig::default()
    };
    let db = Arc::new(connect_with_config(&cfg).await?);
    migration::Migrator::up(db.as_ref(), None).await?;
    vehicle::create(&db, "GJ10PQ0006", 0.0).await?;

    let num_tasks = 40;
    let mut handles = Vec::with_capacity(num_tasks);
    for _ in 0..num_tasks {
        let db = Arc::clone(&db);
        handles.push(tokio::spawn(async move {
            vehicle::add_balance(&db, "GJ10PQ0006", 2.5).await
        }));
    }
    for h in handles {
        h.await??.expect("vehicle exists");
    }

    let found = vehicle::find(&db, "GJ10PQ0006").await?.expect("vehicle exists");
    assert_eq!(found.balance, 2.5 * num_tasks as f64);
    Ok(())
}

/// A sum that overflows f64 is rejected and the stored balance is kept
#[tokio::test]
async fn test_add_balance_overflow_rolls_back() -> Result<()> {
    let db = setup_test_db().await?;
    vehicle::create(&db, "GJ11RS0007", 1.7e308).await?;

    let err = vehicle::add_balance(&db, "GJ11RS0007", 1.7e308).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)), "{err:?}");

    let found = vehicle::find(&db, "GJ11RS0007").await?.expect("vehicle exists");
    assert_eq!(found.balance, 1.7e308);

    // the row stays usable
    let lowered = vehicle::add_balance(&db, "GJ11RS0007", -0.7e308).await?.expect("vehicle exists");
    assert!(lowered.balance.is_finite());
    Ok(())
}

/// A rolled back insert leaves no row behind
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let am = vehicle::ActiveModel { plate_number: Set("GJ06IJ0003".into()), balance: Set(1.0) };
    am.insert(&txn).await?;
    txn.rollback().await?;

    assert!(vehicle::Entity::find_by_id("GJ06IJ0003".to_owned()).one(&db).await?.is_none());
    Ok(())
}
