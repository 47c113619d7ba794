use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue, DatabaseConnection, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Longest plate number the `vehicles.plate_number` column accepts.
pub const PLATE_NUMBER_MAX_LEN: usize = 32;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub plate_number: String,
    pub balance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_plate_number(plate_number: &str) -> Result<(), ModelError> {
    if plate_number.trim().is_empty() {
        return Err(ModelError::Validation("plate_number required".into()));
    }
    if plate_number.chars().count() > PLATE_NUMBER_MAX_LEN {
        return Err(ModelError::Validation(format!(
            "plate_number must be at most {PLATE_NUMBER_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Insert a new vehicle. A plate that already exists yields `ModelError::Conflict`.
pub async fn create(db: &DatabaseConnection, plate_number: &str, balance: f64) -> Result<Model, ModelError> {
    validate_plate_number(plate_number)?;
    let am = ActiveModel {
        plate_number: Set(plate_number.to_string()),
        balance: Set(balance),
    };
    am.insert(db).await.map_err(ModelError::from)
}

pub async fn find(db: &DatabaseConnection, plate_number: &str) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(plate_number.to_owned())
        .one(db)
        .await
        .map_err(ModelError::from)
}

/// Write back the balance of a row previously read from the store.
pub async fn update(db: &DatabaseConnection, vehicle: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        plate_number: ActiveValue::Unchanged(vehicle.plate_number),
        balance: Set(vehicle.balance),
    };
    am.update(db).await.map_err(ModelError::from)
}

/// Add `amount` to the stored balance in a single statement and read the row back
/// in the same transaction. Returns `None` when the plate is unknown and
/// `ModelError::Validation` when the new balance would not be finite.
pub async fn add_balance(db: &DatabaseConnection, plate_number: &str, amount: f64) -> Result<Option<Model>, ModelError> {
    let txn = db.begin().await?;
    let res = Entity::update_many()
        .col_expr(Column::Balance, Expr::col(Column::Balance).add(amount))
        .filter(Column::PlateNumber.eq(plate_number))
        .exec(&txn)
        .await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(None);
    }
    let updated = Entity::find_by_id(plate_number.to_owned()).one(&txn).await?;
    if let Some(row) = &updated {
        // SQLite stores an overflowing sum as Inf; keep the previous balance instead
        if !row.balance.is_finite() {
            txn.rollback().await?;
            return Err(ModelError::Validation(format!(
                "top-up of {amount} would overflow the balance"
            )));
        }
    }
    txn.commit().await?;
    Ok(updated)
}
