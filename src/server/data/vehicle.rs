//! Vehicle data repository.
//!
//! Vehicles are soft-deleted; every read here only returns active rows.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle};

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active vehicle for `user_id`.
    ///
    /// The owner reference in `params` is ignored; the service decides the owner.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Created vehicle with owner name
    /// - `Err(DbErr)` - Database error, including unique violations on plate or VIN
    pub async fn create(&self, user_id: i32, params: CreateVehicleParams) -> Result<Vehicle, DbErr> {
        let now = Utc::now();
        let entity = entity::vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            make: ActiveValue::Set(params.make),
            model: ActiveValue::Set(params.model),
            year: ActiveValue::Set(params.year),
            license_plate: ActiveValue::Set(params.license_plate),
            vin: ActiveValue::Set(params.vin),
            color: ActiveValue::Set(params.color),
            mileage: ActiveValue::Set(params.mileage),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let owner = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(Vehicle::with_owner(entity, owner))
    }

    /// Finds an active vehicle with its owner's name.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Active vehicle found
    /// - `Ok(None)` - Missing or soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let result = entity::prelude::Vehicle::find_by_id(id)
            .filter(entity::vehicle::Column::Active.eq(true))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(vehicle, owner)| Vehicle::with_owner(vehicle, owner)))
    }

    /// Gets active vehicles, optionally for one owner, ordered by make then model.
    pub async fn get_active(&self, user_id: Option<i32>) -> Result<Vec<Vehicle>, DbErr> {
        let mut query =
            entity::prelude::Vehicle::find().filter(entity::vehicle::Column::Active.eq(true));
        if let Some(user_id) = user_id {
            query = query.filter(entity::vehicle::Column::UserId.eq(user_id));
        }

        let vehicles = query
            .order_by_asc(entity::vehicle::Column::Make)
            .order_by_asc(entity::vehicle::Column::Model)
            .order_by_asc(entity::vehicle::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(vehicle, owner)| Vehicle::with_owner(vehicle, owner))
            .collect();

        Ok(vehicles)
    }

    /// Counts active vehicles per owner.
    ///
    /// Owners with no vehicles are absent from the returned map.
    pub async fn count_active_by_owners(
        &self,
        user_ids: Vec<i32>,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Vehicle::find()
            .select_only()
            .column(entity::vehicle::Column::UserId)
            .column_as(entity::vehicle::Column::Id.count(), "vehicle_count")
            .filter(entity::vehicle::Column::Active.eq(true))
            .filter(entity::vehicle::Column::UserId.is_in(user_ids))
            .group_by(entity::vehicle::Column::UserId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, count)| (user_id, count as u64))
            .collect())
    }

    /// Applies a partial update to an active vehicle.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Updated vehicle
    /// - `Ok(None)` - Missing or soft-deleted
    /// - `Err(DbErr)` - Database error, including unique violations on plate or VIN
    pub async fn update(
        &self,
        id: i32,
        params: UpdateVehicleParams,
    ) -> Result<Option<Vehicle>, DbErr> {
        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(id)
            .filter(entity::vehicle::Column::Active.eq(true))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        if let Some(make) = params.make {
            active_model.make = ActiveValue::Set(make);
        }
        if let Some(model) = params.model {
            active_model.model = ActiveValue::Set(model);
        }
        if let Some(year) = params.year {
            active_model.year = ActiveValue::Set(year);
        }
        if let Some(license_plate) = params.license_plate {
            active_model.license_plate = ActiveValue::Set(license_plate);
        }
        if let Some(vin) = params.vin {
            active_model.vin = ActiveValue::Set(Some(vin));
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(Some(color));
        }
        if let Some(mileage) = params.mileage {
            active_model.mileage = ActiveValue::Set(Some(mileage));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await?;

        self.find_active_by_id(id).await
    }

    /// Raises recorded mileage to `mileage` if it is higher or unset.
    ///
    /// # Returns
    /// - `Ok(true)` - Mileage was raised
    /// - `Ok(false)` - Recorded mileage already at or above the value
    pub async fn raise_mileage(&self, id: i32, mileage: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(entity::vehicle::Column::Mileage.is_null())
                    .add(entity::vehicle::Column::Mileage.lt(mileage)),
            )
            .col_expr(entity::vehicle::Column::Mileage, Expr::value(mileage))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft deletes a vehicle.
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle deactivated
    /// - `Ok(false)` - Missing or already inactive
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(entity::vehicle::Column::Active.eq(true))
            .col_expr(entity::vehicle::Column::Active, Expr::value(false))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
