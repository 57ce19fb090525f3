//! Storage for aircraft ownerships, addressed by aircraft & company.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::{
    model::ownership::{AircraftOwnershipDto, UpdateAircraftOwnershipDto},
    server::model::db::AircraftOwnershipModel,
};

/// Queries over the `aircraft_ownership` table
pub struct AircraftOwnershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftOwnershipRepository<'a, C> {
    /// Creates a new instance of [`AircraftOwnershipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Condition matching exactly one ownership by its full composite key
    fn by_key(aircraft_id: i32, company_id: i32) -> Condition {
        Condition::all()
            .add(entity::aircraft_ownership::Column::AircraftId.eq(aircraft_id))
            .add(entity::aircraft_ownership::Column::CompanyId.eq(company_id))
    }

    /// Get every ownership
    pub async fn get_all(&self) -> Result<Vec<AircraftOwnershipModel>, DbErr> {
        entity::prelude::AircraftOwnership::find().all(self.db).await
    }

    /// Insert an ownership, the aircraft must exist
    pub async fn create(
        &self,
        ownership: AircraftOwnershipDto,
    ) -> Result<AircraftOwnershipModel, DbErr> {
        let ownership = entity::aircraft_ownership::ActiveModel {
            aircraft_id: ActiveValue::Set(ownership.aircraft_id),
            company_id: ActiveValue::Set(ownership.company_id),
            registration: ActiveValue::Set(ownership.registration),
            acquired_on: ActiveValue::Set(ownership.acquired_on),
        };

        ownership.insert(self.db).await
    }

    /// Overwrites the supplied fields of the ownership matching both key halves
    ///
    /// Returns the number of rows updated, zero when no ownership matches. No statement is
    /// issued when no fields are supplied.
    pub async fn update(
        &self,
        aircraft_id: i32,
        company_id: i32,
        changes: UpdateAircraftOwnershipDto,
    ) -> Result<u64, DbErr> {
        let mut ownership = entity::aircraft_ownership::ActiveModel {
            ..Default::default()
        };

        if let Some(registration) = changes.registration {
            ownership.registration = ActiveValue::Set(registration);
        }
        if let Some(acquired_on) = changes.acquired_on {
            ownership.acquired_on = ActiveValue::Set(acquired_on);
        }

        if !ownership.is_changed() {
            return Ok(0);
        }

        entity::prelude::AircraftOwnership::update_many()
            .set(ownership)
            .filter(Self::by_key(aircraft_id, company_id))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    /// Deletes the ownership matching both key halves
    ///
    /// Returns OK regardless of the ownership existing, check
    /// [`DeleteResult::rows_affected`] to confirm.
    pub async fn delete(&self, aircraft_id: i32, company_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AircraftOwnership::delete_many()
            .filter(Self::by_key(aircraft_id, company_id))
            .exec(self.db)
            .await
    }
}
