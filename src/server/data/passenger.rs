//! Storage for registered passengers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::{
    model::passenger::UpdatePassengerDto,
    server::model::{db::PassengerModel, passenger::NewPassenger},
};

/// Queries over the `passenger` table
pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    /// Creates a new instance of [`PassengerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every passenger in storage order
    pub async fn get_all(&self) -> Result<Vec<PassengerModel>, DbErr> {
        entity::prelude::Passenger::find().all(self.db).await
    }

    /// Inserts a passenger that has already passed validation
    pub async fn create(&self, passenger: NewPassenger) -> Result<PassengerModel, DbErr> {
        let passenger = entity::passenger::ActiveModel {
            name: ActiveValue::Set(passenger.name),
            cpf: ActiveValue::Set(passenger.cpf),
            phone: ActiveValue::Set(passenger.phone),
            email: ActiveValue::Set(passenger.email),
            date_of_birth: ActiveValue::Set(passenger.date_of_birth),
            ..Default::default()
        };

        passenger.insert(self.db).await
    }

    /// Overwrites the supplied fields of the passenger with the provided ID
    ///
    /// Returns the number of rows updated, zero when no passenger has the ID. No statement
    /// is issued when no fields are supplied.
    pub async fn update(
        &self,
        passenger_id: i32,
        changes: UpdatePassengerDto,
    ) -> Result<u64, DbErr> {
        let mut passenger = entity::passenger::ActiveModel {
            ..Default::default()
        };

        if let Some(name) = changes.name {
            passenger.name = ActiveValue::Set(name);
        }
        if let Some(cpf) = changes.cpf {
            passenger.cpf = ActiveValue::Set(cpf);
        }
        if let Some(phone) = changes.phone {
            passenger.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = changes.email {
            passenger.email = ActiveValue::Set(email);
        }
        if let Some(date_of_birth) = changes.date_of_birth {
            passenger.date_of_birth = ActiveValue::Set(date_of_birth);
        }

        if !passenger.is_changed() {
            return Ok(0);
        }

        entity::prelude::Passenger::update_many()
            .set(passenger)
            .filter(entity::passenger::Column::Id.eq(passenger_id))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    /// Deletes a passenger
    ///
    /// Returns OK regardless of passenger existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, passenger_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Passenger::delete_many()
            .filter(entity::passenger::Column::Id.eq(passenger_id))
            .exec(self.db)
            .await
    }
}
