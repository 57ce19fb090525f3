use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_EMAIL, TEST_NAME, TEST_PHONE},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn passenger<'a>(&'a self) -> PassengerFixtures<'a> {
        PassengerFixtures { setup: self }
    }
}

pub struct PassengerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PassengerFixtures<'a> {
    /// Insert a passenger straight into storage with the given CPF.
    pub async fn insert_mock_passenger(
        &self,
        cpf: &str,
    ) -> Result<entity::passenger::Model, TestError> {
        Ok(
            entity::prelude::Passenger::insert(entity::passenger::ActiveModel {
                name: ActiveValue::Set(TEST_NAME.to_string()),
                cpf: ActiveValue::Set(cpf.to_string()),
                phone: ActiveValue::Set(TEST_PHONE.to_string()),
                email: ActiveValue::Set(TEST_EMAIL.to_string()),
                date_of_birth: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 4, 21).unwrap()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
