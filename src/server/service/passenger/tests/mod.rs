
use hangar_test_utils::prelude::*;

use crate::{
    model::passenger::{CreatePassengerDto, UpdatePassengerDto},
    server::{error::Error, service::passenger::PassengerService},
};
