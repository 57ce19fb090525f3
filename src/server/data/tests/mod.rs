use hangar_test_utils::prelude::*;

use super::{
    aircraft::AircraftRepository, aircraft_ownership::AircraftOwnershipRepository,
    airport::AirportRepository, connection::ConnectionRepository, passenger::PassengerRepository,
};
