use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    pub manufacturer: String,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircraft_ownership::Entity")]
    AircraftOwnership,
}

impl Related<super::aircraft_ownership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftOwnership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
