use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft_ownership")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub aircraft_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: i32,
    pub registration: String,
    pub acquired_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Aircraft,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
