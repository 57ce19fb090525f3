use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub origin_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub destination_id: i32,
    pub distance_km: i32,
    pub duration_minutes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::OriginId",
        to = "super::airport::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Origin,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DestinationId",
        to = "super::airport::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Destination,
}

impl ActiveModelBehavior for ActiveModel {}
