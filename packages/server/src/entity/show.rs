use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "show")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub artist_id: i32,
    #[sea_orm(belongs_to, from = "artist_id", to = "id")]
    pub artist: HasOne<super::artist::Entity>,

    pub venue_id: i32,
    #[sea_orm(belongs_to, from = "venue_id", to = "id")]
    pub venue: HasOne<super::venue::Entity>,

    pub start_time: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
