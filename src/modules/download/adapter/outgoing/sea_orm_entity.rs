use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::download::application::ports::outgoing::NewDownloadRequest;
use crate::modules::download::domain::entities::DownloadRequest;

// SeaORM model for the "downloads" table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "downloads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub email: String,
    pub purpose: String,

    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn from_new_request(data: &NewDownloadRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            purpose: data.purpose.clone(),
            timestamp: chrono::Utc::now().into(),
        }
    }

    pub fn to_domain(&self) -> DownloadRequest {
        DownloadRequest {
            id: self.id,
            email: self.email.clone(),
            purpose: self.purpose.clone(),
            timestamp: self.timestamp.with_timezone(&chrono::Utc),
        }
    }
}
