use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account entity. `intentos_fallidos` and `fecha_bloqueo` back the lockout
/// policy enforced by the login flow.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nombre_usuario: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub rol: String,
    pub activo: bool,
    pub intentos_fallidos: i32,
    pub fecha_bloqueo: Option<DateTime<Utc>>,
    pub ultimo_acceso: Option<DateTime<Utc>>,
    pub fecha_registro: DateTime<Utc>,
    pub eliminado: bool,
    pub fecha_eliminacion: Option<DateTime<Utc>>,
    pub eliminado_por: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sesion_usuario::Entity")]
    Sesiones,
}

impl Related<super::sesion_usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sesiones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
