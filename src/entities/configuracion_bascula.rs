use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Serial-port profile for a connected weighing scale. At most one profile is
/// active; the command strings and extraction pattern are device-specific.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "configuracion_bascula")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub puerto: String,
    pub baud_rate: i32,
    pub data_bits: i32,
    pub paridad: String,
    pub stop_bits: String,
    pub handshake: String,
    pub timeout_lectura_ms: i32,
    pub timeout_escritura_ms: i32,
    pub unidad_peso: String,
    pub comando_solicitar_peso: Option<String>,
    pub comando_tara: Option<String>,
    pub patron_extraccion: Option<String>,
    pub activa: bool,
    pub fecha_registro: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
