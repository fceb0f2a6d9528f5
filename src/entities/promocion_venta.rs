use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Promotion rule set. Applicability lists (products, services, categories) are
/// stored as comma-separated text, matching how the POS edits them; day and
/// time windows constrain when the rule fires.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promociones_venta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub tipo_promocion: String,
    pub valor: Decimal,
    pub monto_minimo: Decimal,
    pub cantidad_minima: Decimal,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: DateTime<Utc>,
    pub productos_aplicables: Option<String>,
    pub servicios_aplicables: Option<String>,
    pub categorias_aplicables: Option<String>,
    pub dias_semana: Option<String>,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
    pub limite_usos: Option<i32>,
    pub contador_usos: i32,
    pub activa: bool,
    pub fecha_registro: DateTime<Utc>,
    pub eliminado: bool,
    pub fecha_eliminacion: Option<DateTime<Utc>>,
    pub eliminado_por: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
