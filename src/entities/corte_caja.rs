use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// End-of-day cash-register reconciliation. One row per calendar day; the
/// totals are recomputed from the tickets attached to the cut when it closes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cortes_caja")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub fecha_corte: NaiveDate,
    pub cajero: String,
    pub estado: String,
    pub total_ventas: Decimal,
    pub total_efectivo: Decimal,
    pub total_tarjeta: Decimal,
    pub total_transferencia: Decimal,
    pub total_comisiones: Decimal,
    pub ganancia_bruta: Decimal,
    pub ganancia_neta: Decimal,
    pub efectivo_contado: Decimal,
    pub fondo_caja_inicial: Decimal,
    pub fondo_caja_siguiente: Decimal,
    pub monto_depositado: Decimal,
    pub referencia_deposito: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_registro: DateTime<Utc>,
    pub fecha_cierre: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::venta::Entity")]
    Ventas,
}

impl Related<super::venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ventas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
