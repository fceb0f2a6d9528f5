use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory ledger entry. Every stock change (entrada, salida, ajuste, merma)
/// is recorded with the stock level before and after the movement.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movimientos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub raw_material_id: i32,
    pub tipo_movimiento: String,
    pub cantidad: Decimal,
    pub motivo: Option<String>,
    pub usuario: String,
    pub fecha: DateTime<Utc>,
    pub precio_con_iva: Decimal,
    pub precio_sin_iva: Decimal,
    pub stock_anterior: Decimal,
    pub stock_posterior: Decimal,
    pub cliente: Option<String>,
    pub proveedor: Option<String>,
    pub numero_documento: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::raw_material::Entity",
        from = "Column::RawMaterialId",
        to = "super::raw_material::Column::Id",
        on_delete = "Restrict"
    )]
    RawMaterial,
}

impl Related<super::raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RawMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
