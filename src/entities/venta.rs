use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale ticket header. The ticket number is the business key printed on the
/// receipt; the payment split columns record how the total was covered.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ventas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub numero_ticket: String,
    pub fecha_venta: DateTime<Utc>,
    pub cliente: Option<String>,
    pub usuario: String,
    pub sub_total: Decimal,
    pub iva: Decimal,
    pub total: Decimal,
    pub metodo_pago: String,
    pub estado: String,
    pub total_descuentos_aplicados: Decimal,
    pub monto_efectivo: Decimal,
    pub monto_tarjeta: Decimal,
    pub monto_transferencia: Decimal,
    pub porcentaje_comision_tarjeta: Decimal,
    pub monto_comision_tarjeta: Decimal,
    pub corte_caja_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detalle_venta::Entity")]
    DetalleVentas,
    #[sea_orm(
        belongs_to = "super::corte_caja::Entity",
        from = "Column::CorteCajaId",
        to = "super::corte_caja::Column::Id",
        on_delete = "SetNull"
    )]
    CorteCaja,
}

impl Related<super::detalle_venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleVentas.def()
    }
}

impl Related<super::corte_caja::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CorteCaja.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
