use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale line item. Exactly one of `raw_material_id` / `servicio_venta_id` is
/// set: a line sells either a physical good or a service, never both.
/// Product name, unit and prices are denormalized so the ticket survives later
/// catalog edits.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "detalle_ventas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub venta_id: i32,
    pub raw_material_id: Option<i32>,
    pub servicio_venta_id: Option<i32>,
    pub nombre_producto: String,
    pub cantidad: Decimal,
    pub unidad_medida: String,
    pub precio_unitario: Decimal,
    pub sub_total: Decimal,
    pub costo_unitario: Decimal,
    pub porcentaje_iva: Decimal,
    pub descuento_unitario: Decimal,
    pub precio_original: Decimal,
    pub es_descuento_manual: bool,
}

impl Model {
    /// True when the line references exactly one sellable (good or service).
    pub fn referencia_valida(&self) -> bool {
        self.raw_material_id.is_some() != self.servicio_venta_id.is_some()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::venta::Entity",
        from = "Column::VentaId",
        to = "super::venta::Column::Id",
        on_delete = "Cascade"
    )]
    Venta,
    #[sea_orm(
        belongs_to = "super::raw_material::Entity",
        from = "Column::RawMaterialId",
        to = "super::raw_material::Column::Id",
        on_delete = "Restrict"
    )]
    RawMaterial,
    #[sea_orm(
        belongs_to = "super::servicio_venta::Entity",
        from = "Column::ServicioVentaId",
        to = "super::servicio_venta::Column::Id",
        on_delete = "Restrict"
    )]
    ServicioVenta,
}

impl Related<super::venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venta.def()
    }
}

impl Related<super::raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RawMaterial.def()
    }
}

impl Related<super::servicio_venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServicioVenta.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
