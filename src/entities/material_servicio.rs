use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill-of-materials line for a service: how much of which raw material the
/// service consumes, in usage order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materiales_servicio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub servicio_venta_id: i32,
    pub raw_material_id: i32,
    pub cantidad_necesaria: Decimal,
    pub unidad_medida: String,
    pub costo_unitario: Decimal,
    pub porcentaje_merma: Decimal,
    pub es_opcional: bool,
    pub orden_uso: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::servicio_venta::Entity",
        from = "Column::ServicioVentaId",
        to = "super::servicio_venta::Column::Id",
        on_delete = "Cascade"
    )]
    ServicioVenta,
    #[sea_orm(
        belongs_to = "super::raw_material::Entity",
        from = "Column::RawMaterialId",
        to = "super::raw_material::Column::Id",
        on_delete = "Restrict"
    )]
    RawMaterial,
}

impl Related<super::servicio_venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServicioVenta.def()
    }
}

impl Related<super::raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RawMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
