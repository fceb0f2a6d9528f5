use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe line: one raw material and the quantity a single batch requires.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recetas_detalle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub proceso_fabricacion_id: i32,
    pub raw_material_id: i32,
    pub cantidad_requerida: Decimal,
    pub unidad_medida: String,
    pub costo_unitario: Decimal,
    pub es_ingrediente_principal: bool,
    pub orden_adicion: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::proceso_fabricacion::Entity",
        from = "Column::ProcesoFabricacionId",
        to = "super::proceso_fabricacion::Column::Id",
        on_delete = "Cascade"
    )]
    ProcesoFabricacion,
    #[sea_orm(
        belongs_to = "super::raw_material::Entity",
        from = "Column::RawMaterialId",
        to = "super::raw_material::Column::Id",
        on_delete = "Restrict"
    )]
    RawMaterial,
}

impl Related<super::proceso_fabricacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcesoFabricacion.def()
    }
}

impl Related<super::raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RawMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
