use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Production batch run against a recipe. `producto_resultante_id` links the
/// batch to the raw material it stocked; the link is informational and is
/// cleared if that material row ever goes away.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lotes_fabricacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub proceso_fabricacion_id: i32,
    pub cantidad_planeada: Decimal,
    pub cantidad_obtenida: Decimal,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub estado: String,
    pub costo_real_materiales: Decimal,
    pub costo_real_mano_obra: Decimal,
    pub costo_real_total: Decimal,
    pub operador: Option<String>,
    pub producto_resultante_id: Option<i32>,
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
        from = "Column::ProductoResultanteId",
        to = "super::raw_material::Column::Id",
        on_delete = "SetNull"
    )]
    ProductoResultante,
}

impl Related<super::proceso_fabricacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcesoFabricacion.def()
    }
}

impl Related<super::raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductoResultante.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
