use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Manufacturing recipe header. Cost toggles gate which overhead amounts enter
/// the batch costing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procesos_fabricacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_producto: String,
    pub categoria: String,
    pub rendimiento_esperado: Decimal,
    pub unidad_medida: String,
    pub duracion_minutos: i32,
    pub porcentaje_merma: Decimal,
    pub incluye_mano_obra: bool,
    pub costo_mano_obra: Decimal,
    pub incluye_energia: bool,
    pub costo_energia: Decimal,
    pub incluye_transporte: bool,
    pub costo_transporte: Decimal,
    pub incluye_empaque: bool,
    pub costo_empaque: Decimal,
    pub incluye_otros: bool,
    pub costo_otros: Decimal,
    pub margen_ganancia: Decimal,
    pub activo: bool,
    pub fecha_registro: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::receta_detalle::Entity")]
    RecetasDetalle,
    #[sea_orm(has_many = "super::lote_fabricacion::Entity")]
    LotesFabricacion,
}

impl Related<super::receta_detalle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecetasDetalle.def()
    }
}

impl Related<super::lote_fabricacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LotesFabricacion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
