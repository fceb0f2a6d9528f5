use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// Inventory stock-keeping unit: ingredient, manufactured product or resale item.
///
/// Rows are never hard-deleted while referenced by ledger or sales history;
/// `eliminado` marks them out of the active catalog instead.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "raw_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub categoria: String,
    pub unidad_medida: String,
    pub stock_anterior: Decimal,
    pub stock_nuevo: Decimal,
    pub precio_por_unidad: Decimal,
    pub precio_con_iva: Decimal,
    pub precio_sin_iva: Decimal,
    pub proveedor: Option<String>,
    pub codigo_barras: Option<String>,
    pub factor_conversion: Decimal,
    pub unidad_base: Option<String>,
    pub fecha_registro: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
    pub activo_para_venta: bool,
    pub precio_venta: Decimal,
    pub descuento_venta: Decimal,
    pub fecha_caducidad: Option<NaiveDate>,
    pub margen_ganancia: Decimal,
    pub eliminado: bool,
    pub fecha_eliminacion: Option<DateTime<Utc>>,
    pub eliminado_por: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movimiento::Entity")]
    Movimientos,
    #[sea_orm(has_many = "super::detalle_venta::Entity")]
    DetalleVentas,
    #[sea_orm(has_many = "super::material_servicio::Entity")]
    MaterialesServicio,
    #[sea_orm(has_many = "super::receta_detalle::Entity")]
    RecetasDetalle,
    #[sea_orm(has_many = "super::lote_fabricacion::Entity")]
    LotesFabricacion,
}

impl Related<super::movimiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movimientos.def()
    }
}

impl Related<super::detalle_venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleVentas.def()
    }
}

impl Related<super::material_servicio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialesServicio.def()
    }
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

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        let now = Utc::now();

        if insert {
            if let ActiveValue::NotSet = active_model.fecha_registro {
                active_model.fecha_registro = Set(now);
            }
        } else {
            active_model.fecha_actualizacion = Set(Some(now));
        }

        Ok(active_model)
    }
}
