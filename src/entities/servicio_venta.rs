use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// Sellable service (as opposed to a physical good), with its costing inputs
/// and POS availability flags.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servicios_venta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria: String,
    pub precio_base: Decimal,
    pub precio_venta: Decimal,
    pub duracion_estimada_min: i32,
    pub costo_materiales: Decimal,
    pub costo_mano_obra: Decimal,
    pub margen_ganancia: Decimal,
    pub porcentaje_iva: Decimal,
    pub disponible_en_pos: bool,
    pub venta_rapida: bool,
    pub activo: bool,
    pub fecha_registro: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
    pub eliminado: bool,
    pub fecha_eliminacion: Option<DateTime<Utc>>,
    pub eliminado_por: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::material_servicio::Entity")]
    MaterialesServicio,
    #[sea_orm(has_many = "super::detalle_venta::Entity")]
    DetalleVentas,
}

impl Related<super::material_servicio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialesServicio.def()
    }
}

impl Related<super::detalle_venta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleVentas.def()
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
