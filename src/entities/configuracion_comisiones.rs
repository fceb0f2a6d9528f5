use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Card-commission policy. Effectively a singleton: the active row drives the
/// commission columns stamped onto each card sale.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "configuracion_comisiones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub porcentaje_comision_tarjeta: Decimal,
    pub terminal_cobra_iva: bool,
    pub porcentaje_iva: Decimal,
    pub activa: bool,
    pub fecha_actualizacion: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
