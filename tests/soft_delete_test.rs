mod common;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use puntoventa::entities::{movimiento, promocion_venta, raw_material};

#[tokio::test]
async fn soft_deleted_promocion_is_excluded_from_active_queries() {
    let db = common::setup_db().await;

    common::insert_promocion(&db, "10% en abarrotes").await;
    let retirada = common::insert_promocion(&db, "2x1 temporal").await;

    let mut baja: promocion_venta::ActiveModel = retirada.into();
    baja.eliminado = Set(true);
    baja.fecha_eliminacion = Set(Some(Utc::now()));
    baja.eliminado_por = Set(Some("admin".to_string()));
    baja.activa = Set(false);
    baja.update(&db).await.expect("soft delete promocion");

    let activas = promocion_venta::Entity::find()
        .filter(promocion_venta::Column::Eliminado.eq(false))
        .count(&db)
        .await
        .expect("count active promotions");
    assert_eq!(activas, 1);

    // The row itself stays behind for the audit trail.
    let todas = promocion_venta::Entity::find()
        .count(&db)
        .await
        .expect("count all promotions");
    assert_eq!(todas, 2);
}

#[tokio::test]
async fn soft_deleted_material_keeps_its_ledger_history() {
    let db = common::setup_db().await;

    let material = common::insert_raw_material(&db, "Azucar estandar").await;
    common::insert_movimiento(&db, material.id).await;

    let mut baja: raw_material::ActiveModel = material.clone().into();
    baja.eliminado = Set(true);
    baja.fecha_eliminacion = Set(Some(Utc::now()));
    baja.eliminado_por = Set(Some("admin".to_string()));
    baja.activo_para_venta = Set(false);
    baja.update(&db).await.expect("soft delete material");

    // Soft delete leaves the ledger intact...
    let movimientos = movimiento::Entity::find()
        .filter(movimiento::Column::RawMaterialId.eq(material.id))
        .count(&db)
        .await
        .expect("count movimientos");
    assert_eq!(movimientos, 1);

    // ...and a hard delete is still rejected while history references the row.
    let result = raw_material::Entity::delete_by_id(material.id).exec(&db).await;
    assert!(result.is_err());
}
