mod common;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
};

use puntoventa::entities::{
    detalle_venta, lote_fabricacion, proceso_fabricacion, receta_detalle, sesion_usuario, usuario,
    venta,
};

#[tokio::test]
async fn deleting_venta_cascades_its_detalles() {
    let db = common::setup_db().await;

    let material = common::insert_raw_material(&db, "Azucar estandar").await;
    let ticket = common::insert_venta(&db, "T-000400").await;
    common::insert_detalle_material(&db, ticket.id, material.id).await;
    common::insert_detalle_material(&db, ticket.id, material.id).await;

    venta::Entity::delete_by_id(ticket.id)
        .exec(&db)
        .await
        .expect("delete venta");

    let restantes = detalle_venta::Entity::find()
        .filter(detalle_venta::Column::VentaId.eq(ticket.id))
        .count(&db)
        .await
        .expect("count detalles");
    assert_eq!(restantes, 0, "line items are lifecycle-bound to the ticket");
}

#[tokio::test]
async fn deleting_proceso_cascades_recetas_and_lotes() {
    let db = common::setup_db().await;

    let material = common::insert_raw_material(&db, "Harina de trigo").await;
    let proceso = common::insert_proceso(&db, "Pan blanco").await;
    common::insert_receta(&db, proceso.id, material.id).await;
    common::insert_lote(&db, proceso.id, None).await;

    proceso_fabricacion::Entity::delete_by_id(proceso.id)
        .exec(&db)
        .await
        .expect("delete proceso");

    let recetas = receta_detalle::Entity::find()
        .filter(receta_detalle::Column::ProcesoFabricacionId.eq(proceso.id))
        .count(&db)
        .await
        .expect("count recetas");
    let lotes = lote_fabricacion::Entity::find()
        .filter(lote_fabricacion::Column::ProcesoFabricacionId.eq(proceso.id))
        .count(&db)
        .await
        .expect("count lotes");

    assert_eq!(recetas, 0);
    assert_eq!(lotes, 0);
}

#[tokio::test]
async fn deleting_usuario_cascades_its_sesiones() {
    let db = common::setup_db().await;

    let user = common::insert_usuario(&db, "mperez", "mperez@tienda.mx").await;
    common::insert_sesion(&db, user.id, "f3a9c1d870b24e55").await;
    common::insert_sesion(&db, user.id, "0be2d74c91aa4873").await;

    usuario::Entity::delete_by_id(user.id)
        .exec(&db)
        .await
        .expect("delete usuario");

    let sesiones = sesion_usuario::Entity::find()
        .filter(sesion_usuario::Column::UsuarioId.eq(user.id))
        .count(&db)
        .await
        .expect("count sesiones");
    assert_eq!(sesiones, 0);
}

#[tokio::test]
async fn deleting_resulting_product_nulls_lote_reference() {
    let db = common::setup_db().await;

    // The resulting product must not be referenced by any restrict FK,
    // otherwise the delete would be blocked before SetNull applies.
    let producto = common::insert_raw_material(&db, "Pan blanco terminado").await;
    let proceso = common::insert_proceso(&db, "Pan blanco").await;
    let lote = common::insert_lote(&db, proceso.id, Some(producto.id)).await;

    puntoventa::entities::raw_material::Entity::delete_by_id(producto.id)
        .exec(&db)
        .await
        .expect("delete resulting product");

    let recargado = lote_fabricacion::Entity::find_by_id(lote.id)
        .one(&db)
        .await
        .expect("reload lote")
        .expect("lote still exists");
    assert_eq!(recargado.producto_resultante_id, None);
}

#[tokio::test]
async fn deleting_corte_nulls_venta_link() {
    let db = common::setup_db().await;

    let corte = common::insert_corte(&db, NaiveDate::from_ymd_opt(2024, 11, 3).unwrap()).await;
    let ticket = common::insert_venta(&db, "T-000500").await;

    let mut attached: venta::ActiveModel = ticket.clone().into();
    attached.corte_caja_id = Set(Some(corte.id));
    attached.update(&db).await.expect("attach ticket to corte");

    puntoventa::entities::corte_caja::Entity::delete_by_id(corte.id)
        .exec(&db)
        .await
        .expect("delete corte");

    let recargada = venta::Entity::find_by_id(ticket.id)
        .one(&db)
        .await
        .expect("reload venta")
        .expect("venta still exists");
    assert_eq!(recargada.corte_caja_id, None);
}

#[tokio::test]
async fn find_related_navigates_ticket_lines() {
    let db = common::setup_db().await;

    let material = common::insert_raw_material(&db, "Azucar estandar").await;
    let servicio = common::insert_servicio(&db, "Molienda de nixtamal").await;
    let ticket = common::insert_venta(&db, "T-000600").await;
    common::insert_detalle_material(&db, ticket.id, material.id).await;
    common::insert_detalle_servicio(&db, ticket.id, servicio.id).await;

    let lineas = ticket
        .find_related(detalle_venta::Entity)
        .all(&db)
        .await
        .expect("find related detalles");

    assert_eq!(lineas.len(), 2);
    assert!(lineas.iter().all(|l| l.referencia_valida()));
}
