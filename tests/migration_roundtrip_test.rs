mod common;

use migrations::Migrator;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

const EXPECTED_TABLES: [&str; 15] = [
    "configuracion_bascula",
    "configuracion_comisiones",
    "cortes_caja",
    "detalle_ventas",
    "lotes_fabricacion",
    "materiales_servicio",
    "movimientos",
    "procesos_fabricacion",
    "promociones_venta",
    "raw_materials",
    "recetas_detalle",
    "servicios_venta",
    "sesiones_usuario",
    "usuarios",
    "ventas",
];

async fn application_tables(db: &DatabaseConnection) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name <> 'seaql_migrations' \
             ORDER BY name"
                .to_owned(),
        ))
        .await
        .expect("query sqlite_master");

    rows.iter()
        .map(|row| row.try_get::<String>("", "name").expect("table name"))
        .collect()
}

async fn index_exists(db: &DatabaseConnection, name: &str) -> bool {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name = ?",
            [name.into()],
        ))
        .await
        .expect("query sqlite_master for index");
    row.is_some()
}

#[tokio::test]
async fn up_creates_every_table() {
    let db = common::setup_db().await;

    let tables = application_tables(&db).await;
    assert_eq!(tables, EXPECTED_TABLES);
}

#[tokio::test]
async fn up_creates_lookup_indexes() {
    let db = common::setup_db().await;

    for name in [
        "idx_movimientos_raw_material_id",
        "idx_detalle_ventas_venta_id",
        "idx_detalle_ventas_raw_material_id",
        "idx_detalle_ventas_servicio_venta_id",
        "idx_ventas_corte_caja_id",
        "idx_raw_materials_codigo_barras",
        "idx_promociones_venta_vigencia",
        "idx_sesiones_usuario_usuario_id",
        "idx_lotes_fabricacion_proceso_id",
    ] {
        assert!(index_exists(&db, name).await, "missing index {}", name);
    }
}

#[tokio::test]
async fn up_is_idempotent_once_applied() {
    let db = common::setup_db().await;

    // Second run sees the full history recorded and applies nothing.
    Migrator::up(&db, None).await.expect("re-run migrations");

    let tables = application_tables(&db).await;
    assert_eq!(tables, EXPECTED_TABLES);
}

#[tokio::test]
async fn full_down_restores_pristine_schema() {
    let db = common::setup_db().await;

    Migrator::down(&db, None)
        .await
        .expect("roll back the full history");

    let tables = application_tables(&db).await;
    assert!(
        tables.is_empty(),
        "tables left behind after full rollback: {:?}",
        tables
    );
}

#[tokio::test]
async fn fresh_rebuilds_schema_from_scratch() {
    let db = common::setup_db().await;

    Migrator::fresh(&db).await.expect("fresh rebuild");

    let tables = application_tables(&db).await;
    assert_eq!(tables, EXPECTED_TABLES);
}
