pub use sea_orm_migration::prelude::*;

mod m20240115_000001_create_raw_materials_table;
mod m20240115_000002_create_movimientos_table;
mod m20240210_000003_create_usuarios_tables;
mod m20240322_000004_create_servicios_tables;
mod m20240410_000005_create_cortes_caja_table;
mod m20240410_000006_create_ventas_tables;
mod m20240518_000007_create_promociones_table;
mod m20240602_000008_create_configuracion_comisiones_table;
mod m20240627_000009_create_configuracion_bascula_table;
mod m20240715_000010_create_fabricacion_tables;
mod m20240809_000011_add_sale_columns_to_raw_materials;
mod m20240921_000012_add_soft_delete_columns;
mod m20241012_000013_add_session_audit_columns;
mod m20241103_000014_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_raw_materials_table::Migration),
            Box::new(m20240115_000002_create_movimientos_table::Migration),
            Box::new(m20240210_000003_create_usuarios_tables::Migration),
            Box::new(m20240322_000004_create_servicios_tables::Migration),
            Box::new(m20240410_000005_create_cortes_caja_table::Migration),
            Box::new(m20240410_000006_create_ventas_tables::Migration),
            Box::new(m20240518_000007_create_promociones_table::Migration),
            Box::new(m20240602_000008_create_configuracion_comisiones_table::Migration),
            Box::new(m20240627_000009_create_configuracion_bascula_table::Migration),
            Box::new(m20240715_000010_create_fabricacion_tables::Migration),
            Box::new(m20240809_000011_add_sale_columns_to_raw_materials::Migration),
            Box::new(m20240921_000012_add_soft_delete_columns::Migration),
            Box::new(m20241012_000013_add_session_audit_columns::Migration),
            Box::new(m20241103_000014_add_lookup_indexes::Migration),
        ]
    }
}
