use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240921_000012_add_soft_delete_columns"
    }
}

// Soft delete lands on the four catalog tables whose rows back historical
// transactions and therefore must never be hard-deleted from the application.
const TABLES: [SoftDelete; 4] = [
    SoftDelete::RawMaterials,
    SoftDelete::ServiciosVenta,
    SoftDelete::PromocionesVenta,
    SoftDelete::Usuarios,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in TABLES {
            let mut eliminado = ColumnDef::new(Columns::Eliminado);
            eliminado.boolean().not_null().default(false);
            manager
                .alter_table(Table::alter().table(table).add_column(eliminado).to_owned())
                .await?;

            let mut fecha = ColumnDef::new(Columns::FechaEliminacion);
            fecha.timestamp().null();
            manager
                .alter_table(Table::alter().table(table).add_column(fecha).to_owned())
                .await?;

            let mut por = ColumnDef::new(Columns::EliminadoPor);
            por.string_len(100).null();
            manager
                .alter_table(Table::alter().table(table).add_column(por).to_owned())
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in TABLES {
            for column in [Columns::EliminadoPor, Columns::FechaEliminacion, Columns::Eliminado] {
                manager
                    .alter_table(Table::alter().table(table).drop_column(column).to_owned())
                    .await?;
            }
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum SoftDelete {
    RawMaterials,
    ServiciosVenta,
    PromocionesVenta,
    Usuarios,
}

#[derive(DeriveIden, Clone, Copy)]
enum Columns {
    Eliminado,
    FechaEliminacion,
    EliminadoPor,
}
