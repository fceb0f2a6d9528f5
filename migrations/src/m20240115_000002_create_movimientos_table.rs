use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create movimientos table (inventory ledger)
        manager
            .create_table(
                Table::create()
                    .table(Movimientos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movimientos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Movimientos::RawMaterialId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Movimientos::TipoMovimiento)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Movimientos::Cantidad)
                            .decimal_len(18, 3)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Movimientos::Motivo).string_len(300).null())
                    .col(
                        ColumnDef::new(Movimientos::Usuario)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Movimientos::Fecha)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movimientos::PrecioConIva)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movimientos::PrecioSinIva)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movimientos::StockAnterior)
                            .decimal_len(18, 3)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movimientos::StockPosterior)
                            .decimal_len(18, 3)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Movimientos::Cliente).string_len(200).null())
                    .col(ColumnDef::new(Movimientos::Proveedor).string_len(200).null())
                    .col(
                        ColumnDef::new(Movimientos::NumeroDocumento)
                            .string_len(100)
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movimientos_raw_material_id")
                            .from(Movimientos::Table, Movimientos::RawMaterialId)
                            .to(
                                super::m20240115_000001_create_raw_materials_table::RawMaterials::Table,
                                super::m20240115_000001_create_raw_materials_table::RawMaterials::Id,
                            )
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop movimientos table
        manager
            .drop_table(Table::drop().table(Movimientos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movimientos {
    Table,
    Id,
    RawMaterialId,
    TipoMovimiento,
    Cantidad,
    Motivo,
    Usuario,
    Fecha,
    PrecioConIva,
    PrecioSinIva,
    StockAnterior,
    StockPosterior,
    Cliente,
    Proveedor,
    NumeroDocumento,
}
