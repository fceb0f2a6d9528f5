use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create raw_materials table
        manager
            .create_table(
                Table::create()
                    .table(RawMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RawMaterials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::Nombre)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::Categoria)
                            .string_len(100)
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::UnidadMedida)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::StockAnterior)
                            .decimal_len(18, 3)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::StockNuevo)
                            .decimal_len(18, 3)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::PrecioPorUnidad)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::PrecioConIva)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::PrecioSinIva)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(RawMaterials::Proveedor).string_len(200).null())
                    .col(
                        ColumnDef::new(RawMaterials::CodigoBarras)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::FactorConversion)
                            .decimal_len(18, 6)
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(RawMaterials::UnidadBase).string_len(50).null())
                    .col(
                        ColumnDef::new(RawMaterials::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::FechaActualizacion)
                            .timestamp()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop raw_materials table
        manager
            .drop_table(Table::drop().table(RawMaterials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RawMaterials {
    Table,
    Id,
    Nombre,
    Categoria,
    UnidadMedida,
    StockAnterior,
    StockNuevo,
    PrecioPorUnidad,
    PrecioConIva,
    PrecioSinIva,
    Proveedor,
    CodigoBarras,
    FactorConversion,
    UnidadBase,
    FechaRegistro,
    FechaActualizacion,
}
