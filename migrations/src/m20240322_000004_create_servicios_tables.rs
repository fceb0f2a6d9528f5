use sea_orm_migration::prelude::*;

use super::m20240115_000001_create_raw_materials_table::RawMaterials;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // servicios_venta
        manager
            .create_table(
                Table::create()
                    .table(ServiciosVenta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiciosVenta::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::Nombre)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiciosVenta::Descripcion).text().null())
                    .col(
                        ColumnDef::new(ServiciosVenta::Categoria)
                            .string_len(100)
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::PrecioBase)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::PrecioVenta)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::DuracionEstimadaMin)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::CostoMateriales)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::CostoManoObra)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::MargenGanancia)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::PorcentajeIva)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(16),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::DisponibleEnPos)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::VentaRapida)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ServiciosVenta::FechaActualizacion)
                            .timestamp()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // materiales_servicio (bill of materials for a service)
        manager
            .create_table(
                Table::create()
                    .table(MaterialesServicio::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MaterialesServicio::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::ServicioVentaId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::RawMaterialId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::CantidadNecesaria)
                            .decimal_len(18, 3)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::UnidadMedida)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::CostoUnitario)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::PorcentajeMerma)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::EsOpcional)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MaterialesServicio::OrdenUso)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_materiales_servicio_servicio")
                            .from(MaterialesServicio::Table, MaterialesServicio::ServicioVentaId)
                            .to(ServiciosVenta::Table, ServiciosVenta::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_materiales_servicio_raw_material")
                            .from(MaterialesServicio::Table, MaterialesServicio::RawMaterialId)
                            .to(RawMaterials::Table, RawMaterials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_materiales_servicio_servicio_id")
                    .table(MaterialesServicio::Table)
                    .col(MaterialesServicio::ServicioVentaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_materiales_servicio_raw_material_id")
                    .table(MaterialesServicio::Table)
                    .col(MaterialesServicio::RawMaterialId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaterialesServicio::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiciosVenta::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ServiciosVenta {
    Table,
    Id,
    Nombre,
    Descripcion,
    Categoria,
    PrecioBase,
    PrecioVenta,
    DuracionEstimadaMin,
    CostoMateriales,
    CostoManoObra,
    MargenGanancia,
    PorcentajeIva,
    DisponibleEnPos,
    VentaRapida,
    Activo,
    FechaRegistro,
    FechaActualizacion,
}

#[derive(DeriveIden)]
enum MaterialesServicio {
    Table,
    Id,
    ServicioVentaId,
    RawMaterialId,
    CantidadNecesaria,
    UnidadMedida,
    CostoUnitario,
    PorcentajeMerma,
    EsOpcional,
    OrdenUso,
}
