use sea_orm_migration::prelude::*;

use super::m20240115_000001_create_raw_materials_table::RawMaterials;
use super::m20240322_000004_create_servicios_tables::ServiciosVenta;
use super::m20240410_000005_create_cortes_caja_table::CortesCaja;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ventas (ticket header)
        manager
            .create_table(
                Table::create()
                    .table(Ventas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ventas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ventas::NumeroTicket)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Ventas::FechaVenta)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Ventas::Cliente).string_len(200).null())
                    .col(ColumnDef::new(Ventas::Usuario).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Ventas::SubTotal)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::Iva)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::Total)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::MetodoPago)
                            .string_len(50)
                            .not_null()
                            .default("Efectivo"),
                    )
                    .col(
                        ColumnDef::new(Ventas::Estado)
                            .string_len(30)
                            .not_null()
                            .default("Completada"),
                    )
                    .col(
                        ColumnDef::new(Ventas::TotalDescuentosAplicados)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::MontoEfectivo)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::MontoTarjeta)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::MontoTransferencia)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::PorcentajeComisionTarjeta)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ventas::MontoComisionTarjeta)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Ventas::CorteCajaId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ventas_corte_caja")
                            .from(Ventas::Table, Ventas::CorteCajaId)
                            .to(CortesCaja::Table, CortesCaja::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // detalle_ventas (line items)
        manager
            .create_table(
                Table::create()
                    .table(DetalleVentas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DetalleVentas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DetalleVentas::VentaId).integer().not_null())
                    .col(ColumnDef::new(DetalleVentas::RawMaterialId).integer().null())
                    .col(
                        ColumnDef::new(DetalleVentas::ServicioVentaId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::NombreProducto)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::Cantidad)
                            .decimal_len(18, 3)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::UnidadMedida)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::PrecioUnitario)
                            .decimal_len(18, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::SubTotal)
                            .decimal_len(18, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::CostoUnitario)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::PorcentajeIva)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(16),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::DescuentoUnitario)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::PrecioOriginal)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DetalleVentas::EsDescuentoManual)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detalle_ventas_venta")
                            .from(DetalleVentas::Table, DetalleVentas::VentaId)
                            .to(Ventas::Table, Ventas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detalle_ventas_raw_material")
                            .from(DetalleVentas::Table, DetalleVentas::RawMaterialId)
                            .to(RawMaterials::Table, RawMaterials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detalle_ventas_servicio")
                            .from(DetalleVentas::Table, DetalleVentas::ServicioVentaId)
                            .to(ServiciosVenta::Table, ServiciosVenta::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DetalleVentas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ventas::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ventas {
    Table,
    Id,
    NumeroTicket,
    FechaVenta,
    Cliente,
    Usuario,
    SubTotal,
    Iva,
    Total,
    MetodoPago,
    Estado,
    TotalDescuentosAplicados,
    MontoEfectivo,
    MontoTarjeta,
    MontoTransferencia,
    PorcentajeComisionTarjeta,
    MontoComisionTarjeta,
    CorteCajaId,
}

#[derive(DeriveIden)]
enum DetalleVentas {
    Table,
    Id,
    VentaId,
    RawMaterialId,
    ServicioVentaId,
    NombreProducto,
    Cantidad,
    UnidadMedida,
    PrecioUnitario,
    SubTotal,
    CostoUnitario,
    PorcentajeIva,
    DescuentoUnitario,
    PrecioOriginal,
    EsDescuentoManual,
}
