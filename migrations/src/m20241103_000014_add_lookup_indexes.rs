use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================
        // MOVIMIENTOS (ledger scans)
        // ============================================

        manager
            .create_index(
                Index::create()
                    .name("idx_movimientos_raw_material_id")
                    .table(Movimientos::Table)
                    .col(Movimientos::RawMaterialId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movimientos_fecha_tipo")
                    .table(Movimientos::Table)
                    .col((Movimientos::Fecha, IndexOrder::Desc))
                    .col(Movimientos::TipoMovimiento)
                    .to_owned(),
            )
            .await?;

        // ============================================
        // RAW MATERIALS (barcode + POS catalog)
        // ============================================

        manager
            .create_index(
                Index::create()
                    .name("idx_raw_materials_codigo_barras")
                    .table(RawMaterials::Table)
                    .col(RawMaterials::CodigoBarras)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_raw_materials_venta_activa")
                    .table(RawMaterials::Table)
                    .col(RawMaterials::Eliminado)
                    .col(RawMaterials::ActivoParaVenta)
                    .to_owned(),
            )
            .await?;

        // ============================================
        // VENTAS / DETALLE (ticket history and joins)
        // ============================================

        manager
            .create_index(
                Index::create()
                    .name("idx_ventas_fecha_estado")
                    .table(Ventas::Table)
                    .col((Ventas::FechaVenta, IndexOrder::Desc))
                    .col(Ventas::Estado)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ventas_corte_caja_id")
                    .table(Ventas::Table)
                    .col(Ventas::CorteCajaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_detalle_ventas_venta_id")
                    .table(DetalleVentas::Table)
                    .col(DetalleVentas::VentaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_detalle_ventas_raw_material_id")
                    .table(DetalleVentas::Table)
                    .col(DetalleVentas::RawMaterialId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_detalle_ventas_servicio_venta_id")
                    .table(DetalleVentas::Table)
                    .col(DetalleVentas::ServicioVentaId)
                    .to_owned(),
            )
            .await?;

        // ============================================
        // PROMOCIONES (active-window scan at checkout)
        // ============================================

        manager
            .create_index(
                Index::create()
                    .name("idx_promociones_venta_vigencia")
                    .table(PromocionesVenta::Table)
                    .col(PromocionesVenta::Activa)
                    .col(PromocionesVenta::FechaInicio)
                    .col(PromocionesVenta::FechaFin)
                    .to_owned(),
            )
            .await?;

        // ============================================
        // LOTES (resulting-product lookups)
        // ============================================

        manager
            .create_index(
                Index::create()
                    .name("idx_lotes_fabricacion_producto_resultante_id")
                    .table(LotesFabricacion::Table)
                    .col(LotesFabricacion::ProductoResultanteId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop all indexes in reverse order

        manager
            .drop_index(
                Index::drop()
                    .name("idx_lotes_fabricacion_producto_resultante_id")
                    .table(LotesFabricacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_promociones_venta_vigencia")
                    .table(PromocionesVenta::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_detalle_ventas_servicio_venta_id")
                    .table(DetalleVentas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_detalle_ventas_raw_material_id")
                    .table(DetalleVentas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_detalle_ventas_venta_id")
                    .table(DetalleVentas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_ventas_corte_caja_id")
                    .table(Ventas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_ventas_fecha_estado")
                    .table(Ventas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_raw_materials_venta_activa")
                    .table(RawMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_raw_materials_codigo_barras")
                    .table(RawMaterials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_movimientos_fecha_tipo")
                    .table(Movimientos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_movimientos_raw_material_id")
                    .table(Movimientos::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

// Table identifiers
#[derive(Iden)]
enum Movimientos {
    Table,
    RawMaterialId,
    Fecha,
    TipoMovimiento,
}

#[derive(Iden)]
enum RawMaterials {
    Table,
    CodigoBarras,
    Eliminado,
    ActivoParaVenta,
}

#[derive(Iden)]
enum Ventas {
    Table,
    FechaVenta,
    Estado,
    CorteCajaId,
}

#[derive(Iden)]
enum DetalleVentas {
    Table,
    VentaId,
    RawMaterialId,
    ServicioVentaId,
}

#[derive(Iden)]
enum PromocionesVenta {
    Table,
    Activa,
    FechaInicio,
    FechaFin,
}

#[derive(Iden)]
enum LotesFabricacion {
    Table,
    ProductoResultanteId,
}
