use sea_orm_migration::prelude::*;

use super::m20240115_000001_create_raw_materials_table::RawMaterials;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // procesos_fabricacion (recipe header)
        manager
            .create_table(
                Table::create()
                    .table(ProcesosFabricacion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcesosFabricacion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::NombreProducto)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::Categoria)
                            .string_len(100)
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::RendimientoEsperado)
                            .decimal_len(18, 3)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::UnidadMedida)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::DuracionMinutos)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::PorcentajeMerma)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::IncluyeManoObra)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::CostoManoObra)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::IncluyeEnergia)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::CostoEnergia)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::IncluyeTransporte)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::CostoTransporte)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::IncluyeEmpaque)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::CostoEmpaque)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::IncluyeOtros)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::CostoOtros)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::MargenGanancia)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ProcesosFabricacion::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // recetas_detalle (recipe lines)
        manager
            .create_table(
                Table::create()
                    .table(RecetasDetalle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecetasDetalle::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::ProcesoFabricacionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::RawMaterialId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::CantidadRequerida)
                            .decimal_len(18, 3)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::UnidadMedida)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::CostoUnitario)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::EsIngredientePrincipal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RecetasDetalle::OrdenAdicion)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recetas_detalle_proceso")
                            .from(RecetasDetalle::Table, RecetasDetalle::ProcesoFabricacionId)
                            .to(ProcesosFabricacion::Table, ProcesosFabricacion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recetas_detalle_raw_material")
                            .from(RecetasDetalle::Table, RecetasDetalle::RawMaterialId)
                            .to(RawMaterials::Table, RawMaterials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recetas_detalle_proceso_id")
                    .table(RecetasDetalle::Table)
                    .col(RecetasDetalle::ProcesoFabricacionId)
                    .to_owned(),
            )
            .await?;

        // lotes_fabricacion (production batch runs)
        manager
            .create_table(
                Table::create()
                    .table(LotesFabricacion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LotesFabricacion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::ProcesoFabricacionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::CantidadPlaneada)
                            .decimal_len(18, 3)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::CantidadObtenida)
                            .decimal_len(18, 3)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::FechaInicio)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(LotesFabricacion::FechaFin).timestamp().null())
                    .col(
                        ColumnDef::new(LotesFabricacion::Estado)
                            .string_len(30)
                            .not_null()
                            .default("EnProceso"),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::CostoRealMateriales)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::CostoRealManoObra)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LotesFabricacion::CostoRealTotal)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LotesFabricacion::Operador).string_len(100).null())
                    .col(
                        ColumnDef::new(LotesFabricacion::ProductoResultanteId)
                            .integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lotes_fabricacion_proceso")
                            .from(LotesFabricacion::Table, LotesFabricacion::ProcesoFabricacionId)
                            .to(ProcesosFabricacion::Table, ProcesosFabricacion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lotes_fabricacion_producto_resultante")
                            .from(LotesFabricacion::Table, LotesFabricacion::ProductoResultanteId)
                            .to(RawMaterials::Table, RawMaterials::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lotes_fabricacion_proceso_id")
                    .table(LotesFabricacion::Table)
                    .col(LotesFabricacion::ProcesoFabricacionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LotesFabricacion::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RecetasDetalle::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProcesosFabricacion::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProcesosFabricacion {
    Table,
    Id,
    NombreProducto,
    Categoria,
    RendimientoEsperado,
    UnidadMedida,
    DuracionMinutos,
    PorcentajeMerma,
    IncluyeManoObra,
    CostoManoObra,
    IncluyeEnergia,
    CostoEnergia,
    IncluyeTransporte,
    CostoTransporte,
    IncluyeEmpaque,
    CostoEmpaque,
    IncluyeOtros,
    CostoOtros,
    MargenGanancia,
    Activo,
    FechaRegistro,
}

#[derive(DeriveIden)]
enum RecetasDetalle {
    Table,
    Id,
    ProcesoFabricacionId,
    RawMaterialId,
    CantidadRequerida,
    UnidadMedida,
    CostoUnitario,
    EsIngredientePrincipal,
    OrdenAdicion,
}

#[derive(DeriveIden)]
enum LotesFabricacion {
    Table,
    Id,
    ProcesoFabricacionId,
    CantidadPlaneada,
    CantidadObtenida,
    FechaInicio,
    FechaFin,
    Estado,
    CostoRealMateriales,
    CostoRealManoObra,
    CostoRealTotal,
    Operador,
    ProductoResultanteId,
}
