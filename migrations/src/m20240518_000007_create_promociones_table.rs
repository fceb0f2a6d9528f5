use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create promociones_venta table
        manager
            .create_table(
                Table::create()
                    .table(PromocionesVenta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromocionesVenta::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::Nombre)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PromocionesVenta::Descripcion).text().null())
                    .col(
                        ColumnDef::new(PromocionesVenta::TipoPromocion)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::Valor)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::MontoMinimo)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::CantidadMinima)
                            .decimal_len(18, 3)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::FechaInicio)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::FechaFin)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::ProductosAplicables)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::ServiciosAplicables)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::CategoriasAplicables)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::DiasSemana)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::HoraInicio)
                            .string_len(8)
                            .null(),
                    )
                    .col(ColumnDef::new(PromocionesVenta::HoraFin).string_len(8).null())
                    .col(ColumnDef::new(PromocionesVenta::LimiteUsos).integer().null())
                    .col(
                        ColumnDef::new(PromocionesVenta::ContadorUsos)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::Activa)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PromocionesVenta::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop promociones_venta table
        manager
            .drop_table(Table::drop().table(PromocionesVenta::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromocionesVenta {
    Table,
    Id,
    Nombre,
    Descripcion,
    TipoPromocion,
    Valor,
    MontoMinimo,
    CantidadMinima,
    FechaInicio,
    FechaFin,
    ProductosAplicables,
    ServiciosAplicables,
    CategoriasAplicables,
    DiasSemana,
    HoraInicio,
    HoraFin,
    LimiteUsos,
    ContadorUsos,
    Activa,
    FechaRegistro,
}
