use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cortes_caja table (daily cash-register reconciliation)
        manager
            .create_table(
                Table::create()
                    .table(CortesCaja::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CortesCaja::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::FechaCorte)
                            .date()
                            .not_null()
                            .unique_key()
                            .default(Expr::current_date()),
                    )
                    .col(ColumnDef::new(CortesCaja::Cajero).string_len(100).not_null())
                    .col(
                        ColumnDef::new(CortesCaja::Estado)
                            .string_len(30)
                            .not_null()
                            .default("Abierto"),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::TotalVentas)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::TotalEfectivo)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::TotalTarjeta)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::TotalTransferencia)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::TotalComisiones)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::GananciaBruta)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::GananciaNeta)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::EfectivoContado)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::FondoCajaInicial)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::FondoCajaSiguiente)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::MontoDepositado)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CortesCaja::ReferenciaDeposito)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(CortesCaja::Observaciones).text().null())
                    .col(
                        ColumnDef::new(CortesCaja::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CortesCaja::FechaCierre).timestamp().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop cortes_caja table
        manager
            .drop_table(Table::drop().table(CortesCaja::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CortesCaja {
    Table,
    Id,
    FechaCorte,
    Cajero,
    Estado,
    TotalVentas,
    TotalEfectivo,
    TotalTarjeta,
    TotalTransferencia,
    TotalComisiones,
    GananciaBruta,
    GananciaNeta,
    EfectivoContado,
    FondoCajaInicial,
    FondoCajaSiguiente,
    MontoDepositado,
    ReferenciaDeposito,
    Observaciones,
    FechaRegistro,
    FechaCierre,
}
