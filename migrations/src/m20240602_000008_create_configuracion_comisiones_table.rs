use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create configuracion_comisiones table (card commission policy)
        manager
            .create_table(
                Table::create()
                    .table(ConfiguracionComisiones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConfiguracionComisiones::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionComisiones::PorcentajeComisionTarjeta)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionComisiones::TerminalCobraIva)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionComisiones::PorcentajeIva)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(16),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionComisiones::Activa)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionComisiones::FechaActualizacion)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop configuracion_comisiones table
        manager
            .drop_table(
                Table::drop()
                    .table(ConfiguracionComisiones::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ConfiguracionComisiones {
    Table,
    Id,
    PorcentajeComisionTarjeta,
    TerminalCobraIva,
    PorcentajeIva,
    Activa,
    FechaActualizacion,
}
