use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create configuracion_bascula table (serial scale device profile)
        manager
            .create_table(
                Table::create()
                    .table(ConfiguracionBascula::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConfiguracionBascula::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::Nombre)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::Puerto)
                            .string_len(20)
                            .not_null()
                            .default("COM1"),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::BaudRate)
                            .integer()
                            .not_null()
                            .default(9600),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::DataBits)
                            .integer()
                            .not_null()
                            .default(8),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::Paridad)
                            .string_len(10)
                            .not_null()
                            .default("None"),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::StopBits)
                            .string_len(10)
                            .not_null()
                            .default("One"),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::Handshake)
                            .string_len(20)
                            .not_null()
                            .default("None"),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::TimeoutLecturaMs)
                            .integer()
                            .not_null()
                            .default(1000),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::TimeoutEscrituraMs)
                            .integer()
                            .not_null()
                            .default(1000),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::UnidadPeso)
                            .string_len(10)
                            .not_null()
                            .default("kg"),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::ComandoSolicitarPeso)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::ComandoTara)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::PatronExtraccion)
                            .string_len(200)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::Activa)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ConfiguracionBascula::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop configuracion_bascula table
        manager
            .drop_table(Table::drop().table(ConfiguracionBascula::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConfiguracionBascula {
    Table,
    Id,
    Nombre,
    Puerto,
    BaudRate,
    DataBits,
    Paridad,
    StopBits,
    Handshake,
    TimeoutLecturaMs,
    TimeoutEscrituraMs,
    UnidadPeso,
    ComandoSolicitarPeso,
    ComandoTara,
    PatronExtraccion,
    Activa,
    FechaRegistro,
}
