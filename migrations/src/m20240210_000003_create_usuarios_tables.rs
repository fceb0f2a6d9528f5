use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // usuarios
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::NombreUsuario)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::PasswordHash).text().not_null())
                    .col(
                        ColumnDef::new(Usuarios::Rol)
                            .string_len(50)
                            .not_null()
                            .default("Vendedor"),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Usuarios::IntentosFallidos)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Usuarios::FechaBloqueo).timestamp().null())
                    .col(ColumnDef::new(Usuarios::UltimoAcceso).timestamp().null())
                    .col(
                        ColumnDef::new(Usuarios::FechaRegistro)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // sesiones_usuario
        manager
            .create_table(
                Table::create()
                    .table(SesionesUsuario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SesionesUsuario::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SesionesUsuario::UsuarioId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SesionesUsuario::SessionToken)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SesionesUsuario::FechaInicio)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(SesionesUsuario::FechaFin).timestamp().null())
                    .col(
                        ColumnDef::new(SesionesUsuario::DireccionIp)
                            .string_len(45)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SesionesUsuario::UltimaActividad)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sesiones_usuario_usuario")
                            .from(SesionesUsuario::Table, SesionesUsuario::UsuarioId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sesiones_usuario_usuario_id")
                    .table(SesionesUsuario::Table)
                    .col(SesionesUsuario::UsuarioId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SesionesUsuario::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Usuarios {
    Table,
    Id,
    NombreUsuario,
    Email,
    PasswordHash,
    Rol,
    Activo,
    IntentosFallidos,
    FechaBloqueo,
    UltimoAcceso,
    FechaRegistro,
}

#[derive(DeriveIden)]
pub enum SesionesUsuario {
    Table,
    Id,
    UsuarioId,
    SessionToken,
    FechaInicio,
    FechaFin,
    DireccionIp,
    UltimaActividad,
}
