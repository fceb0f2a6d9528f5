use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Workstation metadata recorded per session for the audit trail
        let mut maquina = ColumnDef::new(SesionesUsuario::NombreMaquina);
        maquina.string_len(100).null();
        manager
            .alter_table(
                Table::alter()
                    .table(SesionesUsuario::Table)
                    .add_column(maquina)
                    .to_owned(),
            )
            .await?;

        let mut version = ColumnDef::new(SesionesUsuario::VersionApp);
        version.string_len(50).null();
        manager
            .alter_table(
                Table::alter()
                    .table(SesionesUsuario::Table)
                    .add_column(version)
                    .to_owned(),
            )
            .await?;

        let mut motivo = ColumnDef::new(SesionesUsuario::MotivoCierre);
        motivo.string_len(200).null();
        manager
            .alter_table(
                Table::alter()
                    .table(SesionesUsuario::Table)
                    .add_column(motivo)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            SesionesUsuario::MotivoCierre,
            SesionesUsuario::VersionApp,
            SesionesUsuario::NombreMaquina,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(SesionesUsuario::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum SesionesUsuario {
    Table,
    NombreMaquina,
    VersionApp,
    MotivoCierre,
}
