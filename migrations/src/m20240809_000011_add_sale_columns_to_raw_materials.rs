use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240809_000011_add_sale_columns_to_raw_materials"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager
            .has_column("raw_materials", RawMaterials::ActivoParaVenta.to_string().as_str())
            .await?
        {
            let mut col = ColumnDef::new(RawMaterials::ActivoParaVenta);
            col.boolean().not_null().default(false);
            manager
                .alter_table(
                    Table::alter()
                        .table(RawMaterials::Table)
                        .add_column(col)
                        .to_owned(),
                )
                .await?;
        }

        if !manager
            .has_column("raw_materials", RawMaterials::PrecioVenta.to_string().as_str())
            .await?
        {
            let mut col = ColumnDef::new(RawMaterials::PrecioVenta);
            col.decimal_len(18, 2).not_null().default(0);
            manager
                .alter_table(
                    Table::alter()
                        .table(RawMaterials::Table)
                        .add_column(col)
                        .to_owned(),
                )
                .await?;
        }

        if !manager
            .has_column("raw_materials", RawMaterials::DescuentoVenta.to_string().as_str())
            .await?
        {
            let mut col = ColumnDef::new(RawMaterials::DescuentoVenta);
            col.decimal_len(5, 2).not_null().default(0);
            manager
                .alter_table(
                    Table::alter()
                        .table(RawMaterials::Table)
                        .add_column(col)
                        .to_owned(),
                )
                .await?;
        }

        if !manager
            .has_column("raw_materials", RawMaterials::FechaCaducidad.to_string().as_str())
            .await?
        {
            let mut col = ColumnDef::new(RawMaterials::FechaCaducidad);
            col.date().null();
            manager
                .alter_table(
                    Table::alter()
                        .table(RawMaterials::Table)
                        .add_column(col)
                        .to_owned(),
                )
                .await?;
        }

        if !manager
            .has_column("raw_materials", RawMaterials::MargenGanancia.to_string().as_str())
            .await?
        {
            let mut col = ColumnDef::new(RawMaterials::MargenGanancia);
            col.decimal_len(5, 2).not_null().default(0);
            manager
                .alter_table(
                    Table::alter()
                        .table(RawMaterials::Table)
                        .add_column(col)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            RawMaterials::MargenGanancia,
            RawMaterials::FechaCaducidad,
            RawMaterials::DescuentoVenta,
            RawMaterials::PrecioVenta,
            RawMaterials::ActivoParaVenta,
        ] {
            if manager
                .has_column("raw_materials", column.to_string().as_str())
                .await?
            {
                manager
                    .alter_table(
                        Table::alter()
                            .table(RawMaterials::Table)
                            .drop_column(column)
                            .to_owned(),
                    )
                    .await?;
            }
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum RawMaterials {
    Table,
    ActivoParaVenta,
    PrecioVenta,
    DescuentoVenta,
    FechaCaducidad,
    MargenGanancia,
}
