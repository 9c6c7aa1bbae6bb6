use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    MrsuUsername,
    MrsuPasswordEnc,
    IsMrsuVerified,
    GoogleRefreshToken,
    IsGoogleVerified,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // portal credentials (password stored encrypted, never plaintext)
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(ColumnDef::new(User::MrsuUsername).string().null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(ColumnDef::new(User::MrsuPasswordEnc).string().null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(
                    ColumnDef::new(User::IsMrsuVerified)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .to_owned(),
        ).await?;

        // google calendar link
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(ColumnDef::new(User::GoogleRefreshToken).string().null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(
                    ColumnDef::new(User::IsGoogleVerified)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::IsGoogleVerified)
                .to_owned(),
        ).await?;
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::GoogleRefreshToken)
                .to_owned(),
        ).await?;
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::IsMrsuVerified)
                .to_owned(),
        ).await?;
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::MrsuPasswordEnc)
                .to_owned(),
        ).await?;
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::MrsuUsername)
                .to_owned(),
        ).await?;
        Ok(())
    }
}
