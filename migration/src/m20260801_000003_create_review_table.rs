use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::Users, m20260801_000002_create_category_table::Categories,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::ReviewId))
                    .col(string(Reviews::Title))
                    .col(string_null(Reviews::Designer))
                    .col(string(Reviews::Owner))
                    .col(string(Reviews::ReviewImgUrl))
                    .col(string(Reviews::ReviewBody))
                    .col(string(Reviews::Category))
                    .col(integer(Reviews::Votes).default(0))
                    .col(timestamp_with_time_zone(Reviews::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_owner")
                            .from(Reviews::Table, Reviews::Owner)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_category")
                            .from(Reviews::Table, Reviews::Category)
                            .to(Categories::Table, Categories::Slug)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    ReviewId,
    Title,
    Designer,
    Owner,
    ReviewImgUrl,
    ReviewBody,
    Category,
    Votes,
    CreatedAt,
}
