use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_account_table::Account,
    m20260101_000003_create_server_table::Server,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(pk_auto(Channel::Id))
                    .col(string_len(Channel::Name, 100))
                    .col(integer(Channel::OwnerId))
                    .col(string_len(Channel::Topic, 100))
                    .col(integer(Channel::ServerId))
                    .col(string_null(Channel::Banner))
                    .col(string_null(Channel::Icon))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_owner_id")
                            .from(Channel::Table, Channel::OwnerId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_server_id")
                            .from(Channel::Table, Channel::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Channel {
    Table,
    Id,
    Name,
    OwnerId,
    Topic,
    ServerId,
    Banner,
    Icon,
}
