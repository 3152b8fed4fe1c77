use models::domains::{ballots, candidates, competitions, votes};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(competitions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(competitions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(competitions::Column::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(competitions::Column::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(competitions::Column::RandomizeCandidates)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(candidates::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(candidates::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(candidates::Column::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(candidates::Column::CompetitionId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-candidates-competition_id")
                            .from(candidates::Entity, candidates::Column::CompetitionId)
                            .to(competitions::Entity, competitions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(votes::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(votes::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(votes::Column::CandidateId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(votes::Column::CompetitionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(votes::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-votes-candidate_id")
                            .from(votes::Entity, votes::Column::CandidateId)
                            .to(candidates::Entity, candidates::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-votes-competition_id")
                            .from(votes::Entity, votes::Column::CompetitionId)
                            .to(competitions::Entity, competitions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-votes-competition_id")
                    .table(votes::Entity)
                    .col(votes::Column::CompetitionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ballots::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ballots::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ballots::Column::CompetitionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ballots::Column::Token)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ballots::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ballots-competition_id")
                            .from(ballots::Entity, ballots::Column::CompetitionId)
                            .to(competitions::Entity, competitions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // One accepted ballot per browser token and competition.
        manager
            .create_index(
                Index::create()
                    .name("idx-ballots-competition_id-token")
                    .table(ballots::Entity)
                    .col(ballots::Column::CompetitionId)
                    .col(ballots::Column::Token)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order of creation so foreign keys never dangle.
        manager
            .drop_table(Table::drop().table(ballots::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(votes::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(candidates::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(competitions::Entity).to_owned())
            .await?;

        Ok(())
    }
}
