//! Table definitions for the user store.
//!
//! Every statement is emitted with `IF NOT EXISTS` so it can be issued on each
//! process start. There is no migration history table and no versioning: the
//! definitions here describe the initial shape of the store only.

pub use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

/// Builds the `CREATE TABLE IF NOT EXISTS app_user` statement.
///
/// Columns:
/// - `id` - auto-incrementing primary key
/// - `name` - required display name
/// - `email` - required, unique
/// - `password_hash` - required credential digest
/// - `created_at` - defaults to the insertion time
pub fn create_app_user_table() -> TableCreateStatement {
    Table::create()
        .table(AppUser::Table)
        .if_not_exists()
        .col(pk_auto(AppUser::Id))
        .col(text(AppUser::Name))
        .col(text_uniq(AppUser::Email))
        .col(text(AppUser::PasswordHash))
        .col(timestamp_with_time_zone_null(AppUser::CreatedAt).default(Expr::current_timestamp()))
        .to_owned()
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
}
