use crate::server::{
    data::{store::Store, user::UserRepository},
    model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
