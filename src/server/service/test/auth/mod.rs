use crate::server::{
    data::store::Store,
    error::{auth::AuthError, AppError},
    model::user::{LoginParam, RegisterUserParam},
    service::auth::AuthService,
    util::password,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn register_param(name: &str, email: &str, password: &str) -> RegisterUserParam {
    RegisterUserParam {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}
