//! User entity <-> model mapper

use blog_core::entities::User;
use blog_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            login: model.login,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

/// Column values for inserting a user
pub struct UserInsert<'a> {
    pub id: i64,
    pub login: &'a str,
    pub email: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            login: &user.login,
            email: &user.email,
        }
    }
}
