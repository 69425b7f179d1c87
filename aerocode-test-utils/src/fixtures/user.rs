use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::Utc;
use entity::sea_orm_active_enums::UserLevel;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose display name is derived from the username.
    ///
    /// The password is always [`TEST_PASSWORD`].
    pub async fn insert_user(
        &mut self,
        username: &str,
        level: UserLevel,
    ) -> Result<UserModel, TestError> {
        let name = format!("Test {}", username);
        self.insert_user_with_name(&name, username, level).await
    }

    pub async fn insert_user_with_name(
        &mut self,
        name: &str,
        username: &str,
        level: UserLevel,
    ) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(hash_test_password()?),
            level: ActiveValue::Set(level),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

/// Hash [`TEST_PASSWORD`] with the cheapest Argon2id parameters.
///
/// Verification reads the parameters back from the PHC string, so these hashes verify
/// with the application's default hasher while keeping fixture setup fast.
pub fn hash_test_password() -> Result<String, TestError> {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)?
        .to_string())
}
