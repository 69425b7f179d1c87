use std::collections::{BTreeSet, HashMap};

use entity::sea_orm_active_enums::UserLevel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{model::db::UserModel, util::time};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        name: String,
        username: String,
        password_hash: String,
        level: UserLevel,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name),
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            level: ActiveValue::Set(level),
            created_at: ActiveValue::Set(time::now()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Get all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Get the users with the given IDs, IDs without a user are skipped
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Update a user's name and/or level
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        name: Option<String>,
        level: Option<UserLevel>,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(level) = level {
            user_am.level = ActiveValue::Set(level);
        }

        Ok(Some(user_am.update(self.db).await?))
    }

    pub async fn update_password_hash(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes a user
    ///
    /// Engineer and task assignments are removed along with the user, aircraft and tasks
    /// they created keep existing without a creator. Returns OK regardless of the user
    /// existing, check [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    /// Get the aircraft each user is associated with
    ///
    /// A user is associated with an aircraft when listed as one of its engineers or
    /// when responsible for at least one of its tasks. Users without any association are
    /// absent from the returned map.
    pub async fn get_associated_aircraft_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, BTreeSet<String>>, DbErr> {
        let mut associations: HashMap<i32, BTreeSet<String>> = HashMap::new();
        if user_ids.is_empty() {
            return Ok(associations);
        }

        let engineer_links = entity::prelude::AircraftEngineer::find()
            .filter(entity::aircraft_engineer::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        for link in engineer_links {
            associations
                .entry(link.user_id)
                .or_default()
                .insert(link.aircraft_id);
        }

        let responsibilities = entity::prelude::TaskResponsible::find()
            .filter(entity::task_responsible::Column::UserId.is_in(user_ids.iter().copied()))
            .find_also_related(entity::prelude::Task)
            .all(self.db)
            .await?;

        for (link, task) in responsibilities {
            if let Some(task) = task {
                associations
                    .entry(link.user_id)
                    .or_default()
                    .insert(task.aircraft_id);
            }
        }

        Ok(associations)
    }
}
