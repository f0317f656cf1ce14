use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a user (by its opaque identity-provider id) to a course.
///
/// At most one row may exist per (user_id, course_id) pair; the unique index
/// created by the enrollments migration enforces this at the storage layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: String,
    pub course_id: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, user_id: &str, course_id: i64) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            user_id: Set(user_id.to_owned()),
            course_id: Set(course_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        enrollment.insert(db).await
    }

    pub async fn find_by_user_and_course(
        db: &DbConn,
        user_id: &str,
        course_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await
    }

    /// Removes the enrollment for the pair. Returns `true` when a row existed.
    pub async fn delete_by_user_and_course(
        db: &DbConn,
        user_id: &str,
        course_id: i64,
    ) -> Result<bool, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    /// All courses the user is enrolled in. An unenrolled user yields an
    /// empty vector, never an error.
    pub async fn courses_for_user(
        db: &DbConn,
        user_id: &str,
    ) -> Result<Vec<super::course::Model>, DbErr> {
        let course_ids: Vec<i64> = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(db)
            .await?
            .into_iter()
            .map(|e| e.course_id)
            .collect();

        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        super::course::Entity::find()
            .filter(super::course::Column::Id.is_in(course_ids))
            .all(db)
            .await
    }
}
