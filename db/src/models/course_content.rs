use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a single uploaded file (PDF or video) associated with a course.
///
/// The `content` column holds the path of the stored file relative to the
/// uploads root, i.e. `{course_id}/{file_name}`. The bytes themselves live on
/// disk, not in the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "course_contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,

    /// "PDF" or "Video". Stored as a plain string so rows written by other
    /// tools can still be guarded against at fetch time.
    pub content_type: String,

    /// Relative storage path: `{course_id}/{file_name}`.
    pub content: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The set of content types this platform can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum ContentType {
    #[strum(serialize = "PDF")]
    Pdf,
    #[strum(serialize = "Video")]
    Video,
}

impl ContentType {
    /// MIME type used when serving a file of this kind.
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Pdf => "application/pdf",
            ContentType::Video => "video/mp4",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        content_type: ContentType,
        content: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let row = ActiveModel {
            course_id: Set(course_id),
            content_type: Set(content_type.to_string()),
            content: Set(content.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        row.insert(db).await
    }

    pub async fn get_for_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .all(db)
            .await
    }

    /// Looks up a content row by id, scoped to its owning course.
    pub async fn get_by_id_for_course(
        db: &DbConn,
        course_id: i64,
        content_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Id.eq(content_id))
            .one(db)
            .await
    }

    /// Deletes a content row scoped to its course. Returns the removed row so
    /// the caller can also remove the file on disk.
    pub async fn delete_for_course(
        db: &DbConn,
        course_id: i64,
        content_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        let Some(row) = Self::get_by_id_for_course(db, course_id, content_id).await? else {
            return Ok(None);
        };

        Entity::delete_by_id(row.id).exec(db).await?;
        Ok(Some(row))
    }
}
