//! Course, content, feedback and forum request/response models.
//!
//! Includes `From` implementations to convert database models into
//! API-friendly responses (timestamps rendered as RFC 3339 strings).

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    /// Required; presence is checked in the handler since `validator` skips
    /// `None` fields.
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::course::Model> for CourseResponse {
    fn from(course: db::models::course::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub id: i64,
    pub course_id: i64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::course_content::Model> for ContentResponse {
    fn from(content: db::models::course_content::Model) -> Self {
        Self {
            id: content.id,
            course_id: content.course_id,
            content_type: content.content_type,
            content: content.content,
            created_at: content.created_at.to_rfc3339(),
            updated_at: content.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<db::models::user::Model> for UserResponse {
    fn from(user: db::models::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct FeedbackRequest {
    pub course_id: i64,
    pub user_id: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub course_id: i64,
    pub user: Option<UserResponse>,
    pub content: String,
    pub created_at: String,
}

impl FeedbackResponse {
    pub fn from_row(
        feedback: db::models::feedback::Model,
        user: Option<db::models::user::Model>,
    ) -> Self {
        Self {
            id: feedback.id,
            course_id: feedback.course_id,
            user: user.map(UserResponse::from),
            content: feedback.content,
            created_at: feedback.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

impl From<db::models::post::Model> for PostResponse {
    fn from(post: db::models::post::Model) -> Self {
        Self {
            id: post.id,
            content: post.content,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}
