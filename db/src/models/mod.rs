pub mod course;
pub mod course_content;
pub mod enrollment;
pub mod feedback;
pub mod post;
pub mod user;

pub use course::Entity as Course;
pub use course_content::Entity as CourseContent;
pub use enrollment::Entity as Enrollment;
pub use feedback::Entity as Feedback;
pub use post::Entity as Post;
pub use user::Entity as User;
