pub mod m202508180001_create_users;
pub mod m202508180002_create_courses;
pub mod m202508180003_create_course_contents;
pub mod m202508180004_create_enrollments;
pub mod m202508180005_create_feedbacks;
pub mod m202508180006_create_posts;
