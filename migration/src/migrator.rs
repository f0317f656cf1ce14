use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202508180001_create_users::Migration),
            Box::new(migrations::m202508180002_create_courses::Migration),
            Box::new(migrations::m202508180003_create_course_contents::Migration),
            Box::new(migrations::m202508180004_create_enrollments::Migration),
            Box::new(migrations::m202508180005_create_feedbacks::Migration),
            Box::new(migrations::m202508180006_create_posts::Migration),
        ]
    }
}
