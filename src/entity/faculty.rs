//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub faculty_id: String,
    pub department: String,
    pub qualification: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_faculty(self) -> crate::models::faculty::entities::Faculty {
        use crate::models::faculty::entities::{Faculty, FacultyStatus};
        use chrono::{DateTime, Utc};

        Faculty {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            faculty_id: self.faculty_id,
            department: self.department,
            qualification: self.qualification,
            status: self
                .status
                .parse::<FacultyStatus>()
                .unwrap_or(FacultyStatus::Active),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
