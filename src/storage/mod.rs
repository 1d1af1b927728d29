use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendanceListQuery, CreateAttendanceRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::{CreateEnrollmentRequest, EnrollmentListQuery},
    },
    faculty::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery},
    },
    imports::entities::NewRecord,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 列出全部学生（报表快照）
    async fn list_all_students(&self) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<Faculty>;
    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>>;
    async fn list_faculty_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse>;
    async fn list_all_faculty(&self) -> Result<Vec<Faculty>>;
    async fn update_faculty(&self, id: i64, update: UpdateFacultyRequest)
    -> Result<Option<Faculty>>;
    async fn delete_faculty(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn list_all_courses(&self) -> Result<Vec<Course>>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    async fn list_enrollments(&self, query: EnrollmentListQuery) -> Result<Vec<Enrollment>>;
    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    async fn create_attendance(&self, attendance: CreateAttendanceRequest) -> Result<Attendance>;
    async fn list_attendance(&self, query: AttendanceListQuery) -> Result<Vec<Attendance>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;
}

/// 导入编排使用的写入口：按实体类型分派的单条创建
#[async_trait::async_trait]
pub trait RecordWriter: Send + Sync {
    /// 创建一条记录，返回新记录的内部 ID
    async fn create_record(&self, record: NewRecord) -> Result<i64>;
}

#[async_trait::async_trait]
impl<'a> RecordWriter for dyn Storage + 'a {
    async fn create_record(&self, record: NewRecord) -> Result<i64> {
        let id = match record {
            NewRecord::Student(req) => self.create_student(req).await?.id,
            NewRecord::Faculty(req) => self.create_faculty(req).await?.id,
            NewRecord::Course(req) => self.create_course(req).await?.id,
            NewRecord::Grade(req) => self.create_grade(req).await?.id,
        };
        Ok(id)
    }
}

pub async fn create_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
