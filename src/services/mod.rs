pub mod attendance;
pub mod courses;
pub mod enrollments;
pub mod faculty;
pub mod grades;
pub mod imports;
pub(crate) mod references;
pub mod reports;
pub mod students;
pub mod system;

pub use attendance::AttendanceService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use faculty::FacultyService;
pub use grades::GradeService;
pub use imports::ImportService;
pub use reports::ReportService;
pub use students::StudentService;
pub use system::SystemService;
