pub mod attendance;

pub mod courses;

pub mod enrollments;

pub mod faculty;

pub mod grades;

pub mod imports;

pub mod reports;

pub mod students;

pub mod system;

pub use attendance::configure_attendance_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use faculty::configure_faculty_routes;
pub use grades::configure_grade_routes;
pub use imports::configure_import_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
