pub mod courses;
pub mod enrollments;
pub mod exams;

pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use exams::ExamService;
