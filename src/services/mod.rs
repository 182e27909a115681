pub mod attachments;
pub mod courses;
pub mod enrollments;
pub mod records;
pub mod scoreboard;

pub use attachments::AttachmentService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use records::RecordService;
pub use scoreboard::ScoreboardService;
