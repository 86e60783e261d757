pub mod ai_log;
pub mod roadmap;
pub mod student;
pub mod university;
pub mod user;
