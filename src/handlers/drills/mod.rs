pub mod get_drills;
pub mod get_my_drill_submissions;
pub mod submit_drill;
