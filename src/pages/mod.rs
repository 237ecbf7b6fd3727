//! Feature pages, one module per destination.

pub mod applications;
pub mod employer_applications;
pub mod employer_dashboard;
pub mod employer_profile;
pub mod home;
pub mod job_detail;
pub mod job_list;
pub mod job_seeker_dashboard;
pub mod job_seeker_profile;
pub mod login;
pub mod manage_jobs;
pub mod post_job;
pub mod profile;
pub mod recommendations;
pub mod register;
pub mod resume_upload;
