pub mod contact;
pub mod pages;
pub mod projects;
pub mod skills;
pub mod stats;
pub mod upload;
