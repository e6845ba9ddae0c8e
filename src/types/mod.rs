pub mod requests;

pub use requests::{NewMessage, NewProject, NewSkill};
