pub mod notifier;
pub mod uploads;
