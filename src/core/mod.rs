pub mod bmi;
pub mod clock;
pub mod daily;
pub mod reminders;
pub mod status;
pub mod store;
pub mod validate;
pub mod weekly;
