pub mod user;
pub mod patient;
pub mod appointment;
pub mod medical_record;
pub mod dashboard;
pub(crate) mod formats;

pub use user::*;
pub use patient::*;
pub use appointment::*;
pub use medical_record::*;
pub use dashboard::*;
