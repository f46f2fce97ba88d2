mod home;
pub use home::Home;

mod campus;
pub use campus::CampusRegistration;

mod training;
pub use training::TrainingRegistration;
