//! Document store ports

pub mod ports;

pub use ports::{
    ClientRepository, JobRepository, PreferencesRepository, ReminderLedger, TaskRepository,
    UserRepository,
};
