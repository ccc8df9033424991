//! Configuration for the iphelper command-line front end.

mod settings;

pub use settings::Settings;
