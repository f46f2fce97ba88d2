//! Framework-free core of the site's forms: schemas, the submission state
//! machine, transports and the status-to-affordance mapping.

pub mod config;
pub mod form;
pub mod links;
pub mod platform;
pub mod presenter;
pub mod schema;
pub mod transport;
