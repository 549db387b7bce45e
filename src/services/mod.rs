pub mod dashboard;
pub mod publishing;
pub mod server;
