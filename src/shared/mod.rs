pub mod constants;
pub mod errors;
pub mod hooks;
pub mod logging;
pub mod services;
pub mod state;
pub mod utils;
