pub mod session_store;

pub use session_store::{clear_session, load_session, save_session};
