mod server;

pub use server::{app_state, serve};
