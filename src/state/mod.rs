// State management (session core shared by hooks and the route guard)

pub mod session;

pub use session::*;
