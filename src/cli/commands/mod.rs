pub mod alias;
pub mod config;
pub mod do_alias;

pub use alias::*;
pub use config::*;
pub use do_alias::*;
