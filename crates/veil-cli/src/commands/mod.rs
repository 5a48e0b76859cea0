pub mod explain;
pub mod roles;
pub mod show;
