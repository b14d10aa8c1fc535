pub mod drn;
pub mod workspace_name;

pub use workspace_name::validate_workspace_name;
