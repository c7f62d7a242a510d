pub use self::add_files::add_files;
pub use self::find_group::{find_groups, resolve_groups};
pub use self::read_manifest::read_manifest;
pub use self::write_manifest::write_manifest;

pub mod add_files;
pub mod entries;
pub mod find_group;
mod read_manifest;
pub mod splice;
mod write_manifest;
