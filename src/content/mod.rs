pub mod collection;
pub mod front_matter;
pub mod fs_scan;
pub mod record;
