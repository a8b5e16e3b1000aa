pub mod builder;
pub mod descriptor;
pub mod factory;
pub mod physical;

pub use builder::build;
pub use descriptor::SourceDescriptor;
pub use factory::create_table_source;
pub use physical::{Column, PhysicalSchema, UniqueConstraint};
