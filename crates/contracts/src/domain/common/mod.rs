mod entity_metadata;

pub use entity_metadata::EntityMetadata;
