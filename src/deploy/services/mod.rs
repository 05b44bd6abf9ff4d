//! Application services for YAML task storage.

mod store;

pub use store::{
    CreateYamlTaskRequest, UpdateYamlTaskRequest, YamlTaskStore, YamlTaskStoreError,
    YamlTaskStoreResult,
};
