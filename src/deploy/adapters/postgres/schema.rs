//! Diesel schema for YAML task persistence.

diesel::table! {
    /// YAML deployment-task records with template lineage.
    yaml_tasks (id) {
        /// Engine-assigned task identifier.
        id -> Int8,
        /// Template lineage reference; not referentially enforced.
        template_id -> Int8,
        /// Human-readable task name.
        #[max_length = 255]
        name -> Varchar,
        /// Rendered manifest content.
        content -> Text,
        /// Execution status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
