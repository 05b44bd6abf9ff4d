//! Diesel schema for cluster registry persistence.
//!
//! Credential material lives in `cluster_credentials`, a one-to-one
//! sub-entity of `clusters`, so registry reads never touch kubeconfig
//! content.

diesel::table! {
    /// Registered cluster rows, unique by name.
    clusters (id) {
        /// Engine-assigned cluster identifier.
        id -> Int8,
        /// Cluster name, the natural registration key.
        #[max_length = 255]
        name -> Varchar,
        /// Localized display name.
        #[max_length = 255]
        name_localized -> Varchar,
        /// Owning user identifier.
        owner_id -> Int8,
        /// Default CPU request quantity.
        #[max_length = 50]
        cpu_request -> Varchar,
        /// Default CPU limit quantity.
        #[max_length = 50]
        cpu_limit -> Varchar,
        /// Default memory request quantity.
        #[max_length = 50]
        memory_request -> Varchar,
        /// Default memory limit quantity.
        #[max_length = 50]
        memory_limit -> Varchar,
        /// Environment tag.
        #[max_length = 100]
        environment -> Varchar,
        /// Kubernetes version string.
        #[max_length = 100]
        version -> Varchar,
        /// API server address.
        #[max_length = 500]
        api_server_address -> Varchar,
        /// Action timeout in seconds.
        action_timeout_seconds -> Int4,
        /// Registration timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Credential sub-entity, one row per cluster.
    cluster_credentials (cluster_id) {
        /// Owning cluster identifier.
        cluster_id -> Int8,
        /// Opaque kubeconfig content.
        kubeconfig -> Text,
    }
}

diesel::joinable!(cluster_credentials -> clusters (cluster_id));
diesel::allow_tables_to_appear_in_same_query!(clusters, cluster_credentials);
