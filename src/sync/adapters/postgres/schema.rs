//! Diesel schema for agent record persistence.

diesel::table! {
    /// Deployed agent records, unique per `(project_id, name)`.
    agents (id) {
        /// Record identifier.
        id -> Uuid,
        /// Owning project identifier.
        #[max_length = 16]
        project_id -> Varchar,
        /// Agent name.
        #[max_length = 255]
        name -> Varchar,
        /// Agent description.
        description -> Text,
        /// `<module>:<identifier>` invocation target.
        #[max_length = 512]
        entrypoint -> Varchar,
        /// Tags as a JSONB array.
        tags -> Jsonb,
        /// Parameter schema as a JSONB object.
        parameters -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
