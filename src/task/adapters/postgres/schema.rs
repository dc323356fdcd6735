//! Diesel schema for task persistence.

diesel::table! {
    /// Task records keyed by a store-assigned sequential identifier.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Lifecycle status, persisted as `pending` or `completed`.
        #[max_length = 50]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Completion timestamp, set when the task is completed.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
