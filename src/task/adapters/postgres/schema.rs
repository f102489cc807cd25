//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records owned by a single user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Task priority.
        #[max_length = 10]
        priority -> Varchar,
        /// Lifecycle status.
        #[max_length = 10]
        status -> Varchar,
        /// Completion timestamp, set while the task is completed.
        completed_at -> Nullable<Timestamptz>,
        /// Optional category reference, cleared when the category is
        /// deleted.
        category_id -> Nullable<Uuid>,
        /// Whether completing the task spawns a successor.
        is_recurring -> Bool,
        /// Recurrence cadence for recurring tasks.
        #[max_length = 10]
        recurrence_interval -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Category records owned by a single user.
    categories (id) {
        /// Category identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Category name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Append-only log of task lifecycle events.
    task_history (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Task the entry belongs to.
        task_id -> Uuid,
        /// Timestamp of the recorded event.
        changed_at -> Timestamptz,
        /// Fixed descriptive text of the event.
        description -> Text,
    }
}

diesel::table! {
    /// Collaborator pairings, unique per `(task, user)`.
    collaborators (id) {
        /// Pairing identifier.
        id -> Uuid,
        /// Task half of the pairing.
        task_id -> Uuid,
        /// User half of the pairing.
        user_id -> Uuid,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tasks, categories, task_history, collaborators);
