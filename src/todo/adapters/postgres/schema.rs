//! Diesel schema for todo persistence.

diesel::table! {
    /// User accounts referenced by todo ownership.
    ///
    /// Account lifecycle is managed by the identity subsystem; this table
    /// appears here only as the foreign-key target for `todos.owner_id`.
    users (id) {
        /// Account identifier.
        id -> Int8,
        /// Account display name.
        #[max_length = 255]
        username -> Varchar,
    }
}

diesel::table! {
    /// Todo records, each owned by exactly one user.
    ///
    /// `owner_id` carries a secondary index serving the owner-scoped listing
    /// and lookup paths.
    todos (id) {
        /// Store-assigned record identifier.
        id -> Int8,
        /// Record title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Urgency on the 1 to 5 scale.
        priority -> Int4,
        /// Completion flag, defaulting to false at the column level.
        complete -> Bool,
        /// Owning user identifier.
        owner_id -> Int8,
    }
}

diesel::joinable!(todos -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(todos, users);
