//! Diesel table definition for the statistics schema.
//!
//! Must match the embedded migrations exactly; Diesel uses it for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Hit-counted record per distinct fizzbuzz parameter tuple.
    ///
    /// A unique index over the five parameter columns backs the
    /// `ON CONFLICT` upsert in the repository.
    statistics (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// Inclusive sequence bound. The Rust name avoids clashing with
        /// `QueryDsl::limit`.
        #[sql_name = "limit"]
        sequence_limit -> Int8,
        /// First divisor.
        int1 -> Int8,
        /// Second divisor.
        int2 -> Int8,
        /// Substitution string for multiples of int1 (max 64 characters).
        #[max_length = 64]
        str1 -> Varchar,
        /// Substitution string for multiples of int2 (max 64 characters).
        #[max_length = 64]
        str2 -> Varchar,
        /// Observation count, at least 1.
        hits -> Int8,
        /// First observation timestamp.
        created_at -> Timestamptz,
        /// Last observation timestamp.
        updated_at -> Timestamptz,
    }
}
