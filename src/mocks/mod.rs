pub mod sequential_ids;
