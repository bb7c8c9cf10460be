pub mod capacity;
pub mod error;
pub mod evaluation;
pub mod macrocycle;
pub mod plan;
pub mod weekly_record;
