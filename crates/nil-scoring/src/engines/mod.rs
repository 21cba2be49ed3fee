pub mod compliance;
pub mod fmv;
pub mod lookups;
pub mod resolve;
pub mod subject;

pub use lookups::{LookupError, LookupTables};
pub use resolve::{FieldResolver, Resolved, ResolvedFrom};
pub use subject::{AthleteId, AthleteRole, DealId, InputError};
