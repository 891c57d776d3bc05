pub mod error;
pub mod filter;
pub mod lead;
pub mod record;

pub use error::{StoreError, ValidationError};
pub use filter::{LeadFilter, count_by_status};
pub use lead::{Lead, LeadDraft, LeadStatus, NewLead};
pub use record::{LeadRecord, NewLeadRecord};
