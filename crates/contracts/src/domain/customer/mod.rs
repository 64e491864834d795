pub mod aggregate;
pub mod letter_gap;
pub mod raw;

pub use aggregate::{Customer, CustomerDto, CustomerFilters, Sale};
pub use letter_gap::missing_letter;
pub use raw::{CustomersEnvelope, RawCustomer};
