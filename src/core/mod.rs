pub mod coin_symbol;
pub mod currency;
pub mod domain;
pub mod host_port;
pub mod text_fit;
pub mod version;

pub use crate::domain::model::{DomainDerivation, NumberFormat, ParsedHostPort};
pub use crate::domain::ports::{DomainCache, MemoryDomainCache};
pub use crate::utils::error::Result;
