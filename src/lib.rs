pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};
pub use crate::config::DisplayConfig;

pub use crate::core::coin_symbol::{short_coin_symbol, strip_lower_chars};
pub use crate::core::currency::{fit_currency, pad_currency};
pub use crate::core::domain::{derive_domain, domain_from_host, short_host_from_host};
pub use crate::core::host_port::parse_host_and_port;
pub use crate::core::text_fit::{ellipsis_fit, fit_left, fit_right, pad_fit_left, pad_fit_right};
pub use crate::core::version::version_is_greater;
pub use crate::domain::model::{DomainDerivation, NumberFormat, ParsedHostPort};
pub use crate::domain::ports::{DomainCache, MemoryDomainCache};
pub use crate::utils::error::{FormatError, Result};
