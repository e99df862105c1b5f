//! Dhobi server - order tracker for a neighbourhood dry-cleaning shop
//!
//! # Overview
//!
//! - **Local store** (`shared::store`): orders, customers and payments as
//!   JSON collections in an embedded redb file
//! - **Ledger** (`ledger`): the balance rules applied on orders and payments
//! - **Shop** (`shop`): storage manager tying the two together
//! - **Voice / photo intake** (`voice`, `photo`): orders from speech and
//!   garment counts from detector output
//! - **Billing** (`billing`): HTML bill and WhatsApp summary
//! - **HTTP API** (`api`): axum routes over all of the above
//!
//! ```text
//! dhobi-server/src/
//! ├── core/        # config, state, server, errors
//! ├── api/         # HTTP routes and handlers
//! ├── shop/        # storage manager
//! ├── ledger/      # balance rules
//! ├── voice/       # recognition state machine, transcript parser
//! ├── billing/     # bills
//! └── utils/       # logging, validation
//! ```

pub mod analytics;
pub mod api;
pub mod billing;
pub mod core;
pub mod ledger;
pub mod money;
pub mod photo;
pub mod shop;
pub mod utils;
pub mod voice;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use shop::{ShopError, ShopStorage};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then initialise logging from the resulting configuration
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner(shop_name: &str) {
    println!(
        r#"
     _ _           _     _
  __| | |__   ___ | |__ (_)
 / _` | '_ \ / _ \| '_ \| |
| (_| | | | | (_) | |_) | |
 \__,_|_| |_|\___/|_.__/|_|

  {shop_name}
    "#
    );
}
