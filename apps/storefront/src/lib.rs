//! # Tisso Storefront Library
//!
//! Session layer for the Tisso Vison storefront: the product grid, the
//! product modal, the shared cart store and the "added to cart" toast.
//!
//! ## Module Organization
//! ```text
//! tisso_storefront/
//! ├── lib.rs          ◄─── You are here (session setup, logging)
//! ├── catalog.rs      ◄─── Built-in / file catalog loading
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store and handles
//! │   ├── modal.rs    ◄─── Product modal
//! │   ├── toast.rs    ◄─── Auto-dismissing toast
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product grid
//! │   ├── product.rs  ◄─── Modal commands, add to cart
//! │   └── cart.rs     ◄─── Cart commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust,ignore
//! let store = Storefront::start(ConfigState::from_env())?;
//! let cart = store.cart_handle();
//!
//! commands::product::open_product(store.catalog(), store.modal(), "1")?;
//! commands::product::select_size(store.modal(), "M")?;
//! commands::product::add_to_cart(store.modal(), &cart, store.toast())?;
//!
//! assert_eq!(cart.count()?, 1);
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use catalog::Catalog;
use error::ApiError;
use state::{CartHandle, CartState, ConfigState, ModalState, ToastState};

/// One shopper's session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • TISSO_CATALOG_PATH if set, built-in grid otherwise                │
/// │     • Validated before use                                              │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CartState: empty cart, the single owner of the store              │
/// │     • ModalState: no product open                                       │
/// │     • ToastState: nothing shown, duration from config                   │
/// │                                                                         │
/// │  Dropping the Storefront tears the cart store down; outstanding         │
/// │  CartHandles then fail with NotInitialized.                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct Storefront {
    session_id: Uuid,
    config: ConfigState,
    catalog: Catalog,
    cart: CartState,
    modal: ModalState,
    toast: ToastState,
}

impl Storefront {
    /// Starts a session, loading the catalog the config points at.
    pub fn start(config: ConfigState) -> Result<Self, ApiError> {
        let catalog = Catalog::from_config(&config)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Starts a session over an already loaded catalog.
    pub fn with_catalog(config: ConfigState, catalog: Catalog) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            %session_id,
            store = %config.store_name,
            products = catalog.len(),
            "Storefront session started"
        );

        Storefront {
            session_id,
            toast: ToastState::new(config.toast_duration()),
            config,
            catalog,
            cart: CartState::new(),
            modal: ModalState::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A handle onto this session's cart store.
    pub fn cart_handle(&self) -> CartHandle {
        self.cart.handle()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }
}

impl Drop for Storefront {
    fn drop(&mut self) {
        self.toast.dismiss();
        info!(session_id = %self.session_id, "Storefront session ended");
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tisso=trace` - Show trace for tisso crates only
/// - Default: INFO, DEBUG for tisso crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tisso=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
