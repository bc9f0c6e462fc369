//! # State Module
//!
//! Session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of one `AppState` struct, each concern has its own state type, and
//! each command declares exactly the state it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront (session)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌────────────────┬──────┴─────────┬──────────────────┐            │
//! │      ▼                ▼                ▼                  ▼             │
//! │  ┌──────────┐  ┌──────────────┐  ┌────────────┐  ┌──────────────┐      │
//! │  │CartState │  │ ModalState   │  │ ToastState │  │ ConfigState  │      │
//! │  │          │  │              │  │            │  │              │      │
//! │  │ Arc<     │  │ Mutex<Option │  │ Arc<Mutex< │  │ currency,    │      │
//! │  │  Mutex<  │  │  <Product    │  │  slot>>    │  │ toast ms,    │      │
//! │  │  Cart>>  │  │   Modal>>    │  │ + timer    │  │ catalog path │      │
//! │  └──────────┘  └──────────────┘  └────────────┘  └──────────────┘      │
//! │                                                                         │
//! │  • CartState: single owner, consumers hold CartHandle                   │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod modal;
mod toast;

pub use cart::{CartHandle, CartState};
pub use config::{ConfigState, SymbolPosition};
pub use modal::{AddOutcome, ModalState, ProductModal, ProductView};
pub use toast::{Toast, ToastState};
