//! # Storefront Commands Module
//!
//! All operations the presentation layer invokes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Product grid listing
//! ├── product.rs  ◄─── Product modal: open, pick color/size, add to cart
//! └── cart.rs     ◄─── Cart contents, removal, clearing
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Command Flow                              │
//! │                                                                         │
//! │  UI event (tile click, swatch click, ADD TO CART)                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust command                                                           │
//! │  ────────────                                                           │
//! │  fn select_color(                                                       │
//! │      modal: &ModalState,      ◄── Session state, borrowed              │
//! │      label: &str,             ◄── From the event                       │
//! │  ) -> Result<ProductView, ApiError>                                     │
//! │         │                                                               │
//! │         │ (serde serialization)                                         │
//! │         ▼                                                               │
//! │  UI re-renders from the returned view                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &Catalog, config: &ConfigState)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartHandle)
//!
//! // Needs modal, cart and toast
//! fn add_to_cart(modal: &ModalState, cart: &CartHandle, toast: &ToastState)
//! ```

pub mod cart;
pub mod catalog;
pub mod product;
