//! Shopping cart domain module.
//!
//! The cart is a reducer-style aggregate: commands are validated against the
//! current lines and turned into events, and events are the only way lines change.
//! No IO, no rendering.

pub mod cart;

pub use cart::{
    AddToCart, Cart, CartCommand, CartEvent, CartItem, ItemAdded, ItemRemoved, QuantityChanged,
    QuantityIncremented, RemoveFromCart, UpdateQuantity,
};
