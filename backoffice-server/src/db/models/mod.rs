//! 数据模型

pub mod menu_item;
pub mod order;
pub mod serde_helpers;

pub use menu_item::{Category, MenuItem, MenuItemCreate, MenuItemPatch, MenuItemSummary, MenuItemUpdate};
pub use order::{
    Order, OrderCreate, OrderItem, OrderItemInput, OrderItemUpdate, OrderItemView, OrderPatch,
    OrderStatus, OrderUpdate, OrderView,
};
