//! 核心框架模块
//!
//! - Listener: 全局点击监听的显式订阅

pub mod listener;

pub use listener::{ClickEvent, ClickListeners, ListenerId, Subscription};
