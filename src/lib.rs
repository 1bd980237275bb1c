//! ide-shell: 测试用例 IDE 的外壳
//!
//! 模块结构：
//! - core: 全局点击监听
//! - models: 不可变文件树快照、图标
//! - kernel: 状态、Action、Effect、Store
//! - services: 设置与种子文件
//! - tui / views / app: 终端前端（`tui` feature）

pub mod core;
pub mod kernel;
pub mod models;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
