pub mod clipboard;
pub mod debounce;
pub mod filter;
pub mod handler;
pub mod handlers_builtin;
pub mod hotkey;
pub mod keys;
pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod strategy;
pub mod translate;
pub mod windowing;

#[cfg(target_os = "windows")]
pub mod win32;
