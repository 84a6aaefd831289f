//! The seam between the translation core and the OS windowing subsystem.
//!
//! Everything here is platform neutral; the Win32 implementation lives in
//! [`crate::win32`] and is only compiled on Windows.

use crate::keys::KeyStep;

/// Opaque reference to a top-level window. The window belongs to the OS and
/// can disappear at any moment, so every use must be preceded by an
/// [`WindowingSystem::is_window`] liveness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Snapshot of a window's identity and state, taken once per pipeline run and
/// never refreshed except through explicit re-validation.
#[derive(Debug, Clone)]
pub struct WindowDescriptor {
    pub handle: WindowHandle,
    pub class_name: String,
    pub title: String,
    pub visible: bool,
    pub minimized: bool,
    pub style: u32,
    pub ex_style: u32,
}

pub const WS_POPUP: u32 = 0x8000_0000;
pub const WS_EX_TOOLWINDOW: u32 = 0x0000_0080;

/// OS window operations consumed by the capture/injection engine.
pub trait WindowingSystem {
    fn focused_window(&self) -> Option<WindowHandle>;

    fn is_window(&self, handle: WindowHandle) -> bool;

    fn descriptor(&self, handle: WindowHandle) -> Option<WindowDescriptor>;

    /// Locate a direct child control by class name.
    fn find_child(&self, parent: WindowHandle, class_name: &str) -> Option<WindowHandle>;

    /// Read the window's text via direct messaging. Returns `None` when the
    /// control does not answer, reports zero length, or the UTF-16 transfer
    /// fails to decode.
    fn read_text(&self, handle: WindowHandle) -> Option<String>;

    /// Replace the window's text via direct messaging.
    fn write_text(&self, handle: WindowHandle, text: &str) -> bool;

    fn set_foreground(&self, handle: WindowHandle) -> bool;

    /// Inject the given key transitions, in order, into the global input
    /// stream.
    fn send_key_combo(&self, steps: &[KeyStep]) -> anyhow::Result<()>;
}
