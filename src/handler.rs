//! Typed registry of per-application capture/injection handlers.
//!
//! Different applications expose their text through different mechanisms: a
//! plain edit-control message, a named child control, or nothing reliable at
//! all. Each [`AppHandler`] pairs a class-name predicate with the strongest
//! strategy known for that family; the registry tries predicates in
//! registration order and the structurally separate fallback means selection
//! can never come up empty.

use crate::clipboard::ClipboardAccess;
use crate::strategy::{self, CaptureStrategy, InjectStrategy, Timings};
use crate::windowing::{WindowHandle, WindowingSystem};

/// Predicate over a window class name. First match in registration order
/// wins, so order is significant.
#[derive(Debug, Clone, Copy)]
pub enum ClassMatch {
    Exact(&'static str),
    ContainsAny(&'static [&'static str]),
    Any,
}

impl ClassMatch {
    pub fn matches(&self, class_name: &str) -> bool {
        match self {
            ClassMatch::Exact(name) => class_name == *name,
            ClassMatch::ContainsAny(parts) => parts.iter().any(|p| class_name.contains(p)),
            ClassMatch::Any => true,
        }
    }
}

/// Capture and injection strategies for one application family.
pub struct AppHandler {
    pub name: &'static str,
    pub matches: ClassMatch,
    pub capture: CaptureStrategy,
    pub inject: InjectStrategy,
}

impl AppHandler {
    /// Read the window's text using this handler's strongest tier, falling
    /// back to the clipboard dance where the handler allows it.
    pub fn capture_text(
        &self,
        ws: &dyn WindowingSystem,
        clipboard: &mut dyn ClipboardAccess,
        window: WindowHandle,
        timings: &Timings,
    ) -> anyhow::Result<Option<String>> {
        match self.capture {
            CaptureStrategy::DirectThenClipboard(target) => {
                if let Some(text) = strategy::capture_direct(ws, window, target) {
                    return Ok(Some(text));
                }
                strategy::capture_via_clipboard(ws, clipboard, window, timings)
            }
            CaptureStrategy::ClipboardOnly => {
                strategy::capture_via_clipboard(ws, clipboard, window, timings)
            }
        }
    }

    /// Write `text` back into the window, mirroring the capture tiers.
    pub fn inject_text(
        &self,
        ws: &dyn WindowingSystem,
        clipboard: &mut dyn ClipboardAccess,
        window: WindowHandle,
        text: &str,
        timings: &Timings,
    ) -> anyhow::Result<bool> {
        match self.inject {
            InjectStrategy::DirectThenClipboard(target) => {
                if strategy::inject_direct(ws, window, target, text) {
                    return Ok(true);
                }
                strategy::inject_via_clipboard(ws, clipboard, window, text, timings)
            }
            InjectStrategy::ClipboardOnly => {
                strategy::inject_via_clipboard(ws, clipboard, window, text, timings)
            }
        }
    }
}

/// Ordered handler chain plus a catch-all. Keeping the fallback out of the
/// ordered list makes `select` total: there is no registration state in which
/// a window has no handler.
pub struct HandlerRegistry {
    handlers: Vec<AppHandler>,
    fallback: AppHandler,
}

impl HandlerRegistry {
    pub fn new(fallback: AppHandler) -> Self {
        Self {
            handlers: Vec::new(),
            fallback,
        }
    }

    pub fn register(&mut self, handler: AppHandler) {
        self.handlers.push(handler);
    }

    /// First registered handler whose predicate matches, or the fallback.
    pub fn select(&self, class_name: &str) -> &AppHandler {
        self.handlers
            .iter()
            .find(|h| h.matches.matches(class_name))
            .unwrap_or(&self.fallback)
    }
}
