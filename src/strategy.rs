//! The two capture/injection tiers every application handler is composed
//! from: direct window messaging and the clipboard dance.

use std::thread;
use std::time::Duration;

use crate::clipboard::{ClipboardAccess, ClipboardGuard};
use crate::keys;
use crate::windowing::{WindowHandle, WindowingSystem};

/// Settling pauses for simulated input. The receiving application processes
/// keystrokes asynchronously and needs time before the clipboard reflects
/// them.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// After bringing the target window to the foreground.
    pub foreground: Duration,
    /// Between the Select-All and Copy/Paste chords.
    pub chord: Duration,
    /// Before touching the clipboard after the final chord.
    pub clipboard: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            foreground: Duration::from_millis(300),
            chord: Duration::from_millis(200),
            clipboard: Duration::from_millis(300),
        }
    }
}

impl Timings {
    /// No pauses at all, for callers driving a synchronous windowing system.
    pub fn none() -> Self {
        Self {
            foreground: Duration::ZERO,
            chord: Duration::ZERO,
            clipboard: Duration::ZERO,
        }
    }
}

fn settle(pause: Duration) {
    if !pause.is_zero() {
        thread::sleep(pause);
    }
}

/// Where direct messaging is aimed: the top-level window itself, or a child
/// control located by class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectText {
    pub child_class: Option<&'static str>,
}

impl DirectText {
    pub const WINDOW: Self = Self { child_class: None };

    pub const fn child(class: &'static str) -> Self {
        Self {
            child_class: Some(class),
        }
    }

    fn resolve(&self, ws: &dyn WindowingSystem, window: WindowHandle) -> Option<WindowHandle> {
        match self.child_class {
            Some(class) => ws.find_child(window, class),
            None => Some(window),
        }
    }
}

/// How a handler reads text out of its application family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStrategy {
    /// Ask the window directly; fall back to the clipboard dance when it does
    /// not answer or yields only whitespace.
    DirectThenClipboard(DirectText),
    /// The application exposes no reliable text API; go straight to the
    /// clipboard dance.
    ClipboardOnly,
}

/// How a handler writes text back. Mirrors [`CaptureStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectStrategy {
    DirectThenClipboard(DirectText),
    ClipboardOnly,
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Tier 1 capture: query the text through a synchronous message. Empty and
/// whitespace-only answers count as "no text".
pub fn capture_direct(
    ws: &dyn WindowingSystem,
    window: WindowHandle,
    target: DirectText,
) -> Option<String> {
    let handle = target.resolve(ws, window)?;
    ws.read_text(handle).and_then(non_blank)
}

/// Tier 2 capture: snapshot and clear the clipboard, foreground the target,
/// simulate Select-All then Copy with settling pauses, read the clipboard,
/// and restore the snapshot no matter what.
pub fn capture_via_clipboard(
    ws: &dyn WindowingSystem,
    clipboard: &mut dyn ClipboardAccess,
    window: WindowHandle,
    timings: &Timings,
) -> anyhow::Result<Option<String>> {
    let mut guard = ClipboardGuard::acquire(clipboard);
    guard.clear()?;
    if !ws.set_foreground(window) {
        return Ok(None);
    }
    settle(timings.foreground);
    ws.send_key_combo(&keys::select_all())?;
    settle(timings.chord);
    ws.send_key_combo(&keys::copy())?;
    settle(timings.clipboard);
    Ok(guard.read().and_then(non_blank))
}

/// Tier 1 injection: replace the text through a synchronous message.
pub fn inject_direct(
    ws: &dyn WindowingSystem,
    window: WindowHandle,
    target: DirectText,
    text: &str,
) -> bool {
    match target.resolve(ws, window) {
        Some(handle) => ws.write_text(handle, text),
        None => false,
    }
}

/// Tier 2 injection: put the replacement on the clipboard, foreground the
/// target, simulate Select-All then Paste, and restore the snapshot. Failure
/// partway degrades to best effort; the snapshot is restored regardless.
pub fn inject_via_clipboard(
    ws: &dyn WindowingSystem,
    clipboard: &mut dyn ClipboardAccess,
    window: WindowHandle,
    text: &str,
    timings: &Timings,
) -> anyhow::Result<bool> {
    let mut guard = ClipboardGuard::acquire(clipboard);
    guard.clear()?;
    guard.write(text)?;
    if !ws.set_foreground(window) {
        return Ok(false);
    }
    settle(timings.foreground);
    ws.send_key_combo(&keys::select_all())?;
    settle(timings.chord);
    ws.send_key_combo(&keys::paste())?;
    // Give the paste time to land before the guard puts the old contents
    // back.
    settle(timings.clipboard);
    Ok(true)
}
