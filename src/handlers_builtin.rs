//! The built-in application handlers and their registration order.

use crate::handler::{AppHandler, ClassMatch, HandlerRegistry};
use crate::strategy::{CaptureStrategy, DirectText, InjectStrategy};

/// Classic Notepad keeps its text in an `Edit` child control that answers
/// standard messages.
pub fn notepad() -> AppHandler {
    AppHandler {
        name: "notepad",
        matches: ClassMatch::Exact("Notepad"),
        capture: CaptureStrategy::DirectThenClipboard(DirectText::child("Edit")),
        inject: InjectStrategy::DirectThenClipboard(DirectText::child("Edit")),
    }
}

pub fn qq() -> AppHandler {
    AppHandler {
        name: "qq",
        matches: ClassMatch::ContainsAny(&["TXGuiFoundation"]),
        capture: CaptureStrategy::DirectThenClipboard(DirectText::child("QQEdit")),
        inject: InjectStrategy::DirectThenClipboard(DirectText::child("QQEdit")),
    }
}

pub fn dingtalk() -> AppHandler {
    AppHandler {
        name: "dingtalk",
        matches: ClassMatch::ContainsAny(&["StandardFrame", "DingTalk"]),
        capture: CaptureStrategy::DirectThenClipboard(DirectText::WINDOW),
        inject: InjectStrategy::DirectThenClipboard(DirectText::WINDOW),
    }
}

/// WeChat renders its own text surface; only the clipboard dance works.
pub fn wechat() -> AppHandler {
    AppHandler {
        name: "wechat",
        matches: ClassMatch::ContainsAny(&["WeChatMainWndForPC"]),
        capture: CaptureStrategy::ClipboardOnly,
        inject: InjectStrategy::ClipboardOnly,
    }
}

/// Chromium-family browsers (Chrome, Edge, Vivaldi) share one frame class and
/// do not answer text messages.
pub fn chromium() -> AppHandler {
    AppHandler {
        name: "chromium",
        matches: ClassMatch::ContainsAny(&["Chrome_WidgetWin_1"]),
        capture: CaptureStrategy::ClipboardOnly,
        inject: InjectStrategy::ClipboardOnly,
    }
}

pub fn firefox() -> AppHandler {
    AppHandler {
        name: "firefox",
        matches: ClassMatch::ContainsAny(&["MozillaWindowClass"]),
        capture: CaptureStrategy::DirectThenClipboard(DirectText::child(
            "MozillaEditableWindowClass",
        )),
        inject: InjectStrategy::ClipboardOnly,
    }
}

/// Catch-all: standard messages against the window itself, clipboard dance
/// otherwise.
pub fn fallback() -> AppHandler {
    AppHandler {
        name: "default",
        matches: ClassMatch::Any,
        capture: CaptureStrategy::DirectThenClipboard(DirectText::WINDOW),
        inject: InjectStrategy::DirectThenClipboard(DirectText::WINDOW),
    }
}

/// All built-in handlers in their intended precedence order.
pub fn default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new(fallback());
    registry.register(notepad());
    registry.register(qq());
    registry.register(dingtalk());
    registry.register(wechat());
    registry.register(chromium());
    registry.register(firefox());
    registry
}
