//! Eligibility filter that keeps the pipeline away from shell surfaces and
//! other windows the user never means to translate.

use crate::windowing::{WindowDescriptor, WS_EX_TOOLWINDOW, WS_POPUP};

/// Class-name fragments of system windows.
const SYSTEM_CLASSES: &[&str] = &[
    "Windows.UI.Core",
    "Shell_",
    "NotifyIconOverflowWindow",
    "Windows.UI.Notification",
    "ApplicationFrameWindow",
    "Windows.UI.Popups",
    "TaskManagerWindow",
    "ForegroundStaging",
    "SystemTray_Main",
];

/// Title fragments of system windows, including the localized names the
/// deny-list shipped with.
const SYSTEM_TITLES: &[&str] = &[
    "通知中心",
    "操作中心",
    "任务管理器",
    "系统托盘",
    "Action Center",
    "Notification",
    "Task Manager",
];

pub struct WindowFilter {
    class_denylist: Vec<String>,
    title_denylist: Vec<String>,
}

impl Default for WindowFilter {
    fn default() -> Self {
        Self {
            class_denylist: SYSTEM_CLASSES.iter().map(|s| s.to_string()).collect(),
            title_denylist: SYSTEM_TITLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WindowFilter {
    pub fn new(class_denylist: Vec<String>, title_denylist: Vec<String>) -> Self {
        Self {
            class_denylist,
            title_denylist,
        }
    }

    /// Whether a window may be captured at all. Runs once before capture; a
    /// window that turns ineligible later is caught by the pipeline's
    /// re-validation step.
    pub fn is_eligible(&self, descriptor: &WindowDescriptor) -> bool {
        if !descriptor.visible || descriptor.minimized {
            return false;
        }
        if descriptor.style & WS_POPUP != 0 || descriptor.ex_style & WS_EX_TOOLWINDOW != 0 {
            return false;
        }
        if self
            .class_denylist
            .iter()
            .any(|c| descriptor.class_name.contains(c.as_str()))
        {
            return false;
        }
        if self
            .title_denylist
            .iter()
            .any(|t| descriptor.title.contains(t.as_str()))
        {
            return false;
        }
        true
    }
}
