//! Virtual-key codes and the chord sequences used for simulated input.

/// A single keyboard transition: one virtual key, pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStep {
    pub vk: u16,
    pub up: bool,
}

pub const VK_SHIFT: u16 = 0x10;
pub const VK_CONTROL: u16 = 0x11;
pub const VK_MENU: u16 = 0x12;
pub const VK_LWIN: u16 = 0x5B;

pub const VK_A: u16 = 0x41;
pub const VK_C: u16 = 0x43;
pub const VK_V: u16 = 0x56;

/// Press the keys in order, then release them in reverse order.
fn chord(keys: &[u16]) -> Vec<KeyStep> {
    let mut steps = Vec::with_capacity(keys.len() * 2);
    for &vk in keys {
        steps.push(KeyStep { vk, up: false });
    }
    for &vk in keys.iter().rev() {
        steps.push(KeyStep { vk, up: true });
    }
    steps
}

/// Ctrl+A.
pub fn select_all() -> Vec<KeyStep> {
    chord(&[VK_CONTROL, VK_A])
}

/// Ctrl+C.
pub fn copy() -> Vec<KeyStep> {
    chord(&[VK_CONTROL, VK_C])
}

/// Ctrl+V.
pub fn paste() -> Vec<KeyStep> {
    chord(&[VK_CONTROL, VK_V])
}
