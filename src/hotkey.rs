//! Hotkey parsing and detection.
//!
//! Detection is split in two: a platform-neutral [`ComboTracker`] state
//! machine fed one serialized key-event stream, and a Windows-only listener
//! thread that adapts `rdev` events into that stream. Held modifiers live in
//! a single bit-set and the trigger edge-detects, so holding the combo fires
//! exactly once until it is released.

use std::sync::{Arc, Mutex};

/// A hotkey: one main key (by virtual-key code) plus required modifiers.
/// Extra held modifiers do not prevent a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub vk: u32,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub win: bool,
}

/// Parse a hotkey string like `"Shift+F11"` or `"Ctrl+Win+T"`.
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut win = false;
    let mut vk = None;

    for part in s.split('+') {
        match part.trim().to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "WIN" | "WINDOWS" => win = true,
            "" => {}
            other => vk = Some(virtual_key_from_string(other)?),
        }
    }

    vk.map(|vk| Hotkey {
        vk,
        ctrl,
        shift,
        alt,
        win,
    })
}

/// Map a key name to its Windows virtual-key code.
pub fn virtual_key_from_string(key: &str) -> Option<u32> {
    let upper = key.to_ascii_uppercase();
    match upper.as_str() {
        "SPACE" => return Some(0x20),
        "TAB" => return Some(0x09),
        "ENTER" | "RETURN" => return Some(0x0D),
        "ESC" | "ESCAPE" => return Some(0x1B),
        "BACKSPACE" => return Some(0x08),
        "DELETE" | "DEL" => return Some(0x2E),
        "INSERT" | "INS" => return Some(0x2D),
        "HOME" => return Some(0x24),
        "END" => return Some(0x23),
        "PAGEUP" => return Some(0x21),
        "PAGEDOWN" => return Some(0x22),
        "UP" => return Some(0x26),
        "DOWN" => return Some(0x28),
        "LEFT" => return Some(0x25),
        "RIGHT" => return Some(0x27),
        "CAPSLOCK" => return Some(0x14),
        _ => {}
    }
    if let Some(n) = upper.strip_prefix('F').and_then(|rest| rest.parse::<u8>().ok()) {
        if (1..=24).contains(&n) {
            // VK_F1 = 0x70
            return Some(0x6F + n as u32);
        }
    }
    if upper.len() == 1 {
        let c = upper.chars().next()?;
        if c.is_ascii_alphanumeric() {
            return Some(c as u32);
        }
    }
    None
}

/// A single key transition observed by the listener.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub vk: u32,
    pub pressed: bool,
}

const MOD_CTRL: u8 = 1;
const MOD_SHIFT: u8 = 1 << 1;
const MOD_ALT: u8 = 1 << 2;
const MOD_WIN: u8 = 1 << 3;

fn modifier_bit(vk: u32) -> Option<u8> {
    match vk {
        0x11 | 0xA2 | 0xA3 => Some(MOD_CTRL),
        0x10 | 0xA0 | 0xA1 => Some(MOD_SHIFT),
        0x12 | 0xA4 | 0xA5 => Some(MOD_ALT),
        0x5B | 0x5C => Some(MOD_WIN),
        _ => None,
    }
}

/// Tracks one hotkey across a serialized key-event stream.
pub struct ComboTracker {
    hotkey: Hotkey,
    required: u8,
    held_mods: u8,
    key_held: bool,
    fired: bool,
}

impl ComboTracker {
    pub fn new(hotkey: Hotkey) -> Self {
        let mut required = 0;
        if hotkey.ctrl {
            required |= MOD_CTRL;
        }
        if hotkey.shift {
            required |= MOD_SHIFT;
        }
        if hotkey.alt {
            required |= MOD_ALT;
        }
        if hotkey.win {
            required |= MOD_WIN;
        }
        Self {
            hotkey,
            required,
            held_mods: 0,
            key_held: false,
            fired: false,
        }
    }

    /// Feed one transition; returns true exactly when the combo becomes
    /// active.
    pub fn on_event(&mut self, event: KeyEvent) -> bool {
        if let Some(bit) = modifier_bit(event.vk) {
            if event.pressed {
                self.held_mods |= bit;
            } else {
                self.held_mods &= !bit;
            }
        }
        if event.vk == self.hotkey.vk {
            self.key_held = event.pressed;
        }

        let active = self.key_held && self.held_mods & self.required == self.required;
        if active {
            if self.fired {
                return false;
            }
            self.fired = true;
            true
        } else {
            self.fired = false;
            false
        }
    }
}

/// Latched trigger flag shared between the listener thread and the main loop.
#[derive(Clone, Default)]
pub struct HotkeyTrigger {
    open: Arc<Mutex<bool>>,
}

impl HotkeyTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        if let Ok(mut flag) = self.open.lock() {
            *flag = true;
        }
    }

    /// Consume a pending trigger, if any.
    pub fn take(&self) -> bool {
        let mut open = match self.open.lock() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        if *open {
            *open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(target_os = "windows")]
fn vk_from_key(key: rdev::Key) -> Option<u32> {
    use rdev::Key;
    Some(match key {
        Key::ControlLeft => 0xA2,
        Key::ControlRight => 0xA3,
        Key::ShiftLeft => 0xA0,
        Key::ShiftRight => 0xA1,
        Key::Alt => 0xA4,
        Key::AltGr => 0xA5,
        Key::MetaLeft => 0x5B,
        Key::MetaRight => 0x5C,
        Key::Space => 0x20,
        Key::Tab => 0x09,
        Key::Return => 0x0D,
        Key::Escape => 0x1B,
        Key::Backspace => 0x08,
        Key::Delete => 0x2E,
        Key::Insert => 0x2D,
        Key::Home => 0x24,
        Key::End => 0x23,
        Key::PageUp => 0x21,
        Key::PageDown => 0x22,
        Key::UpArrow => 0x26,
        Key::DownArrow => 0x28,
        Key::LeftArrow => 0x25,
        Key::RightArrow => 0x27,
        Key::CapsLock => 0x14,
        Key::F1 => 0x70,
        Key::F2 => 0x71,
        Key::F3 => 0x72,
        Key::F4 => 0x73,
        Key::F5 => 0x74,
        Key::F6 => 0x75,
        Key::F7 => 0x76,
        Key::F8 => 0x77,
        Key::F9 => 0x78,
        Key::F10 => 0x79,
        Key::F11 => 0x7A,
        Key::F12 => 0x7B,
        Key::KeyA => 0x41,
        Key::KeyB => 0x42,
        Key::KeyC => 0x43,
        Key::KeyD => 0x44,
        Key::KeyE => 0x45,
        Key::KeyF => 0x46,
        Key::KeyG => 0x47,
        Key::KeyH => 0x48,
        Key::KeyI => 0x49,
        Key::KeyJ => 0x4A,
        Key::KeyK => 0x4B,
        Key::KeyL => 0x4C,
        Key::KeyM => 0x4D,
        Key::KeyN => 0x4E,
        Key::KeyO => 0x4F,
        Key::KeyP => 0x50,
        Key::KeyQ => 0x51,
        Key::KeyR => 0x52,
        Key::KeyS => 0x53,
        Key::KeyT => 0x54,
        Key::KeyU => 0x55,
        Key::KeyV => 0x56,
        Key::KeyW => 0x57,
        Key::KeyX => 0x58,
        Key::KeyY => 0x59,
        Key::KeyZ => 0x5A,
        Key::Num0 => 0x30,
        Key::Num1 => 0x31,
        Key::Num2 => 0x32,
        Key::Num3 => 0x33,
        Key::Num4 => 0x34,
        Key::Num5 => 0x35,
        Key::Num6 => 0x36,
        Key::Num7 => 0x37,
        Key::Num8 => 0x38,
        Key::Num9 => 0x39,
        _ => return None,
    })
}

/// Spawn the global key listener. Returns the translate and quit triggers.
/// The hook is restarted after a short pause if it fails or exits.
#[cfg(target_os = "windows")]
pub fn start_listener(translate: Hotkey, quit: Option<Hotkey>) -> (HotkeyTrigger, HotkeyTrigger) {
    let translate_trigger = HotkeyTrigger::new();
    let quit_trigger = HotkeyTrigger::new();
    let translate_out = translate_trigger.clone();
    let quit_out = quit_trigger.clone();

    std::thread::spawn(move || loop {
        let mut translate_tracker = ComboTracker::new(translate);
        let mut quit_tracker = quit.map(ComboTracker::new);
        let translate_trigger = translate_trigger.clone();
        let quit_trigger = quit_trigger.clone();

        let result = rdev::listen(move |event| {
            let key_event = match event.event_type {
                rdev::EventType::KeyPress(k) => {
                    vk_from_key(k).map(|vk| KeyEvent { vk, pressed: true })
                }
                rdev::EventType::KeyRelease(k) => {
                    vk_from_key(k).map(|vk| KeyEvent { vk, pressed: false })
                }
                _ => None,
            };
            let Some(key_event) = key_event else {
                return;
            };
            if translate_tracker.on_event(key_event) {
                translate_trigger.fire();
            }
            if let Some(tracker) = quit_tracker.as_mut() {
                if tracker.on_event(key_event) {
                    quit_trigger.fire();
                }
            }
        });

        match result {
            Ok(()) => tracing::warn!("key listener exited unexpectedly; restarting shortly"),
            Err(e) => tracing::warn!("key listener failed: {:?}; retrying shortly", e),
        }
        std::thread::sleep(std::time::Duration::from_millis(500));
    });

    (translate_out, quit_out)
}
