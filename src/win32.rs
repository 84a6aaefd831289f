//! Win32 implementation of the windowing seam.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP,
    VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowExW, GetClassNameW, GetForegroundWindow, GetWindowLongW, GetWindowTextLengthW,
    GetWindowTextW, IsIconic, IsWindow, IsWindowVisible, SendMessageW, SetForegroundWindow,
    GWL_EXSTYLE, GWL_STYLE, WM_GETTEXT, WM_GETTEXTLENGTH, WM_SETTEXT,
};

use crate::keys::KeyStep;
use crate::windowing::{WindowDescriptor, WindowHandle, WindowingSystem};

pub struct Win32Windowing;

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut core::ffi::c_void)
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

impl WindowingSystem for Win32Windowing {
    fn focused_window(&self) -> Option<WindowHandle> {
        let h = unsafe { GetForegroundWindow() };
        if h.0.is_null() {
            None
        } else {
            Some(WindowHandle(h.0 as isize))
        }
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindow(hwnd(handle)).as_bool() }
    }

    fn descriptor(&self, handle: WindowHandle) -> Option<WindowDescriptor> {
        if !self.is_window(handle) {
            return None;
        }
        let h = hwnd(handle);

        let mut class_buf = [0u16; 256];
        let len = unsafe { GetClassNameW(h, &mut class_buf) };
        if len <= 0 {
            return None;
        }
        let class_name = String::from_utf16_lossy(&class_buf[..len as usize]);

        let title = {
            let len = unsafe { GetWindowTextLengthW(h) };
            if len > 0 {
                let mut buf = vec![0u16; len as usize + 1];
                let copied = unsafe { GetWindowTextW(h, &mut buf) };
                String::from_utf16_lossy(&buf[..copied.max(0) as usize])
            } else {
                String::new()
            }
        };

        unsafe {
            Some(WindowDescriptor {
                handle,
                class_name,
                title,
                visible: IsWindowVisible(h).as_bool(),
                minimized: IsIconic(h).as_bool(),
                style: GetWindowLongW(h, GWL_STYLE) as u32,
                ex_style: GetWindowLongW(h, GWL_EXSTYLE) as u32,
            })
        }
    }

    fn find_child(&self, parent: WindowHandle, class_name: &str) -> Option<WindowHandle> {
        let class = wide(class_name);
        let child = unsafe {
            FindWindowExW(hwnd(parent), None, PCWSTR(class.as_ptr()), PCWSTR::null())
        }
        .ok()?;
        if child.0.is_null() {
            None
        } else {
            Some(WindowHandle(child.0 as isize))
        }
    }

    fn read_text(&self, handle: WindowHandle) -> Option<String> {
        let h = hwnd(handle);
        let len = unsafe { SendMessageW(h, WM_GETTEXTLENGTH, WPARAM(0), LPARAM(0)) }.0;
        if len <= 0 {
            return None;
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = unsafe {
            SendMessageW(
                h,
                WM_GETTEXT,
                WPARAM(buf.len()),
                LPARAM(buf.as_mut_ptr() as isize),
            )
        }
        .0;
        if copied <= 0 {
            return None;
        }
        String::from_utf16(&buf[..copied as usize]).ok()
    }

    fn write_text(&self, handle: WindowHandle, text: &str) -> bool {
        let wide_text = wide(text);
        let result = unsafe {
            SendMessageW(
                hwnd(handle),
                WM_SETTEXT,
                WPARAM(0),
                LPARAM(wide_text.as_ptr() as isize),
            )
        };
        result.0 != 0
    }

    fn set_foreground(&self, handle: WindowHandle) -> bool {
        unsafe { SetForegroundWindow(hwnd(handle)).as_bool() }
    }

    fn send_key_combo(&self, steps: &[KeyStep]) -> anyhow::Result<()> {
        for step in steps {
            let input = INPUT {
                r#type: INPUT_KEYBOARD,
                Anonymous: INPUT_0 {
                    ki: KEYBDINPUT {
                        wVk: VIRTUAL_KEY(step.vk),
                        wScan: 0,
                        dwFlags: if step.up {
                            KEYEVENTF_KEYUP
                        } else {
                            KEYBD_EVENT_FLAGS(0)
                        },
                        time: 0,
                        dwExtraInfo: 0,
                    },
                },
            };
            let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
            if sent == 0 {
                anyhow::bail!("SendInput returned 0");
            }
        }
        Ok(())
    }
}
