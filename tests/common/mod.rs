#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use window_translator::clipboard::ClipboardAccess;
use window_translator::keys::{self, KeyStep};
use window_translator::translate::{TranslationClient, TranslationRequest};
use window_translator::windowing::{WindowDescriptor, WindowHandle, WindowingSystem};

/// One fake window. `answers_messages` controls whether direct
/// WM_GETTEXT/WM_SETTEXT-style calls succeed against it.
#[derive(Clone)]
pub struct MockWindow {
    pub class_name: String,
    pub title: String,
    pub visible: bool,
    pub minimized: bool,
    pub style: u32,
    pub ex_style: u32,
    pub text: String,
    pub answers_messages: bool,
    /// Child controls as (class name, handle) pairs; the child handle must
    /// also be registered as a window.
    pub children: Vec<(String, isize)>,
}

impl MockWindow {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            title: String::new(),
            visible: true,
            minimized: false,
            style: 0,
            ex_style: 0,
            text: String::new(),
            answers_messages: true,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn silent(mut self) -> Self {
        self.answers_messages = false;
        self
    }
}

#[derive(Default)]
pub struct WorldState {
    pub windows: HashMap<isize, MockWindow>,
    pub foreground: Option<isize>,
    pub clipboard: Option<String>,
    pub combos: Vec<Vec<KeyStep>>,
    pub fail_combos: bool,
    pub fail_clipboard_writes: bool,
}

/// Shared state behind the mock windowing system, clipboard, and translator,
/// so a simulated Copy really moves the focused window's text onto the
/// clipboard and a simulated Paste really writes it back.
#[derive(Clone, Default)]
pub struct MockWorld {
    state: Arc<Mutex<WorldState>>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_window(&self, handle: isize, window: MockWindow) {
        self.state.lock().unwrap().windows.insert(handle, window);
    }

    pub fn remove_window(&self, handle: isize) {
        self.state.lock().unwrap().windows.remove(&handle);
    }

    pub fn focus(&self, handle: Option<isize>) {
        self.state.lock().unwrap().foreground = handle;
    }

    pub fn set_clipboard(&self, text: Option<&str>) {
        self.state.lock().unwrap().clipboard = text.map(str::to_string);
    }

    pub fn clipboard(&self) -> Option<String> {
        self.state.lock().unwrap().clipboard.clone()
    }

    pub fn window_text(&self, handle: isize) -> String {
        self.state.lock().unwrap().windows[&handle].text.clone()
    }

    pub fn combos(&self) -> Vec<Vec<KeyStep>> {
        self.state.lock().unwrap().combos.clone()
    }

    pub fn fail_combos(&self) {
        self.state.lock().unwrap().fail_combos = true;
    }

    pub fn fail_clipboard_writes(&self) {
        self.state.lock().unwrap().fail_clipboard_writes = true;
    }

    pub fn windowing(&self) -> MockWindowing {
        MockWindowing {
            state: self.state.clone(),
        }
    }

    pub fn clipboard_access(&self) -> MockClipboard {
        MockClipboard {
            state: self.state.clone(),
        }
    }

    pub fn translator(&self, mode: TranslateMode) -> MockTranslator {
        MockTranslator {
            state: self.state.clone(),
            mode,
            refocus: None,
            close: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

pub struct MockWindowing {
    state: Arc<Mutex<WorldState>>,
}

impl WindowingSystem for MockWindowing {
    fn focused_window(&self) -> Option<WindowHandle> {
        self.state.lock().unwrap().foreground.map(WindowHandle)
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        self.state.lock().unwrap().windows.contains_key(&handle.0)
    }

    fn descriptor(&self, handle: WindowHandle) -> Option<WindowDescriptor> {
        let state = self.state.lock().unwrap();
        let window = state.windows.get(&handle.0)?;
        Some(WindowDescriptor {
            handle,
            class_name: window.class_name.clone(),
            title: window.title.clone(),
            visible: window.visible,
            minimized: window.minimized,
            style: window.style,
            ex_style: window.ex_style,
        })
    }

    fn find_child(&self, parent: WindowHandle, class_name: &str) -> Option<WindowHandle> {
        let state = self.state.lock().unwrap();
        let window = state.windows.get(&parent.0)?;
        window
            .children
            .iter()
            .find(|(class, _)| class == class_name)
            .map(|&(_, handle)| WindowHandle(handle))
    }

    fn read_text(&self, handle: WindowHandle) -> Option<String> {
        let state = self.state.lock().unwrap();
        let window = state.windows.get(&handle.0)?;
        if window.answers_messages && !window.text.is_empty() {
            Some(window.text.clone())
        } else {
            None
        }
    }

    fn write_text(&self, handle: WindowHandle, text: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        match state.windows.get_mut(&handle.0) {
            Some(window) if window.answers_messages => {
                window.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    fn set_foreground(&self, handle: WindowHandle) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.windows.contains_key(&handle.0) {
            state.foreground = Some(handle.0);
            true
        } else {
            false
        }
    }

    fn send_key_combo(&self, steps: &[KeyStep]) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_combos {
            anyhow::bail!("simulated input rejected");
        }
        state.combos.push(steps.to_vec());
        if steps == keys::copy() {
            if let Some(text) = state
                .foreground
                .and_then(|h| state.windows.get(&h))
                .map(|w| w.text.clone())
                .filter(|t| !t.is_empty())
            {
                state.clipboard = Some(text);
            }
        } else if steps == keys::paste() {
            if let Some(content) = state.clipboard.clone() {
                if let Some(window) = state.foreground.and_then(|h| state.windows.get_mut(&h)) {
                    window.text = content;
                }
            }
        }
        Ok(())
    }
}

pub struct MockClipboard {
    state: Arc<Mutex<WorldState>>,
}

impl ClipboardAccess for MockClipboard {
    fn get_text(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.state.lock().unwrap().clipboard.clone())
    }

    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_clipboard_writes {
            anyhow::bail!("clipboard write rejected");
        }
        state.clipboard = Some(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.state.lock().unwrap().clipboard = None;
        Ok(())
    }
}

pub enum TranslateMode {
    Fixed(String),
    Echo,
    Fail,
}

pub struct MockTranslator {
    state: Arc<Mutex<WorldState>>,
    mode: TranslateMode,
    refocus: Option<Option<isize>>,
    close: Option<isize>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranslator {
    /// Switch the foreground window while the "network call" is in flight.
    pub fn refocus_during_call(mut self, handle: Option<isize>) -> Self {
        self.refocus = Some(handle);
        self
    }

    /// Close a window while the "network call" is in flight.
    pub fn close_during_call(mut self, handle: isize) -> Self {
        self.close = Some(handle);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TranslationClient for MockTranslator {
    fn translate(&self, request: &TranslationRequest) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(request.text.clone());
        if let Some(target) = self.refocus {
            self.state.lock().unwrap().foreground = target;
        }
        if let Some(handle) = self.close {
            self.state.lock().unwrap().windows.remove(&handle);
        }
        match &self.mode {
            TranslateMode::Fixed(text) => Ok(text.clone()),
            TranslateMode::Echo => Ok(request.text.clone()),
            TranslateMode::Fail => anyhow::bail!("translation service unreachable"),
        }
    }
}
