//! Scoped access to the system clipboard.
//!
//! The clipboard is a process-global resource the user also owns. Any
//! operation that occupies it goes through [`ClipboardGuard`], which snapshots
//! the current contents and puts them back when the guard drops, whatever
//! happened in between.

/// Minimal clipboard surface. The production implementation wraps
/// [`arboard::Clipboard`].
pub trait ClipboardAccess {
    /// `Ok(None)` when the clipboard holds no text.
    fn get_text(&mut self) -> anyhow::Result<Option<String>>;

    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;

    fn clear(&mut self) -> anyhow::Result<()>;
}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardAccess for SystemClipboard {
    fn get_text(&mut self) -> anyhow::Result<Option<String>> {
        match self.inner.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.inner.set_text(text.to_string())?;
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.inner.clear()?;
        Ok(())
    }
}

/// Exclusive occupation of the clipboard for the duration of one capture or
/// injection. Taking the guard snapshots whatever the user had on the
/// clipboard; dropping it restores that snapshot. Restoration is best effort:
/// its own failure is logged, never escalated.
pub struct ClipboardGuard<'a> {
    clipboard: &'a mut dyn ClipboardAccess,
    snapshot: Option<String>,
}

impl<'a> ClipboardGuard<'a> {
    pub fn acquire(clipboard: &'a mut dyn ClipboardAccess) -> Self {
        let snapshot = match clipboard.get_text() {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("clipboard snapshot failed: {e}");
                None
            }
        };
        Self { clipboard, snapshot }
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.clipboard.clear()
    }

    pub fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.clipboard.set_text(text)
    }

    /// Read whatever the simulated copy left behind. Read errors count as
    /// "nothing captured".
    pub fn read(&mut self) -> Option<String> {
        match self.clipboard.get_text() {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("clipboard read failed: {e}");
                None
            }
        }
    }
}

impl Drop for ClipboardGuard<'_> {
    fn drop(&mut self) {
        let result = match self.snapshot.take() {
            Some(text) => self.clipboard.set_text(&text),
            None => self.clipboard.clear(),
        };
        if let Err(e) = result {
            tracing::warn!("failed to restore clipboard contents: {e}");
        }
    }
}
