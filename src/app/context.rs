use crate::ports::ClipboardWriter;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ClipboardWriter> {
    clipboard: C,
}

impl<C: ClipboardWriter> AppContext<C> {
    /// Create a new application context.
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    /// Get a reference to the clipboard writer.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
