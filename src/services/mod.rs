mod clipboard_arboard;

pub use clipboard_arboard::ArboardClipboard;
