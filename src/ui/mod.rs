//! UI-Komponenten: Menü, Toolbar, Statusleiste, Canvas-Input, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialoge).
/// Keyboard-Shortcuts sind in eine eigene Datei extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
