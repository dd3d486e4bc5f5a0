//! Key bindings and hints per focus context.

/// The widget or screen that currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Bindings that work everywhere.
    Global,
    /// A data table has focus.
    Table,
    /// A text input has focus.
    Input,
    /// The theme dropdown has focus.
    ThemeToggle,
    /// A button-like control has focus.
    Button,
    /// The story browser list.
    Browser,
    /// A single story is open.
    Story,
    /// The help overlay.
    Help,
}

impl KeyContext {
    /// Section title in the help view.
    pub fn display(&self) -> &'static str {
        match self {
            KeyContext::Global => "Global",
            KeyContext::Table => "Data Table",
            KeyContext::Input => "Input Field",
            KeyContext::ThemeToggle => "Theme Toggle",
            KeyContext::Button => "Buttons",
            KeyContext::Browser => "Story Browser",
            KeyContext::Story => "Story",
            KeyContext::Help => "Help",
        }
    }

    /// Whether printable keys go to a text input in this context.
    pub fn captures_text(&self) -> bool {
        matches!(self, KeyContext::Input | KeyContext::Browser)
    }
}

/// A key and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: &'static str,
    pub description: &'static str,
}

const fn bind(key: &'static str, description: &'static str) -> Keybinding {
    Keybinding { key, description }
}

/// Every binding, grouped by context, in help order.
pub fn get_keybindings_grouped() -> Vec<(KeyContext, Vec<Keybinding>)> {
    vec![
        (
            KeyContext::Global,
            vec![
                bind("Tab", "Focus next widget"),
                bind("Shift+Tab", "Focus previous widget"),
                bind("b", "Browse stories"),
                bind("?", "Show this help"),
                bind("q", "Quit (outside text inputs)"),
                bind("Ctrl+C", "Quit"),
            ],
        ),
        (
            KeyContext::Table,
            vec![
                bind("j / ↓", "Move down"),
                bind("k / ↑", "Move up"),
                bind("g / G", "First / last row"),
                bind("h / l", "Focus previous / next column"),
                bind("s / Enter", "Sort by focused column"),
                bind("Space", "Select row"),
                bind("a", "Select all / none"),
            ],
        ),
        (
            KeyContext::Input,
            vec![
                bind("← / →", "Move cursor"),
                bind("Home / End", "Start / end of line"),
                bind("Ctrl+A / Ctrl+E", "Start / end of line"),
                bind("Ctrl+U", "Clear line"),
                bind("Ctrl+W", "Delete word"),
                bind("Ctrl+X", "Clear button"),
                bind("Ctrl+T", "Show / hide password"),
            ],
        ),
        (
            KeyContext::ThemeToggle,
            vec![
                bind("Enter", "Open theme menu"),
                bind("h / l", "Previous / next theme"),
                bind("Esc", "Close menu"),
            ],
        ),
        (
            KeyContext::Browser,
            vec![
                bind("type", "Search stories"),
                bind("↑ / ↓", "Move selection"),
                bind("Enter", "Open story"),
                bind("Esc", "Back to demo"),
            ],
        ),
        (KeyContext::Story, vec![bind("Esc", "Back to stories")]),
    ]
}

/// Short key hints for the help bar, keys in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Global => "[Tab] next  [b] stories  [?] help  [q] quit",
        KeyContext::Table => {
            "[j/k] move  [h/l] column  [s] sort  [Space] select  [a] all  [Tab] next  [?] help"
        }
        KeyContext::Input => {
            "[type] edit  [Ctrl+U] clear line  [Ctrl+X] clear  [Ctrl+T] show/hide  [Tab] next"
        }
        KeyContext::ThemeToggle => "[Enter] open  [h/l] cycle  [Tab] next  [?] help  [q] quit",
        KeyContext::Button => "[Enter] activate  [Tab] next  [?] help  [q] quit",
        KeyContext::Browser => "[type] search  [↑/↓] move  [Enter] open  [Esc] back",
        KeyContext::Story => "[Tab] next  [Esc] back to stories  [?] help  [q] quit",
        KeyContext::Help => "[j/k] scroll  [Esc] close",
    }
}
