//! User configuration — keybindings, display settings and persistence.
//!
//! Stored as a simple key = value text file at
//! `$XDG_CONFIG_HOME/treeglide/config.toml` (default `~/.config/treeglide/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::flatten::DEFAULT_LABEL_WIDTH;

// ───────────────────────────────────────── actions ───────────

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    ToggleHelp,
    Quit,
}

impl Action {
    /// Display order, also used when writing the config file.
    pub const ALL: &[Action] = &[
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::ToggleHelp,
        Action::Quit,
    ];

    /// Short description for the help bar.
    pub fn label(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "parent",
            Action::Right => "children",
            Action::ToggleHelp => "help",
            Action::Quit => "quit",
        }
    }

    fn config_key(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::ToggleHelp => "toggle_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Key code plus the CTRL/ALT/SHIFT modifiers that must accompany it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Platform modifiers such as SUPER are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// Help-bar form, e.g. `"↑"`, `"Ctrl+c"`.
    pub fn display(&self) -> String {
        self.render(true)
    }

    /// Config-file form, e.g. `"Up"`, `"Ctrl+c"`.
    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        let name = match (self.code, pretty) {
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, _) => "PageUp".into(),
            (KeyCode::PageDown, _) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&name);
        s
    }

    /// Parse `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Esc"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts: Vec<&str> = s.split('+').collect();
        // "Shift++" style: a trailing empty part means the key itself is '+'.
        if parts.len() > 1 && parts.last() == Some(&"") {
            parts.pop();
            parts.pop();
            parts.push("+");
        }
        let (key_part, mods) = parts.split_last()?;

        let mut modifiers = KeyModifiers::NONE;
        for part in mods {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
            _ => {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(Self { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Width of the label column, in terminal columns.
    pub label_width: usize,
    /// Show the help bar on start-up.
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            label_width: DEFAULT_LABEL_WIDTH,
            show_help: true,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        HashMap::from([
            (Up, vec![KeyBind::plain(KeyCode::Up), KeyBind::plain(KeyCode::Char('k'))]),
            (Down, vec![KeyBind::plain(KeyCode::Down), KeyBind::plain(KeyCode::Char('j'))]),
            (Left, vec![KeyBind::plain(KeyCode::Left), KeyBind::plain(KeyCode::Char('h'))]),
            (Right, vec![KeyBind::plain(KeyCode::Right), KeyBind::plain(KeyCode::Char('l'))]),
            (ToggleHelp, vec![KeyBind::plain(KeyCode::Char('?'))]),
            (Quit, vec![KeyBind::plain(KeyCode::Char('q')), KeyBind::plain(KeyCode::Esc)]),
        ])
    }

    /// Action bound to `event`.  When several match, the binding with the
    /// most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// Bindings joined for display (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(KeyBind::display).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no config file, using defaults");
                Self::default()
            }
        }
    }

    /// Write to the default location.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    /// Parse file contents.  Unknown keys and malformed values are skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "label_width" => {
                    match value.parse::<usize>() {
                        Ok(v) => config.label_width = v.min(200),
                        Err(_) => tracing::warn!(value, "ignoring bad label_width"),
                    }
                    continue;
                }
                "show_help" => {
                    config.show_help = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!(key, "unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# treeglide configuration".to_string(),
            String::new(),
            "# Display".to_string(),
            format!("label_width = {}", self.label_width),
            format!("show_help = {}", self.show_help),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/treeglide/config.toml`.
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("treeglide").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_bindings_cover_every_action() {
        let config = AppConfig::default();
        for &action in Action::ALL {
            assert!(!config.bindings[&action].is_empty(), "{action:?} unbound");
        }
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::Down)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(Action::Left)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn parses_key_strings() {
        assert_eq!(KeyBind::parse("q"), Some(KeyBind::plain(KeyCode::Char('q'))));
        assert_eq!(
            KeyBind::parse("Ctrl+Alt+Up"),
            Some(KeyBind::new(
                KeyCode::Up,
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
        assert_eq!(KeyBind::parse("F5"), Some(KeyBind::plain(KeyCode::F(5))));
        assert_eq!(KeyBind::parse("Shift++"), Some(KeyBind::new(KeyCode::Char('+'), KeyModifiers::SHIFT)));
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("nonsense"), None);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config = AppConfig::parse(
            "# comment\n\
             label_width = 12\n\
             show_help = false\n\
             up = w, Ctrl+p\n\
             bogus = x\n\
             down = ???\n",
        );
        assert_eq!(config.label_width, 12);
        assert!(!config.show_help);
        assert_eq!(
            config.match_key(key(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Some(Action::Up)
        );
        assert_eq!(config.match_key(key(KeyCode::Up, KeyModifiers::NONE)), None);
        // unparsable value keeps the default
        assert_eq!(config.display_bindings(Action::Down), "↓/j");
    }

    #[test]
    fn saved_file_loads_back() {
        let mut config = AppConfig::default();
        config.label_width = 8;
        config
            .bindings
            .insert(Action::Quit, vec![KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]);

        let dir = std::env::temp_dir().join(format!("treeglide-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path);
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.label_width, 8);
        assert_eq!(loaded.bindings, config.bindings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let loaded = AppConfig::load_from(Path::new("/nonexistent/treeglide/config.toml"));
        assert_eq!(loaded.label_width, DEFAULT_LABEL_WIDTH);
        assert!(loaded.show_help);
    }
}
