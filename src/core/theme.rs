// Light/dark colour mode for the page chrome.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// CSS colours applied to header, sidebar and text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub divider: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#fafafa",
    paper: "#ffffff",
    text: "rgba(0, 0, 0, 0.87)",
    divider: "rgba(0, 0, 0, 0.12)",
};

const DARK: Palette = Palette {
    background: "#121212",
    paper: "#1e1e1e",
    text: "#ffffff",
    divider: "rgba(255, 255, 255, 0.12)",
};

impl ColorMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Value written to `<body data-theme="...">`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ColorMode::Light => &LIGHT,
            ColorMode::Dark => &DARK,
        }
    }
}
