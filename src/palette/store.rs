//! Static Dracula palette table
//!
//! The table is compiled into the binary and never mutated. Alias palettes
//! (`nosferatu`, `aro`, ...) point at the same shade slice as their base palette.

/// Hex-encoded RGB color, e.g. `"#ff79c6"`
pub type ColorValue = &'static str;

/// Shade key every palette carries for its canonical color
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// A named set of shades sharing a hue family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    shades: &'static [(&'static str, ColorValue)],
}

impl Palette {
    pub const fn new(shades: &'static [(&'static str, ColorValue)]) -> Self {
        Self { shades }
    }

    /// Look up a shade, returning the stored key along with its color
    pub fn get(&self, shade: &str) -> Option<(&'static str, ColorValue)> {
        self.shades.iter().copied().find(|(key, _)| *key == shade)
    }

    /// Color for a shade key
    pub fn color(&self, shade: &str) -> Option<ColorValue> {
        self.get(shade).map(|(_, color)| color)
    }

    /// The palette's canonical color (its `DEFAULT` shade)
    pub fn default_color(&self) -> Option<ColorValue> {
        self.color(DEFAULT_SHADE)
    }

    /// Shades in table order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ColorValue)> {
        self.shades.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

/// Read-only mapping from palette name to palette
#[derive(Debug, Clone, Copy)]
pub struct PaletteStore {
    palettes: &'static [(&'static str, Palette)],
}

impl PaletteStore {
    pub const fn new(palettes: &'static [(&'static str, Palette)]) -> Self {
        Self { palettes }
    }

    /// The built-in Dracula color table
    pub fn dracula() -> &'static PaletteStore {
        &DRACULA
    }

    /// Exact, case-sensitive lookup by palette name
    pub fn get(&self, name: &str) -> Option<(&'static str, Palette)> {
        self.palettes.iter().copied().find(|(key, _)| *key == name)
    }

    pub fn palette(&self, name: &str) -> Option<Palette> {
        self.get(name).map(|(_, palette)| palette)
    }

    /// Palette names in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.palettes.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

const DARKER: &[(&str, ColorValue)] = &[
    ("50", "#cdd0e4"),
    ("100", "#b5bad6"),
    ("200", "#9ea4c8"),
    ("300", "#888fb8"),
    ("400", "#727aa8"),
    ("500", "#5f6795"),
    ("600", "#53597c"),
    ("700", "#454a64"),
    ("800", "#373a4d"),
    ("900", "#282a36"),
    ("DEFAULT", "#282a36"),
];

const DARK: &[(&str, ColorValue)] = &[
    ("50", "#f7f7fb"),
    ("100", "#dfe1ed"),
    ("200", "#c7cadf"),
    ("300", "#b1b5d0"),
    ("400", "#9ba0c0"),
    ("500", "#858bb0"),
    ("600", "#71779f"),
    ("700", "#606689"),
    ("800", "#525771"),
    ("900", "#44475a"),
    ("DEFAULT", "#44475a"),
];

const LIGHT: &[(&str, ColorValue)] = &[
    ("50", "#f8f8f2"),
    ("100", "#eaeada"),
    ("200", "#dcdcc3"),
    ("300", "#cdcdac"),
    ("400", "#bdbd96"),
    ("500", "#adad81"),
    ("600", "#9c9c6c"),
    ("700", "#85855d"),
    ("800", "#6d6d4f"),
    ("900", "#565641"),
    ("DEFAULT", "#f8f8f2"),
];

const BLUE: &[(&str, ColorValue)] = &[
    ("50", "#f0f2f8"),
    ("100", "#d7dcec"),
    ("200", "#bec6df"),
    ("300", "#a6b0d1"),
    ("400", "#8f9bc3"),
    ("500", "#7886b4"),
    ("600", "#6272a4"),
    ("700", "#54628c"),
    ("800", "#485273"),
    ("900", "#3b425a"),
    ("DEFAULT", "#6272a4"),
];

const CYAN: &[(&str, ColorValue)] = &[
    ("50", "#fafeff"),
    ("100", "#d4f8ff"),
    ("200", "#aff0fe"),
    ("300", "#8be9fd"),
    ("400", "#67e1fb"),
    ("500", "#44d9f8"),
    ("600", "#22d0f5"),
    ("700", "#0dbfe5"),
    ("800", "#0ca0bf"),
    ("900", "#0c819a"),
    ("DEFAULT", "#8be9fd"),
];

const GREEN: &[(&str, ColorValue)] = &[
    ("50", "#e2ffe9"),
    ("100", "#bcffcd"),
    ("200", "#97feb1"),
    ("300", "#73fc96"),
    ("400", "#50fa7b"),
    ("500", "#2df760"),
    ("600", "#0cf346"),
    ("700", "#0ccd3d"),
    ("800", "#0ba833"),
    ("900", "#0a8329"),
    ("DEFAULT", "#50fa7b"),
];

const ORANGE: &[(&str, ColorValue)] = &[
    ("50", "#ffefdd"),
    ("100", "#ffdcb7"),
    ("200", "#ffca92"),
    ("300", "#ffb86c"),
    ("400", "#fda648"),
    ("500", "#fb9325"),
    ("600", "#f38107"),
    ("700", "#cd6d08"),
    ("800", "#a75a08"),
    ("900", "#824707"),
    ("DEFAULT", "#ffb86c"),
];

const PINK: &[(&str, ColorValue)] = &[
    ("50", "#ffeaf6"),
    ("100", "#ffc4e6"),
    ("200", "#ff9fd6"),
    ("300", "#ff79c6"),
    ("400", "#fd55b6"),
    ("500", "#fb31a5"),
    ("600", "#f80e95"),
    ("700", "#d90880"),
    ("800", "#b3086b"),
    ("900", "#8e0855"),
    ("DEFAULT", "#ff79c6"),
];

const PURPLE: &[(&str, ColorValue)] = &[
    ("50", "#fefeff"),
    ("100", "#e9dafe"),
    ("200", "#d3b6fc"),
    ("300", "#bd93f9"),
    ("400", "#a771f6"),
    ("500", "#924ff2"),
    ("600", "#7d2eed"),
    ("700", "#6916e0"),
    ("800", "#5914bb"),
    ("900", "#491298"),
    ("DEFAULT", "#bd93f9"),
];

const RED: &[(&str, ColorValue)] = &[
    ("50", "#ffecec"),
    ("100", "#ffc6c6"),
    ("200", "#ffa0a0"),
    ("300", "#ff7b7b"),
    ("400", "#ff5555"),
    ("500", "#fd3131"),
    ("600", "#fb0e0e"),
    ("700", "#dd0606"),
    ("800", "#b70707"),
    ("900", "#910707"),
    ("DEFAULT", "#ff5555"),
];

const YELLOW: &[(&str, ColorValue)] = &[
    ("50", "#fefff8"),
    ("100", "#fafed3"),
    ("200", "#f6fcaf"),
    ("300", "#f1fa8c"),
    ("400", "#ebf769"),
    ("500", "#e5f347"),
    ("600", "#dfef26"),
    ("700", "#ccdd12"),
    ("800", "#abb811"),
    ("900", "#899410"),
    ("DEFAULT", "#f1fa8c"),
];

const DRACULA_PALETTES: &[(&str, Palette)] = &[
    ("darker", Palette::new(DARKER)),
    ("dark", Palette::new(DARK)),
    ("light", Palette::new(LIGHT)),
    ("blue", Palette::new(BLUE)),
    ("cyan", Palette::new(CYAN)),
    ("green", Palette::new(GREEN)),
    ("orange", Palette::new(ORANGE)),
    ("pink", Palette::new(PINK)),
    ("purple", Palette::new(PURPLE)),
    ("red", Palette::new(RED)),
    ("yellow", Palette::new(YELLOW)),
    ("nosferatu", Palette::new(DARKER)),
    ("aro", Palette::new(DARK)),
    ("cullen", Palette::new(LIGHT)),
    ("vonCount", Palette::new(BLUE)),
    ("vanHelsing", Palette::new(CYAN)),
    ("blade", Palette::new(GREEN)),
    ("morbius", Palette::new(ORANGE)),
    ("buffy", Palette::new(PINK)),
    ("dracula", Palette::new(PURPLE)),
    ("marcelin", Palette::new(RED)),
    ("lincoln", Palette::new(YELLOW)),
];

static DRACULA: PaletteStore = PaletteStore::new(DRACULA_PALETTES);
