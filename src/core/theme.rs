use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn css(self) -> String {
        let [r, g, b] = self.0;
        format!("rgb({r}, {g}, {b})")
    }

    /// Channel-wise blend toward `other` by `t` in [0, 1].
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let a = self.0[i] as f64;
            let b = other.0[i] as f64;
            *c = (a + (b - a) * t).round() as u8;
        }
        Rgb(out)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub line: Rgb,
    pub dot: Rgb,
}

/// Named background palettes, selected by the same key used as the wrapper's
/// CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Green,
    White,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                line: Rgb::new(75, 75, 75),
                dot: Rgb::new(132, 132, 132),
            },
            Self::Green => Palette {
                line: Rgb::new(38, 80, 29),
                dot: Rgb::new(105, 166, 16),
            },
            Self::White => Palette {
                line: Rgb::new(222, 222, 222),
                dot: Rgb::new(173, 173, 173),
            },
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Green => "green",
            Self::White => "white",
        }
    }

    /// Unknown keys fall back to the default green palette.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            log::debug!("[theme] unknown theme `{key}`, using green");
            Self::Green
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "green" => Ok(Self::Green),
            "white" => Ok(Self::White),
            _ => Err(format!("unknown theme `{s}`")),
        }
    }
}
