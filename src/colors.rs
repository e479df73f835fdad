//! Light colors and their RGB rendering.
//!
//! [`LightColor`] is the stock label type for stoplight sequences. Renderers
//! that drive LEDs or terminals convert labels to `palette::Srgb` here, and
//! use [`dimmed`] for lights that are switched off but still drawn.

use palette::{Mix, Srgb};

/// Black, used for the unlit `Off` state.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// How much of a light's color remains visible while it is inactive.
pub const DIM_LEVEL: f32 = 0.15;

/// The colors a stoplight can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightColor {
    Green,
    Yellow,
    Red,
    Purple,
    /// No light at all.
    Off,
}

impl LightColor {
    /// All colors, in declaration order.
    pub const ALL: [LightColor; 5] = [
        LightColor::Green,
        LightColor::Yellow,
        LightColor::Red,
        LightColor::Purple,
        LightColor::Off,
    ];

    /// Lowercase name, as used in markup and logs.
    pub const fn name(self) -> &'static str {
        match self {
            LightColor::Green => "green",
            LightColor::Yellow => "yellow",
            LightColor::Red => "red",
            LightColor::Purple => "purple",
            LightColor::Off => "off",
        }
    }

    /// Full-brightness RGB value of this light.
    pub const fn to_srgb(self) -> Srgb {
        match self {
            LightColor::Green => Srgb::new(0.0, 1.0, 0.0),
            LightColor::Yellow => Srgb::new(1.0, 1.0, 0.0),
            LightColor::Red => Srgb::new(1.0, 0.0, 0.0),
            LightColor::Purple => Srgb::new(0.5, 0.0, 0.5),
            LightColor::Off => COLOR_OFF,
        }
    }

    /// RGB value for a light that is lit (`active`) or dimmed.
    pub fn render(self, active: bool) -> Srgb {
        if active {
            self.to_srgb()
        } else {
            dimmed(self.to_srgb())
        }
    }
}

impl core::fmt::Display for LightColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

/// Scales a color towards black, leaving [`DIM_LEVEL`] of it visible.
#[inline]
pub fn dimmed(color: Srgb) -> Srgb {
    COLOR_OFF.mix(color, DIM_LEVEL)
}
