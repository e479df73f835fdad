//! Mapping the active step onto a row of drawn lights.
//!
//! A [`DisplayOrder`] lists what each visual position shows, independently of
//! the order in which the engine cycles. Given the active step it reports,
//! per position, whether that light is lit.
//!
//! The display order may name labels the sequence never reaches, repeat a
//! label, or leave some of the sequence's labels out. None of these are
//! errors: positions with no match simply stay dark, and a step with no
//! matching position leaves every light dark.

use crate::colors::LightColor;
use crate::time::TimeDuration;
use crate::types::Step;
use heapless::Vec;
use palette::Srgb;

/// How a drawn light decides whether it is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchMode {
    /// Lit when its label equals the active step's label.
    #[default]
    Label,
    /// Lit when its position equals the active step's rank.
    Rank,
}

/// Display order validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// More positions than the display order can hold.
    CapacityExceeded,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::CapacityExceeded => write!(f, "display order capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}

/// One drawn light and whether it is lit right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Light<L> {
    /// Visual position, counted from the top.
    pub position: usize,
    /// What this light shows.
    pub label: L,
    /// Whether this light is lit.
    pub active: bool,
}

impl Light<LightColor> {
    /// RGB value to draw this light with.
    pub fn color(&self) -> Srgb {
        self.label.render(self.active)
    }
}

/// Visual positions of a stoplight's lights.
///
/// # Type Parameters
/// * `L` - Label type shared with the sequence
/// * `M` - Maximum number of drawn lights
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOrder<L, const M: usize> {
    labels: Vec<L, M>,
    mode: MatchMode,
}

impl<L: Copy + PartialEq, const M: usize> DisplayOrder<L, M> {
    /// Creates a display order that matches lights by label.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if `labels` holds more than `M` entries.
    pub fn new(labels: &[L]) -> Result<Self, DisplayError> {
        Self::with_mode(labels, MatchMode::Label)
    }

    /// Creates a display order with an explicit match mode.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if `labels` holds more than `M` entries.
    pub fn with_mode(labels: &[L], mode: MatchMode) -> Result<Self, DisplayError> {
        let labels = Vec::from_slice(labels).map_err(|_| DisplayError::CapacityExceeded)?;
        Ok(Self { labels, mode })
    }

    /// Returns the match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the labels in visual order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of drawn lights.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if the light at `position` is lit for `step`.
    pub fn is_active<D: TimeDuration>(&self, position: usize, step: &Step<L, D>) -> bool {
        match self.mode {
            MatchMode::Label => self.labels.get(position) == Some(&step.label),
            MatchMode::Rank => {
                position < self.labels.len() && step.rank.map(usize::from) == Some(position)
            }
        }
    }

    /// Iterates over every drawn light with its lit state for `step`.
    pub fn lights<'a, D: TimeDuration>(
        &'a self,
        step: &'a Step<L, D>,
    ) -> impl Iterator<Item = Light<L>> + 'a {
        self.labels
            .iter()
            .enumerate()
            .map(move |(position, &label)| Light {
                position,
                label,
                active: self.is_active(position, step),
            })
    }

    /// Number of lights lit for `step`.
    pub fn active_count<D: TimeDuration>(&self, step: &Step<L, D>) -> usize {
        self.lights(step).filter(|light| light.active).count()
    }
}
