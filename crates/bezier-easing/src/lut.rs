//! Baked lookup table for hot animation loops.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// An easing sampled at 256 evenly spaced inputs.
///
/// `lookup()` costs one multiply, two loads and a lerp, with no branches on
/// curve shape. Accuracy is bounded by the sample spacing, so prefer
/// [`Easing::evaluate`] when exact values matter.
///
/// Entries are stored unclamped: overshoot curves keep their excursions
/// outside `[0,1]`.
///
/// # Example
///
/// ```
/// use bezier_easing::Preset;
///
/// let lut = Preset::EaseInOut.easing().to_lut();
/// assert!((lut.lookup(0.5) - 0.5).abs() < 1e-3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EasingLut {
    table: [f32; 256],
}

impl EasingLut {
    /// Number of entries.
    pub const SIZE: usize = 256;

    /// Sample `easing` at `i / 255` for every entry.
    pub fn from_easing(easing: &Easing) -> Self {
        let mut table = [0.0f32; Self::SIZE];

        for (i, entry) in table.iter_mut().enumerate() {
            let input = i as f64 / (Self::SIZE - 1) as f64;
            *entry = easing.evaluate(input) as f32;
        }

        Self { table }
    }

    /// The identity table.
    pub fn linear() -> Self {
        Self::from_easing(&Easing::Linear)
    }

    /// Interpolated lookup. `input` is clamped to `[0,1]`.
    #[inline]
    pub fn lookup(&self, input: f32) -> f32 {
        let input = input.clamp(0.0, 1.0);

        let scaled = input * (Self::SIZE - 1) as f32;
        let index_low = (scaled as usize).min(Self::SIZE - 2);
        let index_high = index_low + 1;
        let fraction = scaled - index_low as f32;

        let low_value = self.table[index_low];
        let high_value = self.table[index_high];

        low_value + fraction * (high_value - low_value)
    }

    /// Raw table.
    pub fn table(&self) -> &[f32; 256] {
        &self.table
    }

    /// Whether entries never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Smallest entry.
    pub fn min_value(&self) -> f32 {
        self.table.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Largest entry.
    pub fn max_value(&self) -> f32 {
        self.table.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

impl Default for EasingLut {
    fn default() -> Self {
        Self::linear()
    }
}

impl Serialize for EasingLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EasingLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries: Vec<f32> = Vec::deserialize(deserializer)?;
        let table = <[f32; 256]>::try_from(entries).map_err(|entries| {
            serde::de::Error::custom(format!(
                "expected {} entries in EasingLut, got {}",
                Self::SIZE,
                entries.len()
            ))
        })?;
        Ok(EasingLut { table })
    }
}
