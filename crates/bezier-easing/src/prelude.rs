//! Common imports.
//!
//! ```
//! use bezier_easing::prelude::*;
//!
//! let ease: Easing = "ease-out".parse()?;
//! assert!(ease.evaluate(0.25) > 0.25);
//! # Ok::<(), EasingError>(())
//! ```

pub use crate::bezier;
pub use crate::config::EasingConfig;
pub use crate::easing::{ControlPoints, CubicBezier, Easing};
pub use crate::error::EasingError;
pub use crate::lut::EasingLut;
pub use crate::preset::Preset;
pub use crate::solver::{Root, RootMethod};
