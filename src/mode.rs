/*!
 * Octal permission specifications with wildcard positions
 */

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RperError};

/// One position of a mode specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSlot {
    /// Preserve the original 3-bit group (`*`)
    Keep,
    /// Replace the group with this value
    Bits(u8),
}

/// A 3-position permission template, e.g. `755`, `0644` or `6*4`
///
/// Positions are stored in user, group, other order. A `*` position keeps
/// the corresponding bits of whatever mode the spec is applied to, so
/// `6*4` applied to `750` yields `654`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSpec {
    slots: [ModeSlot; 3],
}

impl ModeSpec {
    /// Apply the spec to an existing permission value
    ///
    /// Only the low 9 bits of `mode` are considered. Wildcard positions
    /// keep the original group, fixed positions overwrite it. Applying
    /// the same spec twice yields the same result.
    pub fn apply(&self, mode: u32) -> u32 {
        let mut new_mode = mode & 0o777;
        for (i, slot) in self.slots.iter().enumerate() {
            if let ModeSlot::Bits(bits) = slot {
                let shift = 6 - 3 * i as u32;
                new_mode &= !(0o7 << shift);
                new_mode |= u32::from(*bits) << shift;
            }
        }
        new_mode
    }

    /// The user, group and other positions in order
    pub fn slots(&self) -> &[ModeSlot; 3] {
        &self.slots
    }
}

impl FromStr for ModeSpec {
    type Err = RperError;

    fn from_str(s: &str) -> Result<Self> {
        // A leading zero on a 4-character spec is stripped (0644 == 644).
        // Any other 4-character spec falls through and fails the length
        // check below.
        let digits = match s.strip_prefix('0') {
            Some(rest) if s.len() == 4 => rest,
            _ => s,
        };

        if digits.len() != 3 || !digits.chars().all(|c| matches!(c, '4'..='7' | '*')) {
            return Err(RperError::InvalidModeSpec(s.to_string()));
        }

        let mut slots = [ModeSlot::Keep; 3];
        for (i, c) in digits.chars().enumerate() {
            slots[i] = match c {
                '*' => ModeSlot::Keep,
                digit => ModeSlot::Bits(digit as u8 - b'0'),
            };
        }
        Ok(ModeSpec { slots })
    }
}

impl fmt::Display for ModeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                ModeSlot::Keep => write!(f, "*")?,
                ModeSlot::Bits(bits) => write!(f, "{}", bits)?,
            }
        }
        Ok(())
    }
}
