//! Castling rights flags.

use arbiter_core::{Side, Wing};

/// Castling availability for both sides, packed into four flag bits.
///
/// Rights only ever shrink over a game's lifetime: there are removal
/// methods but no way to add a right back after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling available for either side.
    pub const NONE: CastleRights = CastleRights(0);

    /// Both wings available for both sides.
    pub const FULL: CastleRights = CastleRights(0b1111);

    const fn flag(side: Side, wing: Wing) -> u8 {
        let wing_bit = match wing {
            Wing::Kingside => 0,
            Wing::Queenside => 1,
        };
        1 << (side.index() as u8 * 2 + wing_bit)
    }

    /// Full rights for one side only.
    pub const fn full_for(side: Side) -> Self {
        CastleRights(Self::flag(side, Wing::Kingside) | Self::flag(side, Wing::Queenside))
    }

    /// Returns true if the given side may still castle on the given wing.
    #[inline]
    pub const fn allows(self, side: Side, wing: Wing) -> bool {
        (self.0 & Self::flag(side, wing)) != 0
    }

    /// Removes one wing for a side. Removing an absent right is a no-op.
    #[inline]
    pub fn remove(&mut self, side: Side, wing: Wing) {
        self.0 &= !Self::flag(side, wing);
    }

    /// Removes both wings for a side.
    #[inline]
    pub fn remove_side(&mut self, side: Side) {
        self.0 &= !(Self::flag(side, Wing::Kingside) | Self::flag(side, Wing::Queenside));
    }

    /// Returns the raw flag bits.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True if `self` grants no right that `other` lacks.
    pub const fn is_subset_of(self, other: CastleRights) -> bool {
        self.0 & other.0 == self.0
    }
}
