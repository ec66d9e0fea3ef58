//! Favorite Records

/// Outcome of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Favorited,
    Unfavorited,
}

impl FavoriteToggle {
    #[must_use]
    pub const fn is_favorited(self) -> bool {
        matches!(self, Self::Favorited)
    }
}
