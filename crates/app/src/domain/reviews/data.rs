//! Reviews Data

use std::ops::RangeInclusive;

/// Star ratings a review may carry.
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// New Review Data, used for both offer and shop reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    #[must_use]
    pub fn has_valid_rating(&self) -> bool {
        RATING_RANGE.contains(&self.rating)
    }
}

/// Review Update Data. Replaces both rating and comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub comment: String,
}

impl ReviewUpdate {
    #[must_use]
    pub fn has_valid_rating(&self) -> bool {
        RATING_RANGE.contains(&self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_outside_one_to_five_are_invalid() {
        let review = |rating| NewReview {
            rating,
            comment: String::new(),
        };

        assert!(!review(0).has_valid_rating());
        assert!(review(1).has_valid_rating());
        assert!(review(5).has_valid_rating());
        assert!(!review(6).has_valid_rating());

        assert!(
            !ReviewUpdate {
                rating: 9,
                comment: String::new()
            }
            .has_valid_rating()
        );
    }
}
