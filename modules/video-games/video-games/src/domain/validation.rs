//! Field constraints for catalog entries.
//!
//! Every rule is evaluated; the caller gets the full list of violated
//! messages, in field order, and decides how to surface them.

use rust_decimal::Decimal;
use video_games_sdk::NewVideoGame;
pub use video_games_sdk::errors::join_violations;

use super::error::DomainError;

pub const TITLE_BLANK: &str = "Video game title must not be left blank.";
pub const TITLE_SIZE: &str =
    "Video game title must be greater than 1 character and less then 100 characters.";
pub const GENRE_BLANK: &str = "Video game genre must not be left blank.";
pub const GENRE_SIZE: &str =
    "Video game genre must be greater than 1 character and less than 100 characters.";
pub const DEVELOPER_BLANK: &str = "Video game developer must not be left blank.";
pub const DEVELOPER_SIZE: &str =
    "Video game developer must be greater than 5 characters and less than 250 characters.";
pub const PRICE_MAX: &str = "Video game price must be less than \u{a3}30.00 (GBP).";
pub const PRICE_MIN: &str = "Video game price must be less than \u{a3}5.00 (GBP).";
pub const PRICE_MISSING: &str = "Video game price must not be left blank.";
pub const PRICE_SCALE: &str = "Video game price must have no more than 2 decimal places.";

const PRICE_MAX_SCALE: u32 = 2;

struct TextRule {
    min: usize,
    max: usize,
    blank: &'static str,
    size: &'static str,
}

const TITLE: TextRule = TextRule {
    min: 1,
    max: 100,
    blank: TITLE_BLANK,
    size: TITLE_SIZE,
};

const GENRE: TextRule = TextRule {
    min: 1,
    max: 100,
    blank: GENRE_BLANK,
    size: GENRE_SIZE,
};

const DEVELOPER: TextRule = TextRule {
    min: 5,
    max: 250,
    blank: DEVELOPER_BLANK,
    size: DEVELOPER_SIZE,
};

fn price_min() -> Decimal {
    Decimal::new(500, 2)
}

fn price_max() -> Decimal {
    Decimal::new(3000, 2)
}

impl TextRule {
    fn check(&self, value: Option<&str>, out: &mut Vec<String>) {
        // An absent value is blank; only present values are length-checked.
        let Some(value) = value else {
            out.push(self.blank.to_owned());
            return;
        };
        if value.trim().is_empty() {
            out.push(self.blank.to_owned());
        }
        let len = value.chars().count();
        if len < self.min || len > self.max {
            out.push(self.size.to_owned());
        }
    }
}

fn check_price(price: Option<Decimal>, out: &mut Vec<String>) {
    let Some(price) = price else {
        out.push(PRICE_MISSING.to_owned());
        return;
    };
    if price > price_max() {
        out.push(PRICE_MAX.to_owned());
    } else if price < price_min() {
        out.push(PRICE_MIN.to_owned());
    }
    // The column is DECIMAL(10,2); anything finer would be rounded on write.
    if price.normalize().scale() > PRICE_MAX_SCALE {
        out.push(PRICE_SCALE.to_owned());
    }
}

/// Collect every violated constraint for a candidate whose fields may be absent.
#[must_use]
pub fn violations(
    title: Option<&str>,
    genre: Option<&str>,
    developer: Option<&str>,
    price: Option<Decimal>,
) -> Vec<String> {
    let mut out = Vec::new();
    TITLE.check(title, &mut out);
    GENRE.check(genre, &mut out);
    DEVELOPER.check(developer, &mut out);
    check_price(price, &mut out);
    out
}

/// Validate a fully-formed candidate.
///
/// # Errors
/// Returns `DomainError::Validation` carrying every violated message.
pub fn validate(game: &NewVideoGame) -> Result<(), DomainError> {
    let found = violations(
        Some(&game.title),
        Some(&game.genre),
        Some(&game.developer),
        Some(game.price),
    );
    if found.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation { violations: found })
    }
}
