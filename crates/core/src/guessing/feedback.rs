//! Distance and compass hints for a guess.
//!
//! The displayed distance is the haversine great-circle distance. The compass
//! direction comes from a separate flat projection of the two coordinates. The
//! two measures are computed independently and are allowed to disagree.

use std::fmt;

use balaton_places::{Place, PlaceName, haversine_distance_km};

/// Kilometres per degree of latitude.
pub const LAT_KM_PER_DEG: f64 = 111.574;

/// Kilometres per degree of longitude at the equator.
pub const LON_KM_PER_DEG_EQUATOR: f64 = 111.320;

/// Axis offsets shorter than this are left out of the compass label.
pub const AXIS_SUPPRESSION_KM: f64 = 3.0;

/// Where the target lies as seen from the guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Direction {
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "north")]
    North,
    #[strum(serialize = "south")]
    South,
    #[strum(serialize = "east")]
    East,
    #[strum(serialize = "west")]
    West,
    #[strum(serialize = "north-east")]
    NorthEast,
    #[strum(serialize = "north-west")]
    NorthWest,
    #[strum(serialize = "south-east")]
    SouthEast,
    #[strum(serialize = "south-west")]
    SouthWest,
}

impl Direction {
    /// Classify signed axis offsets in km (positive = target is north / east).
    pub fn from_offsets(north_km: f64, east_km: f64) -> Self {
        let vertical = (north_km.abs() >= AXIS_SUPPRESSION_KM).then_some(north_km > 0.0);
        let horizontal = (east_km.abs() >= AXIS_SUPPRESSION_KM).then_some(east_km > 0.0);

        match (vertical, horizontal) {
            (None, None) => Direction::None,
            (Some(true), None) => Direction::North,
            (Some(false), None) => Direction::South,
            (None, Some(true)) => Direction::East,
            (None, Some(false)) => Direction::West,
            (Some(true), Some(true)) => Direction::NorthEast,
            (Some(true), Some(false)) => Direction::NorthWest,
            (Some(false), Some(true)) => Direction::SouthEast,
            (Some(false), Some(false)) => Direction::SouthWest,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Direction::None
    }

    /// The label seen from the other end.
    pub fn reversed(&self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

/// Hint produced for one guess.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub guess: PlaceName,
    pub distance_km: f64,
    pub direction: Direction,
    pub is_match: bool,
}

impl Feedback {
    /// Distance rounded to two decimals, as shown to the player.
    pub fn display_distance_km(&self) -> f64 {
        (self.distance_km * 100.0).round() / 100.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match {
            return write!(f, "{} is the place, well done!", self.guess);
        }

        let km = self.display_distance_km();
        if self.direction.is_none() {
            write!(f, "The target is {km:.2} km from {}.", self.guess)
        } else {
            write!(f, "The target is {km:.2} km {} of {}.", self.direction, self.guess)
        }
    }
}

/// Flat-projection offsets from `guess` to `target` in km, `(north, east)`.
pub fn axis_offsets_km(guess: &Place, target: &Place) -> (f64, f64) {
    let mean_lat = (guess.latitude() + target.latitude()) / 2.0;
    let lon_km_per_deg = LON_KM_PER_DEG_EQUATOR * mean_lat.to_radians().cos();

    let north = (target.latitude() - guess.latitude()) * LAT_KM_PER_DEG;
    let east = (target.longitude() - guess.longitude()) * lon_km_per_deg;

    (north, east)
}

/// Compare a guess with the target.
///
/// Places are matched by name. Both must be catalog entries.
pub fn evaluate(guess: &Place, target: &Place) -> Feedback {
    if guess.name == target.name {
        return Feedback {
            guess: guess.name.clone(),
            distance_km: 0.0,
            direction: Direction::None,
            is_match: true,
        };
    }

    let (north, east) = axis_offsets_km(guess, target);

    Feedback {
        guess: guess.name.clone(),
        distance_km: haversine_distance_km(guess.location, target.location),
        direction: Direction::from_offsets(north, east),
        is_match: false,
    }
}
