//! The built-in ground-floor plan.

use crate::color::Rgb;
use crate::geometry::Point;
use crate::plan::{FloorPlan, Overall};
use crate::space::{Space, SpaceKind};

pub const REFERENCE_TITLE: &str = "Ground Floor Arrangement";

pub const REFERENCE_DESCRIPTION: &str = "Central longitudinal hall sized 24' × 12' with two \
12' × 11' rooms flanking each side. Staircase originates from the south-east corner of the \
hall. Ridge height maintained at 11.6 ft.";

pub const REFERENCE_RIDGE_HEIGHT: f64 = 11.6;

pub const REFERENCE_OVERALL: Overall = Overall::new(34.0, 24.0);

impl FloorPlan {
    /// Two rooms either side of a central hall, with a stair in the hall's
    /// south-east corner. 34 × 24 ft overall.
    #[must_use]
    pub fn reference() -> Self {
        let left = [
            Space::new(
                "Room A 12' × 11'",
                SpaceKind::Room,
                Point::new(0.0, 0.0),
                11.0,
                12.0,
                Rgb::from_hex(0xfbd38d),
            ),
            Space::new(
                "Room B 12' × 11'",
                SpaceKind::Room,
                Point::new(0.0, 12.0),
                11.0,
                12.0,
                Rgb::from_hex(0xf6ad55),
            ),
        ];
        let hall = Space::new(
            "Hall 24' × 12'",
            SpaceKind::Hall,
            Point::new(left[0].width, 0.0),
            12.0,
            24.0,
            Rgb::from_hex(0xc7d2fe),
        )
        .with_details("Central double-height hall; staircase from south-east corner.");
        let right = [
            Space::new(
                "Room C 12' × 11'",
                SpaceKind::Room,
                Point::new(23.0, 0.0),
                11.0,
                12.0,
                Rgb::from_hex(0xbfdbfe),
            ),
            Space::new(
                "Room D 12' × 11'",
                SpaceKind::Room,
                Point::new(23.0, 12.0),
                11.0,
                12.0,
                Rgb::from_hex(0x93c5fd),
            ),
        ];
        let stair = Space::new(
            "Stair 8' × 6'",
            SpaceKind::Stair,
            Point::new(17.0, 16.0),
            6.0,
            8.0,
            Rgb::from_hex(0xfed7e2),
        )
        .with_details("Access to upper floors from hall corner.");

        let mut spaces = Vec::with_capacity(6);
        spaces.extend(left);
        spaces.push(hall);
        spaces.extend(right);
        spaces.push(stair);

        Self {
            title: REFERENCE_TITLE.to_string(),
            description: REFERENCE_DESCRIPTION.to_string(),
            spaces,
            overall: REFERENCE_OVERALL,
            ridge_height: REFERENCE_RIDGE_HEIGHT,
        }
    }
}
