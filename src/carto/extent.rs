use geo::{Coordinate, Polygon, Rect};

/* # extents */

/// geographic bounding box in the projected model system
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// full model domain
pub const DOMAIN: Extent = Extent::new(
    538104.4596371914,
    821308.8698173981,
    4388618.624104167,
    4601276.154973503,
);

/// study area around the coupled reach
pub const STUDY_AREA: Extent = Extent::new(
    716653.4849867643,
    725332.3893581643,
    4549340.078317634,
    4558903.549061629,
);

impl Extent {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Extent {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn centre(&self) -> Coordinate<f64> {
        Coordinate {
            x: (self.left + self.right) / 2.0,
            y: (self.bottom + self.top) / 2.0,
        }
    }

    pub fn contains(&self, coord: &Coordinate<f64>) -> bool {
        self.left <= coord.x
            && coord.x <= self.right
            && self.bottom <= coord.y
            && coord.y <= self.top
    }

    /// closed corner ring, clockwise from the bottom left
    pub fn ring(&self) -> [Coordinate<f64>; 5] {
        [
            Coordinate {
                x: self.left,
                y: self.bottom,
            },
            Coordinate {
                x: self.left,
                y: self.top,
            },
            Coordinate {
                x: self.right,
                y: self.top,
            },
            Coordinate {
                x: self.right,
                y: self.bottom,
            },
            Coordinate {
                x: self.left,
                y: self.bottom,
            },
        ]
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Rect::from(*self).to_polygon()
    }
}

impl From<Extent> for Rect<f64> {
    fn from(extent: Extent) -> Self {
        Rect::new(
            Coordinate {
                x: extent.left,
                y: extent.bottom,
            },
            Coordinate {
                x: extent.right,
                y: extent.top,
            },
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0001;

    #[test]
    fn ring_is_closed() {
        let ring = STUDY_AREA.ring();
        assert_eq!(ring[0], ring[4]);
        assert_eq!(
            ring[1],
            Coordinate {
                x: STUDY_AREA.left,
                y: STUDY_AREA.top
            }
        );
        assert_eq!(
            ring[3],
            Coordinate {
                x: STUDY_AREA.right,
                y: STUDY_AREA.bottom
            }
        );
    }

    #[test]
    fn study_area_inside_domain() {
        for corner in STUDY_AREA.ring() {
            assert!(DOMAIN.contains(&corner));
        }
        assert!(!STUDY_AREA.contains(&DOMAIN.centre()));
    }

    #[test]
    fn sizes() {
        assert_float_eq!(STUDY_AREA.width(), 8678.9043714, abs <= EPSILON);
        assert_float_eq!(STUDY_AREA.height(), 9563.470743995, abs <= EPSILON);
    }

    #[test]
    fn rect_conversion_preserves_sizes() {
        let rect = Rect::from(DOMAIN);
        assert_float_eq!(rect.width(), DOMAIN.width(), abs <= EPSILON);
        assert_float_eq!(rect.height(), DOMAIN.height(), abs <= EPSILON);
        assert_float_eq!(rect.min().x, DOMAIN.left, abs <= EPSILON);
        assert_float_eq!(rect.max().y, DOMAIN.top, abs <= EPSILON);
    }

    #[test]
    fn polygon_ring_matches() {
        let polygon = STUDY_AREA.to_polygon();
        assert_eq!(polygon.exterior().0.len(), 5);
    }
}
