use crate::{
    carto::extent::{Extent, DOMAIN, STUDY_AREA},
    error::SettingsError,
};
use geo::{Coordinate, LineString, Polygon};
use log::trace;
use std::fmt::Display;
use svg::node::element::Path;

/* # figure titles */

/// render a timestamp into a figure title, truncated to the hour
pub fn title_string<T: Display>(date_time: T) -> String {
    let head = date_time.to_string().chars().take(13).collect::<String>();
    format!("{}:00:00", head.replace('T', " "))
}

/* # geometry to svg */

// document space has the origin at the top left of the frame
fn coord_to_svg(coord: &Coordinate<f64>, frame: &Extent) -> String {
    format!("{} {}", coord.x - frame.left, frame.top - coord.y)
}

fn ring_to_svg(line: &LineString<f64>, frame: &Extent) -> String {
    line.0
        .iter()
        .map(|coord| coord_to_svg(coord, frame))
        .collect::<Vec<String>>()
        .join("L")
}

fn poly_to_svg(poly: &Polygon<f64>, frame: &Extent) -> String {
    if poly.exterior().0.is_empty() {
        "".into()
    } else {
        format!("M{}", ring_to_svg(poly.exterior(), frame))
    }
}

fn extent_to_path(extent: &Extent, frame: &Extent) -> Path {
    Path::new()
        .set("d", poly_to_svg(&extent.to_polygon(), frame))
        .set("fill", "none")
}

/* # overview figure */

/// domain overview with the study area outlined
pub fn extents_document() -> svg::Document {
    trace!("drawing domain overview");
    let stroke = DOMAIN.width() / 400.0;
    let mut image =
        svg::Document::new().set("viewBox", (0.0, 0.0, DOMAIN.width(), DOMAIN.height()));
    for (extent, paint) in [(&DOMAIN, "black"), (&STUDY_AREA, "crimson")] {
        image = image.add(
            extent_to_path(extent, &DOMAIN)
                .set("stroke", paint)
                .set("stroke-width", stroke),
        );
    }
    image
}

/// save the domain overview figure
pub fn render_extents<P: AsRef<std::path::Path>>(figure_path: P) -> Result<(), SettingsError> {
    svg::save(figure_path, &extents_document())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn title_truncates_to_the_hour() {
        assert_eq!(
            title_string("2021-06-01T05:30:00"),
            "2021-06-01 05:00:00".to_string()
        );
    }

    #[test]
    fn title_of_short_input() {
        assert_eq!(title_string("2021-06"), "2021-06:00:00".to_string());
    }

    #[test]
    fn study_area_path_is_a_single_ring() {
        let d = poly_to_svg(&STUDY_AREA.to_polygon(), &STUDY_AREA);
        assert!(d.starts_with('M'));
        assert_eq!(d.matches('L').count(), 4);
    }

    #[test]
    fn overview_names_both_extents() {
        let document = extents_document().to_string();
        assert!(document.contains("viewBox"));
        assert_eq!(document.matches("path").count(), 2);
    }
}
