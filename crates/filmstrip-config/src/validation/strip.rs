//! Strip validation (height cap, margins, thumbnail ratios).

use crate::schema::FilmstripConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_strip(errors: &mut Vec<String>, config: &FilmstripConfig) {
    let strip = &config.filmstrip;
    validate_range(errors, "filmstrip.max_height", strip.max_height, 1, 2000);
    validate_range(
        errors,
        "filmstrip.top_bottom_margin",
        strip.top_bottom_margin,
        0,
        200,
    );
    validate_range_f64(
        errors,
        "filmstrip.local_thumbnail_ratio",
        strip.local_thumbnail_ratio,
        0.1,
        10.0,
    );
    validate_range_f64(
        errors,
        "filmstrip.remote_thumbnail_ratio",
        strip.remote_thumbnail_ratio,
        0.1,
        10.0,
    );
    validate_range(
        errors,
        "filmstrip.vertical_min_horizontal_margin",
        strip.vertical_min_horizontal_margin,
        0,
        100,
    );
    validate_range(
        errors,
        "filmstrip.stage_view_thumbnail_horizontal_border",
        strip.stage_view_thumbnail_horizontal_border,
        0,
        100,
    );
}
