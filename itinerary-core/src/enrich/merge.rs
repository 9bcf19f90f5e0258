//! Fill-missing merge of place data into a stop.

use crate::domain::{Place, Stop};

/// Label prefixed to a tip synthesized from opening hours.
const HOURS_TIP_PREFIX: &str = "Horarios: ";

/// True when an optional text field is absent or blank.
///
/// A whitespace-only value counts as blank: it renders the same as nothing,
/// so the source is allowed to fill it.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}

/// Copy a source text value into a blank destination field.
fn fill_text(dst: &mut Option<String>, src: Option<&str>) {
    if !is_blank(dst) {
        return;
    }
    if let Some(s) = src {
        if !s.trim().is_empty() {
            *dst = Some(s.to_string());
        }
    }
}

/// Merge `place` into `stop` without overwriting caller-supplied data.
///
/// Every descriptive field follows the same rule: an existing non-blank
/// value wins, otherwise the source's value (when it has one) fills the
/// gap. Coordinates are the one exception: the caller's pair is kept only
/// when both components are finite, since a stored coordinate beats a
/// fuzzy text-match lookup but a broken one does not.
///
/// When the stop has no tip and the source provides opening hours with at
/// least one window, a weekly-summary tip is synthesized. The source's tag
/// is always added to the stop's tag set; existing tags are never removed.
pub(super) fn merge_place(mut stop: Stop, place: &Place, source_tag: &str) -> Stop {
    let caller_coords_usable = stop.coords.is_some_and(|c| c.is_finite());
    if !caller_coords_usable {
        if let Some(coords) = place.coords.filter(|c| c.is_finite()) {
            stop.coords = Some(coords);
        }
    }

    fill_text(&mut stop.image_url, place.photo_url.as_deref());
    fill_text(&mut stop.address, place.address.as_deref());
    fill_text(&mut stop.website, place.website.as_deref());
    fill_text(&mut stop.phone, place.phone.as_deref());

    if stop.rating.is_none() {
        stop.rating = place.rating;
    }
    if stop.price_level.is_none() {
        stop.price_level = place.price_level;
    }

    if is_blank(&stop.tip) {
        if let Some(summary) = place.hours.as_ref().and_then(|h| h.summary()) {
            stop.tip = Some(format!("{HOURS_TIP_PREFIX}{summary}"));
        }
    }
    if stop.hours.is_none() {
        stop.hours = place.hours.clone();
    }

    stop.tags.insert(source_tag.to_string());
    stop
}
