//! Priority merge of place-search and geocode names into a label.

use crate::models::{
    AddressComponent, AddressLabel, ComponentType, PlaceCandidate, UNKNOWN_LOCATION,
};

/// Most names a label can hold
pub const MAX_LABEL_NAMES: usize = 3;

/// Long name of the first component carrying `ty`
fn first_of_type(components: &[AddressComponent], ty: ComponentType) -> Option<&str> {
    components
        .iter()
        .find(|c| c.has_type(ty))
        .map(|c| c.long_name.as_str())
        .filter(|n| !n.is_empty())
}

/// Build a label from an optional place and geocode components.
///
/// The place name goes first, then one name per component type in
/// [`ComponentType::priority`] order, skipping duplicates, up to three.
pub fn merge_label(place: Option<&PlaceCandidate>, components: &[AddressComponent]) -> AddressLabel {
    let mut names: Vec<String> = Vec::with_capacity(MAX_LABEL_NAMES);

    if let Some(name) = place.and_then(PlaceCandidate::usable_name) {
        names.push(name.to_string());
    }

    for ty in ComponentType::priority() {
        if names.len() >= MAX_LABEL_NAMES {
            break;
        }
        if let Some(name) = first_of_type(components, *ty) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }

    if names.is_empty() {
        let fallback = first_of_type(components, ComponentType::Country).unwrap_or(UNKNOWN_LOCATION);
        names.push(fallback.to_string());
    }

    AddressLabel::from_names(&names)
}
