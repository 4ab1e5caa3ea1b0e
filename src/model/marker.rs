use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A declarative capability request attached to a class or a field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Marker {
    /// Requests a static factory taking every instance field.
    AllArgsConstructor,
    /// Requests read accessors.
    Getter,
    /// Requests write accessors.
    Setter,
    /// Requests a string representation.
    ToString,
}

impl Marker {
    /// Whether the marker may be placed on an individual field.
    ///
    /// Only the accessor markers have field granularity; the factory and the
    /// string representation always cover the whole class.
    pub const fn allowed_on_field(self) -> bool {
        matches!(self, Marker::Getter | Marker::Setter)
    }
}

/// The class-level marker set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMarkers {
    pub all_args_constructor: bool,
    pub getter: bool,
    pub setter: bool,
    pub to_string: bool,
}

impl ClassMarkers {
    /// Every marker present.
    pub const fn all() -> Self {
        Self {
            all_args_constructor: true,
            getter: true,
            setter: true,
            to_string: true,
        }
    }

    pub fn has(&self, marker: Marker) -> bool {
        match marker {
            Marker::AllArgsConstructor => self.all_args_constructor,
            Marker::Getter => self.getter,
            Marker::Setter => self.setter,
            Marker::ToString => self.to_string,
        }
    }

    pub fn with(mut self, marker: Marker) -> Self {
        match marker {
            Marker::AllArgsConstructor => self.all_args_constructor = true,
            Marker::Getter => self.getter = true,
            Marker::Setter => self.setter = true,
            Marker::ToString => self.to_string = true,
        }
        self
    }

    pub fn has_any(&self) -> bool {
        self.all_args_constructor || self.getter || self.setter || self.to_string
    }
}

impl FromIterator<Marker> for ClassMarkers {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_marker_names_round_trip_through_strum() {
        for marker in Marker::iter() {
            assert_eq!(Marker::from_str(marker.as_ref()).unwrap(), marker);
        }
        assert!(Marker::from_str("Data").is_err());
    }

    #[test]
    fn test_only_accessor_markers_apply_to_fields() {
        let on_field: Vec<_> = Marker::iter().filter(|m| m.allowed_on_field()).collect();
        assert_eq!(on_field, vec![Marker::Getter, Marker::Setter]);
    }

    #[test]
    fn test_class_markers_from_iter() {
        let markers: ClassMarkers = [Marker::Getter, Marker::ToString].into_iter().collect();
        assert!(markers.getter);
        assert!(markers.to_string);
        assert!(!markers.setter);
        assert!(!markers.all_args_constructor);
        assert!(markers.has_any());
        assert!(!ClassMarkers::default().has_any());
        assert!(Marker::iter().all(|m| ClassMarkers::all().has(m)));
    }
}
