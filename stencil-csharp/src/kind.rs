//! The closed classification of supported declaration shapes.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Kind of a generated partial type declaration.
///
/// C# partial declarations vary along two independent axes, value-type and
/// record, giving exactly four shapes. The enum is closed: there is no
/// representable fifth combination, so declaration-keyword selection is an
/// exhaustive match rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `partial class` (reference type, non-record).
    Class,
    /// `partial record` (reference type, record).
    Record,
    /// `partial struct` (value type, non-record).
    Struct,
    /// `partial record struct` (value type, record).
    RecordStruct,
}

impl TypeKind {
    /// Classify from the two declaration axes.
    pub fn from_parts(is_value_type: bool, is_record: bool) -> Self {
        match (is_value_type, is_record) {
            (false, false) => Self::Class,
            (false, true) => Self::Record,
            (true, false) => Self::Struct,
            (true, true) => Self::RecordStruct,
        }
    }

    /// The declaration keyword(s), without the `partial` modifier.
    pub fn keywords(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Record => "record",
            Self::Struct => "struct",
            Self::RecordStruct => "record struct",
        }
    }

    /// Whether this shape declares a value type.
    pub fn is_value_type(&self) -> bool {
        matches!(self, Self::Struct | Self::RecordStruct)
    }

    /// Whether this shape declares a record.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record | Self::RecordStruct)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keywords())
    }
}

impl FromStr for TypeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "record" => Ok(Self::Record),
            "struct" => Ok(Self::Struct),
            "record struct" => Ok(Self::RecordStruct),
            other => Err(Error::UnknownTypeKind {
                kind: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_cover_all_shapes() {
        assert_eq!(TypeKind::Class.keywords(), "class");
        assert_eq!(TypeKind::Record.keywords(), "record");
        assert_eq!(TypeKind::Struct.keywords(), "struct");
        assert_eq!(TypeKind::RecordStruct.keywords(), "record struct");
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(TypeKind::from_parts(false, false), TypeKind::Class);
        assert_eq!(TypeKind::from_parts(false, true), TypeKind::Record);
        assert_eq!(TypeKind::from_parts(true, false), TypeKind::Struct);
        assert_eq!(TypeKind::from_parts(true, true), TypeKind::RecordStruct);
    }

    #[test]
    fn test_axes_round_trip() {
        for kind in [
            TypeKind::Class,
            TypeKind::Record,
            TypeKind::Struct,
            TypeKind::RecordStruct,
        ] {
            assert_eq!(
                TypeKind::from_parts(kind.is_value_type(), kind.is_record()),
                kind
            );
        }
    }

    #[test]
    fn test_parse_known_spellings() {
        assert_eq!("class".parse::<TypeKind>().unwrap(), TypeKind::Class);
        assert_eq!(
            "record struct".parse::<TypeKind>().unwrap(),
            TypeKind::RecordStruct
        );
    }

    #[test]
    fn test_parse_rejects_unknown_shapes() {
        let err = "interface".parse::<TypeKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownTypeKind { kind } if kind == "interface"));

        assert!("Class".parse::<TypeKind>().is_err());
        assert!("enum".parse::<TypeKind>().is_err());
    }
}
