//! Wire type definitions.
//!
//! Every value on the wire has a fixed encoded width. The cursor advances by
//! exactly that width on a successful append or get.

/// Encoded value type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// Single byte boolean, `1` is true.
    Bool,
    /// Signed 16-bit big-endian integer.
    Int16,
    /// Unsigned 16-bit big-endian integer.
    Uint16,
    /// Signed 32-bit big-endian integer.
    Int32,
    /// Unsigned 32-bit big-endian integer.
    Uint32,
    /// Real value scaled into a signed 16-bit integer.
    Float16,
    /// Real value scaled into a signed 32-bit integer.
    Float32,
    /// Real value in the 32-bit auto-float layout.
    Float32Auto,
}

impl WireType {
    /// All wire types, in declaration order.
    pub const ALL: [WireType; 8] = [
        Self::Bool,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Float16,
        Self::Float32,
        Self::Float32Auto,
    ];

    /// Returns the encoded size of the type in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Bool => 1,
            Self::Int16 | Self::Uint16 | Self::Float16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 | Self::Float32Auto => 4,
        }
    }

    /// Returns the encoded size as a cursor delta.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.size() as i32
    }

    /// Returns the wire name of the type.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Float16 => "float16",
            Self::Float32 => "float32",
            Self::Float32Auto => "float32_auto",
        }
    }

    /// Parses a wire type from its wire name.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.wire_name() == name)
    }

    /// Returns true if the type carries a real value.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float32Auto)
    }

    /// Returns true if decoding the type requires a caller-supplied scale.
    #[must_use]
    pub const fn is_scaled(&self) -> bool {
        matches!(self, Self::Float16 | Self::Float32)
    }
}

impl std::fmt::Display for WireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_type_sizes() {
        assert_eq!(WireType::Bool.size(), 1);
        assert_eq!(WireType::Int16.size(), 2);
        assert_eq!(WireType::Uint16.size(), 2);
        assert_eq!(WireType::Float16.size(), 2);
        assert_eq!(WireType::Int32.size(), 4);
        assert_eq!(WireType::Uint32.size(), 4);
        assert_eq!(WireType::Float32.size(), 4);
        assert_eq!(WireType::Float32Auto.size(), 4);
    }

    #[test]
    fn test_wire_name_round_trip() {
        for t in WireType::ALL {
            assert_eq!(WireType::from_wire_name(t.wire_name()), Some(t));
        }
        assert_eq!(WireType::from_wire_name("float64"), None);
    }

    #[test]
    fn test_classification() {
        assert!(WireType::Float32Auto.is_float());
        assert!(!WireType::Float32Auto.is_scaled());
        assert!(WireType::Float16.is_scaled());
        assert!(!WireType::Uint32.is_float());
    }

    #[test]
    fn test_display() {
        assert_eq!(WireType::Float32Auto.to_string(), "float32_auto");
    }
}
