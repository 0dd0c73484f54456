use constgen_spec::ConstValue;

/// Maps a constant's value kind to a target-language type name.
#[derive(Debug, Clone, Copy)]
pub struct TypeTable {
    /// Integers that fit in 32 bits
    pub integer: &'static str,
    /// Integers outside the 32-bit range
    pub wide_integer: &'static str,
    pub string: &'static str,
}

impl TypeTable {
    /// Type name for `value`. Value kinds without an entry fall back to the
    /// kind's generic name.
    pub fn type_name(&self, value: &ConstValue) -> &'static str {
        match value {
            ConstValue::Integer(i) if i32::try_from(*i).is_ok() => self.integer,
            ConstValue::Integer(_) => self.wide_integer,
            ConstValue::String(_) => self.string,
            other => other.kind().name(),
        }
    }
}

pub const RUST_TYPES: TypeTable = TypeTable {
    integer: "i32",
    wide_integer: "i64",
    string: "&str",
};

pub const JAVA_TYPES: TypeTable = TypeTable {
    integer: "int",
    wide_integer: "long",
    string: "String",
};
