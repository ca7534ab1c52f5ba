use std::collections::BTreeSet;
use std::fmt;
use typeguard_types::ids;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Enum,
    Interface,
    Struct,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    /// Assembly-private top-level type.
    Internal,
    NestedPublic,
    NestedPrivate,
    NestedInternal,
    NestedProtected,
}

/// Underlying storage of an enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IntegralType {
    I8,
    U8,
    I16,
    U16,
    #[default]
    I32,
    U32,
    I64,
    U64,
}

impl IntegralType {
    pub fn as_str(self) -> &'static str {
        match self {
            IntegralType::I8 => "i8",
            IntegralType::U8 => "u8",
            IntegralType::I16 => "i16",
            IntegralType::U16 => "u16",
            IntegralType::I32 => "i32",
            IntegralType::U32 => "u32",
            IntegralType::I64 => "i64",
            IntegralType::U64 => "u64",
        }
    }
}

/// Constant value of an enum member, stored at full 64-bit width.
///
/// Values are sign-extended (signed storage) or zero-extended (unsigned storage) by the
/// metadata reader; comparisons never narrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Signed(i64),
    Unsigned(u64),
}

impl ConstantValue {
    pub fn is_zero(self) -> bool {
        match self {
            ConstantValue::Signed(v) => v == 0,
            ConstantValue::Unsigned(v) => v == 0,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Signed(v) => write!(f, "{v}"),
            ConstantValue::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Signed(value)
    }
}

impl From<u64> for ConstantValue {
    fn from(value: u64) -> Self {
        ConstantValue::Unsigned(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: ConstantValue,
}

/// Read-only description of one type, independent of how it was parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMetadataView {
    /// Namespace-qualified name; nested types use `Outer/Inner`.
    pub full_name: String,
    pub kind: TypeKind,
    pub visibility: Visibility,

    /// Full names of the custom attributes attached to the type.
    pub attributes: BTreeSet<String>,

    /// Only meaningful for enums.
    pub underlying: Option<IntegralType>,

    /// Declared constants, in declaration order. Only meaningful for enums.
    pub members: Vec<EnumMember>,
}

impl TypeMetadataView {
    pub fn new(full_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            full_name: full_name.into(),
            kind,
            visibility: Visibility::default(),
            attributes: BTreeSet::new(),
            underlying: (kind == TypeKind::Enum).then_some(IntegralType::default()),
            members: Vec::new(),
        }
    }

    pub fn enumeration(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Enum)
    }

    pub fn class(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Class)
    }

    pub fn interface(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Interface)
    }

    pub fn structure(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Struct)
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn attribute(mut self, full_name: impl Into<String>) -> Self {
        self.attributes.insert(full_name.into());
        self
    }

    /// Mark the type with `[Flags]`.
    pub fn flags(self) -> Self {
        self.attribute(ids::ATTRIBUTE_FLAGS)
    }

    pub fn underlying(mut self, underlying: IntegralType) -> Self {
        self.underlying = Some(underlying);
        self
    }

    pub fn member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value: ConstantValue::Signed(value),
        });
        self
    }

    pub fn unsigned_member(mut self, name: impl Into<String>, value: u64) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value: ConstantValue::Unsigned(value),
        });
        self
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn has_attribute(&self, full_name: &str) -> bool {
        self.attributes.contains(full_name)
    }

    pub fn is_flags(&self) -> bool {
        self.has_attribute(ids::ATTRIBUTE_FLAGS)
    }

    /// Name without namespace or enclosing types.
    pub fn name(&self) -> &str {
        let tail = self.full_name.rsplit('/').next().unwrap_or(&self.full_name);
        tail.rsplit('.').next().unwrap_or(tail)
    }
}
