//! CVar type definitions
//!
//! Core types for the configuration variable registry.

use std::fmt;

/// Value type identifier for registered cvars
///
/// The set is closed: every variant has exactly one coercion rule in
/// [`super::parse`] and one canonical string form via [`CVarValue`]'s `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Integer32,
    Integer64,
    Float32,
    Float64,
    String,
}

impl ValueType {
    /// Every supported value type, in declaration order
    pub const ALL: [ValueType; 6] = [
        ValueType::Boolean,
        ValueType::Integer32,
        ValueType::Integer64,
        ValueType::Float32,
        ValueType::Float64,
        ValueType::String,
    ];

    /// Get a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueType::Boolean => "Boolean",
            ValueType::Integer32 => "Integer32",
            ValueType::Integer64 => "Integer64",
            ValueType::Float32 => "Float32",
            ValueType::Float64 => "Float64",
            ValueType::String => "String",
        }
    }

    /// Parse a type name as written in definition files.
    ///
    /// Display names match case-insensitively; short aliases (`bool`, `int`,
    /// `long`, `float`, `double`, `string`) are accepted too.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Some(ValueType::Boolean),
            "integer32" | "int" | "i32" => Some(ValueType::Integer32),
            "integer64" | "long" | "i64" => Some(ValueType::Integer64),
            "float32" | "float" | "f32" => Some(ValueType::Float32),
            "float64" | "double" | "f64" => Some(ValueType::Float64),
            "string" | "str" => Some(ValueType::String),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Runtime value of a cvar
#[derive(Debug, Clone, PartialEq)]
pub enum CVarValue {
    Boolean(bool),
    Integer32(i32),
    Integer64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl CVarValue {
    /// Get the value type for this value
    pub fn value_type(&self) -> ValueType {
        match self {
            CVarValue::Boolean(_) => ValueType::Boolean,
            CVarValue::Integer32(_) => ValueType::Integer32,
            CVarValue::Integer64(_) => ValueType::Integer64,
            CVarValue::Float32(_) => ValueType::Float32,
            CVarValue::Float64(_) => ValueType::Float64,
            CVarValue::String(_) => ValueType::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CVarValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            CVarValue::Integer32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CVarValue::Integer64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            CVarValue::Float32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CVarValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CVarValue::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Canonical string form, the inverse of [`super::parse::parse_value`]
impl fmt::Display for CVarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CVarValue::Boolean(v) => write!(f, "{}", v),
            CVarValue::Integer32(v) => write!(f, "{}", v),
            CVarValue::Integer64(v) => write!(f, "{}", v),
            // Display on floats is the shortest form that parses back to the same bits
            CVarValue::Float32(v) => write!(f, "{}", v),
            CVarValue::Float64(v) => write!(f, "{}", v),
            CVarValue::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CVarValue {
    fn from(value: &str) -> Self {
        CVarValue::String(value.to_string())
    }
}

bitflags::bitflags! {
    /// CVar behavior flags
    ///
    /// Only `CONFIDENTIAL` is interpreted by this crate. The remaining bits are
    /// carried for layers that archive or replicate values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CVarFlags: u32 {
        /// Value is saved by the archival layer
        const ARCHIVE = 0b0000_0001;
        /// Value is replicated from server to clients
        const REPLICATED = 0b0000_0010;
        /// Clients are notified when the value changes
        const NOTIFY = 0b0000_0100;
        /// Only meaningful on the server
        const SERVER = 0b0000_1000;
        /// Only meaningful on the client
        const CLIENT = 0b0001_0000;
        /// Never leaves the server process
        const SERVERONLY = 0b0010_0000;
        /// Changing the value counts as cheating
        const CHEAT = 0b0100_0000;
        /// Value must never be echoed in hints or displays
        const CONFIDENTIAL = 0b1000_0000;
    }
}

/// Rust types that map onto exactly one [`ValueType`]
///
/// Used by the typed registry accessors so trusted callers never go
/// through string coercion.
pub trait CVarType: Sized + Clone + Into<CVarValue> {
    const VALUE_TYPE: ValueType;

    /// Extract `Self` from a value, or `None` if the tag differs
    fn from_value(value: CVarValue) -> Option<Self>;
}

macro_rules! impl_cvar_type {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for CVarValue {
            fn from(value: $ty) -> Self {
                CVarValue::$variant(value)
            }
        }

        impl CVarType for $ty {
            const VALUE_TYPE: ValueType = ValueType::$variant;

            fn from_value(value: CVarValue) -> Option<Self> {
                match value {
                    CVarValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_cvar_type!(bool, Boolean);
impl_cvar_type!(i32, Integer32);
impl_cvar_type!(i64, Integer64);
impl_cvar_type!(f32, Float32);
impl_cvar_type!(f64, Float64);
impl_cvar_type!(String, String);

/// A typed cvar definition
///
/// ```rust,ignore
/// const FPS_MAX: CVarDef<i32> = CVarDef::new("fps_max", 60, CVarFlags::ARCHIVE);
///
/// registry.register_def(&FPS_MAX)?;
/// let fps: i32 = registry.get_def(&FPS_MAX)?;
/// ```
#[derive(Debug, Clone)]
pub struct CVarDef<T: CVarType> {
    pub name: &'static str,
    pub default: T,
    pub flags: CVarFlags,
}

impl<T: CVarType> CVarDef<T> {
    pub const fn new(name: &'static str, default: T, flags: CVarFlags) -> Self {
        Self {
            name,
            default,
            flags,
        }
    }

    pub fn value_type(&self) -> ValueType {
        T::VALUE_TYPE
    }
}
