//! Precision and storage qualifiers.

use std::fmt;

/// Shading language precision hint.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Precision {
    /// No precision applies (or none was given).
    Undefined = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Precision {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [Self::Undefined, Self::Low, Self::Medium, Self::High];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Source keyword, `None` for [`Precision::Undefined`].
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Undefined => None,
            Self::Low => Some("lowp"),
            Self::Medium => Some("mediump"),
            Self::High => Some("highp"),
        }
    }

    /// Source keyword, empty for [`Precision::Undefined`].
    pub const fn as_str(self) -> &'static str {
        match self.keyword() {
            Some(keyword) => keyword,
            None => "",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage or parameter qualifier of a variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Qualifier {
    /// Function-local temporary.
    Temporary = 0,
    /// Unqualified global; the default for built-in types.
    Global = 1,
    /// `const` variable.
    Const = 2,
    /// `in` parameter.
    In = 3,
    /// `out` parameter.
    Out = 4,
    /// `inout` parameter.
    InOut = 5,
    /// `const in` parameter.
    ConstReadOnly = 6,
    /// `uniform` variable.
    Uniform = 7,
}

impl Qualifier {
    pub const COUNT: usize = 8;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Temporary,
        Self::Global,
        Self::Const,
        Self::In,
        Self::Out,
        Self::InOut,
        Self::ConstReadOnly,
        Self::Uniform,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Source keyword, `None` for qualifiers that are never spelled out.
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Temporary | Self::Global => None,
            Self::Const => Some("const"),
            Self::In => Some("in"),
            Self::Out => Some("out"),
            Self::InOut => Some("inout"),
            Self::ConstReadOnly => Some("const in"),
            Self::Uniform => Some("uniform"),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temporary => "temporary",
            Self::Global => "global",
            Self::Const => "const",
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
            Self::ConstReadOnly => "const in",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ALL doubles as the index -> value table of the static type store.
const _: () = {
    let mut i = 0;
    while i < Precision::COUNT {
        assert!(Precision::ALL[i].index() == i);
        i += 1;
    }
    let mut i = 0;
    while i < Qualifier::COUNT {
        assert!(Qualifier::ALL[i].index() == i);
        i += 1;
    }
};

#[cfg(test)]
mod tests;
