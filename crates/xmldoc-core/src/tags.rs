//! Recognized documentation comment tags and attributes.

/// Attribute holding a code reference.
pub(crate) const CREF: &str = "cref";
/// Attribute holding a parameter or type parameter name.
pub(crate) const NAME: &str = "name";
/// List style attribute.
pub(crate) const TYPE: &str = "type";
/// First number of a numbered list.
pub(crate) const START: &str = "start";

/// List item element and its parts.
pub(crate) const ITEM: &str = "item";
pub(crate) const TERM: &str = "term";
pub(crate) const DESCRIPTION: &str = "description";

/// Top-level section of a documentation comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Summary,
    Remarks,
    Returns,
    Value,
    Example,
    Exception,
    Param,
    Permission,
    TypeParam,
    SeeAlso,
}

impl Section {
    /// Section for a direct child of the comment root. Matching is exact and
    /// case-sensitive.
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "summary" => Self::Summary,
            "remarks" => Self::Remarks,
            "returns" => Self::Returns,
            "value" => Self::Value,
            "example" => Self::Example,
            "exception" => Self::Exception,
            "param" => Self::Param,
            "permission" => Self::Permission,
            "typeparam" => Self::TypeParam,
            "seealso" => Self::SeeAlso,
            _ => return None,
        })
    }

    /// Attribute naming the map key for keyed sections. `seealso` goes
    /// through the see-also registry instead.
    pub(crate) fn key_attribute(self) -> Option<&'static str> {
        match self {
            Self::Exception | Self::Permission => Some(CREF),
            Self::Param | Self::TypeParam => Some(NAME),
            Self::Summary
            | Self::Remarks
            | Self::Returns
            | Self::Value
            | Self::Example
            | Self::SeeAlso => None,
        }
    }
}

/// Tag encountered inside section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyTag {
    /// `<code>` block.
    Code,
    /// `<para>` block.
    Para,
    /// `<list>` block.
    List,
    /// `<c>` inline code.
    InlineCode,
    /// `<paramref>`.
    ParamRef,
    /// `<typeparamref>`.
    TypeParamRef,
    /// `<see>`.
    See,
    /// Nested `<seealso>`.
    SeeAlso,
    /// Any other tag, treated as a plain text container.
    Unknown,
}

impl BodyTag {
    pub(crate) fn from_tag(tag: &str) -> Self {
        match tag {
            "code" => Self::Code,
            "para" => Self::Para,
            "list" => Self::List,
            "c" => Self::InlineCode,
            "paramref" => Self::ParamRef,
            "typeparamref" => Self::TypeParamRef,
            "see" => Self::See,
            "seealso" => Self::SeeAlso,
            _ => Self::Unknown,
        }
    }
}

/// Style of a `<list>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Bullet,
    Number,
    Definition,
}

impl ListKind {
    /// List style from the `type` attribute. Missing or unrecognized values
    /// fall back to a definition list.
    pub(crate) fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("bullet") => Self::Bullet,
            Some("number") => Self::Number,
            _ => Self::Definition,
        }
    }
}
