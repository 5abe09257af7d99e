//! Field roles, values, and the descriptor trait entities implement.

use std::fmt;

/// Which side of a question a field may appear on.
///
/// Fields without a role are left out of an entity's descriptor entirely, so
/// there is no variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Only stated in the question.
    Given,
    /// Only asked for.
    Guess,
    /// Either side.
    All,
}

impl Role {
    /// True if the field may be stated as the known fact.
    pub fn can_give(self) -> bool {
        matches!(self, Self::Given | Self::All)
    }

    /// True if the field may be the expected answer.
    pub fn can_guess(self) -> bool {
        matches!(self, Self::Guess | Self::All)
    }

    /// Parse an annotation string (`given`, `guess`, or `all`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "given" => Some(Self::Given),
            "guess" => Some(Self::Guess),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Given => write!(f, "given"),
            Self::Guess => write!(f, "guess"),
            Self::All => write!(f, "all"),
        }
    }
}

/// The value held by an annotated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A text value, rendered as itself.
    Text(String),
    /// An integer, rendered in base 10.
    Integer(i64),
    /// An ordered list; one element is picked at random when rendered.
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Self::Integer(n.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Value>,
{
    fn from(items: &[T]) -> Self {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }
}

/// One annotated field of an entity: its name, role, optional display name,
/// and current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    display: Option<&'static str>,
    role: Role,
    value: Value,
}

impl Field {
    /// Describe a field with the given role and value.
    pub fn new(name: &'static str, role: Role, value: impl Into<Value>) -> Self {
        Self {
            name,
            display: None,
            role,
            value: value.into(),
        }
    }

    /// Override the name used when the field is phrased in a question.
    pub fn display(mut self, display: &'static str) -> Self {
        self.display = Some(display);
        self
    }

    /// The field's own name. Unique within an entity type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The display override if set, otherwise the field name.
    pub fn display_name(&self) -> &'static str {
        self.display.unwrap_or(self.name)
    }

    /// The field's role annotation.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The field's current value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An entity that can describe its annotated fields.
///
/// Implementations list only the fields visible to the engine, in a fixed
/// order. Field names must be unique within one implementation.
pub trait Annotated {
    /// The annotated fields of this entity instance.
    fn fields(&self) -> Vec<Field>;
}

impl Annotated for [Field] {
    fn fields(&self) -> Vec<Field> {
        self.to_vec()
    }
}

impl Annotated for Vec<Field> {
    fn fields(&self) -> Vec<Field> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_eligibility() {
        assert!(Role::Given.can_give());
        assert!(!Role::Given.can_guess());
        assert!(!Role::Guess.can_give());
        assert!(Role::Guess.can_guess());
        assert!(Role::All.can_give());
        assert!(Role::All.can_guess());
    }

    #[test]
    fn role_parse_and_display() {
        assert_eq!(Role::parse("ALL"), Some(Role::All));
        assert_eq!(Role::parse(" given "), Some(Role::Given));
        assert_eq!(Role::parse("guess"), Some(Role::Guess));
        assert_eq!(Role::parse("both"), None);
        assert_eq!(Role::Guess.to_string(), "guess");
    }

    #[test]
    fn display_name_defaults_to_field_name() {
        let field = Field::new("capital", Role::All, "Paris");
        assert_eq!(field.display_name(), "capital");

        let field = Field::new("rankInArea", Role::Guess, 1u32).display("size rank");
        assert_eq!(field.name(), "rankInArea");
        assert_eq!(field.display_name(), "size rank");
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from("x"), Value::Text("x".to_string()));
        assert_eq!(Value::from(7u8), Value::Integer(7));
        assert_eq!(Value::from(-3i32), Value::Integer(-3));

        let langs: &[&str] = &["French", "Breton"];
        assert_eq!(
            Value::from(langs),
            Value::List(vec![Value::from("French"), Value::from("Breton")])
        );

        let nested: &[&[&str]] = &[&["a"], &["b", "c"]];
        let value = Value::from(nested);
        assert_eq!(value.kind(), "list");
        match value {
            Value::List(items) => assert_eq!(items[1].kind(), "list"),
            other => panic!("expected a list, got {other:?}"),
        }
    }
}
