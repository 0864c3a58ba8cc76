use std::fmt::Display;

use crate::errors::errors::ValueError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueKind {
    Undefined,
    Number,
    String,
    PolizLabel,
    AssignPos,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::PolizLabel => "POLIZ label",
            ValueKind::AssignPos => "assign position",
        };
        write!(f, "{}", name)
    }
}

/// The value bound to an identifier.
///
/// An undefined value takes the kind of its first assignment and keeps it:
/// later assignments of the same kind overwrite, any other kind is refused.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Number(f64),
    String(String),
    PolizLabel(usize),
    AssignPos(usize),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::PolizLabel(_) => ValueKind::PolizLabel,
            Value::AssignPos(_) => ValueKind::AssignPos,
        }
    }

    fn check_kind(&self, attempted: ValueKind) -> Result<(), ValueError> {
        let current = self.kind();
        if current == ValueKind::Undefined || current == attempted {
            Ok(())
        } else {
            Err(ValueError::KindMismatch { current, attempted })
        }
    }

    pub fn set_number(&mut self, number: f64) -> Result<(), ValueError> {
        self.check_kind(ValueKind::Number)?;
        *self = Value::Number(number);
        Ok(())
    }

    pub fn set_string(&mut self, string: &str) -> Result<(), ValueError> {
        self.check_kind(ValueKind::String)?;
        *self = Value::String(string.to_string());
        Ok(())
    }

    pub fn set_poliz_label(&mut self, label: usize) -> Result<(), ValueError> {
        self.check_kind(ValueKind::PolizLabel)?;
        *self = Value::PolizLabel(label);
        Ok(())
    }

    pub fn set_assign_pos(&mut self, position: usize) -> Result<(), ValueError> {
        self.check_kind(ValueKind::AssignPos)?;
        *self = Value::AssignPos(position);
        Ok(())
    }

    pub fn try_get_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn try_get_string(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn try_get_poliz_label(&self) -> Option<usize> {
        match self {
            Value::PolizLabel(label) => Some(*label),
            _ => None,
        }
    }

    pub fn try_get_assign_pos(&self) -> Option<usize> {
        match self {
            Value::AssignPos(position) => Some(*position),
            _ => None,
        }
    }
}

/// A named variable. Two identifiers are equal when their names are, whatever
/// they hold.
#[derive(Debug, Clone)]
pub struct Identifier {
    name: String,
    value: Value,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Identifier {
            name: name.to_string(),
            value: Value::Undefined,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_kind(&self) -> ValueKind {
        self.value.kind()
    }

    pub fn set_number(&mut self, number: f64) -> Result<(), ValueError> {
        self.value.set_number(number)
    }

    pub fn set_string(&mut self, string: &str) -> Result<(), ValueError> {
        self.value.set_string(string)
    }

    pub fn try_get_number(&self) -> Option<f64> {
        self.value.try_get_number()
    }

    pub fn try_get_string(&self) -> Option<&str> {
        self.value.try_get_string()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The growable tables a scan fills in. Nothing is ever removed, so an index
/// handed out once stays valid.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub identifiers: Vec<Identifier>,
    pub strings: Vec<String>,
    pub numbers: Vec<f64>,
}

impl Tables {
    pub fn new() -> Self {
        Tables::default()
    }

    pub fn add_identifier(&mut self, name: &str) -> usize {
        append(&mut self.identifiers, Identifier::new(name))
    }

    pub fn add_string(&mut self, string: &str) -> usize {
        append(&mut self.strings, string.to_string())
    }

    pub fn add_number(&mut self, number: f64) -> usize {
        append(&mut self.numbers, number)
    }

    pub fn find_identifier(&self, name: &str) -> Option<usize> {
        self.identifiers.iter().position(|id| id.name() == name)
    }

    pub fn identifier_mut(&mut self, index: usize) -> Option<&mut Identifier> {
        self.identifiers.get_mut(index)
    }
}

/// Pushes `value` onto the end of `table` and returns its index.
pub fn append<T>(table: &mut Vec<T>, value: T) -> usize {
    table.push(value);
    table.len() - 1
}
