//! JVM field and method descriptors (JVMS §4.3).

use std::str::Chars;

/// Most array dimensions a field type may have (JVMS §4.3.2).
pub const MAX_ARRAY_DIMENSIONS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// One of the primitive tags `B C D F I J S Z`.
    Base(char),
    /// Internal name of a class, e.g. `java/lang/String`.
    Object(String),
    Array(Box<FieldType>),
}

impl FieldType {
    #[must_use]
    pub fn is_string_array(&self) -> bool {
        matches!(self, Self::Array(inner) if **inner == Self::Object("java/lang/String".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub parameters: Vec<FieldType>,
    /// `None` for `void`.
    pub return_type: Option<FieldType>,
}

impl MethodDescriptor {
    /// Parse a descriptor such as `([Ljava/lang/String;)V`.
    ///
    /// Returns `None` for malformed input.
    #[must_use]
    pub fn parse(descriptor: &str) -> Option<Self> {
        let mut chars = descriptor.chars();
        if chars.next()? != '(' {
            return None;
        }

        let mut parameters = Vec::new();
        while chars.clone().next()? != ')' {
            parameters.push(parse_field_type(&mut chars)?);
        }
        chars.next();

        let return_type = if chars.as_str() == "V" {
            None
        } else {
            let ty = parse_field_type(&mut chars)?;
            if !chars.as_str().is_empty() {
                return None;
            }
            Some(ty)
        };

        Some(Self {
            parameters,
            return_type,
        })
    }

    #[must_use]
    pub const fn returns_void(&self) -> bool {
        self.return_type.is_none()
    }
}

fn parse_field_type(chars: &mut Chars<'_>) -> Option<FieldType> {
    let mut dimensions = 0;
    while chars.clone().next()? == '[' {
        chars.next();
        dimensions += 1;
        if dimensions > MAX_ARRAY_DIMENSIONS {
            return None;
        }
    }

    let element = match chars.next()? {
        tag @ ('B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z') => FieldType::Base(tag),
        'L' => {
            let rest = chars.as_str();
            let end = rest.find(';')?;
            if end == 0 {
                return None;
            }
            let name = rest[..end].to_string();
            *chars = rest[end + 1..].chars();
            FieldType::Object(name)
        }
        _ => return None,
    };

    Some((0..dimensions).fold(element, |inner, _| FieldType::Array(Box::new(inner))))
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
