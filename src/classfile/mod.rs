//! Static reader for compiled JVM class files.
//!
//! Only the parts needed to reason about a type's shape are decoded: access
//! flags, names, the superclass and interfaces, and method signatures. Code
//! and all other attributes are skipped.

mod classpath;
mod descriptor;
mod reader;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use classpath::{ClassPath, ResolvedType, is_platform_type};
pub use descriptor::{FieldType, MAX_ARRAY_DIMENSIONS, MethodDescriptor};

use thiserror::Error;

use reader::ByteReader;

const MAGIC: u32 = 0xCAFE_BABE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassFormatError {
    #[error("bad magic number {0:#010x}")]
    BadMagic(u32),

    #[error("unexpected end of data at offset {offset}")]
    Truncated { offset: usize },

    #[error("unknown constant pool tag {tag} at index {index}")]
    UnknownConstantTag { tag: u8, index: u16 },

    #[error("constant pool index {0} does not point to the expected entry")]
    BadConstantIndex(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessFlags(u16);

impl AccessFlags {
    pub const PUBLIC: u16 = 0x0001;
    pub const PRIVATE: u16 = 0x0002;
    pub const STATIC: u16 = 0x0008;
    pub const INTERFACE: u16 = 0x0200;
    pub const ABSTRACT: u16 = 0x0400;

    #[must_use]
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    const fn has(self, flag: u16) -> bool {
        self.0 & flag != 0
    }

    #[must_use]
    pub const fn is_public(self) -> bool {
        self.has(Self::PUBLIC)
    }

    #[must_use]
    pub const fn is_private(self) -> bool {
        self.has(Self::PRIVATE)
    }

    #[must_use]
    pub const fn is_static(self) -> bool {
        self.has(Self::STATIC)
    }

    #[must_use]
    pub const fn is_interface(self) -> bool {
        self.has(Self::INTERFACE)
    }

    #[must_use]
    pub const fn is_abstract(self) -> bool {
        self.has(Self::ABSTRACT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub access: AccessFlags,
    pub name: String,
    pub descriptor: String,
}

impl MethodInfo {
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == "<init>"
    }
}

/// The decoded shape of one class or interface. Names use the internal
/// slash-separated form, e.g. `de/example/Main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFile {
    pub access: AccessFlags,
    pub this_class: String,
    /// `None` only for `java/lang/Object`.
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub methods: Vec<MethodInfo>,
}

impl ClassFile {
    /// Decode a class file.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a well-formed class file.
    pub fn parse(bytes: &[u8]) -> Result<Self, ClassFormatError> {
        let mut r = ByteReader::new(bytes);

        let magic = r.u32()?;
        if magic != MAGIC {
            return Err(ClassFormatError::BadMagic(magic));
        }
        r.skip(4)?; // minor_version, major_version

        let pool = ConstantPool::read(&mut r)?;

        let access = AccessFlags::new(r.u16()?);
        let this_class = pool.class_name(r.u16()?)?.to_string();
        let super_index = r.u16()?;
        let super_class = if super_index == 0 {
            None
        } else {
            Some(pool.class_name(super_index)?.to_string())
        };

        let interface_count = r.u16()?;
        let interfaces = (0..interface_count)
            .map(|_| pool.class_name(r.u16()?).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        let field_count = r.u16()?;
        for _ in 0..field_count {
            r.skip(6)?; // access_flags, name_index, descriptor_index
            skip_attributes(&mut r)?;
        }

        let method_count = r.u16()?;
        let mut methods = Vec::with_capacity(usize::from(method_count));
        for _ in 0..method_count {
            let access = AccessFlags::new(r.u16()?);
            let name = pool.utf8(r.u16()?)?.to_string();
            let descriptor = pool.utf8(r.u16()?)?.to_string();
            skip_attributes(&mut r)?;
            methods.push(MethodInfo {
                access,
                name,
                descriptor,
            });
        }

        Ok(Self {
            access,
            this_class,
            super_class,
            interfaces,
            methods,
        })
    }

    #[must_use]
    pub const fn is_interface(&self) -> bool {
        self.access.is_interface()
    }

    /// Whether the type declares a public constructor taking no arguments.
    #[must_use]
    pub fn has_public_no_arg_constructor(&self) -> bool {
        self.methods
            .iter()
            .any(|m| m.is_constructor() && m.access.is_public() && m.descriptor == "()V")
    }
}

fn skip_attributes(r: &mut ByteReader<'_>) -> Result<(), ClassFormatError> {
    let count = r.u16()?;
    for _ in 0..count {
        r.skip(2)?; // attribute_name_index
        let len = r.u32()? as usize;
        r.skip(len)?;
    }
    Ok(())
}

enum Constant {
    Utf8(String),
    Class { name_index: u16 },
    /// Entries this reader never dereferences, and the unusable slot
    /// following a `Long` or `Double`.
    Other,
}

struct ConstantPool {
    entries: Vec<Constant>,
}

impl ConstantPool {
    fn read(r: &mut ByteReader<'_>) -> Result<Self, ClassFormatError> {
        let count = r.u16()?;
        // Index 0 is never valid.
        let mut entries = vec![Constant::Other];
        let mut index: u16 = 1;
        while index < count {
            let tag = r.u8()?;
            let (entry, slots) = match tag {
                1 => {
                    let len = usize::from(r.u16()?);
                    // Modified UTF-8 only differs from UTF-8 for NUL and
                    // supplementary characters, which never occur in the
                    // names this reader cares about.
                    let text = String::from_utf8_lossy(r.take(len)?).into_owned();
                    (Constant::Utf8(text), 1)
                }
                7 => (
                    Constant::Class {
                        name_index: r.u16()?,
                    },
                    1,
                ),
                8 | 16 | 19 | 20 => {
                    r.skip(2)?;
                    (Constant::Other, 1)
                }
                15 => {
                    r.skip(3)?;
                    (Constant::Other, 1)
                }
                3 | 4 | 9 | 10 | 11 | 12 | 17 | 18 => {
                    r.skip(4)?;
                    (Constant::Other, 1)
                }
                5 | 6 => {
                    r.skip(8)?;
                    (Constant::Other, 2)
                }
                _ => return Err(ClassFormatError::UnknownConstantTag { tag, index }),
            };
            entries.push(entry);
            if slots == 2 {
                entries.push(Constant::Other);
            }
            index = index.saturating_add(slots);
        }

        // A Long or Double in the last slot overruns the declared count.
        if entries.len() != usize::from(count.max(1)) {
            return Err(ClassFormatError::BadConstantIndex(count));
        }
        Ok(Self { entries })
    }

    fn utf8(&self, index: u16) -> Result<&str, ClassFormatError> {
        match self.entries.get(usize::from(index)) {
            Some(Constant::Utf8(text)) => Ok(text),
            _ => Err(ClassFormatError::BadConstantIndex(index)),
        }
    }

    fn class_name(&self, index: u16) -> Result<&str, ClassFormatError> {
        match self.entries.get(usize::from(index)) {
            Some(Constant::Class { name_index }) => self.utf8(*name_index),
            _ => Err(ClassFormatError::BadConstantIndex(index)),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
