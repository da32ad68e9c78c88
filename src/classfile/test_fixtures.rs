//! Emits minimal but well-formed class files so tests do not need `javac`.
//!
//! Self-contained on purpose: integration tests include this file via
//! `#[path]`.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_SUPER: u16 = 0x0020;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;
pub const ACC_ENUM: u16 = 0x4000;

pub const MAIN_WITH_ARGS: &str = "([Ljava/lang/String;)V";
pub const MAIN_NO_ARGS: &str = "()V";

#[derive(Debug, Clone)]
pub struct ClassFileBuilder {
    name: String,
    access: u16,
    super_name: Option<String>,
    interfaces: Vec<String>,
    methods: Vec<(u16, String, String)>,
    long_constants: Vec<i64>,
}

impl ClassFileBuilder {
    /// A public class extending `java/lang/Object`. `name` is the internal
    /// name, e.g. `pkg/Main`.
    pub fn class(name: &str) -> Self {
        Self {
            name: name.to_string(),
            access: ACC_PUBLIC | ACC_SUPER,
            super_name: Some("java/lang/Object".to_string()),
            interfaces: Vec::new(),
            methods: Vec::new(),
            long_constants: Vec::new(),
        }
    }

    pub fn interface(name: &str) -> Self {
        Self {
            access: ACC_PUBLIC | ACC_INTERFACE | ACC_ABSTRACT,
            ..Self::class(name)
        }
    }

    pub fn access(mut self, access: u16) -> Self {
        self.access = access;
        self
    }

    pub fn extends(mut self, super_name: &str) -> Self {
        self.super_name = Some(super_name.to_string());
        self
    }

    /// Only `java/lang/Object` legitimately has no superclass.
    pub fn without_super(mut self) -> Self {
        self.super_name = None;
        self
    }

    pub fn implements(mut self, interface: &str) -> Self {
        self.interfaces.push(interface.to_string());
        self
    }

    pub fn method(mut self, access: u16, name: &str, descriptor: &str) -> Self {
        self.methods
            .push((access, name.to_string(), descriptor.to_string()));
        self
    }

    pub fn public_constructor(self) -> Self {
        self.method(ACC_PUBLIC, "<init>", "()V")
    }

    /// The classic `public static void main(String[])`.
    pub fn static_main(self) -> Self {
        self.method(ACC_PUBLIC | ACC_STATIC, "main", MAIN_WITH_ARGS)
    }

    /// Adds a two-slot constant pool entry.
    pub fn long_constant(mut self, value: i64) -> Self {
        self.long_constants.push(value);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut pool = PoolWriter::default();
        let this_index = pool.class(&self.name);
        let super_index = self.super_name.as_deref().map_or(0, |s| pool.class(s));
        let interface_indexes: Vec<u16> = self.interfaces.iter().map(|i| pool.class(i)).collect();
        let method_indexes: Vec<(u16, u16, u16)> = self
            .methods
            .iter()
            .map(|(access, name, desc)| (*access, pool.utf8(name), pool.utf8(desc)))
            .collect();
        for value in &self.long_constants {
            pool.long(*value);
        }

        let mut out = Vec::new();
        out.extend_from_slice(&0xCAFE_BABE_u32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&61u16.to_be_bytes());
        out.extend_from_slice(&pool.next_index.to_be_bytes());
        out.extend_from_slice(&pool.bytes);
        out.extend_from_slice(&self.access.to_be_bytes());
        out.extend_from_slice(&this_index.to_be_bytes());
        out.extend_from_slice(&super_index.to_be_bytes());
        push_len(&mut out, interface_indexes.len());
        for index in interface_indexes {
            out.extend_from_slice(&index.to_be_bytes());
        }
        out.extend_from_slice(&0u16.to_be_bytes()); // fields
        push_len(&mut out, method_indexes.len());
        for (access, name, desc) in method_indexes {
            out.extend_from_slice(&access.to_be_bytes());
            out.extend_from_slice(&name.to_be_bytes());
            out.extend_from_slice(&desc.to_be_bytes());
            out.extend_from_slice(&0u16.to_be_bytes()); // attributes
        }
        out.extend_from_slice(&0u16.to_be_bytes()); // class attributes
        out
    }

    /// Writes `<root>/<name>.class`, creating parent directories.
    pub fn write_to(&self, root: &Path) -> PathBuf {
        let path = root.join(format!("{}.class", self.name));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create class directory");
        }
        std::fs::write(&path, self.build()).expect("write class file");
        path
    }
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    let len = u16::try_from(len).expect("too many entries");
    out.extend_from_slice(&len.to_be_bytes());
}

struct PoolWriter {
    bytes: Vec<u8>,
    next_index: u16,
    utf8: HashMap<String, u16>,
    classes: HashMap<String, u16>,
}

impl Default for PoolWriter {
    fn default() -> Self {
        Self {
            bytes: Vec::new(),
            next_index: 1,
            utf8: HashMap::new(),
            classes: HashMap::new(),
        }
    }
}

impl PoolWriter {
    fn utf8(&mut self, text: &str) -> u16 {
        if let Some(index) = self.utf8.get(text) {
            return *index;
        }
        self.bytes.push(1);
        push_len(&mut self.bytes, text.len());
        self.bytes.extend_from_slice(text.as_bytes());
        let index = self.next_index;
        self.next_index += 1;
        self.utf8.insert(text.to_string(), index);
        index
    }

    fn class(&mut self, name: &str) -> u16 {
        if let Some(index) = self.classes.get(name) {
            return *index;
        }
        let name_index = self.utf8(name);
        self.bytes.push(7);
        self.bytes.extend_from_slice(&name_index.to_be_bytes());
        let index = self.next_index;
        self.next_index += 1;
        self.classes.insert(name.to_string(), index);
        index
    }

    fn long(&mut self, value: i64) {
        self.bytes.push(5);
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self.next_index += 2;
    }
}
