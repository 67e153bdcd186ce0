//! A record shaped like a decoded form: one field per conversion path, each
//! looked up by key the way a binder resolves a field tag.

#![allow(dead_code)]

use coerce::{SetError, Settable, Slot, SourceValue, set_slot};
use coerce_null::{NullInt, NullString};

#[derive(Default, Debug)]
pub struct Record {
    pub int_int: isize,
    pub int_int_8: isize,
    pub int_int_16: isize,
    pub int_int_32: isize,
    pub int_int_64: isize,
    pub int_8_int: i8,
    pub int_16_int: i16,
    pub int_32_int: i32,
    pub int_64_int: i64,
    pub int_string: isize,
    pub int_string_empty: isize,
    pub int_ptr_int: Option<Box<isize>>,

    pub uint_uint: usize,
    pub uint_uint_8: usize,
    pub uint_uint_16: usize,
    pub uint_uint_32: usize,
    pub uint_uint_64: usize,
    pub uint_8_uint: u8,
    pub uint_16_uint: u16,
    pub uint_32_uint: u32,
    pub uint_64_uint: u64,
    pub uint_string: usize,

    pub bool_bool: bool,
    pub bool_int: bool,
    pub bool_uint: bool,
    pub bool_string: bool,

    pub float_32_float_32: f32,
    pub float_32_float_64: f32,
    pub float_64_float_32: f64,
    pub float_64_float_64: f64,
    pub float_64_int: f64,
    pub float_64_uint: f64,
    pub float_64_string: f64,

    pub string_string: String,
    pub string_int: String,
    pub string_uint: String,
    pub string_bool: String,
    pub string_float: String,

    pub null_int_int: NullInt,
    pub null_int_string: NullInt,
    pub null_int_ptr_string: Option<Box<NullInt>>,
    pub null_string_int: NullString,
    pub null_string_ptr_string: Option<Box<NullString>>,
}

impl Record {
    /// The destination bound to `key`, if the record has one.
    pub fn slot(&mut self, key: &str) -> Option<Slot<'_>> {
        let slot = match key {
            "int_int" => self.int_int.slot(),
            "int_int_8" => self.int_int_8.slot(),
            "int_int_16" => self.int_int_16.slot(),
            "int_int_32" => self.int_int_32.slot(),
            "int_int_64" => self.int_int_64.slot(),
            "int_8_int" => self.int_8_int.slot(),
            "int_16_int" => self.int_16_int.slot(),
            "int_32_int" => self.int_32_int.slot(),
            "int_64_int" => self.int_64_int.slot(),
            "int_string" => self.int_string.slot(),
            "int_string_empty" => self.int_string_empty.slot(),
            "int_ptr_int" => self.int_ptr_int.slot(),

            "uint_uint" => self.uint_uint.slot(),
            "uint_uint_8" => self.uint_uint_8.slot(),
            "uint_uint_16" => self.uint_uint_16.slot(),
            "uint_uint_32" => self.uint_uint_32.slot(),
            "uint_uint_64" => self.uint_uint_64.slot(),
            "uint_8_uint" => self.uint_8_uint.slot(),
            "uint_16_uint" => self.uint_16_uint.slot(),
            "uint_32_uint" => self.uint_32_uint.slot(),
            "uint_64_uint" => self.uint_64_uint.slot(),
            "uint_string" => self.uint_string.slot(),

            "bool_bool" => self.bool_bool.slot(),
            "bool_int" => self.bool_int.slot(),
            "bool_uint" => self.bool_uint.slot(),
            "bool_string" => self.bool_string.slot(),

            "float_32_float_32" => self.float_32_float_32.slot(),
            "float_32_float_64" => self.float_32_float_64.slot(),
            "float_64_float_32" => self.float_64_float_32.slot(),
            "float_64_float_64" => self.float_64_float_64.slot(),
            "float_64_int" => self.float_64_int.slot(),
            "float_64_uint" => self.float_64_uint.slot(),
            "float_64_string" => self.float_64_string.slot(),

            "string_string" => self.string_string.slot(),
            "string_int" => self.string_int.slot(),
            "string_uint" => self.string_uint.slot(),
            "string_bool" => self.string_bool.slot(),
            "string_float" => self.string_float.slot(),

            "null_int_int" => self.null_int_int.slot(),
            "null_int_string" => self.null_int_string.slot(),
            "null_int_ptr_string" => self.null_int_ptr_string.slot(),
            "null_string_int" => self.null_string_int.slot(),
            "null_string_ptr_string" => self.null_string_ptr_string.slot(),

            _ => return None,
        };
        Some(slot)
    }
}

fn text(s: &str) -> SourceValue {
    SourceValue::from(s)
}

/// One source value per record field, typed the way a loosely-typed decoder
/// would hand them over.
pub fn dataset() -> Vec<(&'static str, SourceValue)> {
    vec![
        ("int_int", SourceValue::Isize(1000)),
        ("int_int_8", SourceValue::I8(20)),
        ("int_int_16", SourceValue::I16(200)),
        ("int_int_32", SourceValue::I32(2000)),
        ("int_int_64", SourceValue::I64(20000)),
        ("int_8_int", SourceValue::Isize(10)),
        ("int_16_int", SourceValue::Isize(1000)),
        ("int_32_int", SourceValue::Isize(1000)),
        ("int_64_int", SourceValue::Isize(1000)),
        ("int_string", text("1000")),
        ("int_string_empty", text("")),
        ("int_ptr_int", SourceValue::Isize(123)),
        ("uint_uint", SourceValue::Usize(1000)),
        ("uint_uint_8", SourceValue::U8(10)),
        ("uint_uint_16", SourceValue::U16(100)),
        ("uint_uint_32", SourceValue::U32(1000)),
        ("uint_uint_64", SourceValue::U64(10000)),
        ("uint_8_uint", SourceValue::Usize(10)),
        ("uint_16_uint", SourceValue::Usize(1000)),
        ("uint_32_uint", SourceValue::Usize(1000)),
        ("uint_64_uint", SourceValue::Usize(1000)),
        ("uint_string", text("1000")),
        ("bool_bool", SourceValue::Bool(true)),
        ("bool_int", SourceValue::Isize(1)),
        ("bool_uint", SourceValue::Usize(1)),
        ("bool_string", text("true")),
        ("float_32_float_32", SourceValue::F32(123.2)),
        ("float_32_float_64", SourceValue::F64(1234.2)),
        ("float_64_float_32", SourceValue::F32(123.2)),
        ("float_64_float_64", SourceValue::F64(1234.2)),
        ("float_64_int", SourceValue::Isize(123)),
        ("float_64_uint", SourceValue::Usize(123)),
        ("float_64_string", text("123.3")),
        ("string_string", text("test")),
        ("string_int", SourceValue::Isize(123)),
        ("string_uint", SourceValue::Usize(123)),
        ("string_bool", SourceValue::Bool(true)),
        ("string_float", SourceValue::F64(1234.2)),
        ("null_int_int", SourceValue::Isize(12)),
        ("null_int_string", text("12")),
        ("null_int_ptr_string", text("12")),
        ("null_string_int", SourceValue::Isize(1234)),
        ("null_string_ptr_string", text("test")),
    ]
}

/// Sets every field of `record` that `dataset` has a value for.
pub fn populate(record: &mut Record, dataset: &[(&'static str, SourceValue)]) -> Result<(), SetError> {
    for (key, value) in dataset {
        if let Some(slot) = record.slot(key) {
            set_slot(slot, value)?;
        }
    }
    Ok(())
}
