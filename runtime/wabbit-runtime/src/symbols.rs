///
/// Runtime Symbol Table
///
/// The exported entry points with their symbol names, native signatures
/// and addresses. JIT hosts register `address()` under `symbol()` before
/// resolving the generated code's imports.
///

use crate::print::{_print_bool, _print_char, _print_float, _print_int};

/// Native types that appear in entry point signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiType {
    /// C `int`
    I32,
    /// C `double`
    F64,
    /// C `_Bool`, one byte holding 0 or 1
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    PrintInt,
    PrintFloat,
    PrintChar,
    PrintBool,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 4] = [
        EntryPoint::PrintInt,
        EntryPoint::PrintFloat,
        EntryPoint::PrintChar,
        EntryPoint::PrintBool,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            EntryPoint::PrintInt => "_print_int",
            EntryPoint::PrintFloat => "_print_float",
            EntryPoint::PrintChar => "_print_char",
            EntryPoint::PrintBool => "_print_bool",
        }
    }

    pub fn param(self) -> AbiType {
        match self {
            EntryPoint::PrintInt | EntryPoint::PrintChar => AbiType::I32,
            EntryPoint::PrintFloat => AbiType::F64,
            EntryPoint::PrintBool => AbiType::Bool,
        }
    }

    pub fn ret(self) -> AbiType {
        AbiType::I32
    }

    /// Address of the exported function, for JIT symbol registration.
    pub fn address(self) -> *const u8 {
        match self {
            EntryPoint::PrintInt => _print_int as *const u8,
            EntryPoint::PrintFloat => _print_float as *const u8,
            EntryPoint::PrintChar => _print_char as *const u8,
            EntryPoint::PrintBool => _print_bool as *const u8,
        }
    }
}
