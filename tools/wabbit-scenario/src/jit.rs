///
/// JIT Call-Through
///
/// Compiles a `fn() -> i32` with Cranelift that imports the print entry
/// points by symbol name, the way a code generator's output would, and
/// returns the bitwise OR of every call's status.
///

use cranelift::prelude::*;
use cranelift_jit::{JITBuilder, JITModule};
use cranelift_module::{FuncId, Linkage, Module, ModuleError};
use thiserror::Error;

use wabbit_runtime::{AbiType, EntryPoint};

#[derive(Debug, Error)]
pub enum JitError {
    #[error("failed to create ISA: {0}")]
    Isa(String),

    #[error(transparent)]
    Module(#[from] ModuleError),
}

/// An argument passed to one entry point.
#[derive(Debug, Clone, Copy)]
pub enum Arg {
    Int(i32),
    Float(f64),
    Bool(bool),
}

fn abi_param(ty: AbiType) -> AbiParam {
    match ty {
        AbiType::I32 => AbiParam::new(types::I32),
        AbiType::F64 => AbiParam::new(types::F64),
        AbiType::Bool => AbiParam::new(types::I8).uext(),
    }
}

fn new_module() -> Result<JITModule, JitError> {
    let mut flag_builder = settings::builder();
    for (name, value) in [("use_colocated_libcalls", "false"), ("is_pic", "false")] {
        flag_builder
            .set(name, value)
            .map_err(|e| JitError::Isa(e.to_string()))?;
    }
    let isa = cranelift_native::builder()
        .map_err(|e| JitError::Isa(e.to_string()))?
        .finish(settings::Flags::new(flag_builder))
        .map_err(|e| JitError::Isa(e.to_string()))?;

    let mut builder = JITBuilder::with_isa(isa, cranelift_module::default_libcall_names());
    for entry in EntryPoint::ALL {
        builder.symbol(entry.symbol(), entry.address());
    }
    Ok(JITModule::new(builder))
}

fn declare_entry(module: &mut JITModule, entry: EntryPoint) -> Result<FuncId, JitError> {
    let mut sig = module.make_signature();
    sig.params.push(abi_param(entry.param()));
    sig.returns.push(abi_param(entry.ret()));
    Ok(module.declare_function(entry.symbol(), Linkage::Import, &sig)?)
}

pub fn compile_calls(calls: &[(EntryPoint, Arg)]) -> Result<extern "C" fn() -> i32, JitError> {
    let mut module = new_module()?;
    let mut imports = Vec::with_capacity(EntryPoint::ALL.len());
    for entry in EntryPoint::ALL {
        imports.push((entry, declare_entry(&mut module, entry)?));
    }

    let mut ctx = module.make_context();
    ctx.func.signature.returns.push(AbiParam::new(types::I32));
    let main_id = module.declare_function("wabbit_main", Linkage::Local, &ctx.func.signature)?;

    let mut builder_ctx = FunctionBuilderContext::new();
    {
        let mut builder = FunctionBuilder::new(&mut ctx.func, &mut builder_ctx);
        let block = builder.create_block();
        builder.switch_to_block(block);
        builder.seal_block(block);

        let mut status = builder.ins().iconst(types::I32, 0);
        for &(entry, arg) in calls {
            let Some(&(_, func_id)) = imports.iter().find(|(e, _)| *e == entry) else {
                continue;
            };
            let func_ref = module.declare_func_in_func(func_id, builder.func);
            let value = match arg {
                Arg::Int(v) => builder.ins().iconst(types::I32, i64::from(v)),
                Arg::Float(v) => builder.ins().f64const(v),
                Arg::Bool(v) => builder.ins().iconst(types::I8, i64::from(v)),
            };
            let call = builder.ins().call(func_ref, &[value]);
            let result = builder.inst_results(call)[0];
            status = builder.ins().bor(status, result);
        }

        builder.ins().return_(&[status]);
        builder.finalize();
    }

    module.define_function(main_id, &mut ctx)?;
    module.clear_context(&mut ctx);
    module.finalize_definitions()?;

    let code = module.get_finalized_function(main_id);
    // The code pages live as long as the module; the process is short-lived.
    std::mem::forget(module);
    Ok(unsafe { std::mem::transmute::<*const u8, extern "C" fn() -> i32>(code) })
}
