//! The `Function` suite: thunks over instantiation, naming, and invocation.

use crate::args::CallArguments;
use crate::error::HarnessError;
use crate::registry::Registry;
use engine::Engine;

pub const SUITE: &str = "Function";

pub fn register(registry: &mut Registry) {
    registry.register(SUITE, "new_instance", new_instance);
    registry.register(SUITE, "new_instance_with_arguments", new_instance_with_arguments);
    registry.register(SUITE, "set_name", set_name);
    registry.register(SUITE, "call", call);
}

/// `Function.new_instance(func)`: instantiate `func` as a constructor with
/// no arguments; the instance goes to the return slot.
pub fn new_instance(engine: &mut Engine, args: &mut CallArguments) -> Result<(), HarnessError> {
    let func = args.function(0)?;
    let instance = engine.construct(func, &[])?;
    args.ret.set(instance)?;
    Ok(())
}

/// `Function.new_instance_with_arguments(func, count, a0, .., a{count-1})`:
/// instantiate with `count` constructor arguments collected from the
/// trailing positions.
pub fn new_instance_with_arguments(
    engine: &mut Engine,
    args: &mut CallArguments,
) -> Result<(), HarnessError> {
    let func = args.function(0)?;
    let count = args.count(1)?;

    let mut buf = engine.scratch.acquire();
    for i in 0..count {
        buf.push(args.argument(2 + i)?);
    }
    let instance = engine.construct(func, buf.values())?;
    args.ret.set(instance)?;
    Ok(())
}

/// `Function.set_name(func, name)`: assign the display name and return the
/// same function value.
pub fn set_name(engine: &mut Engine, args: &mut CallArguments) -> Result<(), HarnessError> {
    let func = args.function(0)?;
    let name_val = args.string(1)?;
    let name = engine.string_value(name_val)?.to_string();
    engine.set_function_name(func, &name)?;
    args.ret.set(func)?;
    Ok(())
}

/// `Function.call(func, recv, count, a0, .., a{count-1})`: invoke with an
/// explicit receiver and `count` trailing arguments. The scratch buffer is
/// released whether or not the forwarded call fails.
pub fn call(engine: &mut Engine, args: &mut CallArguments) -> Result<(), HarnessError> {
    let func = args.function(0)?;
    let recv = args.receiver(1)?;
    let count = args.count(2)?;

    let mut buf = engine.scratch.acquire();
    for i in 0..count {
        buf.push(args.argument(3 + i)?);
    }
    let result = engine.call(func, recv, buf.values())?;
    args.ret.set(result)?;
    Ok(())
}
