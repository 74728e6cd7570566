use bindings::Registry;
use criterion::{criterion_group, criterion_main, Criterion};
use engine::Engine;
use values::Value;

fn bench_dispatch(c: &mut Criterion) {
    let registry = Registry::builtin();
    let mut engine = Engine::new();
    let double = engine.alloc_function("double", 1, |_, _, args| {
        Ok(Value::Int(args[0].as_int().unwrap_or(0) * 2))
    });

    c.bench_function("function_call_dispatch", |b| {
        b.iter(|| {
            registry
                .dispatch(
                    &mut engine,
                    "Function.call",
                    vec![double, Value::Null, Value::Int(1), Value::Int(21)],
                )
                .unwrap()
        })
    });

    c.bench_function("registry_lookup", |b| {
        b.iter(|| registry.lookup("Function.set_name").is_some())
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
