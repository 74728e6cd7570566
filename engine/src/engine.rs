use crate::error::RuntimeError;
use crate::scratch::BufferPool;
use std::rc::Rc;
use values::{FunctionData, Heap, ObjectData, Value};

/// Behavior of a callable: receives the receiver (`this`) and the positional
/// arguments. Stored behind `Rc` so dispatch can copy the handler out of the
/// table before handing `&mut Engine` to it.
pub type HostFn = Rc<dyn Fn(&mut Engine, Value, &[Value]) -> Result<Value, RuntimeError>>;

/// The embedding runtime.
///
/// Owns the heap, the host-function table the heap's function objects index
/// into, and the scratch pool for temporary argument buffers.
pub struct Engine {
    pub heap: Heap,
    pub scratch: BufferPool,
    handlers: Vec<HostFn>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            heap: Heap::new(),
            scratch: BufferPool::new(),
            handlers: Vec::new(),
        }
    }

    // --- Allocation ---

    /// Register a host function and allocate its function object.
    /// `arity` of -1 means variadic.
    pub fn alloc_function<F>(&mut self, name: &str, arity: isize, f: F) -> Value
    where
        F: Fn(&mut Engine, Value, &[Value]) -> Result<Value, RuntimeError> + 'static,
    {
        self.handlers.push(Rc::new(f));
        let handler = (self.handlers.len() - 1) as u32;
        let handle = self.heap.alloc_function(FunctionData {
            name: name.to_string(),
            arity,
            handler,
        });
        Value::Function(handle)
    }

    pub fn alloc_object(&mut self) -> Value {
        Value::Object(self.heap.alloc_object(ObjectData::default()))
    }

    pub fn alloc_object_with(&mut self, props: &[(&str, Value)]) -> Value {
        let mut obj = ObjectData::default();
        for (key, val) in props {
            obj.properties.insert((*key).to_string(), *val);
        }
        Value::Object(self.heap.alloc_object(obj))
    }

    pub fn alloc_string(&mut self, s: &str) -> Value {
        Value::Str(self.heap.alloc_string(s.to_string()))
    }

    // --- Embedding operations ---

    /// Invoke a callable with an explicit receiver and positional arguments.
    /// The callable's own error propagates unchanged.
    pub fn call(
        &mut self,
        callee: Value,
        receiver: Value,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        let (handler, arity, name) = self.function_parts(callee)?;

        if arity != -1 && arity as usize != args.len() {
            return Err(RuntimeError::ArityMismatch(format!(
                "{} expects {} args, got {}",
                name,
                arity,
                args.len()
            )));
        }

        let func = self
            .handlers
            .get(handler as usize)
            .cloned()
            .ok_or(RuntimeError::FunctionNotFound)?;
        (*func)(self, receiver, args)
    }

    /// Instantiate a callable as a constructor: allocate a fresh instance,
    /// invoke with the instance as receiver. A constructor returning an
    /// object overrides the instance; any other return keeps it.
    pub fn construct(&mut self, callee: Value, args: &[Value]) -> Result<Value, RuntimeError> {
        if !callee.is_function() {
            return Err(RuntimeError::NotAConstructor(self.describe(&callee)));
        }
        let instance = self.alloc_object();
        let result = self.call(callee, instance, args)?;
        Ok(if result.is_object() { result } else { instance })
    }

    /// Assign the display name of a function object in place.
    pub fn set_function_name(&mut self, callee: Value, name: &str) -> Result<(), RuntimeError> {
        let handle = match callee {
            Value::Function(h) => h,
            other => {
                return Err(RuntimeError::TypeMismatch(format!(
                    "expected function, got {}",
                    self.describe(&other)
                )))
            }
        };
        let func = self
            .heap
            .get_function_mut(handle)
            .ok_or(RuntimeError::FunctionNotFound)?;
        func.name = name.to_string();
        Ok(())
    }

    pub fn function_name(&self, callee: Value) -> Result<&str, RuntimeError> {
        match callee {
            Value::Function(h) => self
                .heap
                .get_function(h)
                .map(|f| f.name.as_str())
                .ok_or(RuntimeError::FunctionNotFound),
            other => Err(RuntimeError::TypeMismatch(format!(
                "expected function, got {}",
                self.describe(&other)
            ))),
        }
    }

    // --- Object and string access ---

    /// Missing properties read as `Undefined`, mirroring dynamic semantics.
    pub fn get_property(&self, obj: Value, key: &str) -> Result<Value, RuntimeError> {
        let handle = match obj {
            Value::Object(h) => h,
            other => {
                return Err(RuntimeError::TypeMismatch(format!(
                    "expected object, got {}",
                    self.describe(&other)
                )))
            }
        };
        let data = self
            .heap
            .get_object(handle)
            .ok_or_else(|| RuntimeError::SystemError("dangling object handle".into()))?;
        Ok(data.properties.get(key).copied().unwrap_or(Value::Undefined))
    }

    pub fn set_property(&mut self, obj: Value, key: &str, value: Value) -> Result<(), RuntimeError> {
        let handle = match obj {
            Value::Object(h) => h,
            other => {
                return Err(RuntimeError::TypeMismatch(format!(
                    "expected object, got {}",
                    self.describe(&other)
                )))
            }
        };
        let data = self
            .heap
            .get_object_mut(handle)
            .ok_or_else(|| RuntimeError::SystemError("dangling object handle".into()))?;
        data.properties.insert(key.to_string(), value);
        Ok(())
    }

    pub fn string_value(&self, value: Value) -> Result<&str, RuntimeError> {
        match value {
            Value::Str(h) => self
                .heap
                .get_string(h)
                .map(String::as_str)
                .ok_or_else(|| RuntimeError::SystemError("dangling string handle".into())),
            other => Err(RuntimeError::TypeMismatch(format!(
                "expected string, got {}",
                self.describe(&other)
            ))),
        }
    }

    /// Helper to format values for display.
    pub fn describe(&self, value: &Value) -> String {
        match value {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("{}", b),
            Value::Int(i) => format!("{}", i),
            Value::Number(n) => format!("{}", n),
            Value::Str(h) => self
                .heap
                .get_string(*h)
                .cloned()
                .unwrap_or_else(|| "<bad string>".into()),
            Value::Object(h) => format!("[object #{}]", h),
            Value::Function(h) => match self.heap.get_function(*h) {
                Some(f) => format!("[function {}]", f.name),
                None => "<bad function>".into(),
            },
        }
    }

    fn function_parts(&self, callee: Value) -> Result<(u32, isize, String), RuntimeError> {
        let handle = match callee {
            Value::Function(h) => h,
            other => return Err(RuntimeError::Uncallable(self.describe(&other))),
        };
        let func = self
            .heap
            .get_function(handle)
            .ok_or(RuntimeError::FunctionNotFound)?;
        Ok((func.handler, func.arity, func.name.clone()))
    }
}
