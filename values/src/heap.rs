use crate::Value;
use std::collections::HashMap;

/// A heap-allocated object: a bag of named properties.
#[derive(Debug, Clone, Default)]
pub struct ObjectData {
    pub properties: HashMap<String, Value>,
}

/// A heap-allocated callable.
///
/// The behavior itself lives in the engine's host-function table; `handler`
/// is the index into that table. `arity` of -1 means variadic.
#[derive(Debug, Clone)]
pub struct FunctionData {
    pub name: String,
    pub arity: isize,
    pub handler: u32,
}

/// Typed slot arena with free-list reuse.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    data: Vec<T>,
    free_indices: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            free_indices: Vec::new(),
        }
    }

    pub fn alloc(&mut self, item: T) -> u32 {
        if let Some(idx) = self.free_indices.pop() {
            self.data[idx as usize] = item;
            idx
        } else {
            let index = self.data.len() as u32;
            self.data.push(item);
            index
        }
    }

    pub fn get(&self, handle: u32) -> Option<&T> {
        self.data.get(handle as usize)
    }

    pub fn get_mut(&mut self, handle: u32) -> Option<&mut T> {
        self.data.get_mut(handle as usize)
    }

    /// Marks a slot for reuse. The slot contents stay in place until the
    /// next `alloc` overwrites them.
    pub fn free(&mut self, handle: u32) {
        if (handle as usize) < self.data.len() {
            self.free_indices.push(handle);
        }
    }

    pub fn len(&self) -> usize {
        self.data.len() - self.free_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed arenas for every heap-allocated value kind.
pub struct Heap {
    pub strings: Arena<String>,
    pub objects: Arena<ObjectData>,
    pub functions: Arena<FunctionData>,
}

impl Heap {
    pub fn new() -> Self {
        Self {
            strings: Arena::new(),
            objects: Arena::new(),
            functions: Arena::new(),
        }
    }

    pub fn alloc_string(&mut self, s: String) -> u32 {
        self.strings.alloc(s)
    }

    pub fn get_string(&self, handle: u32) -> Option<&String> {
        self.strings.get(handle)
    }

    pub fn alloc_object(&mut self, obj: ObjectData) -> u32 {
        self.objects.alloc(obj)
    }

    pub fn get_object(&self, handle: u32) -> Option<&ObjectData> {
        self.objects.get(handle)
    }

    pub fn get_object_mut(&mut self, handle: u32) -> Option<&mut ObjectData> {
        self.objects.get_mut(handle)
    }

    pub fn alloc_function(&mut self, func: FunctionData) -> u32 {
        self.functions.alloc(func)
    }

    pub fn get_function(&self, handle: u32) -> Option<&FunctionData> {
        self.functions.get(handle)
    }

    pub fn get_function_mut(&mut self, handle: u32) -> Option<&mut FunctionData> {
        self.functions.get_mut(handle)
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
