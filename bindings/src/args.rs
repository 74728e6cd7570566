use crate::error::BindingError;
use values::{Value, ValueKind};

/// Write-once output location for a thunk invocation.
///
/// Set at most once per call; left unset, the thunk produced no observable
/// result.
#[derive(Debug, Default)]
pub struct ReturnSlot {
    value: Option<Value>,
}

impl ReturnSlot {
    pub fn set(&mut self, value: Value) -> Result<(), BindingError> {
        if self.value.is_some() {
            return Err(BindingError::ReturnAlreadySet);
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn get(&self) -> Option<Value> {
        self.value
    }

    pub fn take(&mut self) -> Option<Value> {
        self.value.take()
    }
}

/// Ordered, fixed-at-call-time argument list handed to a thunk, plus the
/// return slot for its result.
///
/// Accessors are positional and fallible: out-of-range is `Missing`, a wrong
/// dynamic type is `TypeMismatch` naming the index and both kinds.
#[derive(Debug, Default)]
pub struct CallArguments {
    values: Vec<Value>,
    pub ret: ReturnSlot,
}

impl CallArguments {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            ret: ReturnSlot::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    /// Positional argument of any kind; absent is `Missing`.
    pub fn argument(&self, index: usize) -> Result<Value, BindingError> {
        self.get(index).ok_or(BindingError::Missing { index })
    }

    fn expect(&self, index: usize, expected: ValueKind) -> Result<Value, BindingError> {
        let value = self.argument(index)?;
        if value.kind() == expected {
            Ok(value)
        } else {
            Err(BindingError::TypeMismatch {
                index,
                expected,
                actual: value.kind(),
            })
        }
    }

    pub fn function(&self, index: usize) -> Result<Value, BindingError> {
        self.expect(index, ValueKind::Function)
    }

    pub fn object(&self, index: usize) -> Result<Value, BindingError> {
        self.expect(index, ValueKind::Object)
    }

    pub fn string(&self, index: usize) -> Result<Value, BindingError> {
        self.expect(index, ValueKind::Str)
    }

    pub fn int(&self, index: usize) -> Result<i64, BindingError> {
        let value = self.expect(index, ValueKind::Int)?;
        Ok(value.as_int().unwrap_or_default())
    }

    /// Numeric argument: `Number` as-is, `Int` widened.
    pub fn number(&self, index: usize) -> Result<f64, BindingError> {
        let value = self.argument(index)?;
        value.as_number().ok_or(BindingError::TypeMismatch {
            index,
            expected: ValueKind::Number,
            actual: value.kind(),
        })
    }

    /// Call receiver: an object, or `Null`/`Undefined` for receiver-less
    /// invocation.
    pub fn receiver(&self, index: usize) -> Result<Value, BindingError> {
        let value = self.argument(index)?;
        match value {
            Value::Object(_) | Value::Null | Value::Undefined => Ok(value),
            other => Err(BindingError::TypeMismatch {
                index,
                expected: ValueKind::Object,
                actual: other.kind(),
            }),
        }
    }

    /// Non-negative integer argument count.
    pub fn count(&self, index: usize) -> Result<usize, BindingError> {
        let value = self.int(index)?;
        if value < 0 {
            return Err(BindingError::NegativeCount { index, value });
        }
        Ok(value as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_slot_write_once() {
        let mut slot = ReturnSlot::default();
        assert!(!slot.is_set());
        slot.set(Value::Int(1)).unwrap();
        assert!(slot.is_set());
        assert_eq!(
            slot.set(Value::Int(2)),
            Err(BindingError::ReturnAlreadySet)
        );
        assert_eq!(slot.get(), Some(Value::Int(1)));
        assert_eq!(slot.take(), Some(Value::Int(1)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_typed_accessors() {
        let args = CallArguments::new(vec![
            Value::Function(0),
            Value::Str(1),
            Value::Int(3),
            Value::Object(2),
        ]);
        assert_eq!(args.function(0), Ok(Value::Function(0)));
        assert_eq!(args.string(1), Ok(Value::Str(1)));
        assert_eq!(args.int(2), Ok(3));
        assert_eq!(args.object(3), Ok(Value::Object(2)));
    }

    #[test]
    fn test_type_mismatch_reports_index_and_kinds() {
        let args = CallArguments::new(vec![Value::Int(5)]);
        let err = args.function(0).unwrap_err();
        assert_eq!(
            err,
            BindingError::TypeMismatch {
                index: 0,
                expected: ValueKind::Function,
                actual: ValueKind::Int,
            }
        );
        assert_eq!(
            err.to_string(),
            "argument 0 is not of expected kind function (got integer)"
        );
    }

    #[test]
    fn test_missing_argument() {
        let args = CallArguments::new(vec![]);
        assert_eq!(args.argument(0), Err(BindingError::Missing { index: 0 }));
        assert_eq!(args.function(2), Err(BindingError::Missing { index: 2 }));
    }

    #[test]
    fn test_receiver_accepts_nullish() {
        let args = CallArguments::new(vec![Value::Null, Value::Undefined, Value::Object(0)]);
        assert_eq!(args.receiver(0), Ok(Value::Null));
        assert_eq!(args.receiver(1), Ok(Value::Undefined));
        assert_eq!(args.receiver(2), Ok(Value::Object(0)));

        let bad = CallArguments::new(vec![Value::Int(1)]);
        assert!(matches!(
            bad.receiver(0),
            Err(BindingError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_count_rejects_negative() {
        let args = CallArguments::new(vec![Value::Int(2), Value::Int(-1)]);
        assert_eq!(args.count(0), Ok(2));
        assert_eq!(
            args.count(1),
            Err(BindingError::NegativeCount { index: 1, value: -1 })
        );
    }

    #[test]
    fn test_number_widens_int() {
        let args = CallArguments::new(vec![Value::Number(1.5), Value::Int(2)]);
        assert_eq!(args.number(0), Ok(1.5));
        assert_eq!(args.number(1), Ok(2.0));
    }
}
