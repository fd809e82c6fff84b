//! Constant pool shared by the call sites of one compilation.
//!
//! Stores the values instructions refer to by index: literal operands and
//! the operator hashes of builtin calls.

use rustc_hash::FxHashMap;
use sqlcall_core::OperatorId;

/// Values stored in the constant pool.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// Exact integer literal (all integer widths).
    Int(i64),
    /// Approximate numeric literal.
    Float64(f64),
    /// Character string literal.
    StringData(String),
    /// Operator hash of a builtin call.
    Operator(u64),
}

/// Constant pool with deduplication.
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    constants: Vec<Constant>,
    index: FxHashMap<ConstantKey, u32>,
}

/// Deduplication key. Floats are keyed by bit pattern, so `-0.0` and `0.0`
/// stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ConstantKey {
    Int(i64),
    Float64(u64),
    StringData(String),
    Operator(u64),
}

impl ConstantPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            constants: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Add or get an existing constant, returning its index.
    pub fn add(&mut self, constant: Constant) -> u32 {
        let key = Self::to_key(&constant);
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }

        let idx = self.constants.len() as u32;
        self.index.insert(key, idx);
        self.constants.push(constant);
        idx
    }

    /// Index of an already pooled constant.
    pub fn find(&self, constant: &Constant) -> Option<u32> {
        self.index.get(&Self::to_key(constant)).copied()
    }

    /// Drop every constant added after the pool had `len` entries.
    ///
    /// Used to undo the constants of a call that failed to compile.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.constants.len() {
            return;
        }
        for constant in self.constants.drain(len..) {
            self.index.remove(&Self::to_key(&constant));
        }
    }

    pub fn add_int(&mut self, value: i64) -> u32 {
        self.add(Constant::Int(value))
    }

    pub fn add_f64(&mut self, value: f64) -> u32 {
        self.add(Constant::Float64(value))
    }

    pub fn add_string(&mut self, value: impl Into<String>) -> u32 {
        self.add(Constant::StringData(value.into()))
    }

    pub fn add_operator(&mut self, operator: OperatorId) -> u32 {
        self.add(Constant::Operator(operator.as_u64()))
    }

    pub fn get(&self, index: u32) -> Option<&Constant> {
        self.constants.get(index as usize)
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    fn to_key(constant: &Constant) -> ConstantKey {
        match constant {
            Constant::Int(v) => ConstantKey::Int(*v),
            Constant::Float64(v) => ConstantKey::Float64(v.to_bits()),
            Constant::StringData(s) => ConstantKey::StringData(s.clone()),
            Constant::Operator(h) => ConstantKey::Operator(*h),
        }
    }
}
