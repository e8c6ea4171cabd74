use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// One lexical region's bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<V> {
    pub variable_lookup: HashMap<String, V>,
}

impl<V> Frame<V> {
    pub fn new() -> Self {
        Frame {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn get_variable(&self, name: &str) -> Option<&V> {
        self.variable_lookup.get(name)
    }
}

impl<V> Default for Frame<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Nested lexical scopes, innermost frame last.
///
/// The checker stores types and the evaluator stores literals, each in its
/// own stack.
#[derive(Debug, Clone)]
pub struct ScopeStack<V> {
    frames: Vec<Frame<V>>,
}

impl<V> ScopeStack<V> {
    pub fn new() -> Self {
        ScopeStack { frames: vec![] }
    }

    pub fn push_scope(&mut self) {
        self.frames.push(Frame::new());
        tracing::trace!(depth = self.depth(), "pushed scope");
    }

    pub fn pop_scope(&mut self) -> Result<Frame<V>, Error> {
        let frame = self
            .frames
            .pop()
            .ok_or_else(|| Error::new(ErrorImpl::ScopeUnderflow, Position::null()))?;
        tracing::trace!(depth = self.depth(), "popped scope");
        Ok(frame)
    }

    /// Binds `name` in the innermost frame, replacing any binding it already
    /// holds there. Outer frames are never touched.
    pub fn define(&mut self, name: impl Into<String>, value: V) -> Result<(), Error> {
        let frame = self
            .frames
            .last_mut()
            .ok_or_else(|| Error::new(ErrorImpl::ScopeUnderflow, Position::null()))?;
        frame.variable_lookup.insert(name.into(), value);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get_variable(name))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl<V> Default for ScopeStack<V> {
    fn default() -> Self {
        Self::new()
    }
}
