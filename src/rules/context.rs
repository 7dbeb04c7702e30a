// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shared evaluation context.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Context object handed to every rule invocation.
///
/// A validator carries one context, set with `Validator::context`; it is an
/// explicit parameter to each rule rather than an implicit receiver. Rules
/// recover their concrete type with [`EvalContext::get`].
#[derive(Clone, Default)]
pub struct EvalContext {
    data: Option<Arc<dyn Any + Send + Sync>>,
}

impl EvalContext {
    /// Create a context holding `data`.
    pub fn new<T: Any + Send + Sync>(data: T) -> Self {
        Self {
            data: Some(Arc::new(data)),
        }
    }

    /// Create a context with no data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Downcast the context data to `T`.
    ///
    /// Returns `None` if the context is empty or holds a different type.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.data.as_deref().and_then(|data| data.downcast_ref())
    }

    /// Whether the context holds any data.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

impl fmt::Debug for EvalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "EvalContext(empty)")
        } else {
            write!(f, "EvalContext(..)")
        }
    }
}
