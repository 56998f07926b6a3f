//! Arguments paired with their signature.

use std::fmt;

use crate::error::ArgumentsError;
use crate::signature::Signature;

/// Per-slot payloads bound to a [`Signature`].
///
/// `T` is whatever the caller carries through the call pipeline: syntax
/// nodes, promises, evaluated values. The list owns its values and holds a
/// shared handle to the signature. `values.len() == signature.len()` always
/// holds; the values themselves may be replaced slot by slot but never
/// added or removed.
#[derive(Clone, Debug)]
pub struct ArgumentList<T> {
    values: Box<[T]>,
    signature: Signature,
}

impl<T> ArgumentList<T> {
    pub fn try_new(
        values: impl Into<Box<[T]>>,
        signature: Signature,
    ) -> Result<Self, ArgumentsError> {
        let values = values.into();
        if values.len() != signature.len() {
            return Err(ArgumentsError::LengthMismatch {
                values: values.len(),
                signature: signature.len(),
            });
        }
        Ok(ArgumentList { values, signature })
    }

    /// # Panics
    /// Panics if the number of values differs from the signature's length.
    pub fn new(values: impl Into<Box<[T]>>, signature: Signature) -> Self {
        Self::try_new(values, signature).unwrap_or_else(|e| panic!("{e}"))
    }

    #[inline]
    pub fn argument(&self, index: usize) -> &T {
        &self.values[index]
    }

    #[inline]
    pub fn arguments(&self) -> &[T] {
        &self.values
    }

    /// The backing storage itself, not a copy. Writes are seen by every
    /// later reader of this list.
    #[inline]
    pub fn arguments_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Swap in a new value for slot `index`, returning the old one.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.values[index], value)
    }

    #[inline]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.signature.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signature.is_empty()
    }

    /// `(name, value)` pairs in slot order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Option<&'static str>, &T)> + '_ {
        self.signature.names().zip(self.values.iter())
    }

    /// Value of the first slot named `name`.
    pub fn value_named(&self, name: &str) -> Option<&T> {
        self.signature
            .index_of_name(name)
            .map(|index| &self.values[index])
    }

    /// Same signature, transformed payloads.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ArgumentList<U> {
        ArgumentList {
            values: self.values.into_vec().into_iter().map(f).collect(),
            signature: self.signature,
        }
    }

    pub fn into_parts(self) -> (Box<[T]>, Signature) {
        (self.values, self.signature)
    }
}

impl<T: fmt::Display> fmt::Display for ArgumentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Args={")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match name {
                Some(name) => write!(f, "{name}={value}")?,
                None => write!(f, "arg{index}={value}")?,
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests;
