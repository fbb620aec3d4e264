
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops `count` elements off the stack and returns those elements,
  /// with the former top of the stack at the end of the vector. In
  /// case of a [`StackError`], `self` will NOT be modified.
  pub fn pop_several(&mut self, count: usize) -> Result<Vec<T>, StackError> {
    self.check_stack_size(count)?;
    Ok(self.elements.split_off(self.len() - count))
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }

}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self { elements: Vec::new() }
  }
}

impl<T> IntoIterator for Stack<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<Self::Item>;

  /// Iterates (by value) from the bottom of the stack.
  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}
