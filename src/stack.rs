/// A last-in, first-out container.
///
/// The expression engine keeps two of these: one for pending operands and
/// reduced sub-documents, one for pending operators. Mutation goes through
/// `&mut self`, so a stack shared across threads has to sit behind a lock
/// chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Pushes an item on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the most recently pushed item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_last_pushed() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), None);

        stack.push("top");
        assert_eq!(stack.peek(), Some(&"top"));
        assert_eq!(stack.count(), 1);
    }

    #[test]
    fn test_count_tracks_pushes_and_pops() {
        let mut stack: Stack<u8> = Stack::default();
        assert!(stack.is_empty());

        stack.push(7);
        stack.push(8);
        assert_eq!(stack.count(), 2);

        stack.pop();
        assert_eq!(stack.count(), 1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.count(), 0);
    }
}
