use std::fmt::Display;

/// LIFO container. The end of the backing vector is the top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Takes `elements` as is, the last one becomes the top.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self(elements)
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "----top----")?;
        let elements: Vec<String> = self.0.iter().rev().map(|e| e.to_string()).collect();
        writeln!(f, "{}", elements.join("\n"))?;
        write!(f, "-----------")
    }
}

/// Builds a stack from a literal list, bottom first.
macro_rules! stack {
    () => {
        $crate::stack::Stack::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::stack::Stack::from(vec![$($element),+])
    };
}
