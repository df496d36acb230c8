use crate::stack::Stack;

/// Checks that every `(` in `text` is closed by a later `)`.
pub fn is_balanced(text: &str) -> bool {
    BalanceChecker::new(false).check(text)
}

#[derive(Debug)]
pub struct BalanceChecker {
    stack: Stack<char>,
    trace: bool
}

impl BalanceChecker {
    pub fn new(trace: bool) -> Self {
        Self { stack: stack![], trace }
    }

    pub fn check(&mut self, text: &str) -> bool {
        self.stack = Stack::new();

        for (offset, c) in text.chars().enumerate() {
            match c {
                '(' => self.stack.push(c),
                ')' => {
                    // A close with nothing open can never be matched later.
                    if self.stack.pop().is_none() {
                        if self.trace {
                            println!("{:04} unmatched ')'", offset);
                        }
                        return false;
                    }
                },
                _ => continue
            }

            if self.trace {
                println!("{:04} '{}' depth {}", offset, c, self.stack.len());
                println!("{}", self.stack);
            }
        }

        self.stack.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unmatched_open_is_unbalanced() {
        assert!(!is_balanced("(hello world"));
    }

    #[test]
    fn matched_pair_is_balanced() {
        assert!(is_balanced("()"));
    }

    #[test]
    fn text_without_parens_is_balanced() {
        assert!(is_balanced(""));
        assert!(is_balanced("hello world"));
    }

    #[test]
    fn nested_and_sequential_pairs() {
        assert!(is_balanced("(a (b) c) (d)"));
        assert!(!is_balanced("((a)"));
    }

    #[test]
    fn early_close_is_rejected_even_if_counts_match() {
        assert!(!is_balanced(")("));
        assert!(!is_balanced("())(()"));
    }

    #[test]
    fn checker_can_be_reused() {
        let mut checker = BalanceChecker::new(false);
        assert!(!checker.check("(("));
        assert!(checker.check("()"));
        assert!(!checker.check(")"));
        assert!(checker.check("(())"));
    }
}
