use anyhow::{Context, Result, bail};
use thiserror::Error;

use crate::balance::is_balanced;
use crate::stack::Stack;

pub fn example<A: FnOnce() -> Result<()>>(description: &str, action: A) -> Result<()> {
    println!("---Example of {}---", description);
    action().with_context(|| format!("Example of {} failed", description))?;
    println!();

    Ok(())
}

pub fn run_all() -> Result<()> {
    example("using a stack", || {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        stack.push(4);

        println!("{}", stack);

        match stack.pop() {
            Some(4) => println!("Popped: 4"),
            Some(other) => bail!(ExampleError::new(format!("Expected to pop 4, popped {}", other))),
            None => bail!(ExampleError::new("Stack was empty after four pushes")),
        }

        Ok(())
    })?;

    example("initializing a stack from an array", || {
        let array = vec!["A", "B", "C", "D"];
        let mut stack = Stack::from(array);
        println!("{}", stack);
        stack.pop();

        Ok(())
    })?;

    example("initializing a stack from an array literal", || {
        let mut stack = stack![1.0, 2.0, 3.0, 4.0];
        println!("{}", stack);
        stack.pop();

        Ok(())
    })?;

    example("checking balanced parentheses", || {
        let text = "(hello world";
        println!("{:?} balanced: {}", text, is_balanced(text));

        Ok(())
    })
}

#[derive(Error, Debug)]
#[error("{msg}")]
pub struct ExampleError {
    msg: String
}

impl ExampleError {
    pub fn new<M: Into<String>>(msg: M) -> Self {
        Self { msg: msg.into() }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn built_in_examples_succeed() {
        assert!(run_all().is_ok());
    }

    #[test]
    fn failing_action_is_reported_with_description() {
        let err = example("failing", || bail!(ExampleError::new("boom"))).unwrap_err();
        assert_eq!("Example of failing failed", err.to_string());
        assert!(err.chain().any(|cause| cause.to_string() == "boom"));
    }
}
