//! Pre-order traversal of a question tree.
//!
//! Every recursive question over the tree (schema derivation, the answerable
//! ids of a step, counting required nodes) goes through [`walk`], so they all
//! agree on visiting order and depth.

use crate::Question;

/// Iterator over a question tree in pre-order: a question, then its
/// sub-questions (recursively), then its next sibling.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<std::slice::Iter<'a, Question>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Question;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(question) => {
                    if !question.sub_questions().is_empty() {
                        self.stack.push(question.sub_questions().iter());
                    }
                    return Some(question);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Walk `questions` and all their descendants in pre-order.
pub fn walk(questions: &[Question]) -> PreOrder<'_> {
    PreOrder {
        stack: vec![questions.iter()],
    }
}

/// Flatten the tree, keeping whatever `f` maps each node to.
pub fn flatten_with<'a, T>(
    questions: &'a [Question],
    f: impl FnMut(&'a Question) -> Option<T>,
) -> Vec<T> {
    walk(questions).filter_map(f).collect()
}
