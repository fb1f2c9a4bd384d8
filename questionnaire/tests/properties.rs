//! Property tests over generated question trees

use proptest::prelude::*;
use questionnaire::{
    Advance, Question, QuestionId, ResponseMap, ResponseType, ResponseValue, StepController,
    derive_schema, group_by_category, progress, total_required, walk,
};

const CATEGORIES: [&str; 3] = ["network", "infra", "people"];

#[derive(Debug, Clone)]
struct Node {
    category: usize,
    response_type: Option<ResponseType>,
    required: bool,
    children: Vec<Node>,
}

fn response_type() -> impl Strategy<Value = Option<ResponseType>> {
    prop_oneof![
        Just(None),
        Just(Some(ResponseType::Text)),
        Just(Some(ResponseType::Select)),
        Just(Some(ResponseType::Multiselect)),
        Just(Some(ResponseType::Checkbox)),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = (0..CATEGORIES.len(), response_type(), any::<bool>()).prop_map(
        |(category, response_type, required)| Node {
            category,
            response_type,
            required,
            children: Vec::new(),
        },
    );
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            0..CATEGORIES.len(),
            response_type(),
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(category, response_type, required, children)| Node {
                category,
                response_type,
                required,
                children,
            })
    })
}

/// Build questions with unique sequential ids.
fn build(nodes: &[Node], next_id: &mut u32) -> Vec<Question> {
    nodes
        .iter()
        .map(|node| {
            let id = *next_id;
            *next_id += 1;
            Question::new(id, CATEGORIES[node.category], node.response_type)
                .with_required(node.required)
                .with_sub_questions(build(&node.children, next_id))
        })
        .collect()
}

fn tree() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(node(), 0..6).prop_map(|nodes| build(&nodes, &mut 1))
}

/// Answer every answerable question whose id passes `pick`, with a value of the right shape.
fn answers(questions: &[Question], pick: impl Fn(&QuestionId) -> bool) -> ResponseMap {
    walk(questions)
        .filter(|q| q.is_answerable() && pick(q.id()))
        .map(|q| {
            let value = match q.response_type() {
                Some(ResponseType::Multiselect | ResponseType::Checkbox) => {
                    ResponseValue::from(["A"])
                }
                _ => ResponseValue::from("A"),
            };
            (q.id().clone(), value)
        })
        .collect()
}

proptest! {
    #[test]
    fn schema_derivation_is_deterministic(questions in tree()) {
        prop_assert_eq!(derive_schema(&questions), derive_schema(&questions));
    }

    #[test]
    fn schema_skips_only_informational_nodes(questions in tree()) {
        let schema = derive_schema(&questions).unwrap();
        for question in walk(&questions) {
            prop_assert_eq!(schema.contains(question.id()), question.is_answerable());
        }
    }

    #[test]
    fn progress_is_a_total_ratio(questions in tree(), mask in any::<u64>()) {
        let responses = answers(&questions, |id| {
            id.as_str().parse::<u32>().is_ok_and(|n| mask & (1 << (n % 64)) != 0)
        });
        let p = progress(&questions, &responses);
        let ratio = p.ratio();

        prop_assert!(ratio.is_finite());
        prop_assert!((0.0..=1.0).contains(&ratio));
        if p.total == 0 {
            prop_assert_eq!(ratio, 0.0);
        }
        if p.filled == p.total && p.total > 0 {
            prop_assert_eq!(ratio, 1.0);
        }
    }

    #[test]
    fn compact_is_idempotent(entries in prop::collection::vec((0u32..20, prop::option::of("[a-z]{0,3}")), 0..20)) {
        let mut responses: ResponseMap = entries
            .into_iter()
            .map(|(id, text)| match text {
                Some(text) => (id, ResponseValue::Text(text)),
                None => (id, ResponseValue::Choices(Vec::new())),
            })
            .collect();

        let filled = responses.count_filled();
        responses.compact();
        let once = responses.clone();
        responses.compact();

        prop_assert_eq!(&responses, &once);
        prop_assert_eq!(responses.len(), filled);
        prop_assert_eq!(responses.count_filled(), filled);
    }

    #[test]
    fn advance_never_skips_missing_required(questions in tree(), mask in any::<u64>()) {
        let groups = group_by_category(&questions);
        if groups.is_empty() {
            return Ok(());
        }
        let mut steps = StepController::new(&groups);
        let responses = answers(&questions, |id| {
            id.as_str().parse::<u32>().is_ok_and(|n| mask & (1 << (n % 64)) != 0)
        });

        for _ in 0..groups.len() + 1 {
            let before_step = steps.active_step();
            let before_completed = steps.completed().clone();
            let all_filled = steps
                .required_ids(before_step)
                .iter()
                .all(|id| responses.is_filled(id));

            let outcome = steps.advance(&responses);
            if all_filled {
                prop_assert!(!outcome.is_blocked());
                prop_assert!(steps.is_step_complete(before_step));
            } else {
                prop_assert!(outcome.is_blocked());
                prop_assert_eq!(steps.active_step(), before_step);
                prop_assert_eq!(steps.completed(), &before_completed);
            }
            if matches!(outcome, Advance::Finished { .. }) {
                prop_assert!(steps.all_steps_completed());
            }
        }
    }

    #[test]
    fn jump_is_a_no_op_unless_completed(questions in tree(), target in 0usize..8) {
        let groups = group_by_category(&questions);
        let mut steps = StepController::new(&groups);
        let responses = answers(&questions, |_| true);
        steps.advance(&responses);

        let before = steps.clone();
        let jumped = steps.jump(target);
        prop_assert_eq!(jumped, before.is_step_complete(target));
        if !jumped {
            prop_assert_eq!(&steps, &before);
        } else {
            prop_assert_eq!(steps.active_step(), target);
        }
    }

    #[test]
    fn every_required_node_is_counted(questions in tree()) {
        let expected = walk(&questions).filter(|q| q.is_required()).count();
        prop_assert_eq!(total_required(&questions), expected);
    }
}
