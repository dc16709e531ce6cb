use letterchain::game::{actions, GameError, GameMode, Progress, Submission};
use proptest::prelude::*;
mod common;

#[test]
fn forced_letter_c_builds_and_completes_ca() {
    let registry = common::registry_starting_on_letter('c');
    let status = actions::start_game(&registry, "#collab", "collaborative").unwrap();
    assert_eq!(status.chain_text, "c");

    assert_eq!(
        actions::submit(&registry, "#collab", "a"),
        Ok(Submission::LetterAdded {
            fragment: "ca".into()
        })
    );
    assert_eq!(actions::complete_word(&registry, "#collab"), Ok("ca".into()));

    let status = actions::status(&registry, "#collab").unwrap();
    assert_eq!(status.mode, GameMode::Collaborative);
    assert_eq!(status.chain_text, "ca ");
    assert_eq!(
        status.progress,
        Progress::Collaborative {
            fragment: String::new(),
            completed_words: vec!["ca".into()]
        }
    );
}

#[test]
fn uppercase_letter_is_folded() {
    let registry = common::registry_starting_on_letter('x');
    actions::start_game(&registry, "#collab", "collaborative").unwrap();
    assert_eq!(
        actions::submit(&registry, "#collab", "Y"),
        Ok(Submission::LetterAdded {
            fragment: "xy".into()
        })
    );
}

#[test]
fn bad_letters_do_not_mutate() {
    let registry = common::registry_starting_on_letter('b');
    actions::start_game(&registry, "#collab", "collaborative").unwrap();
    for bad in ["ab", "7", "ß", "?"] {
        assert_eq!(
            actions::submit(&registry, "#collab", bad),
            Err(GameError::InvalidLetter(bad.to_lowercase()))
        );
    }
    assert_eq!(actions::status(&registry, "#collab").unwrap().chain_text, "b");
}

#[test]
fn empty_fragment_completion_changes_nothing() {
    let registry = common::registry_starting_on_letter('o');
    actions::start_game(&registry, "#collab", "collaborative").unwrap();
    actions::complete_word(&registry, "#collab").unwrap();
    let before = actions::status(&registry, "#collab").unwrap();
    for _ in 0..3 {
        assert_eq!(
            actions::complete_word(&registry, "#collab"),
            Err(GameError::NoFragment)
        );
    }
    assert_eq!(actions::status(&registry, "#collab").unwrap(), before);
}

#[test]
fn stop_counts_open_fragment_as_word() {
    let registry = common::registry_starting_on_letter('h');
    actions::start_game(&registry, "#collab", "collaborative").unwrap();
    actions::submit(&registry, "#collab", "i").unwrap();
    actions::complete_word(&registry, "#collab").unwrap();
    actions::submit(&registry, "#collab", "o").unwrap();

    let summary = actions::stop_game(&registry, "#collab").unwrap();
    assert_eq!(summary.chain_text, "hi o");
    assert_eq!(summary.words, vec!["hi".to_string(), "o".to_string()]);
    assert_eq!(summary.accepted, 1);
}

#[test]
fn immediate_stop_reports_starting_letter() {
    let registry = common::registry_starting_on_letter('k');
    actions::start_game(&registry, "#collab", "collaborative").unwrap();
    let summary = actions::stop_game(&registry, "#collab").unwrap();
    assert_eq!(summary.accepted, 0);
    assert_eq!(summary.words, vec!["k".to_string()]);
}

#[derive(Debug, Clone)]
enum Step {
    Letter(char),
    Space,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => prop::char::range('a', 'z').prop_map(Step::Letter),
        1 => Just(Step::Space),
    ]
}

proptest! {
    #[test]
    fn chain_text_replays_every_step(steps in prop::collection::vec(step(), 0..80)) {
        let registry = common::registry_starting_on_letter('s');
        actions::start_game(&registry, "#p", "collaborative").unwrap();

        let mut expected = String::from("s");
        let mut fragment = String::from("s");
        let mut completions = 0;
        for step in &steps {
            match step {
                Step::Letter(c) => {
                    actions::submit(&registry, "#p", &c.to_string()).unwrap();
                    expected.push(*c);
                    fragment.push(*c);
                }
                Step::Space => {
                    let result = actions::complete_word(&registry, "#p");
                    if fragment.is_empty() {
                        prop_assert_eq!(result, Err(GameError::NoFragment));
                    } else {
                        prop_assert_eq!(result, Ok(std::mem::take(&mut fragment)));
                        expected.push(' ');
                        completions += 1;
                    }
                }
            }
        }

        prop_assert_eq!(actions::status(&registry, "#p").unwrap().chain_text, expected.clone());
        let summary = actions::stop_game(&registry, "#p").unwrap();
        prop_assert_eq!(summary.chain_text, expected);
        prop_assert_eq!(summary.accepted, completions);
    }
}
