use std::collections::BTreeMap;

use cjk_review_core::{
    Result, ReviewError,
    braille::BrailleRegion,
    commands::Command,
    config::{BrailleReview, ReviewConfig, SpeechReview},
    dictionary::CharacterDictionary,
    event::{Action, HostEvent},
    hooks::{HookPoint, HookTable, InstalledHooks},
    host::{Host, HostSettings},
    processor::{Env, LOCKED_MESSAGE},
    review::LineCursor,
    session::ReviewSession,
    speech::SpeechCommand,
};
use pretty_assertions::assert_eq;

struct Dict(BTreeMap<&'static str, BTreeMap<&'static str, Vec<String>>>);

impl CharacterDictionary for Dict {
    fn lookup(&self, locale: &str, character: &str) -> Result<Option<Vec<String>>> {
        let table = self
            .0
            .get(locale)
            .ok_or_else(|| ReviewError::LocaleUnavailable(locale.to_owned()))?;
        Ok(table.get(character).cloned())
    }
}

fn dict() -> Dict {
    let zh = BTreeMap::from([
        ("測", vec!["to measure".to_owned(), "to survey".to_owned()]),
        ("量", vec!["quantity".to_owned()]),
    ]);
    let en = BTreeMap::from([("a", vec!["alpha".to_owned()])]);
    Dict(BTreeMap::from([("zh_TW", zh), ("en", en)]))
}

struct TestHost(HostSettings);

impl Host for TestHost {
    fn current_language(&self) -> &str {
        "zh_TW"
    }

    fn settings(&self) -> &HostSettings {
        &self.0
    }
}

fn host() -> TestHost {
    let mut settings = HostSettings::default();
    settings.auto_language_switching = false;
    settings.synth.use_spelling_functionality = false;
    TestHost(settings)
}

fn spoken(text: &str) -> Action {
    Action::Speak(vec![SpeechCommand::text(text), SpeechCommand::EndUtterance])
}

fn speech_only() -> ReviewConfig {
    ReviewConfig {
        braille_review: BrailleReview::Off,
        ..ReviewConfig::default()
    }
}

fn forward(session: &mut ReviewSession, env: &mut Env<'_>) -> Vec<Action> {
    session.handle(env, HostEvent::command(Command::ForwardReviewCharacter))
}

#[test]
fn forward_cycling_on_measure() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let mut session = ReviewSession::activate("zh_TW", speech_only());

    assert_eq!(forward(&mut session, &mut env), vec![spoken("測 to measure")]);
    assert_eq!(forward(&mut session, &mut env), vec![spoken("to survey")]);
    assert_eq!(forward(&mut session, &mut env), vec![spoken("28204,0 - x - 6 - e - 2 - c")]);
    assert_eq!(forward(&mut session, &mut env), vec![spoken("to measure")]);

    let state = session.state();
    assert_eq!(state.direction, cjk_review_core::state::Direction::Idle);
    assert!(!state.is_review_character);
}

#[test]
fn forward_cycling_without_code_point_wraps_on_third_press() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let config = ReviewConfig {
        code_point_in_cycle: false,
        ..speech_only()
    };
    let mut session = ReviewSession::activate("zh_TW", config);

    assert_eq!(forward(&mut session, &mut env), vec![spoken("測 to measure")]);
    assert_eq!(forward(&mut session, &mut env), vec![spoken("to survey")]);
    assert_eq!(forward(&mut session, &mut env), vec![spoken("to measure")]);
}

#[test]
fn reverse_cycling_walks_backwards() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let mut session = ReviewSession::activate("zh_TW", speech_only());
    let reverse = HostEvent::command(Command::ReverseReviewCharacter);

    assert_eq!(session.handle(&mut env, reverse.clone()), vec![spoken("測 to measure")]);
    assert_eq!(session.handle(&mut env, reverse.clone()), vec![spoken("28204,0 - x - 6 - e - 2 - c")]);
    assert_eq!(session.handle(&mut env, reverse), vec![spoken("to survey")]);
    assert_eq!(session.state().desc_index, -2);
}

#[test]
fn forward_cycling_also_shows_braille_when_enabled() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let mut session = ReviewSession::activate("zh_TW", ReviewConfig::default());
    assert_eq!(
        forward(&mut session, &mut env),
        vec![
            Action::Braille("測 to measure to survey".to_owned()),
            spoken("測 to measure"),
        ]
    );
}

#[test]
fn forward_with_speech_review_off_follows_repeat_count() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let config = ReviewConfig {
        speech_review: SpeechReview::Off,
        braille_review: BrailleReview::Off,
        code_point_in_cycle: true,
    };
    let mut session = ReviewSession::activate("zh_TW", config);
    let press = |repeat| HostEvent::Command {
        command: Command::ForwardReviewCharacter,
        repeat,
    };

    assert_eq!(session.handle(&mut env, press(0)), vec![spoken("測")]);
    assert_eq!(session.handle(&mut env, press(1)), vec![spoken("to measure、to survey")]);

    let third = session.handle(&mut env, press(2));
    assert_eq!(third[0], Action::SpeakMessage("28204,".to_owned()));
    let Action::Speak(seq) = &third[1] else {
        panic!("expected spelled hex, got {:?}", third[1]);
    };
    let spelled: String = seq
        .iter()
        .filter_map(|c| match c {
            SpeechCommand::Text(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(spelled, "0x6e2c");
    assert_eq!(third[2], Action::Braille("28204, 0x6e2c".to_owned()));
}

#[test]
fn typed_alphanumeric_skips_descriptions() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let mut session = ReviewSession::activate("zh_TW", ReviewConfig::default());

    let actions = session.handle(
        &mut env,
        HostEvent::CompositionChanged {
            old: String::new(),
            new: "A".to_owned(),
        },
    );
    assert_eq!(actions, vec![Action::SpeakText("A".to_owned())]);

    let actions = session.handle(&mut env, HostEvent::spell("A"));
    assert_eq!(
        actions,
        vec![Action::Speak(vec![
            SpeechCommand::Pitch(30),
            SpeechCommand::text("A"),
            SpeechCommand::Pitch(0),
            SpeechCommand::EndUtterance,
        ])]
    );
    assert_eq!(session.state().previous_character, "");
}

#[test]
fn typed_ideograph_is_described() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("");
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let mut session = ReviewSession::activate("zh_TW", ReviewConfig::default());
    let actions = session.handle(
        &mut env,
        HostEvent::CompositionChanged {
            old: "測\u{3000}".to_owned(),
            new: "測量\u{3000}".to_owned(),
        },
    );
    assert_eq!(
        actions,
        vec![
            Action::ReviewMessage("量 quantity".to_owned()),
            Action::Braille("量 quantity".to_owned()),
        ]
    );
}

#[test]
fn review_cursor_moves_and_reports_edges() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測量");
    let config = ReviewConfig {
        braille_review: BrailleReview::Auto,
        ..ReviewConfig::default()
    };
    let mut session = ReviewSession::activate("zh_TW", config);
    {
        let mut env = Env {
            host: &host,
            dictionary: &dict,
            cursor: &mut cursor,
        };
        let next = session.handle(&mut env, HostEvent::command(Command::ReviewNextCharacter));
        assert_eq!(
            next,
            vec![spoken("量 quantity"), Action::Braille("量 quantity".to_owned())]
        );

        let edge = session.handle(&mut env, HostEvent::command(Command::ReviewNextCharacter));
        assert_eq!(edge[0], Action::ReviewMessage("Right".to_owned()));
        assert_eq!(edge[1], spoken("量 quantity"));
    }
    assert_eq!(cursor.offset(), 1);

    cursor.set_offset(0);
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let edge = session.handle(&mut env, HostEvent::command(Command::ReviewPreviousCharacter));
    assert_eq!(edge[0], Action::ReviewMessage("Left".to_owned()));
}

#[test]
fn locked_review_object_is_not_read() {
    let host = host();
    let dict = dict();
    let mut cursor = LineCursor::new("測量");
    cursor.set_locked(true);
    let mut env = Env {
        host: &host,
        dictionary: &dict,
        cursor: &mut cursor,
    };
    let mut session = ReviewSession::activate("zh_TW", ReviewConfig::default());
    let locked = vec![Action::ReviewMessage(LOCKED_MESSAGE.to_owned())];
    assert_eq!(forward(&mut session, &mut env), locked);
    assert_eq!(
        session.handle(&mut env, HostEvent::command(Command::ReviewNextCharacter)),
        locked
    );
}

#[test]
fn one_shot_lookup_is_idempotent() {
    let dict = dict();
    let first = dict.character_description("zh_TW", "測").unwrap();
    let second = dict.character_description("zh_TW", "測").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.map(|d| d.len()), Some(2));
}

struct Region {
    raw_text: String,
    cursor: usize,
}

impl BrailleRegion for Region {
    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    fn take_pending_caret_update(&mut self) -> bool {
        true
    }

    fn raw_text(&self) -> &str {
        &self.raw_text
    }

    fn cursor_pos(&self) -> Option<usize> {
        Some(self.cursor)
    }
}

#[test]
fn braille_auto_describes_cursor_moves_within_same_text() {
    let dict = dict();
    let config = ReviewConfig {
        braille_review: BrailleReview::Auto,
        ..ReviewConfig::default()
    };
    let mut session = ReviewSession::activate("zh_TW", config);
    let text = "我們要測量一下";
    let at = |session: &mut ReviewSession, raw: &str, cursor| {
        let mut pending = vec![Region {
            raw_text: raw.to_owned(),
            cursor,
        }];
        session.handle_pending_update(&dict, &mut pending).actions
    };

    assert!(at(&mut session, text, 3).is_empty());
    assert_eq!(at(&mut session, text, 4), vec![Action::Braille("量 quantity".to_owned())]);
    assert!(at(&mut session, "另一段文字", 1).is_empty());
    assert_eq!(session.state().previous_raw_text.as_deref(), Some("另一段文字"));
}

#[test]
fn hooks_are_restored_after_deactivation() {
    let mut table = HookTable::default();
    {
        let hooks = InstalledHooks::install(&mut table);
        let session = ReviewSession::activate("zh_TW", ReviewConfig::default());
        assert!(hooks.is_enhanced(HookPoint::Spelling));
        session.deactivate();
    }
    for point in HookPoint::ALL {
        assert!(!table.is_enhanced(point));
    }
}
