use proptest::prelude::*;
use vim_motions::{
    Bracket, CharBuffer, Classifier, Direction, Inclusivity, MotionEngine, MotionKind, Query,
    Scope, TextView, objects,
};

mod support;
use support::mock_buffer::MockBuffer;

// Strategy for text mixing words, punctuation, quotes, brackets and blank lines
fn text_strategy() -> impl Strategy<Value = String> {
    let chars = prop::sample::select(vec![
        'a', 'b', 'z', '_', '0', 'é', '.', '!', '?', ',', '-', '(', ')', '[', ']', '"', '\'',
        '\\', ' ', ' ', '\t', '\n', '\n',
    ]);
    prop_oneof![
        Just(String::new()),
        prop::collection::vec(chars, 0..80)
            .prop_map(|v| v.into_iter().collect::<String>()),
        // Sentences and paragraphs
        r"([A-Z][a-z ]{0,12}[.!?] ?){0,4}(\n\n?[A-Z][a-z ]{0,12}\.){0,3}",
    ]
}

fn kind_strategy() -> impl Strategy<Value = MotionKind> {
    prop_oneof![
        Just(MotionKind::WordBegin),
        Just(MotionKind::BigWordBegin),
        Just(MotionKind::WordEnd),
        Just(MotionKind::BigWordEnd),
        Just(MotionKind::Sentence),
        Just(MotionKind::Paragraph),
    ]
}

fn query_strategy() -> impl Strategy<Value = (prop::sample::Index, usize, Direction, Inclusivity)> {
    (
        any::<prop::sample::Index>(),
        1usize..6,
        prop_oneof![Just(Direction::Forward), Just(Direction::Backward)],
        prop_oneof![Just(Inclusivity::Inclusive), Just(Inclusivity::Exclusive)],
    )
}

proptest! {
    #[test]
    fn motions_are_total_and_move_the_right_way(
        text in text_strategy(),
        kind in kind_strategy(),
        (idx, count, direction, inclusivity) in query_strategy(),
    ) {
        let buf = CharBuffer::new(&text);
        let len = buf.len();
        let offset = idx.index(len + 1);
        let query = Query { offset, count, direction, inclusivity };

        let landed = MotionEngine::new().motion(&buf, kind, query).unwrap();
        if let Some(pos) = landed {
            prop_assert!(pos <= len);
            match direction {
                Direction::Forward => prop_assert!(pos > offset),
                Direction::Backward => prop_assert!(pos < offset),
            }
            if inclusivity == Inclusivity::Inclusive {
                prop_assert!(pos < len);
            }
        }
    }

    #[test]
    fn rope_backed_buffer_gives_same_answers(
        text in text_strategy(),
        kind in kind_strategy(),
        (idx, count, direction, inclusivity) in query_strategy(),
    ) {
        let chars = CharBuffer::new(&text);
        let rope = MockBuffer::new(&text);
        let offset = idx.index(chars.len() + 1);
        let query = Query { offset, count, direction, inclusivity };

        let eng = MotionEngine::new();
        prop_assert_eq!(
            eng.motion(&chars, kind, query),
            eng.motion(&rope, kind, query)
        );
    }

    #[test]
    fn word_end_count_is_repeated_single_steps(
        text in text_strategy(),
        idx in any::<prop::sample::Index>(),
        count in 1usize..6,
    ) {
        let buf = CharBuffer::new(&text);
        let offset = idx.index(buf.len() + 1);
        let eng = MotionEngine::new();

        let mut pos = offset;
        for _ in 0..count {
            match eng.word_end(&buf, Query::forward(pos)).unwrap() {
                Some(next) => pos = next,
                None => break,
            }
        }
        let counted = eng
            .word_end(&buf, Query::forward(offset).count(count))
            .unwrap();
        prop_assert_eq!(counted.unwrap_or(offset), pos);
    }

    #[test]
    fn classification_is_stable(text in text_strategy()) {
        let buf = CharBuffer::new(&text);
        let classifier = Classifier::default();
        let forward: Vec<_> = (0..buf.len())
            .map(|i| classifier.classify(&buf, i).unwrap())
            .collect();
        let mut backward: Vec<_> = (0..buf.len())
            .rev()
            .map(|i| classifier.classify(&buf, i).unwrap())
            .collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn bracket_spans_are_well_formed(
        text in text_strategy(),
        idx in any::<prop::sample::Index>(),
        count in 1usize..4,
    ) {
        let buf = CharBuffer::new(&text);
        let len = buf.len();
        let offset = idx.index(len + 1);
        let eng = MotionEngine::new();

        let inner = eng
            .bracket_object(&buf, offset, Bracket::Paren, Scope::Inner, count)
            .unwrap();
        let around = eng
            .bracket_object(&buf, offset, Bracket::Paren, Scope::Around, count)
            .unwrap();
        prop_assert_eq!(inner.is_some(), around.is_some());
        if let (Some(inner), Some(around)) = (inner, around) {
            prop_assert!(inner.begin <= inner.end_exclusive());
            prop_assert!(around.end_exclusive() <= len);
            prop_assert!(around.begin <= offset && offset < around.end_exclusive());
            prop_assert!(around.begin < inner.begin);
            prop_assert!(inner.end_exclusive() < around.end_exclusive());
            prop_assert_eq!(buf.char_at(around.begin).unwrap(), '(');
            prop_assert_eq!(buf.char_at(around.end_exclusive() - 1).unwrap(), ')');
        }
    }

    #[test]
    fn big_back_undoes_big_end(
        text in text_strategy(),
        idx in any::<prop::sample::Index>(),
    ) {
        let buf = CharBuffer::new(&text);
        let offset = idx.index(buf.len() + 1);
        let eng = MotionEngine::new();

        let query = Query::forward(offset).inclusive();
        if let Some(end) = eng.big_word_end(&buf, query).unwrap() {
            let back = eng.big_word_begin(&buf, Query::backward(end + 1)).unwrap();
            prop_assert_eq!(back, Some(objects::big_word_start(&buf, end).unwrap()));
        }
    }
}
