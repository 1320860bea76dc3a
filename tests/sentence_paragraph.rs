use vim_motions::{CharBuffer, MotionEngine, Query, TextView, classify};
mod support;
use support::mock_buffer::MockBuffer;

fn sentence(text: &str, q: Query) -> Option<usize> {
    MotionEngine::new().sentence(&MockBuffer::new(text), q).unwrap()
}

fn paragraph(text: &str, q: Query) -> Option<usize> {
    MotionEngine::new().paragraph(&MockBuffer::new(text), q).unwrap()
}

#[test]
fn sentences_on_one_line() {
    let text = "One. Two! Three?";
    assert_eq!(sentence(text, Query::forward(0)), Some(5));
    assert_eq!(sentence(text, Query::forward(2)), Some(5));
    assert_eq!(sentence(text, Query::forward(5)), Some(10));
    assert_eq!(sentence(text, Query::forward(0).count(2)), Some(10));
    // Past the last sentence the motion runs to the end
    assert_eq!(sentence(text, Query::forward(10)), Some(16));
    assert_eq!(sentence(text, Query::forward(10).inclusive()), Some(15));

    assert_eq!(sentence(text, Query::backward(12)), Some(10));
    assert_eq!(sentence(text, Query::backward(10)), Some(5));
    assert_eq!(sentence(text, Query::backward(7)), Some(5));
    assert_eq!(sentence(text, Query::backward(0)), None);
}

#[test]
fn abbreviation_without_space_does_not_split() {
    assert_eq!(sentence("e.g.that is fine", Query::forward(0)), Some(16));
}

#[test]
fn blank_line_run_is_one_sentence() {
    // O n e . \n \n \n T w o .
    let text = "One.\n\n\nTwo.";
    assert_eq!(sentence(text, Query::forward(0)), Some(5));
    assert_eq!(sentence(text, Query::forward(5)), Some(7));
    assert_eq!(sentence(text, Query::backward(7)), Some(5));
    assert_eq!(sentence(text, Query::backward(5)), Some(0));
}

// a \n b \n \n \n c \n d \n \n e
const PARAS: &str = "a\nb\n\n\nc\nd\n\ne";

#[test]
fn paragraph_forward_skips_blank_runs_once() {
    assert_eq!(paragraph(PARAS, Query::forward(0)), Some(4));
    assert_eq!(paragraph(PARAS, Query::forward(4)), Some(10));
    // Two blank lines in a row are a single boundary
    assert_eq!(paragraph(PARAS, Query::forward(0).count(2)), Some(10));
    assert_eq!(paragraph(PARAS, Query::forward(10)), Some(12));
    assert_eq!(paragraph(PARAS, Query::forward(10).inclusive()), Some(11));
    assert_eq!(paragraph(PARAS, Query::forward(0).count(5)), Some(12));
}

#[test]
fn paragraph_backward() {
    assert_eq!(paragraph(PARAS, Query::backward(11)), Some(10));
    assert_eq!(paragraph(PARAS, Query::backward(10)), Some(5));
    assert_eq!(paragraph(PARAS, Query::backward(5)), Some(0));
    assert_eq!(paragraph(PARAS, Query::backward(0)), None);
}

#[test]
fn whitespace_only_lines_separate_paragraphs() {
    let text = "a\n  \t\nb";
    assert_eq!(paragraph(text, Query::forward(0)), Some(2));
    assert_eq!(paragraph(text, Query::backward(6)), Some(2));
}

#[test]
fn no_blank_lines_means_whole_buffer() {
    assert_eq!(paragraph("one\ntwo", Query::forward(0)), Some(7));
    assert_eq!(paragraph("one\ntwo", Query::backward(5)), Some(0));
    assert_eq!(paragraph("", Query::forward(0)), None);
}

#[test]
fn paragraph_boundary_classification() {
    let buf = CharBuffer::new(PARAS);
    assert_eq!(classify::is_paragraph_boundary(&buf, 4), Ok(true));
    assert_eq!(classify::is_paragraph_boundary(&buf, 5), Ok(true));
    assert_eq!(classify::is_paragraph_boundary(&buf, 0), Ok(false));
    assert_eq!(classify::is_paragraph_boundary(&buf, 10), Ok(true));

    let (start, end) = buf.line_bounds(4).unwrap();
    assert_eq!((start, end), (4, 4));
    assert_eq!(classify::is_blank_line(&buf, start, end), Ok(true));
}

#[test]
fn rope_and_char_buffer_agree_on_lines() {
    let text = "ab\n\ncd\n";
    let rope = MockBuffer::new(text);
    let chars = CharBuffer::new(text);
    for offset in 0..=chars.len() {
        assert_eq!(
            rope.line_bounds(offset),
            chars.line_bounds(offset),
            "offset {offset}"
        );
    }
}
