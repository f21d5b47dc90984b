//! Confirmation prompt: only a trimmed, case-insensitive `y` confirms.

use rstest::rstest;

use uthoctl::infrastructure::prompt::{confirm_with, CONFIRM_QUESTION};

#[rstest]
#[case("y\n", true)]
#[case("Y\n", true)]
#[case("  y  \r\n", true)]
#[case("n\n", false)]
#[case("\n", false)]
#[case("yes\n", false)]
fn given_answer_when_confirming_then_only_y_is_affirmative(
    #[case] input: &str,
    #[case] expected: bool,
) {
    // Arrange
    let mut reader = input.as_bytes();
    let mut writer = Vec::new();

    // Act
    let confirmed = confirm_with(&mut reader, &mut writer, CONFIRM_QUESTION).unwrap();

    // Assert
    assert_eq!(confirmed, expected);
    assert_eq!(String::from_utf8(writer).unwrap(), CONFIRM_QUESTION);
}

#[test]
fn given_closed_input_when_confirming_then_error() {
    let mut reader: &[u8] = b"";
    let mut writer = Vec::new();

    let result = confirm_with(&mut reader, &mut writer, CONFIRM_QUESTION);

    assert_eq!(
        result.unwrap_err().kind(),
        std::io::ErrorKind::UnexpectedEof
    );
}
