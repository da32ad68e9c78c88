use super::*;

#[test]
fn failed_result_requires_feedback() {
    assert_eq!(
        CheckerResult::new("someName", false, None),
        Err(ValidationError::MissingFeedback)
    );
    assert_eq!(
        CheckerResult::new("someName", false, Some("\t\n   ".to_string())),
        Err(ValidationError::MissingFeedback)
    );
}

#[test]
fn blank_names_are_rejected() {
    assert_eq!(
        CheckerResult::new("", false, None),
        Err(ValidationError::BlankName)
    );
    assert_eq!(
        CheckerResult::new("  \t ", true, None),
        Err(ValidationError::BlankName)
    );
}

#[test]
fn blank_name_wins_over_missing_feedback() {
    assert_eq!(
        CheckerResult::new(" ", false, Some(String::new())),
        Err(ValidationError::BlankName)
    );
}

#[test]
fn successful_result_may_omit_message() {
    let result = CheckerResult::passed("checker").unwrap();
    assert_eq!(result.name(), "checker");
    assert!(result.is_successful());
    assert!(result.message().is_none());
}

#[test]
fn successful_result_keeps_blank_message() {
    let result = CheckerResult::new("checker", true, Some("  ".to_string())).unwrap();
    assert_eq!(result.message(), Some("  "));
}

#[test]
fn failed_result_keeps_message() {
    let result = CheckerResult::failed("checker", "went wrong").unwrap();
    assert!(!result.is_successful());
    assert_eq!(result.message(), Some("went wrong"));
}

#[test]
fn overlong_message_is_truncated_to_prefix() {
    let message = format!("ab{}", "0".repeat(MAX_MESSAGE_LENGTH + 10));
    let result = CheckerResult::new("checker", true, Some(message)).unwrap();
    let kept = result.message().unwrap();
    assert_eq!(kept.chars().count(), MAX_MESSAGE_LENGTH);
    assert!(kept.starts_with("ab"));
}

#[test]
fn truncation_respects_char_boundaries() {
    let message = "ä".repeat(MAX_MESSAGE_LENGTH + 1);
    let result = CheckerResult::new("checker", true, Some(message)).unwrap();
    assert_eq!(result.message().unwrap().chars().count(), MAX_MESSAGE_LENGTH);
}

#[test]
fn message_at_limit_is_untouched() {
    let message = "x".repeat(MAX_MESSAGE_LENGTH);
    let result = CheckerResult::new("checker", true, Some(message.clone())).unwrap();
    assert_eq!(result.message(), Some(message.as_str()));
}

#[test]
fn equality_is_structural() {
    let a = CheckerResult::failed("a", "msg").unwrap();
    let b = CheckerResult::failed("a", "msg").unwrap();
    let c = CheckerResult::failed("a", "other").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn serializes_without_absent_message() {
    let result = CheckerResult::passed("LineLengthChecker").unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"name":"LineLengthChecker","successful":true}"#);
}

#[test]
fn serializes_message_when_present() {
    let result = CheckerResult::new("simpleMessage", true, Some("'Actual message'".to_string()))
        .unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"name":"simpleMessage","successful":true,"message":"'Actual message'"}"#
    );
}
